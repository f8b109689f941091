use encoding_rs::Encoding;
use thiserror::Error;

/// Errors related to output text encoding resolution.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Unknown encoding label '{0}'")]
    UnknownLabel(String),

    #[error("Encoding '{0}' is not supported for output")]
    UnsupportedOutput(String),
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Output text encoding resolved from a command-line label.
///
/// Labels take three forms: the UTF-8 shorthands `utf8-nobom` (default) and
/// `utf8-bom`, WHATWG encoding names (`gbk`, `shift_jis`, ...), or numeric
/// Windows code pages (`936`, `1252`, ...).
#[derive(Clone, Copy, Debug)]
pub struct TextEncoding {
    encoding: &'static Encoding,
    bom: bool,
}

impl TextEncoding {
    pub fn resolve(label: &str) -> Result<Self, EncodingError> {
        let normalized = label.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "utf8" | "utf-8" | "utf8-nobom" | "utf-8-nobom" => Ok(Self {
                encoding: encoding_rs::UTF_8,
                bom: false,
            }),
            "utf8-bom" | "utf-8-bom" => Ok(Self {
                encoding: encoding_rs::UTF_8,
                bom: true,
            }),
            _ => {
                let encoding = if let Ok(code) = normalized.parse::<u16>() {
                    codepage::to_encoding(code)
                } else {
                    Encoding::for_label(normalized.as_bytes())
                }
                .ok_or_else(|| EncodingError::UnknownLabel(label.to_owned()))?;
                // encoding_rs cannot emit UTF-16; refusing beats silently
                // writing UTF-8 under a UTF-16 label.
                if encoding == encoding_rs::UTF_16LE || encoding == encoding_rs::UTF_16BE {
                    return Err(EncodingError::UnsupportedOutput(label.to_owned()));
                }
                Ok(Self {
                    encoding,
                    bom: false,
                })
            }
        }
    }

    /// Encodes output text, prepending a BOM when the label asked for one.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        let (bytes, _, _) = self.encoding.encode(text);
        if self.bom {
            let mut output = Vec::with_capacity(UTF8_BOM.len() + bytes.len());
            output.extend_from_slice(UTF8_BOM);
            output.extend_from_slice(&bytes);
            output
        } else {
            bytes.into_owned()
        }
    }

    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }
}
