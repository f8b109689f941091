use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::fmt::Write;

/// Date rendering style shared by every stage of a conversion run.
///
/// Accepts the token alphabet commonly used by spreadsheet tooling
/// (`yyyy`, `MM`, `dd`, `HH`, `mm`, `ss`, ...) and translates it to a chrono
/// format string once at construction. A format containing `%` is taken as a
/// chrono format verbatim.
#[derive(Clone, Debug)]
pub struct DateStyle {
    chrono_format: String,
}

impl DateStyle {
    pub fn new(format: &str) -> Self {
        let chrono_format = if format.contains('%') {
            format.to_owned()
        } else {
            translate_tokens(format)
        };
        Self { chrono_format }
    }

    /// Renders a date/time value through the style.
    pub fn format(&self, datetime: &NaiveDateTime) -> String {
        let mut text = String::new();
        // An unknown chrono specifier makes the formatter return fmt::Error;
        // fall back to the ISO rendering instead of panicking.
        if write!(text, "{}", datetime.format(&self.chrono_format)).is_err() {
            text.clear();
            text.push_str(&datetime.to_string());
        }
        text
    }

    /// Rendering of the minimum representable date, used as the default
    /// value of date-typed columns.
    pub fn min_value(&self) -> String {
        let minimum = NaiveDate::from_ymd_opt(1, 1, 1)
            .expect("NaiveDate literal")
            .and_hms_opt(0, 0, 0)
            .expect("NaiveTime literal");
        self.format(&minimum)
    }
}

impl Default for DateStyle {
    fn default() -> Self {
        Self::new("yyyy/MM/dd")
    }
}

/// Rewrites date tokens into chrono specifiers, longest token first.
/// Characters outside the token alphabet pass through as literals.
fn translate_tokens(format: &str) -> String {
    let pattern = Regex::new("yyyy|yy|MM|M|dd|d|HH|H|hh|h|mm|m|ss|s|fff|tt|t")
        .expect("Hardcoded pattern");
    pattern
        .replace_all(format, |captures: &regex::Captures| {
            match &captures[0] {
                "yyyy" => "%Y",
                "yy" => "%y",
                "MM" => "%m",
                "M" => "%-m",
                "dd" => "%d",
                "d" => "%-d",
                "HH" => "%H",
                "H" => "%-H",
                "hh" => "%I",
                "h" => "%-I",
                "mm" => "%M",
                "m" => "%-M",
                "ss" => "%S",
                "s" => "%-S",
                "fff" => "%3f",
                "tt" | "t" => "%p",
                other => other,
            }
            .to_owned()
        })
        .into_owned()
}
