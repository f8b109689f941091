pub mod datefmt;
pub mod encoding;
