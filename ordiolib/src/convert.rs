//! Format selection by file extension and text-level decode/encode.

use crate::{
    error::{OrdioError, Result},
    formats::{csv::Csv, json::Json, xml::Xml},
    model::Order,
    traits::{ReadFormat, WriteFormat},
};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Xml,
    Csv,
}

impl FileFormat {
    /// Picks the format from the extension, ignoring case.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "csv" => Ok(Self::Csv),
            "" => Err(OrdioError::UnsupportedFormat("(no extension)".into())),
            _ => Err(OrdioError::UnsupportedFormat(format!(".{ext}"))),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Decodes the whole text; any bad value fails the lot.
pub fn decode(format: FileFormat, text: &str) -> Result<Vec<Order>> {
    let r = text.as_bytes();
    match format {
        FileFormat::Json => Json::read(r),
        FileFormat::Xml => Xml::read(r),
        FileFormat::Csv => Csv::read(r),
    }
}

pub fn encode(format: FileFormat, orders: &[Order]) -> Result<String> {
    let mut out = Vec::new();
    match format {
        FileFormat::Json => Json::write(&mut out, orders),
        FileFormat::Xml => Xml::write(&mut out, orders),
        FileFormat::Csv => Csv::write(&mut out, orders),
    }?;
    String::from_utf8(out).map_err(|e| OrdioError::Parse(format!("encoded output is not UTF-8: {e}")))
}
