use nmapr_common::{Error, Result};

use crate::raw::RawScan;

/// Turns the scanner's stdout into raw records.
pub trait OutputParser: Send + Sync {
    fn parse(&self, output: &[u8]) -> Result<RawScan>;
}

/// Reads the XML document produced by `-oX -`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlOutputParser;

impl OutputParser for XmlOutputParser {
    fn parse(&self, output: &[u8]) -> Result<RawScan> {
        quick_xml::de::from_reader(output).map_err(|e| Error::Parse(e.to_string()))
    }
}
