use std::fmt;

use serde::{Deserialize, Serialize};

/// The only port state the diff engine treats as present.
pub const OPEN: &str = "open";

/// A single probed port on a host.
///
/// `state` is taken verbatim from the scanner (`open`, `closed`, `filtered`,
/// `unfiltered`, `open|filtered`, `closed|filtered`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Port {
    pub protocol: String,
    pub id: u32,
    pub state: String,
    pub service: Option<String>,
    pub scripts: Vec<Script>,
}

/// Output of one NSE script run against a port.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Script {
    pub name: String,
    pub output: String,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    pub key: String,
    pub value: String,
}

impl Port {
    pub fn new(protocol: impl Into<String>, id: u32, state: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            id,
            state: state.into(),
            service: None,
            scripts: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == OPEN
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Port {}/{} is {}", self.id, self.protocol, self.state)?;
        if let Some(service) = &self.service {
            write!(f, " ({service})")?;
        }
        for script in &self.scripts {
            write!(f, "\n  Script: {}\n  Output: {}", script.name, script.output)?;
        }
        Ok(())
    }
}
