use std::fmt;

use serde::{Deserialize, Serialize};

use crate::network::port::Port;

/// A host as reported by one scan.
///
/// Hosts are produced by normalizing scanner output and are not modified
/// afterwards. Ports keep the order the scanner reported them in, which is not
/// necessarily numeric.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Host {
    pub address: String,
    pub address_type: String,
    pub state: String,
    pub hostnames: Vec<Hostname>,
    pub ports: Vec<Port>,
}

/// A name the scanner associated with a host.
///
/// `kind` is `user` for names given on the command line and `PTR` for names
/// found through reverse DNS.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hostname {
    pub name: String,
    pub kind: String,
}

impl Host {
    pub fn has_hostname(&self, name: &str) -> bool {
        self.hostnames.iter().any(|hostname| hostname.name == name)
    }

    pub fn open_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|port| port.is_open())
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Host {} ({}) is {}", self.address, self.address_type, self.state)?;
        if !self.hostnames.is_empty() {
            let names: Vec<&str> = self.hostnames.iter().map(|h| h.name.as_str()).collect();
            write!(f, " [{}]", names.join(", "))?;
        }
        for port in &self.ports {
            write!(f, "\n{port}")?;
        }
        Ok(())
    }
}
