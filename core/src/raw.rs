//! Field-for-field mirror of the scanner's XML output (`<nmaprun>`).
//!
//! These records only live between parsing and normalization. Elements the
//! normalizer does not need (`<times>`, `<os>`, `<runstats>`, ...) are skipped
//! by the deserializer.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "nmaprun")]
pub struct RawScan {
    #[serde(rename = "@args", default)]
    pub display_args: String,
    #[serde(rename = "@start", default)]
    pub start_time: String,
    #[serde(rename = "scaninfo", default)]
    pub scan_info: Vec<RawScanInfo>,
    #[serde(rename = "host", default)]
    pub hosts: Vec<RawHost>,
}

/// One `<scaninfo>` per probed protocol.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScanInfo {
    #[serde(rename = "@type", default)]
    pub scan_type: String,
    #[serde(rename = "@protocol", default)]
    pub protocol: String,
    #[serde(rename = "@numservices", default)]
    pub num_services: String,
    #[serde(rename = "@services", default)]
    pub services: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHost {
    #[serde(default)]
    pub status: RawStatus,
    /// The scanner emits one `<address>` per address family plus one for the MAC.
    #[serde(rename = "address", default)]
    pub addresses: Vec<RawAddress>,
    #[serde(default)]
    pub hostnames: RawHostnames,
    #[serde(default)]
    pub ports: RawPorts,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatus {
    #[serde(rename = "@state", default)]
    pub state: String,
    #[serde(rename = "@reason", default)]
    pub reason: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAddress {
    #[serde(rename = "@addr", default)]
    pub address: String,
    #[serde(rename = "@addrtype", default)]
    pub address_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHostnames {
    #[serde(rename = "hostname", default)]
    pub hostnames: Vec<RawHostname>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHostname {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPorts {
    #[serde(rename = "port", default)]
    pub ports: Vec<RawPort>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPort {
    #[serde(rename = "@protocol", default)]
    pub protocol: String,
    #[serde(rename = "@portid")]
    pub port: u32,
    #[serde(default)]
    pub state: RawState,
    pub service: Option<RawService>,
    #[serde(rename = "script", default)]
    pub scripts: Vec<RawScript>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawState {
    #[serde(rename = "@state", default)]
    pub state: String,
    #[serde(rename = "@reason", default)]
    pub reason: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawService {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@product")]
    pub product: Option<String>,
    #[serde(rename = "@version")]
    pub version: Option<String>,
    #[serde(rename = "@servicefp")]
    pub fingerprint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScript {
    #[serde(rename = "@id", default)]
    pub name: String,
    #[serde(rename = "@output", default)]
    pub output: String,
    #[serde(rename = "elem", default)]
    pub elements: Vec<RawElement>,
}

/// `<elem key="...">value</elem>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawElement {
    #[serde(rename = "@key", default)]
    pub key: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}
