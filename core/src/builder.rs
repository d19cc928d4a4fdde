//! # Scan Configuration
//!
//! [`ScanConfig`] is an immutable, chainable description of one scanner
//! invocation. Every mutator consumes the value and returns a new one; storage
//! is shared through [`Arc`] and only copied when a shared value is modified,
//! so cloning a config and extending both copies never lets one observe the
//! other's changes.
//!
//! Invalid flags do not abort the chain. The first validation failure is kept
//! as a pending error and reported when the config is compiled or run.

use std::collections::BTreeSet;
use std::sync::Arc;

use nmapr_common::ValidationError;

/// Flags that redirect output away from the XML stream on stdout.
/// nmap range syntax for every TCP port.
pub const ALL_TCP_PORTS: &str = "-p1-65535";

pub const DISALLOWED_FLAGS: [&str; 4] = ["-oN", "-oX", "-oG", "-oA"];

/// Upper bound (exclusive) of the port number space.
const PORT_SPACE_END: u32 = u16::MAX as u32 + 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanConfig {
    hosts: Arc<Vec<String>>,
    generic_ports: Arc<BTreeSet<u16>>,
    tcp_ports: Arc<BTreeSet<u16>>,
    udp_ports: Arc<BTreeSet<u16>>,
    flags: Arc<Vec<String>>,
    pending_error: Option<ValidationError>,
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Ports scanned with whichever protocols the scan flags select.
    pub fn generic_ports(&self) -> &BTreeSet<u16> {
        &self.generic_ports
    }

    pub fn tcp_ports(&self) -> &BTreeSet<u16> {
        &self.tcp_ports
    }

    pub fn udp_ports(&self) -> &BTreeSet<u16> {
        &self.udp_ports
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn pending_error(&self) -> Option<&ValidationError> {
        self.pending_error.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.pending_error.is_none()
    }

    // ---- hosts ----

    pub fn add_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::make_mut(&mut self.hosts).extend(hosts.into_iter().map(Into::into));
        self
    }

    pub fn set_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hosts = Arc::new(hosts.into_iter().map(Into::into).collect());
        self
    }

    // ---- ports ----

    pub fn add_ports<I>(mut self, ports: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        Arc::make_mut(&mut self.generic_ports).extend(ports);
        self
    }

    pub fn set_ports<I>(mut self, ports: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        self.generic_ports = Arc::new(ports.into_iter().collect());
        self
    }

    pub fn add_tcp_ports<I>(mut self, ports: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        Arc::make_mut(&mut self.tcp_ports).extend(ports);
        self
    }

    pub fn add_udp_ports<I>(mut self, ports: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        Arc::make_mut(&mut self.udp_ports).extend(ports);
        self
    }

    /// Adds every port in `low..high` to the generic port set.
    ///
    /// `high` is exclusive and may be `65536` to include port 65535.
    pub fn add_port_range(self, low: u32, high: u32) -> Self {
        let high = high.min(PORT_SPACE_END);
        self.add_ports((low..high).filter_map(|port| u16::try_from(port).ok()))
    }

    // ---- flags ----

    /// Appends raw scanner flags, keeping their order.
    ///
    /// Flags that take a value must be passed as separate items
    /// (`["--script", "http-title"]`). If any flag in the call is rejected,
    /// none of them are appended and the config records the error.
    pub fn add_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let flags: Vec<String> = flags.into_iter().map(Into::into).collect();
        match validate_flags(&flags) {
            Ok(()) => Arc::make_mut(&mut self.flags).extend(flags),
            Err(err) => self.record(err),
        }
        self
    }

    /// Replaces the flag list. Validation follows [`ScanConfig::add_flags`];
    /// on failure the previous flags are kept.
    pub fn set_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let flags: Vec<String> = flags.into_iter().map(Into::into).collect();
        match validate_flags(&flags) {
            Ok(()) => self.flags = Arc::new(flags),
            Err(err) => self.record(err),
        }
        self
    }

    fn record(&mut self, err: ValidationError) {
        if self.pending_error.is_none() {
            self.pending_error = Some(err);
        }
    }

    // ---- presets ----

    pub fn intense(self) -> Self {
        self.set_flags(["-T4", "-A", "-v"])
    }

    pub fn intense_plus_udp(self) -> Self {
        self.set_flags(["-sS", "-sU", "-T4", "-A", "-v"])
    }

    /// Selects the whole TCP range with a single `-p1-65535` flag. A literal
    /// list of every port does not fit in one process argument.
    ///
    /// Generic ports are cleared; adding more afterwards emits a second `-p`,
    /// which nmap does not merge with this one.
    pub fn intense_all_tcp_ports(self) -> Self {
        self.set_flags(["-T4", "-A", "-v", ALL_TCP_PORTS])
            .set_ports(std::iter::empty())
    }

    /// `-F` selects its own port list, so explicit generic ports are cleared.
    pub fn quick(self) -> Self {
        self.set_flags(["-T4", "-F"]).set_ports(std::iter::empty())
    }

    pub fn quick_plus(self) -> Self {
        self.set_flags(["-sV", "-T4", "-O", "-F", "--version-light"])
            .set_ports(std::iter::empty())
    }

    /// Host discovery only.
    pub fn ping(self) -> Self {
        self.set_flags(["-sn"]).set_ports(std::iter::empty())
    }

    pub fn regular(self) -> Self {
        self.set_flags(Vec::<String>::new())
    }
}

fn validate_flags(flags: &[String]) -> Result<(), ValidationError> {
    for flag in flags {
        if flag.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidFlag { flag: flag.clone() });
        }
        if DISALLOWED_FLAGS.contains(&flag.as_str()) {
            return Err(ValidationError::DisallowedFlag { flag: flag.clone() });
        }
    }
    Ok(())
}
