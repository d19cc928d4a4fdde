//! # Argument Compiler
//!
//! Turns a [`ScanConfig`] into the exact argument vector handed to the scanner:
//!
//! ```text
//! -oX - <flags...> [<injected scan types>] [-p<port list>] <hosts...>
//! ```
//!
//! The port list concatenates the generic ports, then `U:` followed by the UDP
//! ports, then `T:` followed by the TCP ports. When no TCP scan type is given a
//! connect scan (`-sT`) is added, and UDP ports imply a UDP scan (`-sU`).

use std::collections::BTreeSet;

use nmapr_common::{ConfigError, Error, Result};

use crate::builder::ScanConfig;

/// Forces XML output on stdout.
pub const OUTPUT_PREFIX: [&str; 2] = ["-oX", "-"];

/// Flags that choose how TCP ports are probed.
pub const TCP_SCAN_FLAGS: [&str; 5] = ["-sS", "-sT", "-sA", "-sW", "-sM"];

pub const DEFAULT_TCP_SCAN_FLAG: &str = "-sT";

pub const UDP_SCAN_FLAG: &str = "-sU";

const SEPARATOR: &str = ",";

/// The compiled vector together with the error, if any, that prevents running it.
///
/// The vector is always fully built so it can be inspected even when the
/// config is not runnable.
#[derive(Debug)]
pub struct CompiledArgs {
    pub args: Vec<String>,
    pub error: Option<Error>,
}

impl CompiledArgs {
    pub fn into_result(self) -> Result<Vec<String>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.args),
        }
    }
}

pub fn compile(config: &ScanConfig) -> CompiledArgs {
    let mut args: Vec<String> = OUTPUT_PREFIX.iter().map(|s| s.to_string()).collect();

    let ports = port_list(config);

    args.extend(config.flags().iter().cloned());
    args.extend(injected_scan_flags(config).into_iter().map(String::from));

    if !ports.is_empty() {
        args.push(format!("-p{ports}"));
    }

    args.extend(config.hosts().iter().cloned());

    let error = match config.pending_error() {
        Some(err) => Some(Error::from(err.clone())),
        None if config.hosts().is_empty() => Some(Error::from(ConfigError::NoHosts)),
        None => None,
    };

    CompiledArgs { args, error }
}

impl ScanConfig {
    /// Compiles the config, failing on a pending validation error or an empty
    /// host list.
    pub fn args(&self) -> Result<Vec<String>> {
        compile(self).into_result()
    }
}

/// Builds the value of the `-p` option, or an empty string if no ports are set.
pub fn port_list(config: &ScanConfig) -> String {
    let mut list = join(config.generic_ports());

    if !config.udp_ports().is_empty() {
        if !list.is_empty() {
            list.push_str(SEPARATOR);
        }
        list.push_str("U:");
    }
    list.push_str(&join(config.udp_ports()));

    if !config.tcp_ports().is_empty() {
        if !list.is_empty() {
            list.push_str(SEPARATOR);
        }
        list.push_str("T:");
    }
    list.push_str(&join(config.tcp_ports()));

    list
}

/// Scan type flags the user did not give but the config requires.
fn injected_scan_flags(config: &ScanConfig) -> Vec<&'static str> {
    let flags = config.flags();
    let has = |wanted: &str| flags.iter().any(|flag| flag == wanted);

    let mut injected = Vec::new();
    if !TCP_SCAN_FLAGS.iter().any(|&scan_type| has(scan_type)) {
        injected.push(DEFAULT_TCP_SCAN_FLAG);
    }
    if !config.udp_ports().is_empty() && !has(UDP_SCAN_FLAG) {
        injected.push(UDP_SCAN_FLAG);
    }
    injected
}

fn join(ports: &BTreeSet<u16>) -> String {
    ports
        .iter()
        .map(u16::to_string)
        .collect::<Vec<String>>()
        .join(SEPARATOR)
}
