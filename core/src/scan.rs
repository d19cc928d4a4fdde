//! # Scan Results
//!
//! A [`Scan`] owns the hosts produced by one run together with the
//! [`ScanConfig`] that produced them. Hosts do not hold a pointer back to the
//! config. [`Scan::get_host`] hands out a [`ScannedHost`] that borrows both the
//! host and the owning scan's config, so the back-reference is only valid
//! while the scan is alive.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use nmapr_common::network::host::Host;

use crate::builder::ScanConfig;
use crate::diff::{self, PortDiff};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    display_args: String,
    hosts: BTreeMap<String, Host>,
    config: ScanConfig,
}

impl Scan {
    pub fn new(display_args: impl Into<String>, config: ScanConfig) -> Self {
        Self {
            display_args: display_args.into(),
            hosts: BTreeMap::new(),
            config,
        }
    }

    /// Inserts a host keyed by its address.
    ///
    /// A second host with the same address replaces the first; the replaced
    /// host is returned.
    pub fn insert(&mut self, host: Host) -> Option<Host> {
        self.hosts.insert(host.address.clone(), host)
    }

    /// The command line as echoed back by the scanner.
    pub fn display_args(&self) -> &str {
        &self.display_args
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Hosts in address order.
    pub fn hosts(&self) -> impl Iterator<Item = ScannedHost<'_>> {
        self.hosts.values().map(|host| self.bind(host))
    }

    /// Looks a host up by exact address, then by any of its hostnames.
    ///
    /// When several hosts share a hostname the one with the lowest address wins.
    pub fn get_host(&self, target: &str) -> Option<ScannedHost<'_>> {
        self.hosts
            .get(target)
            .or_else(|| self.hosts.values().find(|host| host.has_hostname(target)))
            .map(|host| self.bind(host))
    }

    fn bind<'a>(&'a self, host: &'a Host) -> ScannedHost<'a> {
        ScannedHost {
            host,
            config: &self.config,
        }
    }
}

impl fmt::Display for Scan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for host in self.hosts.values() {
            writeln!(f, "{host}")?;
        }
        Ok(())
    }
}

/// A host borrowed from a [`Scan`], paired with the config that produced it.
#[derive(Debug, Clone, Copy)]
pub struct ScannedHost<'a> {
    host: &'a Host,
    config: &'a ScanConfig,
}

impl<'a> ScannedHost<'a> {
    pub fn host(&self) -> &'a Host {
        self.host
    }

    pub fn parent_config(&self) -> &'a ScanConfig {
        self.config
    }

    /// A config that repeats the original scan against this host only.
    pub fn rescan(&self) -> ScanConfig {
        self.config.clone().set_hosts([self.host.address.clone()])
    }

    /// Like [`ScannedHost::rescan`], with extra flags appended.
    pub fn rescan_with_flags<I, S>(&self, flags: I) -> ScanConfig
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rescan().add_flags(flags)
    }

    /// Ports opened and closed between this snapshot and `later`.
    pub fn diff(&self, later: &Host) -> PortDiff {
        diff::diff(self.host, later)
    }
}

impl Deref for ScannedHost<'_> {
    type Target = Host;

    fn deref(&self) -> &Host {
        self.host
    }
}
