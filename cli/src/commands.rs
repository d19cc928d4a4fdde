pub mod args;
pub mod diff;
pub mod scan;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use nmapr_common::config::Config;
use nmapr_core::ScanConfig;

#[derive(Parser)]
#[command(name = "nmapr")]
#[command(about = "Build nmap scans, run them and compare the results.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the nmap binary (looked up on PATH when omitted)
    #[arg(long, global = true)]
    pub nmap_path: Option<PathBuf>,

    /// Reduce output; repeat for less
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the arguments a scan would be run with
    #[command(alias = "a")]
    Args(ScanArgs),
    /// Scan one or more hosts
    #[command(alias = "s")]
    Scan(ScanArgs),
    /// Scan twice and report ports that opened or closed in between
    #[command(alias = "d")]
    Diff {
        #[command(flatten)]
        scan: ScanArgs,
        /// Seconds to wait before the second scan
        #[arg(short, long, default_value_t = 60)]
        interval: u64,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Hosts, networks or ranges in any form nmap accepts
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Ports scanned with every enabled protocol, e.g. 22,80,8000-8100
    #[arg(short, long, value_parser = parse_ports)]
    pub ports: Vec<PortList>,

    /// TCP-only ports
    #[arg(long, value_parser = parse_ports)]
    pub tcp: Vec<PortList>,

    /// UDP-only ports
    #[arg(long, value_parser = parse_ports)]
    pub udp: Vec<PortList>,

    /// Extra nmap flag; repeat for more. Pass values as separate flags.
    #[arg(short, long = "flag", allow_hyphen_values = true)]
    pub flags: Vec<String>,

    /// Start from a predefined scan profile
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,
}

/// One `--ports` style argument, already expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortList(pub Vec<u16>);

fn flatten(lists: &[PortList]) -> impl Iterator<Item = u16> + '_ {
    lists.iter().flat_map(|list| list.0.iter().copied())
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Intense,
    IntensePlusUdp,
    IntenseAllTcpPorts,
    Quick,
    QuickPlus,
    Ping,
    Regular,
}

impl Preset {
    fn apply(self, config: ScanConfig) -> ScanConfig {
        match self {
            Preset::Intense => config.intense(),
            Preset::IntensePlusUdp => config.intense_plus_udp(),
            Preset::IntenseAllTcpPorts => config.intense_all_tcp_ports(),
            Preset::Quick => config.quick(),
            Preset::QuickPlus => config.quick_plus(),
            Preset::Ping => config.ping(),
            Preset::Regular => config.regular(),
        }
    }
}

impl ScanArgs {
    /// Presets go first so explicit ports and flags extend them.
    pub fn to_scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig::new();
        if let Some(preset) = self.preset {
            config = preset.apply(config);
        }

        config
            .add_hosts(self.targets.iter().cloned())
            .add_ports(flatten(&self.ports))
            .add_tcp_ports(flatten(&self.tcp))
            .add_udp_ports(flatten(&self.udp))
            .add_flags(self.flags.iter().cloned())
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            binary: self.nmap_path.clone(),
            quiet: self.quiet,
        }
    }
}

/// Parses `22,80,1000-1010` into individual ports. Ranges are inclusive.
fn parse_ports(s: &str) -> Result<PortList, String> {
    let mut ports = Vec::new();
    for part in s.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        match part.split_once('-') {
            Some((low, high)) => {
                let low = parse_port(low)?;
                let high = parse_port(high)?;
                if low > high {
                    return Err(format!("range '{part}' is reversed"));
                }
                ports.extend(low..=high);
            }
            None => ports.push(parse_port(part)?),
        }
    }

    if ports.is_empty() {
        return Err("no ports given".to_string());
    }
    Ok(PortList(ports))
}

fn parse_port(s: &str) -> Result<u16, String> {
    s.trim()
        .parse::<u16>()
        .map_err(|_| format!("'{s}' is not a port between 0 and 65535"))
}
