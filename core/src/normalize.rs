//! # Normalizer
//!
//! Projects the raw XML records into the domain model. Every function here is
//! pure: it only allocates the new values. Collections keep source order.

use nmapr_common::network::host::{Host, Hostname};
use nmapr_common::network::port::{Element, Port, Script};

use crate::builder::ScanConfig;
use crate::raw::{RawAddress, RawHost, RawPort, RawScan, RawScript};
use crate::scan::Scan;

const MAC_ADDRESS: &str = "mac";

/// Builds a [`Scan`] owned together with `config`.
///
/// Hosts are keyed by address; when the output lists an address twice the
/// later host replaces the earlier one.
pub fn clean_scan(raw: RawScan, config: ScanConfig) -> Scan {
    let mut scan = Scan::new(raw.display_args, config);
    for raw_host in raw.hosts {
        scan.insert(clean_host(raw_host));
    }
    scan
}

pub fn clean_host(raw: RawHost) -> Host {
    let (address, address_type) = primary_address(raw.addresses)
        .map(|addr| (addr.address, addr.address_type))
        .unwrap_or_default();

    Host {
        address,
        address_type,
        state: raw.status.state,
        hostnames: raw
            .hostnames
            .hostnames
            .into_iter()
            .map(|hostname| Hostname {
                name: hostname.name,
                kind: hostname.kind,
            })
            .collect(),
        ports: raw.ports.ports.into_iter().map(clean_port).collect(),
    }
}

pub fn clean_port(raw: RawPort) -> Port {
    Port {
        protocol: raw.protocol,
        id: raw.port,
        state: raw.state.state,
        service: raw
            .service
            .map(|service| service.name)
            .filter(|name| !name.is_empty()),
        scripts: raw.scripts.into_iter().map(clean_script).collect(),
    }
}

fn clean_script(raw: RawScript) -> Script {
    Script {
        name: raw.name,
        output: raw.output,
        elements: raw
            .elements
            .into_iter()
            .map(|elem| Element {
                key: elem.key,
                value: elem.value,
            })
            .collect(),
    }
}

/// The first IP address of a host, or its first address of any kind.
fn primary_address(addresses: Vec<RawAddress>) -> Option<RawAddress> {
    let ip_index = addresses
        .iter()
        .position(|addr| addr.address_type != MAC_ADDRESS)
        .unwrap_or(0);
    addresses.into_iter().nth(ip_index)
}
