//! # Port Diff
//!
//! Compares the open ports of two snapshots of the same host.
//!
//! A port counts as present only when its state is exactly `open`. Ports are
//! matched by number alone, so `80/tcp` and `80/udp` are the same port here.
//! Input order does not matter; the scanner reports ports in wire order.

use std::collections::HashSet;

use nmapr_common::network::host::Host;
use nmapr_common::network::port::Port;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortDiff {
    /// Open in the later snapshot only. Taken from the later snapshot.
    pub added: Vec<Port>,
    /// Open in the earlier snapshot only. Taken from the earlier snapshot.
    pub removed: Vec<Port>,
}

impl PortDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

pub fn diff(before: &Host, after: &Host) -> PortDiff {
    PortDiff {
        added: opened_only_in(after, before),
        removed: opened_only_in(before, after),
    }
}

/// Open ports of `host` whose number is not open on `other`, once per number.
fn opened_only_in(host: &Host, other: &Host) -> Vec<Port> {
    let open_elsewhere: HashSet<u32> = other.open_ports().map(|port| port.id).collect();
    let mut seen = HashSet::new();

    host.open_ports()
        .filter(|port| !open_elsewhere.contains(&port.id) && seen.insert(port.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(ports: &[(u32, &str)]) -> Host {
        Host {
            ports: ports
                .iter()
                .map(|&(id, state)| Port::new("tcp", id, state))
                .collect(),
            ..Host::default()
        }
    }

    fn ids(ports: &[Port]) -> HashSet<u32> {
        ports.iter().map(|port| port.id).collect()
    }

    #[test]
    fn empty_before_adds_everything() {
        let result = diff(&host(&[]), &host(&[(8080, "open")]));
        assert_eq!(ids(&result.added), HashSet::from([8080]));
        assert!(result.removed.is_empty());
    }

    #[test]
    fn empty_after_removes_everything() {
        let result = diff(&host(&[(8080, "open")]), &host(&[]));
        assert!(result.added.is_empty());
        assert_eq!(ids(&result.removed), HashSet::from([8080]));
    }

    #[test]
    fn ports_closed_on_both_sides_of_a_survivor() {
        let before = host(&[(40, "open"), (80, "open"), (8080, "open")]);
        let after = host(&[(80, "open")]);

        let result = diff(&before, &after);
        assert!(result.added.is_empty());
        assert_eq!(ids(&result.removed), HashSet::from([40, 8080]));
    }

    #[test]
    fn ports_opened_on_both_sides_of_a_survivor() {
        let before = host(&[(80, "open")]);
        let after = host(&[(40, "open"), (80, "open"), (8080, "open")]);

        let result = diff(&before, &after);
        assert_eq!(ids(&result.added), HashSet::from([40, 8080]));
        assert!(result.removed.is_empty());
    }

    #[test]
    fn identical_hosts_have_no_diff() {
        let h = host(&[(40, "open"), (80, "filtered"), (8080, "open")]);
        assert!(diff(&h, &h).is_empty());
    }

    #[test]
    fn closed_ports_never_count() {
        let before = host(&[(40, "closed"), (80, "closed"), (8080, "closed")]);
        let after = host(&[(40, "open"), (80, "open"), (8080, "open")]);

        let result = diff(&before, &after);
        assert_eq!(ids(&result.added), HashSet::from([40, 80, 8080]));
        assert!(result.removed.is_empty());
    }

    #[test]
    fn unsorted_input_is_handled() {
        let before = host(&[(8080, "open"), (22, "open"), (443, "open")]);
        let after = host(&[(443, "open"), (3306, "open"), (22, "open")]);

        let result = diff(&before, &after);
        assert_eq!(ids(&result.added), HashSet::from([3306]));
        assert_eq!(ids(&result.removed), HashSet::from([8080]));
    }

    #[test]
    fn diff_is_antisymmetric() {
        let a = host(&[(21, "open"), (22, "open"), (80, "closed"), (443, "open")]);
        let b = host(&[(22, "open"), (80, "open"), (443, "filtered"), (5432, "open")]);

        let ab = diff(&a, &b);
        let ba = diff(&b, &a);
        assert_eq!(ab.added, ba.removed);
        assert_eq!(ab.removed, ba.added);
    }

    #[test]
    fn protocol_is_ignored_for_identity() {
        let before = host(&[(53, "open")]);
        let mut after = host(&[]);
        after.ports.push(Port::new("udp", 53, "open"));

        assert!(diff(&before, &after).is_empty());
    }

    #[test]
    fn repeated_id_is_reported_once() {
        let before = host(&[]);
        let mut after = host(&[(53, "open")]);
        after.ports.push(Port::new("udp", 53, "open"));

        let result = diff(&before, &after);
        assert_eq!(result.added.len(), 1);
        assert_eq!(result.added[0].protocol, "tcp");
    }
}
