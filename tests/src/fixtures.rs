use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nmapr_common::{Error, Result};
use nmapr_core::scanner::{CommandRunner, ProcessOutput, XmlOutputParser};
use nmapr_core::Scanner;

/// Two hosts on the LAN. The router is listed with its MAC first.
pub const FIRST_SNAPSHOT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nmaprun>
<nmaprun scanner="nmap" args="nmap -oX - -sT -p22,80,443 192.168.1.0/30" start="1740400000">
  <scaninfo type="connect" protocol="tcp" numservices="3" services="22,80,443"/>
  <host>
    <status state="up" reason="arp-response"/>
    <address addr="AA:BB:CC:00:00:01" addrtype="mac"/>
    <address addr="192.168.1.1" addrtype="ipv4"/>
    <hostnames><hostname name="router.lan" type="PTR"/></hostnames>
    <ports>
      <port protocol="tcp" portid="22"><state state="closed" reason="reset"/></port>
      <port protocol="tcp" portid="80"><state state="open" reason="syn-ack"/><service name="http"/></port>
      <port protocol="tcp" portid="443"><state state="open" reason="syn-ack"/><service name="https"/></port>
    </ports>
  </host>
  <host>
    <status state="up" reason="arp-response"/>
    <address addr="192.168.1.2" addrtype="ipv4"/>
    <hostnames>
      <hostname name="nas.lan" type="PTR"/>
      <hostname name="files.lan" type="user"/>
    </hostnames>
    <ports>
      <port protocol="tcp" portid="22"><state state="open" reason="syn-ack"/><service name="ssh"/></port>
    </ports>
  </host>
  <runstats><hosts up="2" down="2" total="4"/></runstats>
</nmaprun>"#;

/// The router again, after ssh was enabled and http switched off.
pub const ROUTER_RESCAN: &str = r#"<nmaprun args="nmap -oX - -sT -p22,80,443 192.168.1.1">
  <host>
    <status state="up" reason="arp-response"/>
    <address addr="192.168.1.1" addrtype="ipv4"/>
    <hostnames><hostname name="router.lan" type="PTR"/></hostnames>
    <ports>
      <port protocol="tcp" portid="443"><state state="open" reason="syn-ack"/></port>
      <port protocol="tcp" portid="22"><state state="open" reason="syn-ack"/></port>
      <port protocol="tcp" portid="80"><state state="filtered" reason="no-response"/></port>
    </ports>
  </host>
</nmaprun>"#;

/// Replays canned process outputs in order and records every invocation.
#[derive(Clone, Default)]
pub struct FakeRunner {
    outputs: Arc<Mutex<VecDeque<ProcessOutput>>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdout(self, xml: &str) -> Self {
        self.push(ProcessOutput {
            stdout: xml.as_bytes().to_vec(),
            ..ProcessOutput::default()
        })
    }

    pub fn with_failure(self, status: &str, stderr: &str) -> Self {
        self.push(ProcessOutput {
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
            failure: Some(status.to_string()),
        })
    }

    fn push(self, output: ProcessOutput) -> Self {
        self.outputs.lock().unwrap().push_back(output);
        self
    }

    /// Argument vectors of every call so far.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// A scanner wired to this runner. The runner is shared, so `self` keeps
    /// seeing the calls.
    pub fn scanner(&self) -> Scanner {
        Scanner::new(
            "/usr/bin/nmap",
            Box::new(self.clone()),
            Box::new(XmlOutputParser),
        )
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, _binary: &Path, args: &[String]) -> Result<ProcessOutput> {
        self.calls.lock().unwrap().push(args.to_vec());
        self.outputs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Execution {
                message: "no canned output left".to_string(),
            })
    }
}
