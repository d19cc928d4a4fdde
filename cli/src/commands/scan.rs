use std::time::{Duration, Instant};

use colored::*;
use nmapr_common::config::Config;
use nmapr_common::network::port::Port;
use nmapr_core::{Scan, ScanConfig, ScannedHost, Scanner};

use crate::commands::ScanArgs;
use crate::mprint;
use crate::terminal::{colors, print, spinner::Spinner};

type Detail = (String, ColoredString);

pub async fn scan(args: &ScanArgs, cfg: &Config) -> anyhow::Result<()> {
    let config = args.to_scan_config();
    let scanner = Scanner::from_config(cfg)?;

    let start_time: Instant = Instant::now();
    let scan = run_with_spinner(&scanner, &config, "Scanning", cfg.quiet).await?;

    scan_ends(&scan, start_time.elapsed(), cfg);
    Ok(())
}

pub(crate) async fn run_with_spinner(
    scanner: &Scanner,
    config: &ScanConfig,
    message: &'static str,
    q_level: u8,
) -> nmapr_common::Result<Scan> {
    let _spinner = Spinner::start(message, q_level);
    scanner.run(config).await
}

fn scan_ends(scan: &Scan, total_time: Duration, cfg: &Config) {
    if scan.is_empty() {
        print::header("zero hosts reported", cfg.quiet);
        print::no_results();
        return;
    }

    print::header("scan results", cfg.quiet);
    if cfg.quiet == 0 {
        print::print_status(scan.display_args());
        mprint!();
    }

    for (idx, host) in scan.hosts().enumerate() {
        if cfg.quiet < 2 {
            print_host_tree(&host, idx);
        }
        if idx + 1 != scan.len() && cfg.quiet < 2 {
            mprint!();
        }
    }

    let up = scan.hosts().filter(|host| host.state == "up").count();
    let summary = format!(
        "Scan Complete: {} of {} hosts up in {:.2}s",
        up,
        scan.len(),
        total_time.as_secs_f64()
    );
    print::fat_separator();
    print::centerln(&summary, colors::PRIMARY);
}

pub(crate) fn host_title(host: &ScannedHost<'_>) -> String {
    match host.hostnames.first() {
        Some(hostname) => format!("{} ({})", hostname.name, host.address),
        None => host.address.clone(),
    }
}

fn print_host_tree(host: &ScannedHost<'_>, idx: usize) {
    print::tree_head(idx, &host_title(host));

    let mut details: Vec<Detail> = vec![
        (
            "Address".to_string(),
            format!("{} ({})", host.address, host.address_type).color(colors::ADDRESS),
        ),
        (
            "State".to_string(),
            host.state.color(colors::for_state(&host.state)),
        ),
    ];

    if host.hostnames.len() > 1 {
        let names: String = host
            .hostnames
            .iter()
            .map(|hostname| format!("{} [{}]", hostname.name, hostname.kind))
            .collect::<Vec<String>>()
            .join(", ");
        details.push(("Names".to_string(), names.color(colors::HOSTNAME)));
    }

    details.extend(host.ports.iter().map(port_detail));

    print::as_tree_one_level(&details);
}

pub(crate) fn port_detail(port: &Port) -> Detail {
    let key = format!("{}/{}", port.id, port.protocol);
    let state = port.state.color(colors::for_state(&port.state));
    let value = match &port.service {
        Some(service) => format!("{} {}", state, service.color(colors::SERVICE)),
        None => state.to_string(),
    };
    (key, value.normal())
}
