use std::time::Duration;

use colored::*;
use nmapr_common::config::Config;
use nmapr_core::Scanner;
use tracing::{info, warn};

use crate::commands::ScanArgs;
use crate::commands::scan::{host_title, port_detail, run_with_spinner};
use crate::mprint;
use crate::terminal::{colors, print};

/// Scans the targets, waits, then rescans every host found and prints the
/// ports that opened or closed in between.
pub async fn diff(args: &ScanArgs, interval: u64, cfg: &Config) -> anyhow::Result<()> {
    let config = args.to_scan_config();
    let scanner = Scanner::from_config(cfg)?;

    let first = run_with_spinner(&scanner, &config, "Taking first snapshot", cfg.quiet).await?;
    if first.is_empty() {
        print::header("zero hosts reported", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    info!("Waiting {interval}s before rescanning {} hosts", first.len());
    tokio::time::sleep(Duration::from_secs(interval)).await;

    print::header("port changes", cfg.quiet);
    let mut changed: usize = 0;

    for (idx, before) in first.hosts().enumerate() {
        let later =
            run_with_spinner(&scanner, &before.rescan(), "Rescanning", cfg.quiet).await?;
        let Some(after) = later.get_host(&before.address) else {
            warn!("{} did not show up in the second scan", before.address);
            continue;
        };

        let changes = before.diff(&after);
        if changes.is_empty() {
            continue;
        }
        changed += 1;

        if changed > 1 {
            mprint!();
        }
        print::tree_head(idx, &host_title(&before));
        let details: Vec<(String, ColoredString)> = changes
            .added
            .iter()
            .map(|port| marked("+", port_detail(port), colors::OPEN))
            .chain(
                changes
                    .removed
                    .iter()
                    .map(|port| marked("-", port_detail(port), colors::CLOSED)),
            )
            .collect();
        print::as_tree_one_level(&details);
    }

    print::fat_separator();
    if changed == 0 {
        print::centerln("No open ports changed", colors::TEXT_DEFAULT);
    } else {
        print::centerln(&format!("{changed} hosts changed"), colors::ACCENT);
    }
    Ok(())
}

fn marked(
    sign: &str,
    (key, value): (String, ColoredString),
    color: Color,
) -> (String, ColoredString) {
    let value = format!("{} {}", sign.color(color).bold(), value);
    (format!("{sign} {key}"), value.normal())
}
