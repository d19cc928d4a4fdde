use nmapr_common::config::Config;
use nmapr_core::args;

use crate::commands::ScanArgs;
use crate::terminal::print;

/// Prints the argument vector without running anything.
///
/// When the config is invalid the partial vector is still shown.
pub fn args(scan: &ScanArgs, cfg: &Config) -> anyhow::Result<()> {
    let compiled = args::compile(&scan.to_scan_config());

    print::header("compiled arguments", cfg.quiet);
    print::print(&compiled.args.join(" "));

    match compiled.error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
