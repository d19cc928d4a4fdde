//! # nmapr core
//!
//! Builds scanner invocations and reconciles their XML output.
//!
//! * **[`builder`]**: the immutable [`ScanConfig`] builder and its presets.
//! * **[`args`]**: compiles a config into the scanner's argument vector.
//! * **[`scanner`]**: runs the scanner process and parses what it prints.
//! * **[`raw`]** and **[`normalize`]**: XML records and their projection into the domain model.
//! * **[`scan`]**: the result set with host lookup and rescans.
//! * **[`diff`]**: open port changes between two snapshots of a host.
//!
//! ```no_run
//! use nmapr_core::ScanConfig;
//!
//! # async fn example() -> nmapr_common::Result<()> {
//! let scan = ScanConfig::new()
//!     .add_hosts(["scanme.nmap.org"])
//!     .add_ports([22, 80])
//!     .add_flags(["-sV"])
//!     .run()
//!     .await?;
//!
//! let before = scan.get_host("scanme.nmap.org").expect("host was scanned");
//! let later = before.rescan().run().await?;
//! if let Some(after) = later.get_host(&before.address) {
//!     let changes = before.diff(&after);
//!     println!("opened: {}, closed: {}", changes.added.len(), changes.removed.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod builder;
pub mod diff;
pub mod normalize;
pub mod raw;
pub mod scan;
pub mod scanner;

pub use builder::ScanConfig;
pub use diff::{PortDiff, diff};
pub use scan::{Scan, ScannedHost};
pub use scanner::Scanner;
