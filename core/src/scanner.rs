//! The central **orchestration** of one scan run.
//!
//! [`Scanner`] composes the argument compiler, a [`CommandRunner`] that executes
//! the scanner binary, an [`OutputParser`] that reads its XML, and the
//! normalizer. The runner and parser are trait objects so callers and tests can
//! swap the process and wire format without touching the pipeline.
//!
//! **Architectural Note:**
//! Only [`process`] performs IO. Everything before it (compiling) and after it
//! (parsing, normalizing) is pure and synchronous.

use std::path::{Path, PathBuf};

use nmapr_common::config::Config;
use nmapr_common::{Error, Result};
use tracing::{debug, info, warn};

use crate::args;
use crate::builder::ScanConfig;
use crate::normalize;
use crate::scan::Scan;

pub mod parser;
pub mod process;

pub use parser::{OutputParser, XmlOutputParser};
pub use process::{CommandRunner, ProcessOutput, TokioCommandRunner};

pub struct Scanner {
    binary: PathBuf,
    runner: Box<dyn CommandRunner>,
    parser: Box<dyn OutputParser>,
}

impl Scanner {
    pub fn new(
        binary: impl Into<PathBuf>,
        runner: Box<dyn CommandRunner>,
        parser: Box<dyn OutputParser>,
    ) -> Self {
        Self {
            binary: binary.into(),
            runner,
            parser,
        }
    }

    /// A scanner that spawns the binary resolved from `cfg` and reads XML.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let binary = cfg.resolve_binary()?;
        debug!("using scanner binary {}", binary.display());
        Ok(Self::new(
            binary,
            Box::new(TokioCommandRunner),
            Box::new(XmlOutputParser),
        ))
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Runs `config` to completion.
    ///
    /// The config is only borrowed, so it is still available to inspect or
    /// retry when the run fails. Failures are never retried here.
    pub async fn run(&self, config: &ScanConfig) -> Result<Scan> {
        let args = args::compile(config).into_result()?;
        debug!("invoking {} {}", self.binary.display(), args.join(" "));

        let output = self.runner.run(&self.binary, &args).await?;
        if let Some(failure) = output.failure {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Execution {
                message: format!("{failure}\n{stderr}"),
            });
        }

        let raw = self.parser.parse(&output.stdout)?;
        let reported = raw.hosts.len();

        let scan = normalize::clean_scan(raw, config.clone());
        if scan.len() < reported {
            warn!(
                "{} duplicate host entries replaced earlier entries with the same address",
                reported - scan.len()
            );
        }
        info!("Scan finished with {} hosts", scan.len());

        Ok(scan)
    }
}

impl ScanConfig {
    /// Runs this config with the scanner found on `PATH`.
    pub async fn run(&self) -> Result<Scan> {
        Scanner::from_config(&Config::default())?.run(self).await
    }
}
