use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use nmapr_common::Result;
use tokio::process::Command;

/// Everything the scanner process left behind.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// `None` when the process exited successfully, otherwise how it exited.
    pub failure: Option<String>,
}

/// Runs the scanner binary and collects its output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, binary: &Path, args: &[String]) -> Result<ProcessOutput>;
}

/// Spawns the scanner as a child process and waits for it to exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, binary: &Path, args: &[String]) -> Result<ProcessOutput> {
        let output = Command::new(binary)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        let failure = (!output.status.success()).then(|| output.status.to_string());

        Ok(ProcessOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            failure,
        })
    }
}
