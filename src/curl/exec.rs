/*!
exec.rs - run curl and capture its output.

Contract:
  - The program is spawned directly (no shell) with the argument vector.
  - stdout and stderr are piped and drained concurrently; stdin is closed.
  - `execute` never fails: spawn errors become exit code 1 with the error
    text on stderr.
  - A process that ends without an exit code (signal) reports 0.
  - Optional watchdog: when a process timeout is configured the child is
    killed once it elapses. Off unless configured.
*/

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use super::args::ArgumentVector;

/* ---- Result ---- */

/// Captured outcome of one curl run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecutionResult {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: message.into(),
            exit_code: 1,
        }
    }

    fn from_output(output: std::process::Output) -> Self {
        let exit_code = match output.status.code() {
            Some(code) => code,
            None => {
                tracing::warn!(status = %output.status, "curl exited without a code; reporting 0");
                0
            }
        };
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
        }
    }
}

/* ---- Executor ---- */

/// Spawns the configured curl program. Cheap to clone; holds no process state.
#[derive(Debug, Clone)]
pub struct Executor {
    program: String,
    timeout: Option<Duration>,
}

impl Executor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    /// Kill the child if it is still running after `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub async fn execute(&self, args: ArgumentVector) -> ExecutionResult {
        tracing::debug!(command = %args.command_line(&self.program), "spawning curl");

        let child = Command::new(&self.program)
            .args(args.into_inner())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();
        let child = match child {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "failed to spawn curl");
                return ExecutionResult::failed(format!("failed to spawn '{}': {e}", self.program));
            }
        };

        let waited = match self.timeout {
            // Dropping the wait future drops the child, and kill_on_drop reaps it.
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(res) => res,
                Err(_) => {
                    tracing::warn!(
                        program = %self.program,
                        timeout_ms = limit.as_millis() as u64,
                        "curl exceeded process timeout; killed"
                    );
                    return ExecutionResult::failed(format!(
                        "curl did not exit within {:.3}s and was killed",
                        limit.as_secs_f64()
                    ));
                }
            },
            None => child.wait_with_output().await,
        };

        match waited {
            Ok(output) => {
                let result = ExecutionResult::from_output(output);
                tracing::debug!(
                    exit_code = result.exit_code,
                    stdout_bytes = result.stdout.len(),
                    stderr_bytes = result.stderr.len(),
                    "curl finished"
                );
                result
            }
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "failed to collect curl output");
                ExecutionResult::failed(e.to_string())
            }
        }
    }
}

/* ---- Tests ---- */
