//! Runs the linked binary and captures its result.

use std::path::Path;

use crate::common::{Error, RunResult};
use crate::stage::run_stage;

/// Executes the binary at `binary` with `args`, feeding `stdin` on its
/// input stream and capturing both output streams to completion.
///
/// The exit status comes back uninterpreted: a non-zero status is a valid
/// program result for the caller to assert on, never a pipeline failure.
/// Only failing to start the binary at all maps to [`Error::Tool`].
pub fn execute(binary: &Path, args: &[String], stdin: &str) -> Result<RunResult, Error> {
   let output = run_stage(binary, args, stdin.as_bytes()).map_err(|error| Error::Tool {
      tool: binary.display().to_string(),
      source: error,
   })?;
   Ok(RunResult {
      status: output.status,
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
   })
}
