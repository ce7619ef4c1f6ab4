//! Common types shared by the pipeline stages.

use std::io;

/// The captured outcome of running the program under test: its exit status
/// and both output streams, decoded as text.
///
/// This is the only data a run hands back to the caller, and it is returned
/// uninterpreted. In particular a non-zero `status` is an ordinary program
/// behavior (a deliberate `exit(1)`, a crash the test wants to observe),
/// never a pipeline failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
   pub status: i32,
   pub stdout: String,
   pub stderr: String,
}

/// An error that can occur while driving the toolchain pipeline.
///
/// One variant per compilation stage, each carrying the failed stage's
/// stderr text verbatim — no mangling, no swallowing. A stage failure is
/// terminal for the run; the harness performs no retries, since toolchain
/// failures are deterministic given identical input.
#[derive(thiserror::Error, Debug)]
pub enum Error {
   /// The Sanity compiler rejected the source.
   #[error("failed to compile Sanity source:\n{0}")]
   SourceCompile(String),
   /// `llc` rejected the intermediate representation.
   #[error("failed to compile LLVM IR:\n{0}")]
   IrCompile(String),
   /// The system assembler rejected the generated assembly. This should not
   /// happen when the earlier stages are correct, but it is surfaced all
   /// the same.
   #[error("failed to assemble:\n{0}")]
   Assemble(String),
   /// Unresolved symbols, a missing dependency, or another linker fault.
   #[error("failed to link:\n{0}")]
   Link(String),
   /// A stage executable (or the linked binary itself) could not be started
   /// at all — missing from PATH, not executable, and so on.
   #[error("failed to invoke {tool}: {source}")]
   Tool {
      tool: String,
      #[source]
      source: io::Error,
   },
   /// A temporary artifact could not be created.
   #[error("failed to create temporary artifact: {0}")]
   Artifact(#[source] io::Error),
}
