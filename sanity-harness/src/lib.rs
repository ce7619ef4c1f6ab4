//! End-to-end test harness for the Sanity toolchain.
//!
//! The harness drives Sanity source text through the external compilation
//! pipeline — the Sanity compiler, `llc`, the system assembler, and the
//! system linker — then runs the linked binary with caller-supplied
//! arguments and stdin, and hands back its exit status and captured output
//! streams for assertion.
//!
//! All four tools are black boxes identified by name or path; see
//! [`Toolchain`]. The harness never interprets what they do, it only
//! sequences them, classifies which one failed, and guarantees that the
//! temporary artifacts of a run (the object file and the binary) are gone
//! by the time the run's result reaches the caller.

pub mod artifact;
pub mod common;
pub mod exec;
pub mod pipeline;
pub mod stage;

pub use common::{Error, RunResult};
pub use pipeline::Toolchain;
