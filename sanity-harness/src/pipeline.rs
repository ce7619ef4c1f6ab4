//! The pipeline driver: source text → IR → assembly → object → binary → run.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use smallvec::SmallVec;

use crate::artifact::TempArtifact;
use crate::common::{Error, RunResult};
use crate::exec;
use crate::stage::{run_stage, StageOutput};

const NO_ARGS: &[&str] = &[];

/// The four external tools the pipeline drives, each a black box identified
/// by name or path.
#[derive(Clone, Debug)]
pub struct Toolchain {
   /// The Sanity compiler: reads source text on stdin, writes LLVM IR on
   /// stdout, and reports diagnostics on stderr with a non-zero exit.
   pub compiler: PathBuf,
   /// The IR compiler (`llc`): reads LLVM IR on stdin, writes native
   /// assembly on stdout.
   pub ir_compiler: PathBuf,
   /// The assembler driver: turns assembly on stdin into an object file at
   /// a path the pipeline chooses.
   pub assembler: PathBuf,
   /// The linker driver: links objects into the final binary.
   pub linker: PathBuf,
}

impl Toolchain {
   /// The default host toolchain: `$SANITY_COMPILER` (falling back to
   /// `build/bin/Sanity`), `$LLC` (falling back to `llc`), and `$CC`
   /// (falling back to `cc`) for both assembling and linking.
   pub fn from_env() -> Toolchain {
      let cc = env_tool("CC", "cc");
      Toolchain {
         compiler: env_tool("SANITY_COMPILER", "build/bin/Sanity"),
         ir_compiler: env_tool("LLC", "llc"),
         assembler: cc.clone(),
         linker: cc,
      }
   }

   /// Compiles `source` through all four stages, then executes the linked
   /// binary with `args` and `stdin` and returns its result.
   ///
   /// `deps` are pre-built object files appended to the linker command line
   /// after the generated object, in the order given; an empty list is a
   /// self-contained program. The driver does not validate the paths — a
   /// missing dependency surfaces as a [`Error::Link`] straight from the
   /// linker's own diagnostics.
   ///
   /// The stages run strictly in order and fail fast: the first non-zero
   /// exit aborts the rest of the pipeline and comes back as the matching
   /// [`Error`] variant with that stage's stderr attached. The temporary
   /// object file and binary are deleted before this function returns, on
   /// success and on every failure path alike.
   pub fn run(
      &self,
      source: &str,
      deps: &[PathBuf],
      args: &[String],
      stdin: &str,
   ) -> Result<RunResult, Error> {
      // Stage 1: Sanity source → LLVM IR. Nothing is on disk yet, so a
      // rejected program leaves no artifacts behind.
      let compiled = self.stage(&self.compiler, NO_ARGS, source.as_bytes())?;
      if !compiled.success() {
         return Err(Error::SourceCompile(compiled.stderr_text()));
      }

      // Stage 2: LLVM IR → native assembly.
      let lowered = self.stage(&self.ir_compiler, NO_ARGS, &compiled.stdout)?;
      if !lowered.success() {
         return Err(Error::IrCompile(lowered.stderr_text()));
      }

      // Stage 3: assembly → object file. The artifact guard owns the file
      // from here on; early returns below delete it.
      let object = TempArtifact::acquire("sanity-obj").map_err(Error::Artifact)?;
      let mut assemble_args: SmallVec<[OsString; 8]> =
         ["-x", "assembler", "-", "-c", "-o"].iter().map(|flag| OsString::from(*flag)).collect();
      assemble_args.push(object.path().into());
      let assembled = self.stage(&self.assembler, &assemble_args, &lowered.stdout)?;
      if !assembled.success() {
         return Err(Error::Assemble(assembled.stderr_text()));
      }

      // Stage 4: object + dependencies → binary.
      let binary = TempArtifact::acquire("sanity-bin").map_err(Error::Artifact)?;
      let mut link_args: SmallVec<[OsString; 8]> = SmallVec::new();
      link_args.push("-o".into());
      link_args.push(binary.path().into());
      link_args.push(object.path().into());
      link_args.extend(deps.iter().map(|dep| dep.clone().into_os_string()));
      let linked = self.stage(&self.linker, &link_args, &[])?;
      if !linked.success() {
         return Err(Error::Link(linked.stderr_text()));
      }

      // Both artifacts stay alive across the program run and are released
      // only once its result is in hand.
      let result = exec::execute(binary.path(), args, stdin)?;
      object.release();
      binary.release();
      Ok(result)
   }

   /// Runs one stage, mapping a spawn failure (as opposed to a stage that
   /// ran and failed) to [`Error::Tool`].
   fn stage<I, S>(&self, tool: &Path, args: I, input: &[u8]) -> Result<StageOutput, Error>
   where
      I: IntoIterator<Item = S>,
      S: AsRef<OsStr>,
   {
      run_stage(tool, args, input).map_err(|error| Error::Tool {
         tool: tool.display().to_string(),
         source: error,
      })
   }
}

fn env_tool(var: &str, default: &str) -> PathBuf {
   env::var_os(var).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(default))
}
