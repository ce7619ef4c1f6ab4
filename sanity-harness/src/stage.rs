//! Runs a single external toolchain stage.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

/// The raw outcome of one external process: exit status plus both output
/// streams, undecoded.
#[derive(Debug)]
pub struct StageOutput {
   pub status: i32,
   pub stdout: Vec<u8>,
   pub stderr: Vec<u8>,
}

impl StageOutput {
   pub fn success(&self) -> bool {
      self.status == 0
   }

   /// The stderr stream decoded as text, for attaching to a stage error.
   pub fn stderr_text(&self) -> String {
      String::from_utf8_lossy(&self.stderr).into_owned()
   }
}

/// Runs `program` with `args`, feeding `input` on its stdin and draining
/// both of its output streams to completion.
///
/// The stdin write happens on its own thread, concurrently with the output
/// drain. Otherwise a process blocked writing into a full pipe buffer would
/// deadlock against us blocked writing the rest of its input. An empty
/// input simply closes the stream right away, and a process that exits
/// without reading all of its input is fine — the resulting broken pipe is
/// ignored.
pub fn run_stage<P, I, S>(program: P, args: I, input: &[u8]) -> io::Result<StageOutput>
where
   P: AsRef<OsStr>,
   I: IntoIterator<Item = S>,
   S: AsRef<OsStr>,
{
   let mut child = Command::new(program)
      .args(args)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()?;

   let payload = input.to_vec();
   let writer = child.stdin.take().map(|mut stdin| {
      thread::spawn(move || {
         // A closed read end just means the stage didn't want the rest of
         // its input.
         let _ = stdin.write_all(&payload);
      })
   });

   // wait_with_output drains stdout and stderr concurrently, so neither
   // pipe can fill up and stall the child.
   let output = child.wait_with_output()?;
   if let Some(handle) = writer {
      let _ = handle.join();
   }

   Ok(StageOutput {
      status: exit_code(output.status),
      stdout: output.stdout,
      stderr: output.stderr,
   })
}

/// Maps an exit status to an `i32`, reporting termination by signal as the
/// negated signal number (so SIGFPE from a division by zero shows up as a
/// non-zero status rather than vanishing).
fn exit_code(status: ExitStatus) -> i32 {
   #[cfg(unix)]
   {
      use std::os::unix::process::ExitStatusExt;
      if let Some(signal) = status.signal() {
         return -signal;
      }
   }
   status.code().unwrap_or(-1)
}
