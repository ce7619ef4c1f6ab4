//! Lifecycle management for temporary on-disk artifacts.

use std::env;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A uniquely named temporary file, deleted when the guard goes out of
/// scope.
///
/// Uniqueness comes from the process id plus a process-wide counter, so
/// concurrent runs — whether threads in one process or separate harness
/// processes — never collide on a path. The file is created empty at
/// acquisition time and handed to a toolchain stage to fill in.
pub struct TempArtifact {
   path: PathBuf,
}

impl TempArtifact {
   /// Creates an empty, uniquely named file in the system temp directory.
   pub fn acquire(prefix: &str) -> io::Result<TempArtifact> {
      loop {
         let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
         let path = env::temp_dir().join(format!("{}-{}-{}", prefix, process::id(), id));
         match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => return Ok(TempArtifact { path }),
            // Leftover from an unrelated process; move on to the next id.
            Err(ref error) if error.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(error) => return Err(error),
         }
      }
   }

   pub fn path(&self) -> &Path {
      &self.path
   }

   /// Deletes the file now instead of at the end of the scope. Releasing an
   /// artifact whose file is already gone is a no-op, never an error.
   pub fn release(self) {}
}

impl Drop for TempArtifact {
   fn drop(&mut self) {
      // The file may legitimately be gone already (a stage failed before
      // writing it, or something moved it); that is not an error.
      let _ = fs::remove_file(&self.path);
   }
}
