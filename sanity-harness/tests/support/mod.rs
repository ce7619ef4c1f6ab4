//! A stand-in toolchain for exercising the pipeline without the Sanity
//! compiler itself.
//!
//! The first stage is `cat`, so the "IR" is the C source unchanged; the
//! second stage is a small script that lowers C from stdin to assembly on
//! stdout; the system C compiler then assembles and links as usual. From
//! the driver's point of view nothing changed: four black-box processes,
//! same plumbing.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{self, Command};
use std::sync::atomic::{AtomicU64, Ordering};

use sanity_harness::Toolchain;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn scratch_path(name: &str, extension: &str) -> PathBuf {
   env::temp_dir().join(format!(
      "standin-{}-{}-{}{}",
      name,
      process::id(),
      NEXT_ID.fetch_add(1, Ordering::Relaxed),
      extension
   ))
}

/// Writes an executable shell script into the temp directory and returns
/// its path.
pub fn script(name: &str, body: &str) -> PathBuf {
   let path = scratch_path(name, "");
   fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
   fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
   path
}

/// A toolchain whose source language is C.
pub fn c_toolchain() -> Toolchain {
   Toolchain {
      compiler: PathBuf::from("cat"),
      ir_compiler: script("lower-c", "exec cc -x c - -S -o -"),
      assembler: PathBuf::from("cc"),
      linker: PathBuf::from("cc"),
   }
}

/// Compiles a C helper into an object file for use as a link-time
/// dependency.
pub fn build_dep(name: &str, source: &str) -> PathBuf {
   let src = scratch_path(name, ".c");
   fs::write(&src, source).unwrap();
   let obj = scratch_path(name, ".o");
   let status = Command::new("cc")
      .arg(&src)
      .arg("-c")
      .arg("-o")
      .arg(&obj)
      .status()
      .unwrap();
   assert!(status.success(), "failed to build dependency object {}", name);
   obj
}
