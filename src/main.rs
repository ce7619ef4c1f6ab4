use std::fs;
use std::path::PathBuf;
use std::process;

use structopt::StructOpt;

use sanity_harness::Toolchain;

/// Compiles a Sanity source file through the full toolchain and runs the
/// resulting binary, mirroring its streams and exit status.
#[derive(StructOpt)]
#[structopt(name = "sanity-e2e")]
struct Options {
   /// The Sanity source file to compile and run.
   source: PathBuf,
   /// A pre-built object file to link against; may be repeated, order is
   /// preserved.
   #[structopt(long = "dep", number_of_values = 1)]
   deps: Vec<PathBuf>,
   /// Text passed to the program's stdin.
   #[structopt(long = "stdin", default_value = "")]
   stdin: String,
   /// Arguments passed through to the program under test.
   #[structopt(last = true)]
   args: Vec<String>,
}

fn main() {
   let options = Options::from_args();

   let source = match fs::read_to_string(&options.source) {
      Ok(source) => source,
      Err(error) => {
         eprintln!("cannot read {}: {}", options.source.display(), error);
         process::exit(1);
      }
   };

   match Toolchain::from_env().run(&source, &options.deps, &options.args, &options.stdin) {
      Ok(result) => {
         print!("{}", result.stdout);
         eprint!("{}", result.stderr);
         process::exit(result.status);
      }
      Err(error) => {
         eprintln!("{}", error);
         process::exit(1);
      }
   }
}
