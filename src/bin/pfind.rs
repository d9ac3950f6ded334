#![deny(unsafe_code)]

use std::{env, io, process::ExitCode};

use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

/// Global allocator used by the binary.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    init_tracing();

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let status = cli::run(env::args_os(), &mut stdout, &mut stderr);
    cli::exit_code_from(status)
}

/// Installs the developer-facing tracing subscriber, filtered by `RUST_LOG`.
///
/// Diagnostics required by the CLI contract go through the reporter, not
/// through tracing; with no `RUST_LOG` set this subscriber stays silent.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
