//! Playpen CLI - stage a playbook and drive its two-node test harness.

use playpen_cli::cleanup::{CleanupGuard, spawn_signal_listener};
use playpen_cli::cli::{self, Parsed, USAGE};
use playpen_cli::compose::DockerComposeCli;
use playpen_cli::driver;
use playpen_cli::error::Error;
use playpen_cli::output::OutputContext;
use playpen_cli::paths::HarnessPaths;

#[tokio::main]
async fn main() {
    let code = run().await;
    std::process::exit(code);
}

async fn run() -> i32 {
    let config = match cli::parse(std::env::args_os().skip(1)) {
        Ok(Parsed::Run(config)) => config,
        Ok(Parsed::Exit(msg)) => {
            // --help / --version, already formatted by clap.
            let _ = msg.print();
            return 0;
        }
        Err(err) => {
            eprintln!("playpen: {err}");
            eprintln!("{USAGE}");
            return err.exit_code();
        }
    };

    let out = OutputContext::new(false, false);

    let paths = match HarnessPaths::resolve() {
        Ok(paths) => paths,
        Err(err) => {
            out.error(&format!("{err:#}"));
            return 1;
        }
    };

    let guard = CleanupGuard::arm(paths.staging());
    spawn_signal_listener(guard.clone());

    let compose = DockerComposeCli::new(paths.compose_file());
    match driver::run(&config, &paths, &compose, &guard, &out).await {
        Ok(()) => 0,
        Err(err) => {
            out.error(&format!("{err:#}"));
            err.downcast_ref::<Error>().map_or(1, Error::exit_code)
        }
    }
}
