use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use la_app::cli::Cli;
use la_app::pipeline;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(err) if !err.use_stderr() => {
            // Best effort, as clap's own `Error::exit`.
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // Best effort: stderr may already be closed.
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config()?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    pipeline::run(config, &mut out)
}
