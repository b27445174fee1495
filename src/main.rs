use clap::Parser;
use std::process::ExitCode;

use cfpx::cli::Cli;
use cfpx::ops::{self, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = cfpx::logger::init(cli.verbose) {
        eprintln!("cfpx: diagnostics disabled: {e}");
    }
    let argv0 = std::env::args_os()
        .next()
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_default();
    let code = match ops::run(&cli, &argv0) {
        Ok(outcome) => {
            if let Outcome::Planned(inv) = &outcome {
                println!("{}", ops::describe(inv));
            }
            outcome.exit_code()
        }
        Err(e) => {
            println!("cfpx: {e}");
            e.exit_code()
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
