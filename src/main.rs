mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::CommandHandler;
use radixconv::{error, types, Context};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RADIXCONV_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> error::Result<()> {
    let ctx = Context::default();

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Conv {
            digits,
            from,
            to,
            out,
            json,
        } => Box::new(commands::ConvCommand {
            digits: types::InputSource::parse(&digits),
            from,
            to,
            output: types::OutputDest::parse(&out),
            json,
        }),

        Command::Dec { digits, base, json } => Box::new(commands::DecCommand {
            digits: types::InputSource::parse(&digits),
            base,
            json,
        }),

        Command::Enc {
            number,
            base,
            out,
            json,
        } => Box::new(commands::EncCommand {
            number: types::InputSource::parse(&number),
            base,
            output: types::OutputDest::parse(&out),
            json,
        }),

        Command::Verify { digits, base, json } => Box::new(commands::VerifyCommand {
            digits: types::InputSource::parse(&digits),
            base,
            json,
        }),

        Command::Info { base, json } => Box::new(commands::InfoCommand { base, json }),

        Command::List { json } => Box::new(commands::ListCommand { json }),
    };

    handler.execute(&ctx)
}
