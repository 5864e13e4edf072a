//! signin - Sign in with Apple CLI
//!
//! # Examples
//!
//! ```bash
//! # Print the authorization URL
//! signin begin
//!
//! # Finish with a code copied from the redirect page
//! signin complete --code c1234.0.abcd --pretty
//!
//! # Who is signed in?
//! signin whoami
//! ```

use signin_cli::{App, Cli, logger};
use signin_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let result = match App::from_config(&config) {
        Ok(app) => app.execute(cli.command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
