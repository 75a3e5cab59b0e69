//! shoestock CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure
//! - 4: Inventory data error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod prompt;
mod table;

use commands::{Cli, Commands};
use shoestock_store::LinePolicy;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const DATA_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    // Initialize logging
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("shoestock_store=info".parse().unwrap())
                .add_directive("shoestock_cli=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();

    let policy = if cli.lenient {
        LinePolicy::Lenient
    } else {
        LinePolicy::Strict
    };
    let json_output = cli.output == "json";

    let result = match cli.command {
        Some(Commands::Init) => commands::init::execute(&cli.file),
        Some(Commands::Add(args)) => commands::add::execute(&cli.file, policy, args),
        Some(Commands::View) => commands::view::execute(&cli.file, policy, json_output),
        Some(Commands::Search(args)) => {
            commands::search::execute(&cli.file, policy, json_output, args)
        }
        Some(Commands::Restock(args)) => commands::restock::execute(&cli.file, policy, args),
        Some(Commands::Value) => commands::value::execute(&cli.file, policy, json_output),
        Some(Commands::SaleItem) => commands::sale_item::execute(&cli.file, policy),
        Some(Commands::Validate) => commands::validate::execute(&cli.file, policy),
        None => commands::menu::execute(&cli.file, policy),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            // Determine appropriate exit code based on error
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let msg = e.to_string().to_lowercase();

    if msg.contains("validation") {
        ExitCodes::VALIDATION_FAILURE
    } else if msg.contains("inventory file") || msg.contains("malformed") {
        ExitCodes::DATA_ERROR
    } else if msg.contains("no shoe") || msg.contains("argument") || msg.contains("already exists")
    {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
