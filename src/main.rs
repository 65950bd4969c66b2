//! alertctl - alert triage tool
//!
//! A command-line tool for scoring, filtering, sorting, and grouping
//! batches of monitoring alerts.

use alertctl::cli::args::{generate_completions, Cli, Commands};
use alertctl::commands::{run_group, run_show, run_triage};
use alertctl::config::ConfigBuilder;
use alertctl::error::{AppError, IngestError};
use clap::Parser;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Triage(args) => {
            let config = ConfigBuilder::new()
                .with_file(cli.config.as_deref())
                .with_limit(args.limit)
                .build();
            run_triage(args, cli.format, &config)
        }

        Commands::Show(args) => run_show(args, cli.format),

        Commands::Group(args) => run_group(args, cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Ingest(IngestError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Check the path passed to -i/--input.");
            eprintln!("      The file must contain a JSON alert batch.");
        }
        AppError::Ingest(IngestError::EmptyBatch(_)) => {
            eprintln!();
            eprintln!("Hint: The file parsed correctly but holds zero alerts.");
            eprintln!("      Expected shape: {{\"alerts\": [ ... ]}}");
        }
        _ => {}
    }
}
