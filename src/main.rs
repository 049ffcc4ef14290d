// Command-line entry point for Method Tree.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use method_tree::application::{MineUsecase, MiningReport};
use method_tree::config::{Config, DEFAULT_OUTPUT, DEFAULT_TIMEOUT_MS};
use method_tree::domain::MineError;
use method_tree::infrastructure::{JsonFileExporter, StreamSource};

const USAGE_EXAMPLE: &str = "ag 'React.' -Q | method-tree React";

#[derive(Parser, Debug)]
#[command(author, version, about, after_help = "Example:\n  ag 'React.' -Q | method-tree React")]
struct Cli {
    /// Object whose chained method calls are mined (e.g. React)
    #[arg(value_name = "IDENTIFIER")]
    identifier: String,

    /// Output path for the JSON method tree
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// How long to wait for piped input before giving up
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();
}

fn print_report(report: &MiningReport) {
    println!("\n  Searching input for regexp: {}\n", report.pattern.yellow());
    println!("  Found {} matches", report.total_matches.to_string().blue());
    println!("  Found {} unique strings", report.unique_matches.to_string().blue());
    println!("  Found {} unique method calls\n", report.unique_chains.to_string().blue());
    println!("  Built method tree");
    println!("  Found {} unique methods\n", report.unique_methods);

    match &report.persist_error {
        None => println!(
            "  {} Wrote method tree to {}\n",
            "COMPLETE:".green(),
            report.output.display().to_string().green()
        ),
        Some(e) => eprintln!(
            "  {} could not write {}: {}\n",
            "WARN:".yellow(),
            report.output.display(),
            e
        ),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::new(cli.identifier)?
        .with_output(cli.output)
        .with_timeout(Duration::from_millis(cli.timeout_ms));

    let source = StreamSource::stdin(config.input_timeout);
    let usecase = MineUsecase {
        source: &source,
        exporter: &JsonFileExporter,
    };

    let report = usecase.run(&config)?;
    print_report(&report);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{} {}", "error:".red(), e);
            if e.downcast_ref::<MineError>().is_some_and(MineError::is_usage) {
                eprintln!(
                    "{}\n  {}\n",
                    "Pipe search output into the tool, e.g.".red(),
                    USAGE_EXAMPLE.cyan()
                );
            }
            ExitCode::FAILURE
        }
    }
}
