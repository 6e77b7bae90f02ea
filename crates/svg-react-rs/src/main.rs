//! svg-react-rs: convert SVG markup files into React component sources.

mod cli;
mod config;
mod orchestrator;
mod output;

use clap::Parser;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let args = cli::Args::parse();

    match orchestrator::run(args).await {
        Ok(summary) => {
            if summary.failure_count > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
