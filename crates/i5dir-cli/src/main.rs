use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod seal;

#[derive(Debug, Parser)]
#[command(name = "i5dir-cli")]
#[command(about = "I-5 corridor business directory data tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate, dedupe, and seal scraped listings into the generated
    /// data module.
    Seal {
        /// Directory holding the scraped input files.
        #[arg(long)]
        input_dir: Option<PathBuf>,
        /// Path of the generated data module.
        #[arg(long)]
        output_module: Option<PathBuf>,
        /// Path of the JSON validation report.
        #[arg(long)]
        report_json: Option<PathBuf>,
        /// Path of the plain-text run summary.
        #[arg(long)]
        report_text: Option<PathBuf>,
        /// Directory receiving the pre-run backup of the prior module.
        #[arg(long)]
        backup_dir: Option<PathBuf>,
        /// Run every stage but write nothing.
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the summary of the most recent validation report.
    Report {
        #[arg(long)]
        report_json: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Seal {
            input_dir,
            output_module,
            report_json,
            report_text,
            backup_dir,
            dry_run,
        } => {
            seal::run_seal_command(
                seal::PathOverrides {
                    input_dir,
                    output_module,
                    report_json,
                    report_text,
                    backup_dir,
                },
                dry_run,
            )
            .await
        }
        Commands::Report { report_json } => seal::print_latest_report(report_json).await,
    }
}
