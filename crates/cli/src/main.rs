use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use scrutari_core::{AnalysisJob, ExtractionJob, FetchConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Batch article extraction and text-metrics analysis
#[derive(Parser, Debug)]
#[command(name = "scrutari")]
#[command(author = "Scrutari Contributors")]
#[command(version = VERSION)]
#[command(about = "Extract article text and compute readability/sentiment metrics", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable progress logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch every input URL and write one article artifact per record
    Extract {
        /// Input table with URL_ID and URL columns
        #[arg(short, long, value_name = "CSV")]
        input: PathBuf,

        /// Directory receiving <URL_ID>.txt artifacts
        #[arg(short, long, default_value = "articles", value_name = "DIR")]
        articles: PathBuf,

        /// Error log path (recreated each run)
        #[arg(short, long, default_value = "errors.txt", value_name = "FILE")]
        errors: PathBuf,

        /// HTTP timeout in seconds
        #[arg(long, default_value = "15", value_name = "SECS")]
        timeout: u64,

        /// Custom User-Agent for HTTP requests
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,
    },

    /// Compute the metric set for every artifact and write the output table
    Analyze {
        /// Directory of <URL_ID>.txt artifacts
        #[arg(short, long, default_value = "articles", value_name = "DIR")]
        articles: PathBuf,

        /// Directory of stopword lists (*.txt)
        #[arg(long, value_name = "DIR")]
        stopwords: PathBuf,

        /// Directory with positive-words.txt / negative-words.txt
        #[arg(long, value_name = "DIR")]
        dictionary: PathBuf,

        /// Output structure template (header row defines columns)
        #[arg(long, value_name = "CSV")]
        schema: PathBuf,

        /// Input table, for passthrough columns
        #[arg(short, long, value_name = "CSV")]
        input: PathBuf,

        /// Output table path
        #[arg(short, long, value_name = "CSV")]
        output: PathBuf,
    },
}

/// Print a styled banner for verbose mode
fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Scrutari".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Article extraction and text metrics".dimmed());
    eprintln!();
}

/// Print a styled step message
fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
    }

    match args.command {
        Command::Extract { input, articles, errors, timeout, user_agent } => {
            if args.verbose {
                print_step(1, 2, &format!("Reading input table {}", input.display().bright_white()));
            }

            let mut fetch = FetchConfig { timeout, ..Default::default() };
            if let Some(ua) = user_agent {
                fetch.user_agent = ua;
            }

            let job = ExtractionJob {
                input,
                articles_dir: articles.clone(),
                error_log: errors.clone(),
                fetch,
            };

            if args.verbose {
                print_step(2, 2, "Fetching and extracting articles");
            }

            let summary = job.run().await.context("Extraction run failed")?;

            print_success(&format!(
                "{} article(s) saved to {}",
                summary.saved,
                articles.display().bright_white()
            ));
            if summary.failed > 0 {
                print_warning(&format!(
                    "{} failure(s) logged to {}",
                    summary.failed,
                    errors.display()
                ));
            } else if args.verbose {
                print_info("No extraction failures");
            }
        }

        Command::Analyze { articles, stopwords, dictionary, schema, input, output } => {
            if args.verbose {
                print_step(1, 2, "Loading lexicons and output schema");
            }

            let job = AnalysisJob {
                articles_dir: articles,
                stopwords_dir: stopwords,
                dictionary_dir: dictionary,
                schema,
                input,
                output: output.clone(),
            };

            if args.verbose {
                print_step(2, 2, "Computing metrics and assembling rows");
            }

            let summary = job.run().context("Analysis run failed")?;

            print_success(&format!(
                "{} row(s) written to {}",
                summary.rows,
                output.display().bright_white()
            ));
        }
    }

    Ok(())
}
