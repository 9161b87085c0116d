use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

use podcastr::{
    DEFAULT_API_URL, EpisodesQuery, GenerateOptions, NoopReporter, ProgressEvent,
    ProgressReporter, ReqwestClient, SharedProgressReporter, regenerate, watch,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static UNCHANGED: Emoji<'_, '_> = Emoji("💤 ", "[=] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static CLOCK: Emoji<'_, '_> = Emoji("⏰ ", "[z] ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");

/// Generate the static home page of a podcast site from its episodes API
#[derive(Parser, Debug)]
#[command(name = "podcastr")]
#[command(about = "Generate the static home page of a podcast site from its episodes API")]
#[command(version)]
struct Args {
    /// Output directory for index.html and props.json
    output_dir: PathBuf,

    /// Base URL of the episodes API
    #[arg(long, env = "PODCASTR_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Number of episodes to fetch
    #[arg(short, long, default_value = "12")]
    limit: usize,

    /// Keep running and regenerate the page periodically
    #[arg(short, long)]
    watch: bool,

    /// Seconds between regenerations in watch mode
    #[arg(long, default_value = "28800", value_parser = clap::value_parser!(u64).range(1..))]
    revalidate: u64,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Progress reporter using an indicatif spinner for terminal output
struct SpinnerReporter {
    spinner: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));

        Self { spinner }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::FetchingEpisodes { url } => {
                self.spinner
                    .set_message(format!("{SEARCH}Fetching episodes: {}", url.cyan()));
            }

            ProgressEvent::EpisodesFetched { count } => {
                self.spinner.set_message(format!(
                    "{HEADPHONES}{} episodes received",
                    count.to_string().cyan()
                ));
            }

            ProgressEvent::PageBuilt {
                latest_count,
                all_count,
            } => {
                self.spinner.set_message(format!(
                    "{HEADPHONES}{} latest, {} more",
                    latest_count.to_string().green(),
                    all_count.to_string().yellow()
                ));
            }

            ProgressEvent::PageWritten {
                path,
                changed,
                content_hash,
            } => {
                let line = if changed {
                    format!("{SUCCESS}{} {}", "Page written:".bold().green(), path.cyan())
                } else {
                    format!("{UNCHANGED}{} {}", "Page unchanged:".bold(), path.cyan())
                };
                self.spinner
                    .println(format!("{line} {}", content_hash.dimmed()));
            }

            ProgressEvent::GenerationFailed { error } => {
                self.spinner.println(format!(
                    "{FAILURE}{} {}",
                    "Generation failed, keeping previous page:".red().bold(),
                    error.red()
                ));
            }

            ProgressEvent::WaitingForRegeneration { seconds } => {
                self.spinner.set_message(format!(
                    "{CLOCK}Next regeneration in {}",
                    format_interval(seconds).cyan()
                ));
            }
        }
    }
}

impl Drop for SpinnerReporter {
    fn drop(&mut self) {
        self.spinner.finish_and_clear();
    }
}

fn format_interval(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    match (hours, minutes) {
        (0, 0) => format!("{seconds}s"),
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podcastr".bold().magenta(),
            "- Static Page Generator".dimmed()
        );
    }

    let client = ReqwestClient::new();

    let options = GenerateOptions {
        api_url: args.api_url,
        query: EpisodesQuery {
            limit: args.limit,
            ..Default::default()
        },
        revalidate: Duration::from_secs(args.revalidate),
    };

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        std::sync::Arc::new(SpinnerReporter::new())
    };

    if args.watch {
        watch(&client, &options, &args.output_dir, &reporter, None).await;
        return Ok(());
    }

    regenerate(&client, &options, &args.output_dir, &reporter)
        .await
        .context("Failed to generate home page")?;

    drop(reporter);

    if !args.quiet {
        println!(
            "\n{FOLDER}Output: {}\n",
            args.output_dir.display().to_string().cyan()
        );
    }

    Ok(())
}
