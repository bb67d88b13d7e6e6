use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::{Config, DEFAULT_INFILE, DEFAULT_OUTFILE};
use crate::import::{DEFAULT_DAYONE_BIN, DryRunImporter};
use crate::models::Frequency;
use crate::parsers::load_posts;
use crate::pipeline::{self, ExportStats, RunSummary};
use crate::utils::format_path_with_tilde;

const SUMMARY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Parser)]
#[command(name = "facebook-to-journal")]
#[command(version = "0.1.0")]
#[command(
    about = "Convert a Facebook posts export into a tab-delimited journal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert posts into a TSV journal, optionally importing them into Day One
    Convert(ConvertArgs),
    /// Show statistics about an export
    Stats {
        /// Path to your_posts.json
        #[arg(long, default_value = DEFAULT_INFILE)]
        infile: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to your_posts.json
    #[arg(long, default_value = DEFAULT_INFILE)]
    pub infile: PathBuf,

    /// Path of the tab-delimited output
    #[arg(long, default_value = DEFAULT_OUTFILE)]
    pub outfile: PathBuf,

    /// Day One journal that receives the import; import is skipped without it
    #[arg(long)]
    pub journal: Option<String>,

    /// Aggregation window, e.g. "1 hour", "1D" or "1S" to keep posts apart
    #[arg(long, default_value = "1 hour")]
    pub freq: Frequency,

    /// Day One command line tool
    #[arg(long, default_value = DEFAULT_DAYONE_BIN)]
    pub dayone_bin: PathBuf,

    /// Print the Day One commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

impl From<ConvertArgs> for Config {
    fn from(args: ConvertArgs) -> Self {
        Self {
            infile: args.infile,
            outfile: args.outfile,
            journal: args.journal,
            freq: args.freq,
            dayone_bin: args.dayone_bin,
            dry_run: args.dry_run,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert(args)) => {
            convert(&Config::from(args))?;
        }
        Some(Commands::Stats { infile }) => {
            show_stats(&infile)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn convert(config: &Config) -> Result<()> {
    let summary = match config.importer() {
        Some(importer) if config.dry_run => {
            let mut sink = DryRunImporter::new(importer, io::stdout().lock());
            pipeline::run(config, Some(&mut sink))?
        }
        Some(mut importer) => pipeline::run(config, Some(&mut importer))?,
        None => pipeline::run(config, None)?,
    };

    print_summary(config, &summary);
    Ok(())
}

fn print_summary(config: &Config, summary: &RunSummary) {
    println!(
        "Converted {} posts into {} journal rows ({} buckets)",
        summary.posts, summary.rows, config.freq
    );
    println!("Output: {}", format_path_with_tilde(&config.outfile));

    if let Some(journal) = &config.journal {
        if config.dry_run {
            println!(
                "Dry run: {} Day One commands printed for journal '{}'",
                summary.imported, journal
            );
        } else {
            println!(
                "Imported {} entries into Day One journal '{}' ({} failed)",
                summary.imported, journal, summary.import_failures
            );
        }
    }
}

fn show_stats(infile: &Path) -> Result<()> {
    let posts = load_posts(infile).context("Failed to read export for stats")?;
    let stats = ExportStats::collect(&posts);

    println!("Facebook Export Statistics");
    println!("==========================");
    println!("Total posts: {}", stats.posts);
    println!("  With text: {}", stats.with_text);
    println!("  Links: {}", stats.links);
    println!("  Photos: {}", stats.photos);
    println!("  Tagged: {}", stats.tagged);
    if stats.undated > 0 {
        println!("  Undated: {}", stats.undated);
    }
    println!();
    println!("Export file: {}", format_path_with_tilde(infile));

    if let Some(oldest) = stats.oldest {
        println!("Oldest post: {}", oldest.format(SUMMARY_DATE_FORMAT));
    }
    if let Some(newest) = stats.newest {
        println!("Newest post: {}", newest.format(SUMMARY_DATE_FORMAT));
    }

    Ok(())
}
