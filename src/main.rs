use std::{
    cmp::Reverse,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use tagcloud::{
    canonical_tag, collect, normalize, vault,
    view::{CloudView, TextView},
    Settings,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a weighted tag cloud for a vault.
    Cloud(CloudArgs),

    /// Print tag counts, most frequent first.
    Histogram(CloudArgs),

    /// List every distinct tag in the vault.
    ListTags(CloudArgs),

    /// List notes carrying a specific tag.
    Tagged {
        #[command(flatten)]
        args: CloudArgs,

        /// Tag to look for, leading '#' optional.
        #[arg(required = true)]
        tag: String,
    },
}

use Commands::*;

/// Vault location and cloud tuning shared by the subcommands.
#[derive(Debug, Args, Clone)]
struct CloudArgs {
    /// Path to the note vault.
    vault: PathBuf,

    /// Settings file in IDM format.
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Only count notes modified within this many days, 0 for all.
    #[arg(long)]
    days_back: Option<u32>,

    /// Occurrences needed for a tag to make the cloud.
    #[arg(long)]
    min_occurrences: Option<usize>,

    /// Smallest rendered font size.
    #[arg(long)]
    min_font_size: Option<u32>,

    /// Largest rendered font size.
    #[arg(long)]
    max_font_size: Option<u32>,

    /// Comma-separated tags to leave out, case-insensitive.
    #[arg(long, value_delimiter = ',')]
    ignore: Vec<String>,
}

impl CloudArgs {
    /// Settings from the file or defaults, with flag overrides on top.
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(n) = self.days_back {
            settings.days_back = n;
        }
        if let Some(n) = self.min_occurrences {
            settings.min_occurrences = n;
        }
        if let Some(n) = self.min_font_size {
            settings.min_font_size = n;
        }
        if let Some(n) = self.max_font_size {
            settings.max_font_size = n;
        }
        settings.ignore_tags.extend(self.ignore.iter().cloned());

        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Cloud(args) => {
            let settings = args.settings()?;
            let documents = vault::scan(&args.vault)?;
            let counts = collect(&documents, &settings, epoch_now());
            let cloud = normalize(&counts, settings.min_occurrences);

            if cloud.is_empty() {
                let timeframe = if settings.days_back > 0 {
                    format!(" (last {} days)", settings.days_back)
                } else {
                    String::new()
                };
                if counts.is_empty() {
                    println!("No tags found in the vault{timeframe}.");
                } else {
                    println!(
                        "No tags with {}+ occurrences found{timeframe}.",
                        settings.min_occurrences
                    );
                }
                return Ok(());
            }

            let mut view = TextView::new(
                std::io::stdout().lock(),
                settings.min_font_size,
                settings.max_font_size,
            );
            view.render(&cloud)
        }

        Histogram(args) => {
            let settings = args.settings()?;
            let documents = vault::scan(&args.vault)?;
            let counts = collect(&documents, &settings, epoch_now());

            let mut hist: Vec<(String, usize)> = counts.into_iter().collect();
            hist.sort_by_key(|(_, n)| Reverse(*n));
            for (tag, n) in &hist {
                println!("{tag:32} {n}");
            }
            Ok(())
        }

        ListTags(args) => {
            let settings = args.settings()?;
            let documents = vault::scan(&args.vault)?;
            let counts = collect(&documents, &settings, epoch_now());

            for tag in counts.keys().sorted() {
                println!("{tag}");
            }
            Ok(())
        }

        Tagged { args, tag } => {
            let documents = vault::scan(&args.vault)?;
            let needle = canonical_tag(&tag).unwrap_or(&tag);

            // Navigation ignores the recency window, an old note is
            // still worth jumping to.
            for doc in &documents {
                if doc
                    .tags
                    .iter()
                    .filter_map(|t| canonical_tag(t))
                    .any(|t| t == needle)
                {
                    println!("{}", doc.path.display());
                }
            }
            Ok(())
        }
    }
}

fn epoch_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
