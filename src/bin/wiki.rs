//! wikidiary CLI
//!
//! Thin wrapper over the wikidiary library: classify a note filename,
//! print the navigation header that belongs at its top, or query the
//! topic index for recurring subjects.

use anyhow::{bail, Context};
use chrono::Local;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use wikidiary::{
    header, normalize_title, notebook, DirNoteSource, TopicIndex, WikiConfig, WikiFile,
};

/// Generate diary/wiki navigation headers and topic listings.
#[derive(Parser, Debug)]
#[command(name = "wiki")]
#[command(version = wikidiary::VERSION)]
#[command(about = "Navigation headers for a markdown diary/wiki")]
#[command(after_help = "EXAMPLES:
  # Print the header for a daily note
  wiki 2019-01-17.md

  # Re-head an existing note, replacing its old navigation line
  wiki \"2020-04-26 Frankish.md\" --merge

  # What have I been writing about lately?
  wiki --topics

  # Every occurrence of a topic
  wiki --timeline frankish --all
")]
struct Cli {
    /// Note file to generate a header for
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the note's current content with the header merged in
    #[arg(long)]
    merge: bool,

    /// List recurring topics, most recently touched first
    #[arg(long)]
    topics: bool,

    /// List dated occurrences of the given topics
    #[arg(long = "timeline", value_name = "TOPIC", num_args = 1..)]
    timeline: Vec<String>,

    /// Ignore the age window and date limit in listings
    #[arg(long)]
    all: bool,

    /// Note directory (overrides configuration)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = WikiConfig::discover(cli.dir.as_deref())?;

    if cli.topics {
        return list_recent_topics(&config, cli.all);
    }
    if !cli.timeline.is_empty() {
        return list_timelines(&config, &cli.timeline, cli.all);
    }
    if let Some(file) = &cli.file {
        return print_header(&config, file, cli.merge);
    }

    bail!("nothing to do: pass a note file, --topics, or --timeline <TOPIC>");
}

/// Generate and print the header for one note file.
fn print_header(config: &WikiConfig, file: &Path, merge: bool) -> anyhow::Result<()> {
    let name = file.to_string_lossy();
    let wiki_file = WikiFile::classify(&name)?;

    // Only topic notes need neighboring occurrences resolved.
    let index = match &wiki_file {
        WikiFile::TopicNote { .. } => TopicIndex::build(&DirNoteSource, &config.diary_dir)?,
        _ => TopicIndex::default(),
    };

    let header = header::generate(&wiki_file, &index);

    if merge {
        let path = resolve_note_path(config, file);
        let existing = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        print!("{}", notebook::merge_header(&existing, &header));
        return Ok(());
    }

    println!("{header}");
    Ok(())
}

/// A note given by bare filename lives in the configured diary directory;
/// an existing path is taken as-is.
fn resolve_note_path(config: &WikiConfig, file: &Path) -> PathBuf {
    if file.exists() {
        return file.to_path_buf();
    }
    config.diary_dir.join(file)
}

fn list_recent_topics(config: &WikiConfig, all: bool) -> anyhow::Result<()> {
    let index = TopicIndex::build(&DirNoteSource, &config.diary_dir)?;
    let today = Local::now().date_naive();
    let recent = index.recent_topics(today, config.recent_window_days, all);
    print!("{}", wikidiary::presenter::format_recent_topics(&recent));
    Ok(())
}

fn list_timelines(config: &WikiConfig, names: &[String], all: bool) -> anyhow::Result<()> {
    let index = TopicIndex::build(&DirNoteSource, &config.diary_dir)?;
    for name in names {
        let title = normalize_title(name);
        let dates = index.topic_timeline(&title, config.timeline_limit, all);
        println!("{}", wikidiary::presenter::format_timeline(&title, &dates));
    }
    Ok(())
}
