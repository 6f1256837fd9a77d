//! Release-name parsing CLI
//!
//! Parses the titles given as arguments, or every non-empty stdin line when
//! none are given, and prints one JSON record per title.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use reelmeta_core::{MetaInfo, MetaParser, ParserConfig};
use serde::Serialize;
use tracing::{Level, debug};

/// CLI arguments
#[derive(Parser)]
#[command(name = "reelmeta-parse")]
#[command(about = "Parse movie/TV release names into JSON metadata")]
#[command(version)]
struct Cli {
    /// Titles to parse; read from stdin when omitted
    titles: Vec<String>,

    /// Pretty-print each JSON record
    #[arg(short, long)]
    pretty: bool,

    /// Log parser decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Extra release group to recognise (repeatable)
    #[arg(short, long = "group")]
    groups: Vec<String>,
}

/// One output record: the parsed fields plus the derived labels.
#[derive(Debug, Serialize)]
struct ParseOutput<'a> {
    title: Option<&'a str>,
    season_episode: String,
    edition: String,
    #[serde(flatten)]
    meta: &'a MetaInfo,
}

impl<'a> ParseOutput<'a> {
    fn new(meta: &'a MetaInfo) -> Self {
        Self {
            title: meta.title(),
            season_episode: meta.season_episode_label(),
            edition: meta.edition(),
            meta,
        }
    }
}

fn emit(out: &mut impl Write, meta: &MetaInfo, pretty: bool) -> Result<()> {
    let record = ParseOutput::new(meta);
    let json = if pretty {
        serde_json::to_string_pretty(&record)
    } else {
        serde_json::to_string(&record)
    }
    .context("failed to serialize parse result")?;
    writeln!(out, "{json}").context("failed to write output")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let config = cli
        .groups
        .iter()
        .fold(ParserConfig::new(), |config, group| {
            config.with_release_group(group.as_str())
        });
    let parser = MetaParser::with_config(config).context("failed to build parser")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.titles.is_empty() {
        for title in &cli.titles {
            emit(&mut out, &parser.parse(title), cli.pretty)?;
        }
        return Ok(());
    }

    debug!("reading titles from stdin");
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        emit(&mut out, &parser.parse(line), cli.pretty)?;
    }
    Ok(())
}
