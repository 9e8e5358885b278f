// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use serde::Serialize;
use tracing::info;

use crate::config::consts::{BASE_URL, TIMEOUT_SECS, USER_AGENT};
use crate::config::options::{ClientOptions, PhotoQuery};
use crate::core::net::HttpFetcher;
use crate::csv::{self, Delim};
use crate::photo::Photo;
use crate::taxon::Taxon;

#[derive(Parser)]
#[command(name = "bugguide", version, about = "Search taxa and photos on BugGuide.net")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Site root
    #[arg(long, default_value = BASE_URL, global = true)]
    pub base_url: String,

    #[arg(long, default_value = USER_AGENT, global = true)]
    pub user_agent: String,

    /// Extra request header as `Name: value` (repeatable)
    #[arg(long = "header", value_parser = parse_header, global = true)]
    pub headers: Vec<(String, String)>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    #[arg(long, value_enum, default_value_t = Format::Csv, global = true)]
    pub format: Format,

    /// Emit a header row (csv/tsv)
    #[arg(long = "headers", global = true)]
    pub include_headers: bool,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append log lines to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Autocomplete search for taxa by name fragment
    Taxa { query: String },

    /// Look up one taxon by node id
    Find { id: String },

    /// Print a taxon's ancestors, root first
    Lineage { id: String },

    /// Photo advanced search
    Photos(PhotoArgs),
}

#[derive(Args)]
pub struct PhotoArgs {
    /// Submitter user id
    #[arg(long)]
    pub user: Option<String>,
    /// Ancestor taxon node id
    #[arg(long)]
    pub taxon: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub county: Option<String>,
    #[arg(long = "city")]
    pub city_location: Option<String>,
    #[arg(long)]
    pub adult: Option<bool>,
    #[arg(long)]
    pub immature: Option<bool>,
    #[arg(long)]
    pub male: Option<bool>,
    #[arg(long)]
    pub female: Option<bool>,
    #[arg(long)]
    pub representative: Option<bool>,
    /// State or province code (repeatable)
    #[arg(long = "location")]
    pub locations: Vec<String>,
    /// Month 1-12 (repeatable)
    #[arg(long = "month", value_parser = clap::value_parser!(u8).range(1..=12))]
    pub months: Vec<u8>,
}

impl From<PhotoArgs> for PhotoQuery {
    fn from(a: PhotoArgs) -> Self {
        PhotoQuery {
            user: a.user,
            taxon: a.taxon,
            description: a.description,
            county: a.county,
            city_location: a.city_location,
            adult: a.adult,
            immature: a.immature,
            male: a.male,
            female: a.female,
            representative: a.representative,
            locations: a.locations,
            months: a.months,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
    Json,
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in `{s}`"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose, cli.log_file.as_deref())?;

    let options = ClientOptions {
        base_url: cli.base_url.clone(),
        user_agent: cli.user_agent.clone(),
        timeout: Duration::from_secs(cli.timeout),
        headers: cli.headers.clone(),
    };
    let fetch = HttpFetcher::new(&options)?;
    let out = Output { format: cli.format, include_headers: cli.include_headers };

    match cli.command {
        Command::Taxa { query } => {
            let taxa = Taxon::search(&fetch, &query)?;
            out.taxa(&taxa)
        }
        Command::Find { id } => {
            let mut taxon = Taxon::find(&fetch, &id)?;
            if let Some(rank) = taxon.rank(&fetch)? {
                taxon.set_rank(&rank);
            }
            out.taxa(std::slice::from_ref(&taxon))
        }
        Command::Lineage { id } => {
            let taxon = Taxon::find(&fetch, &id)?;
            let ancestors = taxon.ancestors(&fetch)?;
            info!(id = %id, count = ancestors.len(), "lineage");
            out.taxa(&ancestors)
        }
        Command::Photos(args) => {
            let photos = Photo::search(&fetch, &args.into())?;
            out.photos(&photos)
        }
    }
}

struct Output {
    format: Format,
    include_headers: bool,
}

impl Output {
    fn taxa(&self, taxa: &[Taxon]) -> Result<()> {
        let rows: Vec<Vec<String>> = taxa.iter().map(csv::taxon_row).collect();
        self.emit(taxa, csv::taxon_headers(), rows)
    }

    fn photos(&self, photos: &[Photo]) -> Result<()> {
        let rows: Vec<Vec<String>> = photos.iter().map(csv::photo_row).collect();
        self.emit(photos, csv::photo_headers(), rows)
    }

    fn emit<T: Serialize>(&self, records: &[T], headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<()> {
        let mut w = io::stdout().lock();
        let delim = match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut w, records)?;
                writeln!(w)?;
                return Ok(());
            }
            Format::Csv => Delim::Csv,
            Format::Tsv => Delim::Tsv,
        };
        let headers = self.include_headers.then_some(headers.as_slice());
        csv::write_table(&mut w, headers, &rows, delim)?;
        Ok(())
    }
}
