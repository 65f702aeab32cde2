//! NotePress CLI - Convert Markdown into Notion page payloads
//!
//! Usage:
//!   npcli <COMMAND> [FILE]
//!
//! Commands:
//!   convert   Markdown -> `children` block array
//!   page      Full page-creation payload for a database
//!   check     Verify environment configuration (offline)
//!   stats     Show document statistics
//!
//! The network call is deliberately out of scope: payloads go to stdout
//! for submission by whatever HTTP client the caller prefers.

use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use log::debug;
use notepress_core::{parse, Block, Document};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

mod notion;

#[derive(Debug, Error)]
enum Error {
    /// Missing or malformed environment configuration.
    #[error("configuration: {0}")]
    Config(String),
    /// Input could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    /// Input was readable but unusable.
    #[error("invalid input: {0}")]
    Input(String),
}

#[derive(Parser)]
#[command(name = "npcli", version, about = "Convert Markdown into Notion page payloads")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Markdown into a `children` block array
    Convert(ConvertArgs),
    /// Build a complete page-creation payload for a database
    Page(PageArgs),
    /// Verify environment configuration without calling the API
    Check,
    /// Show block statistics for a document
    Stats(StatsArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Input Markdown file (stdin when omitted)
    file: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(short, long)]
    compact: bool,
}

#[derive(Args)]
struct PageArgs {
    /// Input Markdown file (stdin when omitted)
    file: Option<PathBuf>,

    /// Page title; defaults to the input's first line
    #[arg(short, long)]
    title: Option<String>,

    /// Target database id
    #[arg(long, env = "NOTION_DATABASE_ID", hide_env_values = true)]
    database_id: Option<String>,

    /// Category property (select)
    #[arg(long)]
    category: Option<String>,

    /// Tag property entry (multi-select, repeatable)
    #[arg(long = "tag")]
    tag: Vec<String>,

    /// Status property
    #[arg(long)]
    status: Option<String>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(short, long)]
    compact: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Input Markdown file (stdin when omitted)
    file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short = 'j', long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Command::Convert(args) => cmd_convert(args),
        Command::Page(args) => cmd_page(args),
        Command::Check => cmd_check(),
        Command::Stats(args) => cmd_stats(args),
    }
}

fn read_input(file: Option<&Path>) -> Result<String, Error> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn print_json(value: &Value, compact: bool) {
    if compact {
        println!("{}", serde_json::to_string(value).unwrap());
    } else {
        println!("{}", serde_json::to_string_pretty(value).unwrap());
    }
}

// =============================================================================
// Convert Command
// =============================================================================

fn cmd_convert(args: ConvertArgs) -> Result<(), Error> {
    let input = read_input(args.file.as_deref())?;
    let doc = parse(&input);
    debug!("parsed {} blocks from {} bytes", doc.len(), input.len());

    print_json(&Value::Array(notion::children(&doc)), args.compact);
    Ok(())
}

// =============================================================================
// Page Command
// =============================================================================

fn cmd_page(args: PageArgs) -> Result<(), Error> {
    let input = read_input(args.file.as_deref())?;

    let (title, body) = match &args.title {
        Some(title) => (title.clone(), input.as_str()),
        None => first_line_title(&input)?,
    };

    let database_id = args.database_id.ok_or_else(|| {
        Error::Config("NOTION_DATABASE_ID is not set; export it or pass --database-id".to_string())
    })?;

    let doc = parse(body);
    debug!("parsed {} blocks for page {title:?}", doc.len());

    let opts = notion::PageOptions {
        category: args.category,
        tags: args.tag,
        status: args.status,
    };
    let payload = notion::page_payload(&database_id, &title, &doc, &opts);
    print_json(&payload, args.compact);
    Ok(())
}

/// Without `--title`, the input's first line names the page (leading `#`
/// marks dropped) and the remainder is the body.
fn first_line_title(input: &str) -> Result<(String, &str), Error> {
    let (first, rest) = input.split_once('\n').unwrap_or((input, ""));
    let title = first.trim().trim_start_matches('#').trim();
    if title.is_empty() {
        return Err(Error::Input(
            "no title: pass --title or start the document with one".to_string(),
        ));
    }
    Ok((title.to_string(), rest))
}

// =============================================================================
// Check Command
// =============================================================================

fn cmd_check() -> Result<(), Error> {
    let api_key = env::var("NOTION_API_KEY")
        .map_err(|_| Error::Config("NOTION_API_KEY is not set".to_string()))?;
    let database_id = env::var("NOTION_DATABASE_ID")
        .map_err(|_| Error::Config("NOTION_DATABASE_ID is not set".to_string()))?;

    let masked: String = api_key.chars().take(10).collect();
    println!("NOTION_API_KEY:     {masked}...");
    println!("NOTION_DATABASE_ID: {database_id}");

    if !looks_like_database_id(&database_id) {
        return Err(Error::Config(format!(
            "NOTION_DATABASE_ID does not look like a database id: {database_id}"
        )));
    }

    println!();
    println!("Configuration OK.");
    Ok(())
}

/// Database ids are 32 hex digits, optionally dash-grouped.
fn looks_like_database_id(id: &str) -> bool {
    let mut hex = 0;
    for c in id.chars() {
        match c {
            '-' => {}
            c if c.is_ascii_hexdigit() => hex += 1,
            _ => return false,
        }
    }
    hex == 32
}

// =============================================================================
// Stats Command
// =============================================================================

#[derive(Default, Serialize)]
struct DocumentStats {
    total_blocks: usize,
    headings: usize,
    bulleted_items: usize,
    numbered_items: usize,
    paragraphs: usize,
    code_blocks: usize,
    tables: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_document(doc: &Document, input: &str) -> Self {
        let mut stats = Self {
            chars: input.len(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
            ..Self::default()
        };

        for block in doc.iter() {
            stats.total_blocks += 1;
            match block {
                Block::Heading(_) => stats.headings += 1,
                Block::BulletedItem(_) => stats.bulleted_items += 1,
                Block::NumberedItem(_) => stats.numbered_items += 1,
                Block::Paragraph(_) => stats.paragraphs += 1,
                Block::Code(_) => stats.code_blocks += 1,
                Block::Table(_) => stats.tables += 1,
            }
        }

        stats
    }
}

fn cmd_stats(args: StatsArgs) -> Result<(), Error> {
    let input = read_input(args.file.as_deref())?;
    let doc = parse(&input);
    let stats = DocumentStats::from_document(&doc, &input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats).unwrap());
        return Ok(());
    }

    println!("Document Statistics");
    println!("-------------------");
    println!("Content:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Bulleted items: {}", stats.bulleted_items);
    println!("  Numbered items: {}", stats.numbered_items);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Code blocks:    {}", stats.code_blocks);
    println!("  Tables:         {}", stats.tables);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);

    Ok(())
}
