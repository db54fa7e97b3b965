use anyhow::Result;
use clap::{Parser, ValueEnum};
use postings_core::Representation;
use searcher::{format_report, format_search, SearchResponse, Searcher};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Raw,
    Compressed,
}

impl From<Mode> for Representation {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Raw => Representation::Raw,
            Mode::Compressed => Representation::Compressed,
        }
    }
}

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Look up a term and compare raw and Elias-delta index representations")]
struct Args {
    /// Term to look up (exact, case-sensitive)
    query: String,
    /// Index directory path
    #[arg(long, default_value = "./index")]
    index: String,
    /// Run a single lookup in this representation instead of the full evaluation
    #[arg(long, value_enum)]
    mode: Option<Mode>,
    /// Print compressed hits as document ids
    #[arg(long, default_value_t = false)]
    decode: bool,
    /// Emit JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let searcher = Searcher::open(&args.index)?;

    match args.mode {
        Some(mode) => {
            let result = searcher.search(&args.query, mode.into());
            let response = SearchResponse::from_result(&args.query, &result, args.decode)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print!("{}", format_search(&response));
            }
        }
        None => {
            let metrics = searcher.evaluate(&args.query);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            } else {
                print!("{}", format_report(&metrics));
            }
        }
    }
    Ok(())
}
