use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use postings_core::elias::{codable, delta_encode, gamma_encode};
use postings_core::persist::{save_bundle, save_meta, IndexPaths, MetaFile};
use postings_core::{Document, IndexBundle};
use serde::Deserialize;
use tracing_subscriber::{EnvFilter, fmt};
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One corpus record. Only `text` is used; a record without it indexes as an empty document.
#[derive(Debug, Deserialize)]
struct InputRecord {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build raw and Elias-delta inverted indexes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build both indexes from JSON/JSONL records or a directory of them
    Build {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        /// Output index directory
        #[arg(long, default_value = "./index")]
        output: String,
        /// Repeat every record this many times in a row before indexing
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        repeat: u32,
    },
    /// Print the Elias-delta code of each value
    Encode {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Use Elias-gamma instead
        #[arg(long, default_value_t = false)]
        gamma: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output, repeat } => build_index(&input, &output, repeat),
        Commands::Encode { values, gamma } => {
            for line in encode_values(&values, gamma)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn build_index(input: &str, output: &str, repeat: u32) -> Result<()> {
    let corpus = load_corpus(Path::new(input), repeat)?;
    tracing::info!(num_docs = corpus.len(), repeat, "ingested documents");

    let bundle = IndexBundle::from_corpus(&corpus);
    tracing::info!(
        num_terms = bundle.uncompressed.len(),
        total_postings = bundle.uncompressed.total_postings(),
        total_bits = bundle.compressed.total_bits(),
        "indexes built"
    );

    let out_paths = IndexPaths::new(output);
    save_bundle(&out_paths, &bundle)?;
    let created_at = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "".into());
    save_meta(&out_paths, &MetaFile::describe(&bundle, created_at))?;

    tracing::info!(output, "index build complete");
    Ok(())
}

fn encode_values(values: &[i64], gamma: bool) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(values.len());
    for &value in values {
        let n = codable(value)?;
        let code = if gamma { gamma_encode(n) } else { delta_encode(n) };
        lines.push(format!("{value}\t{code}"));
    }
    Ok(lines)
}

/// Read every record under `input`, numbering documents from zero in load order.
fn load_corpus(input: &Path, repeat: u32) -> Result<Vec<Document>> {
    let mut texts: Vec<String> = Vec::new();
    for file in input_files(input)? {
        let records = if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            read_jsonl(&file)?
        } else {
            read_json(&file)?
        };
        for record in records {
            let text = record.text.unwrap_or_default();
            texts.extend(std::iter::repeat(text).take(repeat as usize));
        }
    }
    Ok(postings_core::corpus_from_texts(texts))
}

fn input_files(input: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "json" | "jsonl") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        anyhow::bail!("input {} does not exist", input.display());
    }
    Ok(files)
}

fn read_jsonl(file: &Path) -> Result<Vec<InputRecord>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    let mut records = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: InputRecord = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: malformed record", file.display(), lineno + 1))?;
        records.push(record);
    }
    Ok(records)
}

fn read_json(file: &Path) -> Result<Vec<InputRecord>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    let json: serde_json::Value = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", file.display()))?;
    let records = match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<InputRecord>, _>>()?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(json)?],
        _ => Vec::new(),
    };
    Ok(records)
}
