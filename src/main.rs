use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docsplit::{
    chunk_source, chunk_text_file, GrammarRegistry, SplitConfig, WalkOptions, DEFAULT_MAX_CHARS,
    DEFAULT_OVERLAP_CHARS,
};

/// Split documents and source files into content-hashed chunks
#[derive(Parser, Debug)]
#[command(name = "docsplit")]
#[command(about = "Split documents and source files into content-hashed chunks", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter (overrides RUST_LOG, e.g. "debug")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a text file into overlapping character chunks plus index.json
    Text {
        /// Path to a text file (decoded as UTF-8, lossily)
        source: PathBuf,

        /// Output directory for chunk_*.txt + index.json
        /// (default: <source dir>/chunks/<source stem>)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Maximum characters per chunk
        #[arg(long, default_value_t = DEFAULT_MAX_CHARS)]
        max_chars: usize,

        /// Overlap between consecutive chunks in characters
        #[arg(long, default_value_t = DEFAULT_OVERLAP_CHARS)]
        overlap_chars: usize,

        /// Overwrite existing chunk files in the output directory
        #[arg(long)]
        force: bool,
    },

    /// Split source code into top-level declaration chunks
    Code {
        /// Path to a source file or a directory to scan recursively
        source: PathBuf,

        /// Output directory for per-file *.chunks dirs + index.json
        #[arg(long)]
        out_dir: PathBuf,

        /// Override language detection (e.g. python, typescript);
        /// if omitted, inferred from the file extension
        #[arg(long)]
        language: Option<String>,

        /// Overwrite existing chunk files in the output
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());
    run(cli.command)
}

fn run(command: Command) -> ExitCode {
    match command {
        Command::Text {
            source,
            out_dir,
            max_chars,
            overlap_chars,
            force,
        } => {
            if !source.exists() {
                eprintln!("error: source file does not exist: {}", source.display());
                return ExitCode::from(2);
            }
            if !source.is_file() {
                eprintln!("error: source path is not a file: {}", source.display());
                return ExitCode::from(2);
            }

            let out_dir = out_dir.unwrap_or_else(|| default_text_out_dir(&source));
            let config = SplitConfig::new(max_chars, overlap_chars);
            report(chunk_text_file(&source, &out_dir, &config, force), &out_dir)
        }
        Command::Code {
            source,
            out_dir,
            language,
            force,
        } => {
            if !source.exists() {
                eprintln!("error: source path does not exist: {}", source.display());
                return ExitCode::from(2);
            }

            let registry = GrammarRegistry::builtin();
            let walk = WalkOptions::default();
            report(
                chunk_source(
                    &source,
                    &out_dir,
                    language.as_deref(),
                    force,
                    &registry,
                    &walk,
                ),
                &out_dir,
            )
        }
    }
}

fn report<T>(result: anyhow::Result<Vec<T>>, out_dir: &Path) -> ExitCode {
    match result {
        Ok(chunks) => {
            println!("Wrote {} chunks to: {}", chunks.len(), out_dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

/// `<source dir>/chunks/<source stem>`
fn default_text_out_dir(source: &Path) -> PathBuf {
    let stem = source.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
    source
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("chunks")
        .join(stem)
}

fn init_logging(level: Option<&str>) {
    let filter = level
        .map(EnvFilter::new)
        .unwrap_or_else(EnvFilter::from_default_env);
    // Stderr keeps stdout clean for the summary line.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
