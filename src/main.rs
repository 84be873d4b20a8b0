use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ediff::{DiffFormatter, Patch, apply, apply_diff, generate_diff};
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ediff")]
#[command(version, about = "Compare files and patch them, one character at a time", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Store the changes between two files
    ediff diff old.txt new.txt > changes.ediff

    # Rebuild the new file from the old one
    ediff patch old.txt changes.ediff > new.txt")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two files and print the serialized diff
    Diff {
        /// The original file
        old: PathBuf,
        /// The modified file
        new: PathBuf,
        /// Highlight deletions and insertions (for reading, not for storing)
        #[cfg(feature = "color")]
        #[arg(long)]
        color: bool,
    },
    /// Rebuild a modified file from the original and a serialized diff
    Patch {
        /// The original file the diff was made against
        file: PathBuf,
        /// The serialized diff
        diff: PathBuf,
        /// Replay the diff without checking it against the original file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout only carries diffs and patched files
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let output = match cli.command {
        #[cfg(feature = "color")]
        Commands::Diff { old, new, color } => run_diff(&old, &new, color)?,
        #[cfg(not(feature = "color"))]
        Commands::Diff { old, new } => run_diff(&old, &new, false)?,
        Commands::Patch { file, diff, force } => run_patch(&file, &diff, force)?,
    };

    if let Some(output) = output {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

fn run_diff(old: &Path, new: &Path, color: bool) -> Result<Option<String>> {
    let Some(old_text) = read_input(old)? else {
        return Ok(None);
    };
    let Some(new_text) = read_input(new)? else {
        return Ok(None);
    };

    let diffs = generate_diff(&old_text, &new_text);
    tracing::debug!(
        records = diffs.len(),
        old = %old.display(),
        new = %new.display(),
        "computed diff"
    );

    let formatter = DiffFormatter::new();
    #[cfg(feature = "color")]
    let formatter = if color {
        formatter.with_color()
    } else {
        formatter
    };
    #[cfg(not(feature = "color"))]
    let _ = color;

    Ok(Some(formatter.fmt_diffs(&diffs).to_string()))
}

fn run_patch(file: &Path, diff: &Path, force: bool) -> Result<Option<String>> {
    let Some(base) = read_input(file)? else {
        return Ok(None);
    };
    let Some(serialized) = read_input(diff)? else {
        return Ok(None);
    };

    let patch: Patch = serialized
        .parse()
        .with_context(|| format!("Failed to parse diff {}", diff.display()))?;
    tracing::debug!(records = patch.diffs().len(), diff = %diff.display(), "parsed diff");

    let patched = if force {
        apply_diff(patch.diffs())
    } else {
        apply(&base, patch.diffs()).with_context(|| {
            format!(
                "Diff {} doesn't apply to {}",
                diff.display(),
                file.display()
            )
        })?
    };

    Ok(Some(patched))
}

// A missing file is reported to the user but isn't an error.
fn read_input(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        println!("File {} does not exist.", path.display());
        return Ok(None);
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(text))
}
