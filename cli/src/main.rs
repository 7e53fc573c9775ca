//! unlogseq CLI - Logseq note conversion tool

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unlogseq::{Encoding, JsonFormat, Unlogseq};

#[derive(Parser)]
#[command(name = "unlogseq")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Logseq outline notes to Markdown with frontmatter", long_about = None)]
struct Cli {
    /// Input Logseq note file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a note to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input Logseq note file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Source text encoding name (utf-8 or utf-8-lossy)
        #[arg(long, default_value = "utf-8")]
        encoding: String,

        /// Fail on duplicate frontmatter keys
        #[arg(long)]
        strict_keys: bool,
    },

    /// Convert a note to JSON
    Json {
        /// Input Logseq note file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Convert every note under a directory
    Batch {
        /// Root directory to scan
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// File extension to convert (without the dot)
        #[arg(long, default_value = "md")]
        ext: String,

        /// Source text encoding name (utf-8 or utf-8-lossy)
        #[arg(long, default_value = "utf-8")]
        encoding: String,

        /// Fail on duplicate frontmatter keys
        #[arg(long)]
        strict_keys: bool,
    },

    /// Show note information
    Info {
        /// Input Logseq note file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Markdown {
            input,
            output,
            encoding,
            strict_keys,
        }) => cmd_markdown(&input, output.as_deref(), &encoding, strict_keys),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Batch {
            input,
            output,
            ext,
            encoding,
            strict_keys,
        }) => cmd_batch(&input, output.as_deref(), &ext, &encoding, strict_keys),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_markdown(&input, cli.output.as_deref(), "utf-8", false)
            } else {
                println!("{}", "Usage: unlogseq <FILE> [OUTPUT]".yellow());
                println!("       unlogseq --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn builder(encoding: &str, strict_keys: bool) -> Result<Unlogseq, unlogseq::Error> {
    let encoding = Encoding::from_str(encoding)?;
    let mut builder = Unlogseq::new().with_encoding(encoding);
    if strict_keys {
        builder = builder.strict_keys();
    }
    Ok(builder)
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    encoding: &str,
    strict_keys: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = builder(encoding, strict_keys)?.convert(input)?.to_markdown();

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", markdown);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = builder("utf-8", false)?.convert(input)?.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    ext: &str,
    encoding: &str,
    strict_keys: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_name().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_markdown", stem))
    });

    let listing = unlogseq::list_tree_filtered(input, &[ext])?;
    if listing.files.is_empty() {
        println!("{}", format!("No .{} files found", ext).yellow());
        return Ok(());
    }

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(listing.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut failed: Vec<(PathBuf, String)> = Vec::new();
    for file in &listing.files {
        pb.set_message(
            file.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned(),
        );

        match builder(encoding, strict_keys)?.convert(file) {
            Ok(result) => {
                let relative = file.strip_prefix(input).unwrap_or(file);
                let target = output_dir.join(relative);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&target, result.to_markdown())?;
            }
            Err(e) => failed.push((file.clone(), e.to_string())),
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    let converted = listing.files.len() - failed.len();
    println!(
        "\n{} {} notes to {}",
        "Converted".green().bold(),
        converted,
        output_dir.display()
    );
    for (file, reason) in &failed {
        eprintln!(
            "{} {}: {}",
            "Skipped".yellow().bold(),
            file.display(),
            reason
        );
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = builder("utf-8", false)?.convert(input)?;
    let note = result.note();

    println!("{}", "Note Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(title) = note.title() {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Frontmatter keys".bold(), note.frontmatter.len());
    for (key, value) in note.frontmatter.iter() {
        println!("  {} {}: {}", "·".dimmed(), key, value);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let words: usize = note
        .content
        .iter()
        .map(|l| l.split_whitespace().count())
        .sum();
    println!("{}: {}", "Lines".bold(), note.content_len());
    println!("{}: {}", "Words".bold(), words);

    Ok(())
}

fn cmd_version() {
    println!("unlogseq {}", env!("CARGO_PKG_VERSION"));
}
