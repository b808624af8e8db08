use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polygen_emit::{EmitError, backends, get_backend};
use polygen_model::ClassDef;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "polygen",
    version,
    about = "Multi-target source generation from class descriptions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate source files from class description JSON
    Generate {
        /// Backend name (see `polygen languages`)
        #[arg(short, long)]
        language: String,
        /// Output directory; print to stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Class description JSON files
        #[arg(required = true)]
        models: Vec<PathBuf>,
    },
    /// List registered backends
    Languages,
    /// Parse a type expression and print its tree as JSON
    Parse {
        /// Flat type expression, e.g. "java.util.Map<K, V>"
        expression: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    match Cli::parse().command {
        Command::Generate {
            language,
            out,
            models,
        } => generate(&language, out.as_deref(), &models),
        Command::Languages => {
            for backend in backends() {
                println!("{} (.{})", backend.name(), backend.extension());
            }
            Ok(())
        }
        Command::Parse { expression } => {
            match polygen_typeexpr::parse(&expression) {
                Some(node) => println!("{}", serde_json::to_string_pretty(&node)?),
                None => println!("null"),
            }
            Ok(())
        }
    }
}

fn generate(language: &str, out: Option<&Path>, models: &[PathBuf]) -> Result<()> {
    let backend =
        get_backend(language).ok_or_else(|| EmitError::UnknownBackend(language.to_string()))?;

    for path in models {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let class: ClassDef = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        class
            .validate()
            .with_context(|| format!("validating {}", path.display()))?;

        let source = backend.generate(&class);
        match out {
            Some(dir) => {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
                let file = dir.join(format!("{}.{}", class.name, backend.extension()));
                fs::write(&file, &source)
                    .with_context(|| format!("writing {}", file.display()))?;
                tracing::debug!(class = %class.name, file = %file.display(), "generated");
                println!("{}", file.display());
            }
            None => print!("{source}"),
        }
    }
    Ok(())
}
