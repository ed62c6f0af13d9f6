use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use fieldquill::config::Config;
use fieldquill::document::DocumentFormat;
use fieldquill::fields::{parse_selector, ParseOutcome};
use fieldquill::file::loader::{load_document_file, load_document_from_stdin};
use fieldquill::file::saver::{save_document_file, write_document};
use fieldquill::prune::prune_document;

/// FieldQuill - prune JSON and YAML documents to a partial-response selection
#[derive(Parser)]
#[command(name = "fieldquill")]
#[command(version)]
#[command(about = "Prune JSON and YAML documents with a fields selector", long_about = None)]
struct Cli {
    /// Document to read (omit to read from stdin)
    file: Option<PathBuf>,

    /// Fields selector, e.g. "items(id,name),totalCount"
    #[arg(short, long)]
    fields: Option<String>,

    /// Match property names case-insensitively
    #[arg(short, long)]
    ignore_case: bool,

    /// Leave the document unfiltered when the selector is malformed
    #[arg(long)]
    ignore_parse_errors: bool,

    /// Selector always retained regardless of --fields (repeatable)
    #[arg(short = 'a', long = "always-include")]
    always_include: Vec<String>,

    /// Write compact JSON
    #[arg(long)]
    compact: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/fieldquill/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file and layers command-line flags over it.
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load(),
        };

        if self.ignore_case {
            config.ignore_case = true;
        }
        if self.ignore_parse_errors {
            config.ignore_parse_errors = true;
        }
        if self.compact {
            config.compact = true;
        }
        config
            .always_included
            .extend(self.always_include.iter().cloned());

        Ok(config)
    }

    /// Output format from the output path, then the input path, else JSON.
    fn output_format(&self) -> DocumentFormat {
        self.output
            .as_ref()
            .or(self.file.as_ref())
            .map(DocumentFormat::from_path)
            .unwrap_or(DocumentFormat::Json)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config()?;

    let document = match &cli.file {
        Some(path) => load_document_file(path)?,
        None => {
            if io::stdin().is_terminal() {
                bail!("No input file given and stdin is not piped");
            }
            load_document_from_stdin()?
        }
    };

    let always_included = config
        .always_included()
        .context("Invalid always-included selector")?;

    let document = match parse_selector(cli.fields.as_deref()) {
        ParseOutcome::Selected(fields) => prune_document(
            document,
            &fields,
            config.case_sensitivity(),
            always_included.as_ref(),
        ),
        ParseOutcome::Malformed(error) if !config.ignore_parse_errors => {
            return Err(error).context("Invalid fields selector");
        }
        ParseOutcome::Malformed(_) | ParseOutcome::Absent => document,
    };

    match &cli.output {
        Some(path) => save_document_file(path, &document, &config)
            .with_context(|| format!("Failed to save {}", path.display()))?,
        None => write_document(io::stdout().lock(), &document, cli.output_format(), &config)?,
    }

    Ok(())
}
