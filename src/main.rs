use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use rust_ddlmodel::{
    render_inputs, Dialect, OutputFormat, ParseOptions, RenderOptions, TypeOverrides,
};

#[derive(Parser)]
#[command(name = "rust-ddlmodel")]
#[command(author, version, about = "Parse dialect-specific DDL into a table model")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse DDL files and print the canonical SQL or XML model
    Parse {
        /// Files, directories (searched for *.sql) or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        /// SQL dialect (mysql, postgres, oracle, standard); overrides the config file
        #[arg(short, long)]
        dialect: Option<Dialect>,

        /// Character encoding of the input files (defaults to UTF-8)
        #[arg(short, long)]
        encoding: Option<String>,

        /// XML config file with parse options and type overrides
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Extra type overrides, e.g. "INT4=INTEGER;BPCHAR=CHAR"
        #[arg(short = 'm', long = "map-types")]
        map_types: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "sql")]
        format: Format,

        /// Output file, or directory for one file per input (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on constraints naming unknown columns instead of warning
        #[arg(long)]
        strict: bool,

        /// Enable debug logging
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Sql,
    Xml,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Sql => OutputFormat::Sql,
            Format::Xml => OutputFormat::Xml,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            inputs,
            dialect,
            encoding,
            config,
            map_types,
            format,
            output,
            strict,
            verbose,
        } => {
            init_logging(verbose);

            let mut parse = match &config {
                Some(path) => ParseOptions::from_config_file(path)?,
                None => ParseOptions::default(),
            };
            if let Some(dialect) = dialect {
                parse.dialect = dialect;
            }
            if let Some(encoding) = encoding {
                parse.encoding = encoding;
            }
            if let Some(mapping) = map_types {
                parse
                    .type_overrides
                    .extend(TypeOverrides::parse_mapping(&mapping)?);
            }
            if strict {
                parse.strict_references = true;
            }

            let format = OutputFormat::from(format);
            let options = RenderOptions {
                inputs,
                parse,
                format,
            };
            let rendered = render_inputs(&options)?;
            write_output(&rendered, output.as_deref(), format)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn write_output(
    rendered: &[(PathBuf, String)],
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    match output {
        Some(dir) if dir.is_dir() => {
            let extension = match format {
                OutputFormat::Sql => "sql",
                OutputFormat::Xml => "xml",
            };
            for (input, text) in rendered {
                let stem = input.file_stem().unwrap_or(input.as_os_str());
                let target = dir.join(stem).with_extension(extension);
                std::fs::write(&target, text)
                    .with_context(|| format!("Failed to write {}", target.display()))?;
            }
        }
        Some(file) => {
            let joined = join_documents(rendered);
            std::fs::write(file, joined)
                .with_context(|| format!("Failed to write {}", file.display()))?;
        }
        None => print!("{}", join_documents(rendered)),
    }
    Ok(())
}

fn join_documents(rendered: &[(PathBuf, String)]) -> String {
    let mut out = String::new();
    for (_, text) in rendered {
        out.push_str(text);
        if !text.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
