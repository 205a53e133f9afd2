//! table-json-schema CLI - convert table column metadata to JSON Schema.

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use table_json_schema::{Config, JsonSchemaDocument, SchemaError};
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "table-json-schema")]
#[command(about = "Convert relational table metadata into JSON Schema documents")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long, default_value = "schema.yaml")]
    config: PathBuf,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "warn")]
    verbosity: String,

    /// Emit single-line JSON instead of pretty-printed output
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one table to a JSON Schema document
    Convert {
        /// Table name as declared in the configuration
        table: String,

        /// Write the document to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert every configured table
    ConvertAll {
        /// Write one <table>.schema.json per table into this directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// List configured tables
    List,

    /// Validate the configuration file
    Validate,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), SchemaError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let config = Config::load(&cli.config)?;
    info!("Loaded configuration from {:?}", cli.config);

    match cli.command {
        Commands::Validate => {
            config.build_converter()?;
            println!(
                "Configuration is valid ({} tables, dialect {})",
                config.tables.len(),
                config.dialect
            );
        }

        Commands::List => {
            for table in config.tables.keys() {
                println!("{}", table);
            }
        }

        Commands::Convert { table, output } => {
            let converter = config.build_converter()?;
            let doc = converter.convert(&table, &config.options)?;
            let rendered = render(&doc, cli.compact)?;
            match output {
                Some(path) => {
                    write_file(&path, &rendered)?;
                    info!("Wrote schema for {} to {:?}", table, path);
                }
                None => println!("{}", rendered),
            }
        }

        Commands::ConvertAll { output_dir } => {
            let converter = config.build_converter()?;

            match output_dir {
                Some(dir) => {
                    std::fs::create_dir_all(&dir)?;
                    for table in config.tables.keys() {
                        let doc = converter.convert(table, &config.options)?;
                        let path = dir.join(format!("{}.schema.json", table));
                        write_file(&path, &render(&doc, cli.compact)?)?;
                        info!("Wrote schema for {} to {:?}", table, path);
                    }
                    println!(
                        "Wrote {} schemas to {}",
                        config.tables.len(),
                        dir.display()
                    );
                }
                None => {
                    let mut all = Map::new();
                    for table in config.tables.keys() {
                        let doc = converter.convert(table, &config.options)?;
                        all.insert(table.clone(), doc.into_value());
                    }
                    let all = Value::Object(all);
                    let rendered = if cli.compact {
                        serde_json::to_string(&all)?
                    } else {
                        serde_json::to_string_pretty(&all)?
                    };
                    println!("{}", rendered);
                }
            }
        }
    }

    Ok(())
}

fn render(doc: &JsonSchemaDocument, compact: bool) -> Result<String, SchemaError> {
    if compact {
        doc.to_json()
    } else {
        doc.to_json_pretty()
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), SchemaError> {
    std::fs::write(path, format!("{}\n", contents))?;
    Ok(())
}

/// Logs go to stderr so stdout only carries documents.
fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
