/// CLI: reads an ESTree JSON AST from a file or stdin, writes source text.
///
/// Usage:
///   tsgen ast.json                  > out.ts
///   tsgen --dialect js < ast.json   > out.js
///   tsgen --tabs --crlf ast.json -o out.ts
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tsgen::{GenerateOptions, Generator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Dialect {
    /// JavaScript with type annotations, interfaces, enums and decorators
    Ts,
    /// Plain JavaScript
    Js,
}

#[derive(Debug, Parser)]
#[command(name = "tsgen", version, about = "Generate source text from an ESTree JSON AST")]
struct Cli {
    /// ESTree JSON file; reads stdin when absent
    input: Option<PathBuf>,

    /// Grammar to generate
    #[arg(long, value_enum, default_value_t = Dialect::Ts)]
    dialect: Dialect,

    /// JSON file with layout options (indent, lineEnd, startingIndentLevel)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Indent with N spaces
    #[arg(long, value_name = "N", conflicts_with = "tabs")]
    indent: Option<usize>,

    /// Indent with tabs
    #[arg(long)]
    tabs: bool,

    /// End lines with \r\n
    #[arg(long)]
    crlf: bool,

    /// Output file; writes stdout when absent
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    /// Options from the config file, then the layout flags on top.
    fn options(&self) -> Result<GenerateOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read config {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?
            }
            None => GenerateOptions::default(),
        };
        if let Some(width) = self.indent {
            options.indent = " ".repeat(width);
        }
        if self.tabs {
            options.indent = "\t".into();
        }
        if self.crlf {
            options.line_end = "\r\n".into();
        }
        Ok(options)
    }
}

/// `TSGEN_LOG` wins over `RUST_LOG`; logs go to stderr.
fn init_tracing() {
    let filter = match std::env::var("TSGEN_LOG") {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let generator = match cli.dialect {
        Dialect::Ts => Generator::typescript(),
        Dialect::Js => Generator::javascript(),
    }
    .with_options(cli.options()?);

    let text = read_input(cli.input.as_ref())?;
    let source = generator.generate_json(&text).context("generation failed")?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, source).with_context(|| format!("cannot write {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(source.as_bytes()).context("cannot write stdout")?;
            stdout.flush().context("cannot write stdout")?;
        }
    }
    Ok(())
}
