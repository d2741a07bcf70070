//! # Endpoint Inspector
//!
//! Command-line tool that resolves endpoint classes described in JSON and
//! prints the resulting invocation plan. Fails with exit code 1 on the first
//! resolution error, so it can gate a build.

use anyhow::{Context, Result};
use callback_resolver::config::{ConfigLoader, ResolverConfig};
use callback_resolver::logging::init_structured_logging;
use callback_resolver::models::{Callback, EndpointClass, EndpointDescriptor};
use callback_resolver::resolution::EndpointAssembler;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "endpoint-inspector")]
#[command(about = "Resolve WebSocket endpoint callbacks and print the invocation plan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// JSON file holding an array of endpoint classes
    endpoints: PathBuf,

    /// Resolver configuration file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn main() {
    let cli = Cli::parse();

    // Without -v the environment decides level and format
    let level = match cli.verbose {
        0 => None,
        1 => Some(Level::INFO),
        2 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    };

    match level {
        Some(level) => {
            let _subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_target(false)
                .try_init();
        }
        None => init_structured_logging(),
    }

    match run(&cli) {
        Ok(count) => {
            info!(endpoints = count, "Endpoint inspection completed successfully");
            process::exit(0);
        }
        Err(e) => {
            error!("Endpoint inspection failed: {:#}", e);
            eprintln!("❌ {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<usize> {
    let config = load_config(cli.config.as_ref())?;

    let raw = std::fs::read_to_string(&cli.endpoints)
        .with_context(|| format!("reading {}", cli.endpoints.display()))?;
    let endpoints: Vec<EndpointClass> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing endpoint classes from {}", cli.endpoints.display()))?;

    let assembler = EndpointAssembler::from_config(&config);
    let descriptors = assembler.assemble_all(&endpoints)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&descriptors)?),
        OutputFormat::Table => descriptors.iter().for_each(print_descriptor),
    }

    Ok(descriptors.len())
}

fn load_config(path: Option<&PathBuf>) -> Result<ResolverConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_file(path),
        None => ConfigLoader::new(),
    };
    loader.load().context("loading resolver configuration")
}

fn print_descriptor(descriptor: &EndpointDescriptor) {
    println!(
        "🔌 {} {} ({:?})",
        descriptor.bean, descriptor.path, descriptor.execution_mode
    );
    if descriptor.callback_count() == 0 {
        println!("   (no callbacks)");
    }
    for callback in descriptor.callbacks() {
        print_callback(callback);
    }
    println!();
}

fn print_callback(callback: &Callback) {
    println!(
        "   @{:<16} {}  [{:?}{}]",
        callback.kind.to_string(),
        callback.description(),
        callback.execution_model,
        if callback.broadcast { ", broadcast" } else { "" }
    );
    if callback.accepts_message() {
        println!(
            "      codecs: in={} out={}",
            callback.input_codec(),
            callback.output_codec()
        );
    }
    for argument in &callback.arguments {
        let name = argument
            .parameter_name
            .clone()
            .unwrap_or_else(|| format!("#{}", argument.position));
        let binding = argument
            .binding
            .as_deref()
            .map(|b| format!(" -> {b}"))
            .unwrap_or_default();
        println!(
            "      {:>2}. {:<12} {:<24} {} ({}){}",
            argument.position,
            name,
            argument.declared_type.to_string(),
            argument.matcher,
            argument.priority,
            binding
        );
    }
}
