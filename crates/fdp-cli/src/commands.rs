use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use fdp_builder::{BuilderConfig, FairGraph};
use fdp_format::Format;
use fdp_graph::GraphStore;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::cli::*;

/// A metadata file: one record per build call.
#[derive(Debug, Deserialize)]
pub struct MetadataDocument {
    pub fdp: Value,
    #[serde(default)]
    pub catalogs: Option<Value>,
    #[serde(default)]
    pub datasets: Option<Value>,
}

impl MetadataDocument {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read metadata file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("{} is not a valid metadata document", path.display()))
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Build(args) => cmd_build(args),
        Command::Addresses(args) => cmd_addresses(args),
        Command::Formats => cmd_formats(),
    }
}

/// Load configuration and metadata, then run the three build calls.
pub fn load_graph(source: &SourceArgs) -> anyhow::Result<FairGraph> {
    let mut config = match &source.config {
        Some(path) => BuilderConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BuilderConfig::default(),
    };
    if let Some(base) = &source.base {
        config.base_uri = base.clone();
    }

    let document = MetadataDocument::load(&source.metadata)?;
    let mut graph = FairGraph::with_config(config)?;

    graph
        .build_publishing_point(&document.fdp)
        .context("building publishing point")?;
    if let Some(catalogs) = &document.catalogs {
        graph.build_catalogs(catalogs).context("building catalogs")?;
    }
    if let Some(datasets) = &document.datasets {
        graph
            .build_datasets_and_distributions(datasets)
            .context("building datasets")?;
    }

    info!(
        partitions = graph.addresses()?.len(),
        base = graph.uris().base_address(),
        "graph built"
    );
    Ok(graph)
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let graph = load_graph(&args.source)?;
    let format = args
        .format
        .map(Format::from)
        .unwrap_or(graph.config().default_format);
    let mut stdout = std::io::stdout().lock();

    if let Some(address) = &args.address {
        match graph.serialize_as(address, format)? {
            Some(bytes) => stdout.write_all(&bytes)?,
            None => bail!("nothing to show for {address}"),
        }
        return Ok(());
    }

    let mut first = true;
    for address in graph.addresses()? {
        let Some(bytes) = graph.serialize_as(&address, format)? else {
            continue;
        };
        if !first {
            writeln!(stdout)?;
        }
        first = false;
        eprintln!("{} {}", "==>".dimmed(), address.cyan());
        stdout.write_all(&bytes)?;
    }
    Ok(())
}

fn cmd_addresses(args: SourceArgs) -> anyhow::Result<()> {
    let graph = load_graph(&args)?;
    for address in graph.addresses()? {
        let count = graph.store().statement_count(&address)?;
        let kind = graph
            .uris()
            .parse_address(&address)
            .map_or("-", |(kind, _)| kind.as_str());
        println!(
            "{:>4}  {:<12} {}",
            count.to_string().bold(),
            kind.yellow(),
            address
        );
    }
    Ok(())
}

fn cmd_formats() -> anyhow::Result<()> {
    for format in Format::ALL {
        println!(
            "{:<22} .{:<7} {}",
            format.mime_type().green(),
            format.extension(),
            format.tokens().join(", ").dimmed()
        );
    }
    Ok(())
}
