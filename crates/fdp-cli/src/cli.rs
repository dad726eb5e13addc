use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fdp_format::Format;

#[derive(Parser)]
#[command(
    name = "fdp",
    about = "FAIR Data Point: build and render a metadata graph",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum RdfFormat {
    #[value(aliases = ["ttl", "text/turtle"])]
    Turtle,
    #[value(aliases = ["nt", "n-triples", "application/n-triples"])]
    Ntriples,
    #[value(aliases = ["json-ld", "application/ld+json"])]
    Jsonld,
}

impl From<RdfFormat> for Format {
    fn from(format: RdfFormat) -> Self {
        match format {
            RdfFormat::Turtle => Format::Turtle,
            RdfFormat::Ntriples => Format::NTriples,
            RdfFormat::Jsonld => Format::JsonLd,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the graph and print one or all partitions
    Build(BuildArgs),
    /// List partition addresses with their statement counts
    Addresses(SourceArgs),
    /// List supported output formats
    Formats,
}

#[derive(Args)]
pub struct SourceArgs {
    /// Builder configuration (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Metadata document (JSON) with `fdp`, `catalogs`, and `datasets`
    #[arg(short, long)]
    pub metadata: PathBuf,
    /// Override the configured base URI
    #[arg(long)]
    pub base: Option<String>,
}

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Output format (defaults to the configured one)
    #[arg(short, long)]
    pub format: Option<RdfFormat>,
    /// Print only this partition
    #[arg(short, long)]
    pub address: Option<String>,
}
