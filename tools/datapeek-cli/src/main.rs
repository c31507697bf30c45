mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    create_sample::CreateSampleArgs, head::HeadArgs, meta::MetaArgs, query::QueryArgs,
    schema::SchemaArgs, stats::StatsArgs, tail::TailArgs,
};

#[derive(Parser)]
#[command(
    name = "datapeek",
    about = "Inspect Avro and Parquet files and generate random sample data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[command(rename_all = "snake_case")]
enum Commands {
    /// Print the first records of a data file
    Head(HeadArgs),
    /// Print the last records of a data file
    Tail(TailArgs),
    /// Print schema, metadata, codec, and serialized size
    Meta(MetaArgs),
    /// Print schema and metadata
    Schema(SchemaArgs),
    /// Print row count and per-column statistics
    Stats(StatsArgs),
    /// Run a SQL query against a data file
    Query(QueryArgs),
    /// Generate a random sample data file from a schema description
    CreateSample(CreateSampleArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Head(args) => args.run(),
        Commands::Tail(args) => args.run(),
        Commands::Meta(args) => args.run(),
        Commands::Schema(args) => args.run(),
        Commands::Stats(args) => args.run(),
        Commands::Query(args) => args.run(),
        Commands::CreateSample(args) => args.run(),
    }
}
