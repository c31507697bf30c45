use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use datapeek::adapter_for;

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to the data file
    file: PathBuf,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let adapter = adapter_for(&self.file)?;
        let meta = adapter.read_metadata(&self.file)?;
        println!("Schema: {}", meta.schema);
        println!("Metadata: {:?}", meta.metadata);
        Ok(())
    }
}
