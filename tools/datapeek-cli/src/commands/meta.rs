use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use datapeek::adapter_for;

#[derive(Args)]
pub struct MetaArgs {
    /// Path to the data file
    file: PathBuf,
}

impl MetaArgs {
    pub fn run(self) -> Result<()> {
        let adapter = adapter_for(&self.file)?;
        println!("{}", adapter.read_metadata(&self.file)?);
        Ok(())
    }
}
