use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use datapeek::adapter_for;

#[derive(Args)]
pub struct HeadArgs {
    /// Path to the data file
    file: PathBuf,

    /// Number of records to print
    #[arg(short = 'n', long = "records", default_value_t = 20)]
    count: usize,
}

impl HeadArgs {
    pub fn run(self) -> Result<()> {
        let adapter = adapter_for(&self.file)?;
        for record in adapter.iterate_records(&self.file)?.take(self.count) {
            println!("{}", record?);
        }
        Ok(())
    }
}
