use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use datapeek::adapter_for;

#[derive(Args)]
pub struct TailArgs {
    /// Path to the data file
    file: PathBuf,

    /// Number of records to print
    #[arg(short = 'n', long = "records", default_value_t = 20)]
    count: usize,
}

impl TailArgs {
    /// Keeps a bounded window over the scan, so memory stays proportional to
    /// `count` rather than the file's row count.
    pub fn run(self) -> Result<()> {
        if self.count == 0 {
            return Ok(());
        }
        let adapter = adapter_for(&self.file)?;
        let mut window = VecDeque::with_capacity(self.count);
        for record in adapter.iterate_records(&self.file)? {
            if window.len() == self.count {
                window.pop_front();
            }
            window.push_back(record?);
        }
        for record in window {
            println!("{record}");
        }
        Ok(())
    }
}
