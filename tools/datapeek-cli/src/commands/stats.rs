use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use datapeek::adapter_for;
use datapeek_core::Value;

#[derive(Args)]
pub struct StatsArgs {
    /// Path to the data file
    file: PathBuf,
}

impl StatsArgs {
    pub fn run(self) -> Result<()> {
        let adapter = adapter_for(&self.file)?;
        let (rows, columns) = adapter.compute_stats(&self.file)?;
        println!("Rows: {rows}");
        for (name, stats) in &columns {
            println!(
                "{name}: count={} nulls={} min={} max={}",
                stats.count,
                stats.null_count,
                render_bound(&stats.min),
                render_bound(&stats.max),
            );
        }
        Ok(())
    }
}

fn render_bound(bound: &Option<Value>) -> String {
    match bound {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}
