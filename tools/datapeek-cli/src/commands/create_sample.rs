use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use datapeek::adapter_for;
use datapeek_core::build_dataset;

#[derive(Args)]
pub struct CreateSampleArgs {
    /// Path to a JSON file holding an Avro-syntax schema description
    schema_path: PathBuf,

    /// Number of records to generate
    sample_size: usize,

    /// Output file; the extension selects the format
    file_path: PathBuf,

    /// Compression codec (defaults to the format's conventional codec)
    #[arg(long)]
    codec: Option<String>,
}

impl CreateSampleArgs {
    /// The dataset is built fully in memory before the output file is
    /// created, so a generation failure leaves nothing behind.
    pub fn run(self) -> Result<()> {
        let adapter = adapter_for(&self.file_path)?;
        let text = fs::read_to_string(&self.schema_path).with_context(|| {
            format!("failed to read schema file '{}'", self.schema_path.display())
        })?;
        let schema = adapter.parse_schema(&text)?;

        let mut rng = rand::rng();
        let dataset = build_dataset(&mut rng, &schema, self.sample_size)?;

        let codec = self
            .codec
            .as_deref()
            .unwrap_or_else(|| adapter.default_codec());
        let metadata = BTreeMap::from([("Name".to_string(), "Dummy data".to_string())]);
        adapter.write(&self.file_path, &schema, &dataset, codec, &metadata)?;

        println!(
            "Wrote {} records to {}",
            dataset.len(),
            self.file_path.display()
        );
        Ok(())
    }
}
