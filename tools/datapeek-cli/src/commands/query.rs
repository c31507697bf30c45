use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use datafusion::common::TableReference;
use datafusion::datasource::MemTable;
use datafusion::prelude::SessionContext;
use datapeek::adapter_for;
use datapeek::table::batch_to_records;
use datapeek_core::Value;

#[derive(Args)]
pub struct QueryArgs {
    /// Path to the data file
    file: PathBuf,

    /// SQL statement; the table is registered under the file's name,
    /// extension included (quote it in the query)
    query: String,
}

impl QueryArgs {
    pub fn run(self) -> Result<()> {
        for record in execute(&self.file, &self.query)? {
            println!("{record}");
        }
        Ok(())
    }
}

/// Load the file as an in-memory table, run the SQL, and collect result rows.
///
/// The command owns its tokio runtime; the rest of the CLI stays synchronous.
fn execute(file: &Path, sql: &str) -> Result<Vec<Value>> {
    let adapter = adapter_for(file)?;
    let (schema, batches) = adapter.as_table(file)?;
    let table = MemTable::try_new(schema, vec![batches])?;
    let table_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .context("file path has no UTF-8 file name")?;

    let runtime = tokio::runtime::Runtime::new()?;
    let results = runtime.block_on(async {
        let ctx = SessionContext::new();
        ctx.register_table(TableReference::bare(table_name), Arc::new(table))?;
        ctx.sql(sql).await?.collect().await
    })?;

    let mut records = Vec::new();
    for batch in &results {
        records.extend(batch_to_records(batch)?);
    }
    Ok(records)
}
