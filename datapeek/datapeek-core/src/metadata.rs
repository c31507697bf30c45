//! File metadata returned by the inspection read path.

use std::collections::BTreeMap;
use std::fmt;

/// Header/footer information of a serialized data file.
///
/// Ephemeral: produced for one inspection command and discarded. The schema
/// is carried as rendered text because each container format has its own
/// schema object model.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    pub schema: String,
    pub metadata: BTreeMap<String, String>,
    pub codec: String,
    pub size_bytes: u64,
}

impl fmt::Display for FileMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Schema: {}", self.schema)?;
        writeln!(f, "Metadata: {:?}", self.metadata)?;
        writeln!(f, "Codec: {}", self.codec)?;
        write!(f, "Serialized size: {}", self.size_bytes)
    }
}
