//! Sample dataset building: repeated, independent record generation.

use rand::Rng;

use crate::error::GenerateError;
use crate::generate::generate_value;
use crate::schema::SchemaNode;
use crate::value::Value;

/// Generate `count` independent records conforming to `root`.
///
/// `root` must be a record schema. A count of zero yields an empty dataset.
/// The dataset is built fully in memory so that a generation failure never
/// leaves a half-written output file behind.
pub fn build_dataset<R: Rng + ?Sized>(
    rng: &mut R,
    root: &SchemaNode,
    count: usize,
) -> Result<Vec<Value>, GenerateError> {
    if !root.is_record() {
        return Err(GenerateError::NonRecordRoot { kind: root.kind() });
    }
    (0..count).map(|_| generate_value(rng, root)).collect()
}
