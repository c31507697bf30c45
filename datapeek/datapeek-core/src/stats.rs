//! Column statistics accumulated over a full record scan.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::value::Value;

/// Per-column statistics: row count, null count, and min/max of the observed
/// non-null values under their natural ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStats {
    pub count: u64,
    pub null_count: u64,
    pub min: Option<Value>,
    pub max: Option<Value>,
}

impl ColumnStats {
    /// Fold one observed value into the statistics.
    ///
    /// Min and max are tracked independently with strict comparisons, so ties
    /// keep the first-observed value. Composite values (arrays, maps,
    /// records) have no natural ordering and only contribute to the counts.
    pub fn observe(&mut self, value: &Value) {
        self.count += 1;
        if matches!(value, Value::Null) {
            self.null_count += 1;
            return;
        }
        if natural_cmp(value, value).is_none() {
            // Composite kind: no natural ordering.
            return;
        }
        match &self.min {
            None => self.min = Some(value.clone()),
            Some(min) if natural_cmp(value, min) == Some(Ordering::Less) => {
                self.min = Some(value.clone());
            }
            Some(_) => {}
        }
        match &self.max {
            None => self.max = Some(value.clone()),
            Some(max) if natural_cmp(value, max) == Some(Ordering::Greater) => {
                self.max = Some(value.clone());
            }
            Some(_) => {}
        }
    }
}

/// Natural ordering between two values of the same kind.
///
/// Returns `None` for mismatched kinds and for composites. Floats use total
/// ordering so that a NaN in the data cannot wedge the accumulator.
pub fn natural_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Boolean(x), Value::Boolean(y)) => Some(x.cmp(y)),
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Long(x), Value::Long(y)) => Some(x.cmp(y)),
        (Value::Float(x), Value::Float(y)) => Some(x.total_cmp(y)),
        (Value::Double(x), Value::Double(y)) => Some(x.total_cmp(y)),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bytes(x), Value::Bytes(y)) | (Value::Fixed(x), Value::Fixed(y)) => Some(x.cmp(y)),
        (Value::Enum(_, x), Value::Enum(_, y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// Accumulates [`ColumnStats`] for every column seen across a record stream.
#[derive(Debug, Default)]
pub struct StatsAccumulator {
    rows: u64,
    columns: BTreeMap<String, ColumnStats>,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record's fields into the accumulator.
    pub fn push_row(&mut self, fields: &[(String, Value)]) {
        self.rows += 1;
        for (name, value) in fields {
            self.columns.entry(name.clone()).or_default().observe(value);
        }
    }

    pub fn finish(self) -> (u64, BTreeMap<String, ColumnStats>) {
        (self.rows, self.columns)
    }
}
