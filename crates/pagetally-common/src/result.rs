use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::types::InputKind;

/// Summary produced by one aggregation.
///
/// `average`, `min` and `max` are `Some` exactly when `count > 0`. `total` is
/// an `i128` so the sum of valid `i64` records never overflows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AggregationResult {
    pub total: i128,
    pub count: u64,
    pub average: Option<OrderedFloat<f64>>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub skipped_nulls: u64,
    pub skipped_invalid: u64,
    pub input: InputKind,
}

impl AggregationResult {
    /// The zero result for an absent or zero-length collection.
    pub fn null_or_empty(input: InputKind) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    pub fn average(&self) -> Option<f64> {
        self.average.map(|a| a.into_inner())
    }

    pub fn is_null_or_empty(&self) -> bool {
        self.input.is_null_or_empty()
    }

    pub fn skipped(&self) -> u64 {
        self.skipped_nulls + self.skipped_invalid
    }

    pub fn to_json(&self) -> JsonValue {
        serde_json::json!({
            "total": self.total_json(),
            "count": self.count,
            "average": self.average(),
            "min": self.min,
            "max": self.max,
            "skipped_nulls": self.skipped_nulls,
            "skipped_invalid": self.skipped_invalid,
            "null_or_empty": self.is_null_or_empty(),
        })
    }

    // JSON numbers stop at the u64 range; larger totals are written as strings.
    fn total_json(&self) -> JsonValue {
        u64::try_from(self.total)
            .map(JsonValue::from)
            .unwrap_or_else(|_| JsonValue::String(self.total.to_string()))
    }
}
