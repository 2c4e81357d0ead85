// File: crates/dashboard/src/summary.rs
// Summary: Crime Count Summary record served by `/api/total` and its chart dataset.

use chart_core::ChartData;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaError;
use crate::payload::decode;

/// Category labels of the totals chart, in drawing order.
pub const TOTAL_LABELS: [&str; 2] = ["Non Criminal", "Criminal"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrimeCountSummary {
    pub non_criminal_count: u64,
    pub criminal_count: u64,
}

impl CrimeCountSummary {
    pub fn new(non_criminal_count: u64, criminal_count: u64) -> Self {
        Self { non_criminal_count, criminal_count }
    }

    /// Decode the `/api/total` body. Both counts must be present and fit a `u64`;
    /// extra fields are ignored.
    pub fn from_json(v: &Value) -> Result<Self, SchemaError> {
        decode(v)
    }

    pub fn total(&self) -> u64 {
        self.non_criminal_count.saturating_add(self.criminal_count)
    }

    /// One series, two categories: non-criminal first, criminal second.
    pub fn to_chart_data(&self) -> ChartData {
        ChartData::single(
            TOTAL_LABELS,
            vec![self.non_criminal_count as f64, self.criminal_count as f64],
        )
    }
}

impl TryFrom<&Value> for CrimeCountSummary {
    type Error = SchemaError;

    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        Self::from_json(v)
    }
}
