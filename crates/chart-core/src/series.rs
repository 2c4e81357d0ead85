// File: crates/chart-core/src/series.rs
// Summary: Categorical chart data: labels along X and one or more value series.
// Notes:
// - Series values are index-aligned with `ChartData::labels`; `validate`
//   enforces that before anything is laid out.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("series {index} has {got} values but there are {expected} labels")]
    LengthMismatch { index: usize, expected: usize, got: usize },
    #[error("series {index} contains a non-finite value at position {position}")]
    NonFinite { index: usize, position: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: Option<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { name: None, values }
    }

    pub fn named(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: Some(name.into()), values }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartData {
    pub fn new(labels: Vec<String>, series: Vec<Series>) -> Self {
        Self { labels, series }
    }

    /// One unnamed series over `labels`.
    pub fn single<L, I>(labels: I, values: Vec<f64>) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            series: vec![Series::new(values)],
        }
    }

    pub fn category_count(&self) -> usize { self.labels.len() }

    /// Raw values as nested vectors, one per series.
    pub fn values(&self) -> Vec<Vec<f64>> {
        self.series.iter().map(|s| s.values.clone()).collect()
    }

    pub fn validate(&self) -> Result<(), DataError> {
        let expected = self.labels.len();
        for (index, s) in self.series.iter().enumerate() {
            if s.values.len() != expected {
                return Err(DataError::LengthMismatch { index, expected, got: s.values.len() });
            }
            if let Some(position) = s.values.iter().position(|v| !v.is_finite()) {
                return Err(DataError::NonFinite { index, position });
            }
        }
        Ok(())
    }

    /// Value range to plot. Always includes zero so bars grow from the axis;
    /// an all-zero (or empty) dataset gets a unit range.
    pub fn value_bounds(&self) -> (f64, f64) {
        let mut low = 0.0f64;
        let mut high = 0.0f64;
        for v in self.series.iter().flat_map(|s| s.values.iter().copied()) {
            if !v.is_finite() { continue; }
            low = low.min(v);
            high = high.max(v);
        }
        if (high - low).abs() < f64::EPSILON {
            high = low + 1.0;
        }
        (low, high)
    }
}
