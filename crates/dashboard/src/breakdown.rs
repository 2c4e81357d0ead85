// File: crates/dashboard/src/breakdown.rs
// Summary: Per-month / per-year / per-nature bucket counts and their single-series chart datasets.

use std::fmt;
use std::str::FromStr;

use chart_core::ChartData;
use serde::Deserialize;
use serde_json::Value;

use crate::error::SchemaError;
use crate::payload::decode;

/// Which of the two crime logs a chart is drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogKind {
    #[default]
    Criminal,
    NonCriminal,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogKind::Criminal => "criminal",
            LogKind::NonCriminal => "non-criminal",
        })
    }
}

impl FromStr for LogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "criminal" => Ok(LogKind::Criminal),
            "non-criminal" | "noncriminal" => Ok(LogKind::NonCriminal),
            other => Err(format!("unknown log `{other}` (expected criminal or non-criminal)")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakdownKind {
    Month,
    Year,
    Nature,
}

impl BreakdownKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            BreakdownKind::Month => "/api/by_month",
            BreakdownKind::Year => "/api/by_year",
            BreakdownKind::Nature => "/api/by_nature",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BucketKey {
    Month(u8),
    Year(u32),
    Nature(String),
}

impl BucketKey {
    pub fn label(&self) -> String {
        match self {
            BucketKey::Month(m) => month_abbrev(*m),
            BucketKey::Year(y) => y.to_string(),
            BucketKey::Nature(n) => n.clone(),
        }
    }
}

fn month_abbrev(m: u8) -> String {
    chrono::Month::try_from(m)
        .map(|m| m.name()[..3].to_string())
        .unwrap_or_else(|_| m.to_string())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub key: BucketKey,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakdown {
    pub kind: BreakdownKind,
    pub criminal: Vec<Bucket>,
    pub non_criminal: Vec<Bucket>,
}

impl Breakdown {
    pub fn from_json(kind: BreakdownKind, v: &Value) -> Result<Self, SchemaError> {
        let (criminal, non_criminal) = match kind {
            BreakdownKind::Month => {
                let p: MonthPayload = decode(v)?;
                (months(p.criminal_by_month)?, months(p.non_criminal_by_month)?)
            }
            BreakdownKind::Year => {
                let p: YearPayload = decode(v)?;
                (years(p.criminal_by_year), years(p.non_criminal_by_year))
            }
            BreakdownKind::Nature => {
                let p: NaturePayload = decode(v)?;
                (natures(p.criminal_by_nature), natures(p.non_criminal_by_nature))
            }
        };
        Ok(Self { kind, criminal, non_criminal })
    }

    pub fn buckets(&self, log: LogKind) -> &[Bucket] {
        match log {
            LogKind::Criminal => &self.criminal,
            LogKind::NonCriminal => &self.non_criminal,
        }
    }

    /// Single-series dataset for one log, ordered by key for months and
    /// years and by count (largest first) for natures.
    pub fn to_chart_data(&self, log: LogKind) -> ChartData {
        let mut buckets = self.buckets(log).to_vec();
        match self.kind {
            BreakdownKind::Month | BreakdownKind::Year => buckets.sort_by_key(|b| match b.key {
                BucketKey::Month(k) => u32::from(k),
                BucketKey::Year(k) => k,
                BucketKey::Nature(_) => 0,
            }),
            BreakdownKind::Nature => {
                buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.label().cmp(&b.key.label())))
            }
        }
        let labels = buckets.iter().map(|b| b.key.label()).collect::<Vec<_>>();
        let values = buckets.iter().map(|b| b.count as f64).collect();
        ChartData::single(labels, values)
    }
}

// ---- wire payloads ----------------------------------------------------------

#[derive(Debug, Deserialize)]
struct MonthBucket {
    month: u8,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct YearBucket {
    year: u32,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct NatureBucket {
    nature: String,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct MonthPayload {
    criminal_by_month: Vec<MonthBucket>,
    non_criminal_by_month: Vec<MonthBucket>,
}

#[derive(Debug, Deserialize)]
struct YearPayload {
    criminal_by_year: Vec<YearBucket>,
    non_criminal_by_year: Vec<YearBucket>,
}

/// The backend publishes nature buckets under the `_by_month` keys.
#[derive(Debug, Deserialize)]
struct NaturePayload {
    #[serde(alias = "criminal_by_month")]
    criminal_by_nature: Vec<NatureBucket>,
    #[serde(alias = "non_criminal_by_month")]
    non_criminal_by_nature: Vec<NatureBucket>,
}

fn months(items: Vec<MonthBucket>) -> Result<Vec<Bucket>, SchemaError> {
    items
        .into_iter()
        .map(|b| {
            if !(1..=12).contains(&b.month) {
                return Err(SchemaError::MonthOutOfRange(b.month));
            }
            Ok(Bucket { key: BucketKey::Month(b.month), count: b.count })
        })
        .collect()
}

fn years(items: Vec<YearBucket>) -> Vec<Bucket> {
    items.into_iter().map(|b| Bucket { key: BucketKey::Year(b.year), count: b.count }).collect()
}

fn natures(items: Vec<NatureBucket>) -> Vec<Bucket> {
    items.into_iter().map(|b| Bucket { key: BucketKey::Nature(b.nature), count: b.count }).collect()
}
