//! Read-only metric snapshots for periodic external sampling.

use std::fmt;

/// A metric value with its declared numeric format.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum MetricValue {
    /// Formatted with two decimals (`4.00`).
    Float(f64),
    /// Formatted as a plain integer.
    Count(u64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Float(v) => write!(f, "{v:.2}"),
            MetricValue::Count(v) => write!(f, "{v}"),
        }
    }
}

/// One named, formatted value of a simulator snapshot.
#[derive(Clone, PartialEq, Debug)]
pub struct Metric {
    pub name:  &'static str,
    pub value: MetricValue,
}

impl Metric {
    pub fn float(name: &'static str, value: f64) -> Self {
        Self { name, value: MetricValue::Float(value) }
    }

    pub fn count(name: &'static str, value: u64) -> Self {
        Self { name, value: MetricValue::Count(value) }
    }
}
