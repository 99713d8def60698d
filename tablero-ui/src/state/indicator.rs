//! Indicator types as served by the API

/// A single sample in an indicator's series
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct DataPoint {
    /// ISO date (`2025-10-01`)
    pub time: String,
    pub value: f64,
}

/// An economic indicator with its series
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct EconomicIndicator {
    pub id: String,
    pub name: String,
    pub description: String,
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub trend: Option<f64>,
}

impl EconomicIndicator {
    /// Last value of the series, 0 when empty
    pub fn current_value(&self) -> f64 {
        self.data.last().map(|p| p.value).unwrap_or(0.0)
    }

    /// Trend percentage, 0 when absent
    pub fn trend_or_zero(&self) -> f64 {
        self.trend.unwrap_or(0.0)
    }
}
