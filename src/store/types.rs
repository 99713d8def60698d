//! Core data types for the indicator store
//!
//! - `DataPoint`: a single (time, value) sample
//! - `EconomicIndicator`: a named metric with its series
//! - `IndicatorId`: the closed set of known identifiers

use serde::{Deserialize, Serialize};

/// A single sample in an indicator's series
///
/// `time` is an ISO date string (`2025-10-01`). It is carried as-is; the
/// store does not parse or validate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    pub time: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(time: impl Into<String>, value: f64) -> Self {
        Self {
            time: time.into(),
            value,
        }
    }
}

/// An economic indicator with its pre-baked trend and time series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EconomicIndicator {
    /// Unique identifier (e.g. `inflacion`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Long-form description shown in the detail view
    pub description: String,
    /// Samples, chronological by convention
    pub data: Vec<DataPoint>,
    /// Unit label (e.g. `%`, `M USD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Percentage change, precomputed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<f64>,
}

impl EconomicIndicator {
    /// Create an indicator with no unit, no trend and an empty series
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            data: Vec::new(),
            unit: None,
            trend: None,
        }
    }

    /// Builder method: set unit
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Builder method: set trend
    pub fn trend(mut self, trend: f64) -> Self {
        self.trend = Some(trend);
        self
    }

    /// Builder method: append a sample
    pub fn point(mut self, time: impl Into<String>, value: f64) -> Self {
        self.data.push(DataPoint::new(time, value));
        self
    }

    /// Most recent value, or 0 when the series is empty
    pub fn latest_value(&self) -> f64 {
        self.data.last().map(|p| p.value).unwrap_or(0.0)
    }
}

/// Known indicator identifiers
///
/// Not every id has a seeded record (`Alquileres` and `Aprobacion` don't).
/// The store is keyed by whatever records are inserted, so nothing here is
/// consulted on lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorId {
    Inflacion,
    CanastaBasica,
    Emae,
    Icc,
    Desempleo,
    Reservas,
    VentasSupermercados,
    ResultadosFiscales,
    Pbi,
    Deuda,
    CriptoPat,
    Alquileres,
    Aprobacion,
}

impl IndicatorId {
    /// All known ids, in declaration order
    pub fn all() -> &'static [IndicatorId] {
        &[
            IndicatorId::Inflacion,
            IndicatorId::CanastaBasica,
            IndicatorId::Emae,
            IndicatorId::Icc,
            IndicatorId::Desempleo,
            IndicatorId::Reservas,
            IndicatorId::VentasSupermercados,
            IndicatorId::ResultadosFiscales,
            IndicatorId::Pbi,
            IndicatorId::Deuda,
            IndicatorId::CriptoPat,
            IndicatorId::Alquileres,
            IndicatorId::Aprobacion,
        ]
    }

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorId::Inflacion => "inflacion",
            IndicatorId::CanastaBasica => "canasta-basica",
            IndicatorId::Emae => "emae",
            IndicatorId::Icc => "icc",
            IndicatorId::Desempleo => "desempleo",
            IndicatorId::Reservas => "reservas",
            IndicatorId::VentasSupermercados => "ventas-supermercados",
            IndicatorId::ResultadosFiscales => "resultados-fiscales",
            IndicatorId::Pbi => "pbi",
            IndicatorId::Deuda => "deuda",
            IndicatorId::CriptoPat => "cripto-pat",
            IndicatorId::Alquileres => "alquileres",
            IndicatorId::Aprobacion => "aprobacion",
        }
    }

    /// Parse a wire identifier
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == s)
    }
}

impl std::fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted() {
        let indicator = EconomicIndicator::new("x", "X", "desc").point("2025-01-01", 1.0);
        let json = serde_json::to_value(&indicator).unwrap();

        assert!(json.get("unit").is_none());
        assert!(json.get("trend").is_none());
        assert_eq!(json["data"][0]["time"], "2025-01-01");
    }

    #[test]
    fn test_deserialize_without_optionals() {
        let json = r#"{"id":"a","name":"A","description":"d","data":[]}"#;
        let indicator: EconomicIndicator = serde_json::from_str(json).unwrap();

        assert_eq!(indicator.unit, None);
        assert_eq!(indicator.trend, None);
        assert!(indicator.data.is_empty());
    }

    #[test]
    fn test_latest_value() {
        let empty = EconomicIndicator::new("a", "A", "d");
        assert_eq!(empty.latest_value(), 0.0);

        let filled = empty.point("2025-01-01", 1.5).point("2025-02-01", 2.5);
        assert_eq!(filled.latest_value(), 2.5);
    }

    #[test]
    fn test_indicator_id_parse() {
        assert_eq!(IndicatorId::parse("cripto-pat"), Some(IndicatorId::CriptoPat));
        assert_eq!(IndicatorId::parse("unknown"), None);
        assert_eq!(IndicatorId::all().len(), 13);
        for id in IndicatorId::all() {
            assert_eq!(IndicatorId::parse(id.as_str()), Some(*id));
        }
    }
}
