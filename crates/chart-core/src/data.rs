// File: crates/chart-core/src/data.rs
// Summary: Canonical data shapes (bars, points, slices, bins, matrix) and the data bag that carries them.
// Notes:
// - Numeric slots deserialize leniently: anything that is not a JSON number becomes NaN and is
//   filtered by the renderers, so a malformed record never fails a whole request.
// - Labels accept strings, numbers and booleans; anything else reads as blank.
// - A record that is not an object becomes an unusable record in its slot, keeping positions.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Categorical value with an optional per-bar color override (hex string).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    #[serde(default, deserialize_with = "lenient_label")]
    pub label: String,
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub color: Option<String>,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, color: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub x: f64,
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    #[serde(default, deserialize_with = "lenient_label")]
    pub label: String,
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub value: f64,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    #[serde(default, deserialize_with = "lenient_label")]
    pub label: String,
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub frequency: f64,
}

impl Bin {
    pub fn new(label: impl Into<String>, frequency: f64) -> Self {
        Self { label: label.into(), frequency }
    }
}

/// Rows of numeric cells. Rows are expected to share a length; renderers tolerate ragged rows.
pub type Matrix = Vec<Vec<f64>>;

/// Names of the five canonical shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Bars,
    Points,
    Slices,
    Bins,
    Matrix,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Bars,
        ShapeKind::Points,
        ShapeKind::Slices,
        ShapeKind::Bins,
        ShapeKind::Matrix,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Bars => "bars",
            ShapeKind::Points => "points",
            ShapeKind::Slices => "slices",
            ShapeKind::Bins => "bins",
            ShapeKind::Matrix => "matrix",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Bag holding zero or more canonical shapes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataBag {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_records")]
    pub bars: Option<Vec<BarDatum>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_records")]
    pub points: Option<Vec<Point>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_records")]
    pub slices: Option<Vec<Slice>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_records")]
    pub bins: Option<Vec<Bin>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_matrix")]
    pub matrix: Option<Matrix>,
}

impl DataBag {
    pub fn new() -> Self { Self::default() }

    pub fn with_bars(mut self, bars: Vec<BarDatum>) -> Self { self.bars = Some(bars); self }
    pub fn with_points(mut self, points: Vec<Point>) -> Self { self.points = Some(points); self }
    pub fn with_slices(mut self, slices: Vec<Slice>) -> Self { self.slices = Some(slices); self }
    pub fn with_bins(mut self, bins: Vec<Bin>) -> Self { self.bins = Some(bins); self }
    pub fn with_matrix(mut self, matrix: Matrix) -> Self { self.matrix = Some(matrix); self }

    /// Whether `shape` is present (an empty sequence still counts as present).
    pub fn has(&self, shape: ShapeKind) -> bool {
        match shape {
            ShapeKind::Bars => self.bars.is_some(),
            ShapeKind::Points => self.points.is_some(),
            ShapeKind::Slices => self.slices.is_some(),
            ShapeKind::Bins => self.bins.is_some(),
            ShapeKind::Matrix => self.matrix.is_some(),
        }
    }

    pub fn present_shapes(&self) -> Vec<ShapeKind> {
        ShapeKind::ALL.into_iter().filter(|s| self.has(*s)).collect()
    }

    pub fn is_empty(&self) -> bool { self.present_shapes().is_empty() }

    /// Record count of `shape`, or `None` when absent. Matrix counts cells.
    pub fn len_of(&self, shape: ShapeKind) -> Option<usize> {
        match shape {
            ShapeKind::Bars => self.bars.as_ref().map(Vec::len),
            ShapeKind::Points => self.points.as_ref().map(Vec::len),
            ShapeKind::Slices => self.slices.as_ref().map(Vec::len),
            ShapeKind::Bins => self.bins.as_ref().map(Vec::len),
            ShapeKind::Matrix => self.matrix.as_ref().map(|m| m.iter().map(Vec::len).sum()),
        }
    }

    /// Records across every present shape. Matrix counts cells.
    pub fn record_count(&self) -> usize {
        ShapeKind::ALL.into_iter().filter_map(|s| self.len_of(s)).sum()
    }

    /// Parse a bag from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

fn nan() -> f64 { f64::NAN }

fn number_or_nan(v: &Value) -> f64 {
    match v {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn lenient_number<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(de)?;
    Ok(number_or_nan(&v))
}

fn lenient_label<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_color<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Record that carries no usable value; stands in for malformed entries.
trait Unusable {
    fn unusable() -> Self;
}

impl Unusable for BarDatum {
    fn unusable() -> Self { Self::new("", f64::NAN) }
}

impl Unusable for Point {
    fn unusable() -> Self { Self::new(f64::NAN, f64::NAN) }
}

impl Unusable for Slice {
    fn unusable() -> Self { Self::new("", f64::NAN) }
}

impl Unusable for Bin {
    fn unusable() -> Self { Self::new("", f64::NAN) }
}

fn lenient_records<'de, D, T>(de: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Unusable,
{
    let raw: Option<Value> = Option::deserialize(de)?;
    Ok(raw.map(|v| match v {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(_) => serde_json::from_value(item).unwrap_or_else(|_| T::unusable()),
                _ => T::unusable(),
            })
            .collect(),
        _ => Vec::new(),
    }))
}

fn lenient_matrix<'de, D>(de: D) -> Result<Option<Matrix>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(de)?;
    Ok(raw.map(|v| match v {
        Value::Array(rows) => rows
            .iter()
            .map(|row| match row {
                Value::Array(cells) => cells.iter().map(number_or_nan).collect(),
                _ => Vec::new(),
            })
            .collect(),
        _ => Vec::new(),
    }))
}
