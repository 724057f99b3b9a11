use serde::{Deserialize, Serialize};

use crate::core::primitives::ensure_all_finite;
use crate::error::{ChartError, ChartResult};

/// Trace type as understood by the publishing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    #[default]
    Scatter,
}

/// Drawing mode of a scatter trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// One data series: paired x/y values plus presentation hints.
///
/// Built through [`Trace::scatter`], which guarantees `x.len() == y.len()`
/// and that every value is finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type", default)]
    kind: TraceKind,
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mode: Option<TraceMode>,
}

impl Trace {
    pub fn scatter(x: Vec<f64>, y: Vec<f64>) -> ChartResult<Self> {
        if x.len() != y.len() {
            return Err(ChartError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        ensure_all_finite(&x, "x")?;
        ensure_all_finite(&y, "y")?;

        Ok(Self {
            kind: TraceKind::Scatter,
            x,
            y,
            name: None,
            mode: None,
        })
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: TraceMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn kind(&self) -> TraceKind {
        self.kind
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn mode(&self) -> Option<TraceMode> {
        self.mode
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Re-checks the construction invariants.
    ///
    /// Traces decoded through `serde` bypass [`Trace::scatter`], so the
    /// client runs this before encoding a request.
    pub fn validate(&self) -> ChartResult<()> {
        if self.x.len() != self.y.len() {
            return Err(ChartError::LengthMismatch {
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }
        ensure_all_finite(&self.x, "x")?;
        ensure_all_finite(&self.y, "y")
    }
}
