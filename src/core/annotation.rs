use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::primitives::ensure_finite;
use crate::error::{ChartError, ChartResult};

/// Highest arrowhead style index accepted by the service.
pub const MAX_ARROWHEAD: u8 = 8;

/// Coordinate frame an annotation position is expressed in.
///
/// Serialized the way the service spells it: `x`, `x2`, `y`, `y3`, `paper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AxisRef {
    X(u32),
    Y(u32),
    Paper,
}

impl AxisRef {
    #[must_use]
    pub fn x() -> Self {
        Self::X(1)
    }

    #[must_use]
    pub fn y() -> Self {
        Self::Y(1)
    }

    /// `x`/`x2`/... or `paper`. Axis indices start at 1.
    fn is_horizontal(self) -> bool {
        match self {
            Self::X(index) => index >= 1,
            Self::Paper => true,
            Self::Y(_) => false,
        }
    }

    /// `y`/`y2`/... or `paper`. Axis indices start at 1.
    fn is_vertical(self) -> bool {
        match self {
            Self::Y(index) => index >= 1,
            Self::Paper => true,
            Self::X(_) => false,
        }
    }
}

impl fmt::Display for AxisRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X(1) => f.write_str("x"),
            Self::Y(1) => f.write_str("y"),
            Self::X(n) => write!(f, "x{n}"),
            Self::Y(n) => write!(f, "y{n}"),
            Self::Paper => f.write_str("paper"),
        }
    }
}

impl FromStr for AxisRef {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "paper" {
            return Ok(Self::Paper);
        }
        let invalid = || ChartError::InvalidData(format!("unknown axis reference `{s}`"));
        let (axis, index) = s.split_at_checked(1).ok_or_else(invalid)?;
        let index = if index.is_empty() {
            1
        } else {
            match index.parse::<u32>() {
                Ok(n) if n >= 2 => n,
                _ => return Err(invalid()),
            }
        };
        match axis {
            "x" => Ok(Self::X(index)),
            "y" => Ok(Self::Y(index)),
            _ => Err(invalid()),
        }
    }
}

impl From<AxisRef> for String {
    fn from(value: AxisRef) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for AxisRef {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Arrow drawn from the label to the annotated point.
///
/// `ax`/`ay` are the label offset from the point in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    pub head: u8,
    pub ax: f64,
    pub ay: f64,
}

impl ArrowStyle {
    #[must_use]
    pub fn new(head: u8, ax: f64, ay: f64) -> Self {
        Self { head, ax, ay }
    }

    fn validate(self) -> ChartResult<Self> {
        if self.head > MAX_ARROWHEAD {
            return Err(ChartError::InvalidData(format!(
                "arrowhead must be in 0..={MAX_ARROWHEAD}, got {}",
                self.head
            )));
        }
        ensure_finite(self.ax, "ax")?;
        ensure_finite(self.ay, "ay")?;
        Ok(self)
    }
}

/// Text label anchored to a point on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    x: f64,
    y: f64,
    #[serde(default = "AxisRef::x")]
    xref: AxisRef,
    #[serde(default = "AxisRef::y")]
    yref: AxisRef,
    text: String,
    #[serde(default = "default_showarrow")]
    showarrow: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    arrowhead: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ay: Option<f64>,
}

fn default_showarrow() -> bool {
    true
}

impl Annotation {
    /// Creates an annotation in data coordinates of the first x/y axes,
    /// with the service's default arrow.
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> ChartResult<Self> {
        Ok(Self {
            x: ensure_finite(x, "annotation x")?,
            y: ensure_finite(y, "annotation y")?,
            xref: AxisRef::x(),
            yref: AxisRef::y(),
            text: text.into(),
            showarrow: default_showarrow(),
            arrowhead: None,
            ax: None,
            ay: None,
        })
    }

    pub fn with_refs(mut self, xref: AxisRef, yref: AxisRef) -> ChartResult<Self> {
        if !xref.is_horizontal() {
            return Err(ChartError::InvalidData(format!(
                "xref must be an x axis or paper, got `{xref}`"
            )));
        }
        if !yref.is_vertical() {
            return Err(ChartError::InvalidData(format!(
                "yref must be a y axis or paper, got `{yref}`"
            )));
        }
        self.xref = xref;
        self.yref = yref;
        Ok(self)
    }

    pub fn with_arrow(mut self, arrow: ArrowStyle) -> ChartResult<Self> {
        let arrow = arrow.validate()?;
        self.showarrow = true;
        self.arrowhead = Some(arrow.head);
        self.ax = Some(arrow.ax);
        self.ay = Some(arrow.ay);
        Ok(self)
    }

    #[must_use]
    pub fn without_arrow(mut self) -> Self {
        self.showarrow = false;
        self.arrowhead = None;
        self.ax = None;
        self.ay = None;
        self
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn refs(&self) -> (AxisRef, AxisRef) {
        (self.xref, self.yref)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn shows_arrow(&self) -> bool {
        self.showarrow
    }

    /// Explicit arrow parameters, if any were set.
    #[must_use]
    pub fn arrow(&self) -> Option<ArrowStyle> {
        Some(ArrowStyle::new(self.arrowhead?, self.ax?, self.ay?))
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(self.x, "annotation x")?;
        ensure_finite(self.y, "annotation y")?;
        if !self.xref.is_horizontal() || !self.yref.is_vertical() {
            return Err(ChartError::InvalidData(format!(
                "annotation references `{}`/`{}` do not name an x/y frame",
                self.xref, self.yref
            )));
        }
        if let Some(head) = self.arrowhead {
            if head > MAX_ARROWHEAD {
                return Err(ChartError::InvalidData(format!(
                    "arrowhead must be in 0..={MAX_ARROWHEAD}, got {head}"
                )));
            }
        }
        for (value, field) in [(self.ax, "ax"), (self.ay, "ay")] {
            if let Some(value) = value {
                ensure_finite(value, field)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_arrow_offset_fails_validation() {
        let mut annotation = Annotation::new(1.0, 1.0, "label")
            .and_then(|a| a.with_arrow(ArrowStyle::new(2, 0.0, -20.0)))
            .expect("annotation");
        annotation.ax = Some(f64::NAN);

        assert!(matches!(
            annotation.validate(),
            Err(ChartError::InvalidData(_))
        ));
    }

    #[test]
    fn zero_axis_index_fails_validation() {
        let mut annotation = Annotation::new(1.0, 1.0, "label").expect("annotation");
        annotation.xref = AxisRef::X(0);

        assert!(annotation.validate().is_err());
    }
}
