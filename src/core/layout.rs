use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Annotation;
use crate::error::{ChartError, ChartResult};

/// Layout keys modeled by typed fields; these cannot be set through
/// [`Layout::with_attribute`].
const TYPED_LAYOUT_KEYS: &[&str] = &[
    "title",
    "font",
    "showlegend",
    "xaxis",
    "yaxis",
    "annotations",
];

/// Font specification. Unset fields fall back to the service defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Font {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Font {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(size) = self.size {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "font size must be finite and > 0, got {size}"
                )));
            }
        }
        Ok(())
    }
}

/// Where axis ticks are drawn. `Hidden` serializes as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickPlacement {
    #[serde(rename = "")]
    Hidden,
    #[serde(rename = "inside")]
    Inside,
    #[serde(rename = "outside")]
    Outside,
}

/// Per-axis presentation switches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autorange: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autotick: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickPlacement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
}

impl Axis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Autoranged axis with grid, zero line, axis line, ticks and tick
    /// labels all switched off.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            title: None,
            autorange: Some(true),
            showgrid: Some(false),
            zeroline: Some(false),
            showline: Some(false),
            autotick: Some(true),
            ticks: Some(TickPlacement::Hidden),
            showticklabels: Some(false),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_autorange(mut self, autorange: bool) -> Self {
        self.autorange = Some(autorange);
        self
    }

    #[must_use]
    pub fn with_showgrid(mut self, showgrid: bool) -> Self {
        self.showgrid = Some(showgrid);
        self
    }

    #[must_use]
    pub fn with_zeroline(mut self, zeroline: bool) -> Self {
        self.zeroline = Some(zeroline);
        self
    }

    #[must_use]
    pub fn with_showline(mut self, showline: bool) -> Self {
        self.showline = Some(showline);
        self
    }

    #[must_use]
    pub fn with_autotick(mut self, autotick: bool) -> Self {
        self.autotick = Some(autotick);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TickPlacement) -> Self {
        self.ticks = Some(ticks);
        self
    }

    #[must_use]
    pub fn with_showticklabels(mut self, showticklabels: bool) -> Self {
        self.showticklabels = Some(showticklabels);
        self
    }
}

/// Chart-wide presentation settings.
///
/// An empty annotation list is skipped on serialization, so
/// `Layout::new().with_annotations(vec![])` and `Layout::new()` produce the
/// same payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Service attributes without a typed field, passed through verbatim in
    /// insertion order.
    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    #[must_use]
    pub fn with_showlegend(mut self, showlegend: bool) -> Self {
        self.showlegend = Some(showlegend);
        self
    }

    #[must_use]
    pub fn with_xaxis(mut self, axis: Axis) -> Self {
        self.xaxis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_yaxis(mut self, axis: Axis) -> Self {
        self.yaxis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn push_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Sets an untyped layout attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> ChartResult<Self> {
        let key = key.into();
        if TYPED_LAYOUT_KEYS.contains(&key.as_str()) {
            return Err(ChartError::InvalidData(format!(
                "layout attribute `{key}` has a typed setter"
            )));
        }
        self.extra.insert(key, value);
        Ok(self)
    }

    /// Untyped attributes in insertion order.
    #[must_use]
    pub fn extra(&self) -> &IndexMap<String, Value> {
        &self.extra
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(key) = self
            .extra
            .keys()
            .find(|key| TYPED_LAYOUT_KEYS.contains(&key.as_str()))
        {
            return Err(ChartError::InvalidData(format!(
                "layout attribute `{key}` duplicates a typed field"
            )));
        }
        if let Some(font) = &self.font {
            font.validate()?;
        }
        for annotation in &self.annotations {
            annotation.validate()?;
        }
        Ok(())
    }
}
