use serde::{Deserialize, Serialize};

use crate::core::{Layout, Trace};
use crate::error::{ChartError, ChartResult};

/// Complete chart description: ordered traces plus a layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    #[serde(default)]
    pub layout: Layout,
}

impl Figure {
    #[must_use]
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    #[must_use]
    pub fn traces(&self) -> &[Trace] {
        &self.data
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn validate(&self) -> ChartResult<()> {
        for trace in &self.data {
            trace.validate()?;
        }
        self.layout.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize figure: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let figure: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse figure json: {e}"))
        })?;
        figure.validate()?;
        Ok(figure)
    }
}
