use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// What the service does when a chart with the same filename exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOpt {
    #[default]
    Overwrite,
    New,
    Extend,
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishOptions {
    pub filename: String,
    #[serde(default)]
    pub auto_open: bool,
    #[serde(default)]
    pub fileopt: FileOpt,
    #[serde(default = "default_world_readable")]
    pub world_readable: bool,
}

fn default_world_readable() -> bool {
    true
}

impl PublishOptions {
    /// Public chart that overwrites `filename` and is not opened locally.
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            auto_open: false,
            fileopt: FileOpt::default(),
            world_readable: default_world_readable(),
        }
    }

    #[must_use]
    pub fn with_auto_open(mut self, auto_open: bool) -> Self {
        self.auto_open = auto_open;
        self
    }

    #[must_use]
    pub fn with_fileopt(mut self, fileopt: FileOpt) -> Self {
        self.fileopt = fileopt;
        self
    }

    #[must_use]
    pub fn with_world_readable(mut self, world_readable: bool) -> Self {
        self.world_readable = world_readable;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.filename.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "publish filename must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
