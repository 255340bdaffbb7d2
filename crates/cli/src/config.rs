use anyhow::{Context, Result};
use hexnav::grid::GridCfg;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Layout settings, loaded from an optional JSON file and overridden by flags.
///
/// Keys are camelCase (`columns`, `scaleUp`, `cornerRadius`); missing keys
/// keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    pub columns: u32,
    pub scale_up: f64,
    pub corner_radius: f64,
}

impl Default for Settings {
    fn default() -> Self {
        let grid = GridCfg::default();
        Self {
            columns: grid.columns(),
            scale_up: grid.scale_up(),
            corner_radius: 6.0,
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw =
            fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn with_overrides(mut self, columns: Option<u32>, scale_up: Option<f64>) -> Self {
        if let Some(c) = columns {
            self.columns = c;
        }
        if let Some(s) = scale_up {
            self.scale_up = s;
        }
        self
    }

    pub fn grid_cfg(&self) -> Result<GridCfg> {
        GridCfg::new(self.columns, self.scale_up).context("invalid grid settings")
    }
}
