use std::{path::Path, time::Duration};

use crate::foundation::error::{MasonryError, MasonryResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Engine configuration: the container/width/column tuple plus reflow options.
///
/// Serialized as JSON; optional fields fall back to the defaults documented below.
pub struct MasonryConfig {
    /// Container identifier resolved through the rendering surface.
    pub container: String,
    /// Reference width at which the layout has `initial_columns` columns.
    pub perfect_width: f64,
    /// Column count at the reference width.
    pub initial_columns: u32,
    /// Delay between a resize and the packing pass, in milliseconds.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Transition duration hint applied to every item, in milliseconds.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Shuffle the packing order on every invocation after the first.
    #[serde(default)]
    pub randomize_order: bool,
    /// Seed for the shuffle generator.
    #[serde(default)]
    pub seed: u64,
    /// Cancel superseded pending passes when a new resize arrives.
    #[serde(default = "default_coalesce")]
    pub coalesce: bool,
}

fn default_settle_delay_ms() -> u64 {
    500
}

fn default_transition_ms() -> u64 {
    500
}

fn default_coalesce() -> bool {
    true
}

impl MasonryConfig {
    /// Config with default reflow options.
    pub fn new(container: impl Into<String>, perfect_width: f64, initial_columns: u32) -> Self {
        Self {
            container: container.into(),
            perfect_width,
            initial_columns,
            settle_delay_ms: default_settle_delay_ms(),
            transition_ms: default_transition_ms(),
            randomize_order: false,
            seed: 0,
            coalesce: default_coalesce(),
        }
    }

    /// Parse a JSON config and validate it.
    pub fn from_json_str(s: &str) -> MasonryResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| MasonryError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> MasonryResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            MasonryError::Other(
                anyhow::Error::new(e).context(format!("read config '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&s)
    }

    /// Check field constraints.
    pub fn validate(&self) -> MasonryResult<()> {
        if self.container.trim().trim_start_matches('#').is_empty() {
            return Err(MasonryError::validation("container must be non-empty"));
        }
        if !self.perfect_width.is_finite() || self.perfect_width <= 0.0 {
            return Err(MasonryError::validation(
                "perfect_width must be finite and > 0",
            ));
        }
        if self.initial_columns == 0 {
            return Err(MasonryError::validation("initial_columns must be >= 1"));
        }
        Ok(())
    }

    /// Settle delay as a [`Duration`].
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Transition hint as a [`Duration`].
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
