//! Runtime configuration
//!
//! There is no config file: every invocation starts from compiled-in
//! defaults, and `sinkctl` can override the control tool on the command line.

use color_eyre::eyre::{self, Result};

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Control tool to execute (`pactl` or a compatible replacement)
    pub pactl: String,
    pub labels: Labels,
}

/// Fixed strings and glyphs used in the status-bar output
#[derive(Debug, Clone)]
pub struct Labels {
    pub tooltip: String,
    /// Display name when nothing is playing
    pub inactive_name: String,
    /// CSS class emitted while muted
    pub muted_class: String,
    pub glyph_high: String,
    pub glyph_low: String,
    pub glyph_muted: String,
    pub glyph_inactive: String,
    /// Volumes strictly above this use [`Labels::glyph_high`]
    pub high_volume_threshold: u32,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            tooltip: "Click to cycle audio outputs".to_string(),
            inactive_name: "No active streams".to_string(),
            muted_class: "muted".to_string(),
            glyph_high: "󰕾".to_string(),
            glyph_low: "󰕿".to_string(),
            glyph_muted: "󰖁".to_string(),
            glyph_inactive: "󰋎".to_string(),
            high_volume_threshold: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pactl: "pactl".to_string(),
            labels: Labels::default(),
        }
    }
}

impl Config {
    /// Defaults, with the control tool optionally overridden
    ///
    /// # Errors
    /// Returns an error if the resulting configuration is invalid.
    pub fn load(pactl: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(program) = pactl {
            config.pactl = program.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.pactl.trim().is_empty() {
            eyre::bail!("Control tool path is empty. Pass --pactl <PATH> or omit it to use 'pactl'");
        }
        Ok(())
    }

    /// Glyph for an unmuted volume level
    #[must_use]
    pub fn volume_glyph(&self, volume_percent: u32) -> &str {
        if volume_percent > self.labels.high_volume_threshold {
            &self.labels.glyph_high
        } else {
            &self.labels.glyph_low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.pactl, "pactl");
        assert_eq!(config.labels.tooltip, "Click to cycle audio outputs");
    }

    #[test]
    fn test_load_override() {
        let config = Config::load(Some("/usr/local/bin/pactl")).unwrap();
        assert_eq!(config.pactl, "/usr/local/bin/pactl");
    }

    #[test]
    fn test_load_rejects_empty_tool() {
        let err = Config::load(Some("  ")).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_volume_glyph_threshold() {
        let config = Config::default();
        assert_eq!(config.volume_glyph(51), "󰕾");
        assert_eq!(config.volume_glyph(50), "󰕿");
        assert_eq!(config.volume_glyph(0), "󰕿");
    }
}
