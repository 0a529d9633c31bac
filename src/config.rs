use crate::models::types::TemplateId;
use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Valuation tuning, loaded once at startup into an immutable snapshot and
/// passed into the services at construction time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub correction: CorrectionConfig,

    /// Per-template override factors; absent entries read as 1
    #[serde(default)]
    pub multipliers: HashMap<TemplateId, f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorrectionConfig {
    /// Relative deviation between baseline and market average beyond which
    /// the baseline is considered stale
    #[serde(default = "default_deviation_threshold")]
    pub deviation_threshold: f64,

    /// Lower bound of the re-randomization band around the market average
    #[serde(default = "default_band_low")]
    pub band_low: f64,

    /// Upper bound of the re-randomization band
    #[serde(default = "default_band_high")]
    pub band_high: f64,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            deviation_threshold: default_deviation_threshold(),
            band_low: default_band_low(),
            band_high: default_band_high(),
        }
    }
}

fn default_deviation_threshold() -> f64 {
    0.1
}

fn default_band_low() -> f64 {
    0.9
}

fn default_band_high() -> f64 {
    1.1
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env");
        match std::env::var("LOOTWORTH_CONFIG") {
            Ok(path) => Self::load(path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Override factor for one template; 1 when the table has no entry.
    pub fn multiplier(&self, template: TemplateId) -> f64 {
        self.multipliers.get(&template).copied().unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.correction.deviation_threshold, 0.1);
        assert_eq!(cfg.correction.band_low, 0.9);
        assert_eq!(cfg.correction.band_high, 1.1);
        assert!(cfg.multipliers.is_empty());
    }

    #[test]
    fn t_absent_multiplier_reads_as_one() {
        let cfg = Config::default();
        assert_eq!(cfg.multiplier(TemplateId::new()), 1.0);
    }

    #[test]
    fn t_parse_toml() {
        let id = TemplateId::new();
        let raw = format!(
            "[correction]\ndeviation_threshold = 0.2\n\n[multipliers]\n\"{id}\" = 1.5\n"
        );
        let cfg: Config = toml::from_str(&raw).unwrap();

        assert_eq!(cfg.correction.deviation_threshold, 0.2);
        // unset band fields fall back to their defaults
        assert_eq!(cfg.correction.band_low, 0.9);
        assert_eq!(cfg.correction.band_high, 1.1);
        assert_eq!(cfg.multiplier(id), 1.5);
        assert_eq!(cfg.multiplier(TemplateId::new()), 1.0);
    }
}
