use crate::config::CorrectionConfig;
use rand::Rng;

/// Reconciles a baseline feed price against the observed market average.
///
/// A baseline that drifts beyond the deviation threshold re-anchors to the
/// market average, times a fresh draw from the band so the corrected price
/// is not perfectly predictable. The draw is independent per corrected price.
#[derive(Debug, Clone)]
pub struct OutlierCorrection {
    threshold: f64,
    band_low: f64,
    band_high: f64,
}

impl OutlierCorrection {
    pub fn new(cfg: &CorrectionConfig) -> Self {
        Self {
            threshold: cfg.deviation_threshold,
            band_low: cfg.band_low,
            band_high: cfg.band_high,
        }
    }

    /// Returns the baseline unchanged when there is no usable market data or
    /// the relative deviation stays within the threshold.
    pub fn reconcile(&self, baseline: f64, market_mean: Option<f64>) -> f64 {
        let Some(mean) = market_mean else {
            return baseline;
        };

        // the deviation quotient is undefined for a non-positive mean
        if !mean.is_finite() || mean <= 0.0 {
            return baseline;
        }

        let deviation = (baseline - mean).abs() / mean;
        if deviation <= self.threshold {
            return baseline;
        }

        mean * rand::rng().random_range(self.band_low..=self.band_high)
    }
}
