use crate::models::{PriceInput, FEATURE_COLUMNS};
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("model artifact is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
    #[error("model expects columns {found:?}, this service feeds {expected:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// Pre-trained house price regression, deserialized from a JSON artifact.
///
/// The artifact is produced offline; this service only loads it and calls
/// [`PriceModel::predict`]. Loaded once at startup and shared read-only
/// across workers, so `predict` takes `&self` and holds no interior state.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceModel {
    feature_columns: Vec<String>,
    intercept: f64,
    area_weight: f64,
    bedroom_weight: f64,
    location_effects: HashMap<String, f64>,
}

impl PriceModel {
    /// Load the artifact from disk. A missing file, malformed JSON, or a
    /// feature schema that no longer matches what this service feeds the
    /// model is a startup-fatal error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let model: PriceModel = serde_json::from_str(&raw)?;

        if model.feature_columns != FEATURE_COLUMNS {
            return Err(ModelError::SchemaMismatch {
                expected: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
                found: model.feature_columns.clone(),
            });
        }

        info!(
            "Model artifact loaded from {} ({} known locations)",
            path.as_ref().display(),
            model.location_effects.len()
        );
        Ok(model)
    }

    /// Predict the price for one input row, rounded to two decimals and
    /// floored at zero.
    ///
    /// A location the model was not trained on contributes nothing, the
    /// same way an unseen category one-hot encodes to all zeros.
    pub fn predict(&self, input: &PriceInput) -> f64 {
        let location_effect = self
            .location_effects
            .get(&input.location)
            .copied()
            .unwrap_or(0.0);

        let raw = self.intercept
            + self.area_weight * input.area
            + self.bedroom_weight * input.bedrooms as f64
            + location_effect;
        debug!("raw score {:.4} for {:?}", raw, input);

        ((raw * 100.0).round() / 100.0).max(0.0)
    }
}
