use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::constants::{
    DEFAULT_INIT_RATING, DEFAULT_SLOPE, DEFAULT_SURFACE_WEIGHT, DEFAULT_UPDATE_GAIN, UNKNOWN_SURFACE
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigParseError {
    #[error("Empty configuration line")]
    EmptyLine,

    #[error("Malformed entry `{0}`, expected key=value")]
    MalformedEntry(String),

    #[error("Unrecognized configuration key `{0}`")]
    UnrecognizedKey(String),

    #[error("Invalid value `{value}` for key `{key}`")]
    InvalidValue { key: String, value: String },

    #[error("Missing required key `{0}`")]
    MissingKey(&'static str)
}

/// Hyperparameter bundle for the surface-aware Elo engine.
///
/// `update_gain` is the classic Elo K factor, `slope` scales the blended
/// rating gap fed to the logistic curve, and `surface_weight` is the weight
/// of the global rating inside the blend `surface + surface_weight * global`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EloConfig {
    pub update_gain: f64,
    pub slope: f64,
    pub surface_weight: f64,
    pub init_rating: f64,
    /// Label substituted when a match record carries no usable surface
    pub unknown_surface: String
}

impl Default for EloConfig {
    fn default() -> Self {
        EloConfig {
            update_gain: DEFAULT_UPDATE_GAIN,
            slope: DEFAULT_SLOPE,
            surface_weight: DEFAULT_SURFACE_WEIGHT,
            init_rating: DEFAULT_INIT_RATING,
            unknown_surface: UNKNOWN_SURFACE.to_string()
        }
    }
}

impl EloConfig {
    pub fn new(update_gain: f64, slope: f64, surface_weight: f64) -> EloConfig {
        EloConfig {
            update_gain,
            slope,
            surface_weight,
            ..Default::default()
        }
    }

    /// Serializes the tunable parameters as a single `key=value` line,
    /// e.g. `update_gain=32, slope=0.004, surface_weight=0.4`.
    pub fn to_line(&self) -> String {
        format!(
            "update_gain={}, slope={}, surface_weight={}",
            self.update_gain, self.slope, self.surface_weight
        )
    }

    /// Parses a configuration line produced by [`EloConfig::to_line`] or by a
    /// tuning run (which appends `val_logloss=...` for provenance).
    ///
    /// All three tunable keys are required. Anything unparseable is an
    /// explicit error; silently falling back to defaults would let wrong
    /// hyperparameters produce plausible-looking probabilities.
    pub fn from_line(line: &str) -> Result<EloConfig, ConfigParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ConfigParseError::EmptyLine);
        }

        let mut update_gain = None;
        let mut slope = None;
        let mut surface_weight = None;
        let mut init_rating = None;

        for entry in line.split(',') {
            let entry = entry.trim();
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| ConfigParseError::MalformedEntry(entry.to_string()))?;
            let (key, value) = (key.trim(), value.trim());

            let parsed = match key {
                // Surface label is the only non-numeric key
                "unknown_surface" => continue,
                _ => value.parse::<f64>().map_err(|_| ConfigParseError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string()
                })?
            };

            match key {
                "update_gain" => update_gain = Some(parsed),
                "slope" => slope = Some(parsed),
                "surface_weight" => surface_weight = Some(parsed),
                "init_rating" => init_rating = Some(parsed),
                // Provenance from a tuning run, not a parameter
                "val_logloss" => {}
                _ => return Err(ConfigParseError::UnrecognizedKey(key.to_string()))
            }
        }

        Ok(EloConfig {
            update_gain: update_gain.ok_or(ConfigParseError::MissingKey("update_gain"))?,
            slope: slope.ok_or(ConfigParseError::MissingKey("slope"))?,
            surface_weight: surface_weight.ok_or(ConfigParseError::MissingKey("surface_weight"))?,
            init_rating: init_rating.unwrap_or(DEFAULT_INIT_RATING),
            unknown_surface: UNKNOWN_SURFACE.to_string()
        })
    }
}
