//! The six photometric input parameters submitted for classification.

use serde::{Deserialize, Serialize};
use crate::error::NebulaError;

/// Field names in submission order.
pub const FEATURE_NAMES: [&str; 6] = ["u", "g", "r", "i", "z", "redshift"];

/// A complete, numeric parameter vector. Deserializing rejects missing or
/// non-numeric fields, so a value of this type is always submittable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CosmicFeatures {
    pub u: f64,
    pub g: f64,
    pub r: f64,
    pub i: f64,
    pub z: f64,
    pub redshift: f64,
}

impl CosmicFeatures {
    /// `(name, value)` pairs in submission order.
    pub fn features(&self) -> [(&'static str, f64); 6] {
        [
            ("u", self.u),
            ("g", self.g),
            ("r", self.r),
            ("i", self.i),
            ("z", self.z),
            ("redshift", self.redshift),
        ]
    }

    /// Condensed one-line rendering used by the history log: `u: 1.00, g: 2.00, ...`
    pub fn summary(&self) -> String {
        self.features()
            .iter()
            .map(|(name, value)| format!("{}: {:.2}", name, value))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// JSON can't carry NaN/inf but programmatic callers can.
    pub fn validate(&self) -> Result<(), NebulaError> {
        match self.features().iter().find(|(_, v)| !v.is_finite()) {
            Some((name, value)) => Err(NebulaError::InvalidInput(format!(
                "feature '{}' must be a finite number, got {}",
                name, value
            ))),
            None => Ok(()),
        }
    }
}

/// Raw HTML form input. Every field is optional text until parsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureForm {
    pub u: Option<String>,
    pub g: Option<String>,
    pub r: Option<String>,
    pub i: Option<String>,
    pub z: Option<String>,
    pub redshift: Option<String>,
}

/// Per-field validation messages, in form order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(pub Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FeatureForm {
    pub fn raw(&self, field: &str) -> Option<&str> {
        match field {
            "u" => self.u.as_deref(),
            "g" => self.g.as_deref(),
            "r" => self.r.as_deref(),
            "i" => self.i.as_deref(),
            "z" => self.z.as_deref(),
            "redshift" => self.redshift.as_deref(),
            _ => None,
        }
    }

    /// Echo a submitted request back into form text, e.g. after a reload.
    pub fn from_features(features: &CosmicFeatures) -> Self {
        Self {
            u: Some(features.u.to_string()),
            g: Some(features.g.to_string()),
            r: Some(features.r.to_string()),
            i: Some(features.i.to_string()),
            z: Some(features.z.to_string()),
            redshift: Some(features.redshift.to_string()),
        }
    }

    /// All six fields must be present and numeric.
    pub fn parse(&self) -> Result<CosmicFeatures, FieldErrors> {
        let mut values = [0.0_f64; 6];
        let mut errors = Vec::new();

        for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
            match self.raw(name).map(str::trim).filter(|s| !s.is_empty()) {
                None => errors.push((name, "required".to_string())),
                Some(text) => match text.parse::<f64>() {
                    Ok(v) if v.is_finite() => *slot = v,
                    _ => errors.push((name, format!("'{}' is not a number", text))),
                },
            }
        }

        if !errors.is_empty() {
            return Err(FieldErrors(errors));
        }

        let [u, g, r, i, z, redshift] = values;
        Ok(CosmicFeatures { u, g, r, i, z, redshift })
    }
}
