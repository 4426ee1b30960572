//! Direct-transform DTOs for the v1 API.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, RiftmapError};
use crate::features::{feature_names, FeatureVector};

/// Builds a complete feature vector from a `POST /v1/transform` body.
///
/// Every schema name must be present as a number. Keys outside the schema
/// are ignored.
pub fn features_from_body(body: &Map<String, Value>) -> Result<FeatureVector> {
    let mut features = FeatureVector::new();
    for name in feature_names() {
        match body.get(&name).filter(|value| !value.is_null()) {
            Some(value) => match value.as_f64() {
                Some(number) => features.set(name, number),
                None => {
                    return Err(RiftmapError::Validation(format!(
                        "Feature `{name}` must be a number"
                    )))
                }
            },
            None => {
                return Err(RiftmapError::Validation(format!(
                    "Missing required feature: {name}"
                )))
            }
        }
    }
    Ok(features)
}

/// Response for `POST /v1/transform`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TransformResponse {
    pub coordinates: Vec<f64>,
}
