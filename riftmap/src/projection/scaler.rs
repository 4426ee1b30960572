use serde::{Deserialize, Serialize};

use crate::error::{Result, RiftmapError};
use crate::features::FeatureVector;

/// Per-feature standardisation fitted offline: `(x - mean) / scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardScaler {
    /// Column order the scaler (and the downstream model) was fit on.
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn validate(&self) -> Result<()> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err(RiftmapError::ArtifactLoad(
                "Scaler has no feature names".to_string(),
            ));
        }
        if self.mean.len() != n || self.scale.len() != n {
            return Err(RiftmapError::ArtifactLoad(format!(
                "Scaler shape mismatch: {n} names, {} means, {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err(RiftmapError::ArtifactLoad(
                "Scaler contains non-finite parameters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Reindexes `features` by the fitted column order and standardises it.
    /// Absent or missing features enter as `0.0`; a zero scale is treated as 1.
    pub fn transform(&self, features: &FeatureVector) -> Vec<f64> {
        self.feature_names
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(name, (mean, scale))| {
                let x = features.value(name).unwrap_or(0.0);
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> StandardScaler {
        StandardScaler {
            feature_names: vec!["kills".into(), "dpm".into(), "goldat25".into()],
            mean: vec![5.0, 600.0, 9000.0],
            scale: vec![2.0, 100.0, 0.0],
        }
    }

    #[test]
    fn test_transform_reindexes_and_standardises() {
        let mut features = FeatureVector::new();
        features.set("dpm", 800.0);
        features.set("kills", 9.0);
        features.set("unrelated", 1e9);
        features.set_missing("goldat25");

        let scaled = scaler().transform(&features);
        // goldat25 missing -> 0.0, zero scale -> divide by 1
        assert_eq!(scaled, vec![2.0, 2.0, -9000.0]);
    }

    #[test]
    fn test_absent_features_default_to_zero() {
        let scaled = scaler().transform(&FeatureVector::new());
        assert_eq!(scaled, vec![-2.5, -6.0, -9000.0]);
    }

    #[test]
    fn test_validate_shape_mismatch() {
        let mut bad = scaler();
        bad.scale.pop();
        assert!(matches!(bad.validate(), Err(RiftmapError::ArtifactLoad(_))));
        assert!(scaler().validate().is_ok());
    }

    #[test]
    fn test_deserializes_camel_case() {
        let s: StandardScaler = serde_json::from_str(
            r#"{"featureNames":["kills"],"mean":[1.0],"scale":[0.5]}"#,
        )
        .unwrap();
        assert_eq!(s.n_features(), 1);
    }
}
