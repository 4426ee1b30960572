use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiftmapError};
use crate::projection::{read_json_artifact, Coordinates};

/// Precomputed embedding coordinates of reference professional players,
/// keyed by display name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProCoordinates(BTreeMap<String, Coordinates>);

impl ProCoordinates {
    pub fn load(path: &Path) -> Result<Self> {
        let coords: Self = read_json_artifact(path)?;
        coords.validate()?;
        tracing::info!(players = coords.len(), path = %path.display(), "Loaded pro coordinates");
        Ok(coords)
    }

    fn validate(&self) -> Result<()> {
        let mut dims = self.0.values().map(Vec::len);
        if let Some(first) = dims.next() {
            if first == 0 || dims.any(|d| d != first) {
                return Err(RiftmapError::ArtifactLoad(
                    "Pro coordinates have inconsistent dimensions".to_string(),
                ));
            }
        }
        if self.0.values().flatten().any(|v| !v.is_finite()) {
            return Err(RiftmapError::ArtifactLoad(
                "Pro coordinates contain non-finite values".to_string(),
            ));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Coordinates> {
        self.0.get(name)
    }
}

impl FromIterator<(String, Coordinates)> for ProCoordinates {
    fn from_iter<I: IntoIterator<Item = (String, Coordinates)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Faker":[1.5,-2.0],"Caps":[0.25,3.0]}}"#).unwrap();

        let coords = ProCoordinates::load(file.path()).unwrap();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords.get("Faker"), Some(&vec![1.5, -2.0]));
    }

    #[test]
    fn test_inconsistent_dimensions_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Faker":[1.5,-2.0],"Caps":[0.25]}}"#).unwrap();

        let result = ProCoordinates::load(file.path());
        assert!(matches!(result, Err(RiftmapError::ArtifactLoad(_))));
    }

    #[test]
    fn test_missing_file_is_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ProCoordinates::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(RiftmapError::ArtifactLoad(_))));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let coords: ProCoordinates = [("Chovy".to_string(), vec![0.5, 1.0])]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_value(&coords).unwrap(),
            serde_json::json!({"Chovy": [0.5, 1.0]})
        );
    }
}
