//! Embedding projection of averaged feature vectors.
//!
//! A fitted [`StandardScaler`] reindexes and standardises the features, then
//! a pre-trained [`EmbeddingModel`] maps them into the low-dimensional space
//! shared with the reference pro-player coordinates.

mod coords;
mod model;
mod registry;
mod scaler;

pub use coords::ProCoordinates;
pub use model::EmbeddingModel;
pub use registry::{ArtifactStatus, LazyArtifact};
pub use scaler::StandardScaler;

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::AssetsConfig;
use crate::error::{Result, RiftmapError};
use crate::features::FeatureVector;

/// Point in the embedding space.
pub type Coordinates = Vec<f64>;

pub trait Projector: Send + Sync {
    fn transform(&self, features: &FeatureVector) -> Result<Coordinates>;

    fn output_dimensions(&self) -> usize;
}

#[derive(Debug, Clone)]
pub struct PretrainedProjector {
    scaler: StandardScaler,
    model: EmbeddingModel,
}

impl PretrainedProjector {
    pub fn new(scaler: StandardScaler, model: EmbeddingModel) -> Result<Self> {
        scaler.validate()?;
        model.validate(scaler.n_features())?;
        Ok(Self { scaler, model })
    }

    pub fn load(scaler_path: &Path, model_path: &Path) -> Result<Self> {
        let scaler: StandardScaler = read_json_artifact(scaler_path)?;
        let model: EmbeddingModel = read_json_artifact(model_path)?;
        let projector = Self::new(scaler, model)?;
        tracing::info!(
            features = projector.scaler.n_features(),
            dimensions = projector.model.output_dimensions(),
            "Loaded embedding projector"
        );
        Ok(projector)
    }
}

impl Projector for PretrainedProjector {
    fn transform(&self, features: &FeatureVector) -> Result<Coordinates> {
        let scaled = self.scaler.transform(features);
        if let Some(i) = scaled.iter().position(|v| !v.is_finite()) {
            return Err(RiftmapError::Projection(format!(
                "Non-finite standardised value for {}",
                self.scaler.feature_names[i]
            )));
        }

        let coordinates = self.model.embed(&scaled)?;
        if coordinates.iter().any(|v| !v.is_finite()) {
            return Err(RiftmapError::Projection(
                "Model produced non-finite coordinates".to_string(),
            ));
        }
        Ok(coordinates)
    }

    fn output_dimensions(&self) -> usize {
        self.model.output_dimensions()
    }
}

pub(crate) fn read_json_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path).map_err(|e| {
        RiftmapError::ArtifactLoad(format!("Cannot read {}: {e}", path.display()))
    })?;
    serde_json::from_slice(&bytes).map_err(|e| {
        RiftmapError::ArtifactLoad(format!("Cannot parse {}: {e}", path.display()))
    })
}

/// Process-wide model artifacts, shared by every request.
#[derive(Clone)]
pub struct ModelAssets {
    pub projector: LazyArtifact<dyn Projector>,
    pub pro_coords: LazyArtifact<ProCoordinates>,
}

impl ModelAssets {
    pub fn from_config(config: &AssetsConfig) -> Self {
        let scaler_path = config.scaler_path();
        let model_path = config.model_path();
        let coords_path = config.pro_coords_path();

        Self {
            projector: LazyArtifact::new("projector", move || {
                let projector = PretrainedProjector::load(&scaler_path, &model_path)?;
                Ok(Arc::new(projector) as Arc<dyn Projector>)
            }),
            pro_coords: LazyArtifact::new("pro_coords", move || {
                Ok(Arc::new(ProCoordinates::load(&coords_path)?))
            }),
        }
    }

    pub fn preloaded(projector: Arc<dyn Projector>, pro_coords: ProCoordinates) -> Self {
        Self {
            projector: LazyArtifact::ready("projector", projector),
            pro_coords: LazyArtifact::ready("pro_coords", Arc::new(pro_coords)),
        }
    }

    /// Forces both artifacts to load.
    pub async fn warm_up(&self) -> Result<()> {
        let (projector, coords) = tokio::join!(self.projector.get(), self.pro_coords.get());
        projector?;
        coords?;
        Ok(())
    }
}
