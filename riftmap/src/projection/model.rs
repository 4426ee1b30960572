use serde::{Deserialize, Serialize};

use crate::error::{Result, RiftmapError};

/// Pre-trained map from standardised feature space to the embedding space.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EmbeddingModel {
    /// `y = components · x + offset`, components shaped `[out][in]`.
    Linear {
        components: Vec<Vec<f64>>,
        offset: Vec<f64>,
    },
    /// Places a new point at the inverse-distance weighted mean of the
    /// embeddings of its nearest training points.
    #[serde(rename_all = "camelCase")]
    Neighbors {
        n_neighbors: usize,
        points: Vec<Vec<f64>>,
        embedding: Vec<Vec<f64>>,
    },
}

impl EmbeddingModel {
    pub fn input_dimensions(&self) -> usize {
        match self {
            Self::Linear { components, .. } => components.first().map_or(0, Vec::len),
            Self::Neighbors { points, .. } => points.first().map_or(0, Vec::len),
        }
    }

    pub fn output_dimensions(&self) -> usize {
        match self {
            Self::Linear { components, .. } => components.len(),
            Self::Neighbors { embedding, .. } => embedding.first().map_or(0, Vec::len),
        }
    }

    /// Checks internal shape consistency against the scaler's width.
    pub fn validate(&self, n_features: usize) -> Result<()> {
        let fail = |msg: String| Err(RiftmapError::ArtifactLoad(msg));

        if self.input_dimensions() != n_features {
            return fail(format!(
                "Model expects {} features, scaler provides {n_features}",
                self.input_dimensions()
            ));
        }
        if self.output_dimensions() == 0 {
            return fail("Model has no output dimensions".to_string());
        }

        match self {
            Self::Linear { components, offset } => {
                if components.iter().any(|row| row.len() != n_features) {
                    return fail("Ragged linear components".to_string());
                }
                if offset.len() != components.len() {
                    return fail(format!(
                        "Offset length {} does not match {} components",
                        offset.len(),
                        components.len()
                    ));
                }
            }
            Self::Neighbors {
                n_neighbors,
                points,
                embedding,
            } => {
                let out = self.output_dimensions();
                if *n_neighbors == 0 {
                    return fail("nNeighbors must be positive".to_string());
                }
                if points.len() != embedding.len() {
                    return fail(format!(
                        "{} training points but {} embeddings",
                        points.len(),
                        embedding.len()
                    ));
                }
                if points.iter().any(|p| p.len() != n_features)
                    || embedding.iter().any(|e| e.len() != out)
                {
                    return fail("Ragged neighbour model".to_string());
                }
            }
        }
        Ok(())
    }

    pub fn embed(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.input_dimensions() {
            return Err(RiftmapError::Projection(format!(
                "Input has {} features, model expects {}",
                x.len(),
                self.input_dimensions()
            )));
        }

        match self {
            Self::Linear { components, offset } => Ok(components
                .iter()
                .zip(offset)
                .map(|(row, b)| row.iter().zip(x).map(|(w, v)| w * v).sum::<f64>() + b)
                .collect()),
            Self::Neighbors {
                n_neighbors,
                points,
                embedding,
            } => {
                let mut nearest: Vec<(f64, usize)> = points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (euclidean(p, x), i))
                    .collect();
                nearest.sort_by(|a, b| a.0.total_cmp(&b.0));
                nearest.truncate(*n_neighbors);

                let Some(&(closest, index)) = nearest.first() else {
                    return Err(RiftmapError::Projection(
                        "Neighbour model has no training points".to_string(),
                    ));
                };
                if closest == 0.0 {
                    return Ok(embedding[index].clone());
                }

                let mut out = vec![0.0; self.output_dimensions()];
                let mut total_weight = 0.0;
                for (distance, i) in nearest {
                    let weight = 1.0 / distance;
                    total_weight += weight;
                    for (acc, value) in out.iter_mut().zip(&embedding[i]) {
                        *acc += weight * value;
                    }
                }
                Ok(out.into_iter().map(|v| v / total_weight).collect())
            }
        }
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear() -> EmbeddingModel {
        EmbeddingModel::Linear {
            components: vec![vec![1.0, 0.0, 2.0], vec![0.0, -1.0, 0.5]],
            offset: vec![0.5, 1.0],
        }
    }

    fn neighbors() -> EmbeddingModel {
        EmbeddingModel::Neighbors {
            n_neighbors: 2,
            points: vec![vec![0.0, 0.0], vec![4.0, 0.0], vec![100.0, 100.0]],
            embedding: vec![vec![0.0, 0.0], vec![10.0, 10.0], vec![-50.0, -50.0]],
        }
    }

    #[test]
    fn test_linear_embed() {
        let model = linear();
        model.validate(3).unwrap();
        assert_eq!(model.embed(&[1.0, 2.0, 3.0]).unwrap(), vec![7.5, 0.5]);
    }

    #[test]
    fn test_neighbors_inverse_distance_weighting() {
        let model = neighbors();
        model.validate(2).unwrap();
        // distances 1 and 3 -> weights 1 and 1/3
        let y = model.embed(&[1.0, 0.0]).unwrap();
        assert!((y[0] - 2.5).abs() < 1e-12);
        assert!((y[1] - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_neighbors_exact_hit_returns_training_embedding() {
        assert_eq!(neighbors().embed(&[4.0, 0.0]).unwrap(), vec![10.0, 10.0]);
    }

    #[test]
    fn test_wrong_input_width_is_projection_error() {
        assert!(matches!(
            linear().embed(&[1.0]),
            Err(RiftmapError::Projection(_))
        ));
    }

    #[test]
    fn test_validate_rejects_mismatched_shapes() {
        assert!(linear().validate(4).is_err());

        let bad = EmbeddingModel::Linear {
            components: vec![vec![1.0, 2.0]],
            offset: vec![0.0, 0.0],
        };
        assert!(matches!(bad.validate(2), Err(RiftmapError::ArtifactLoad(_))));
    }

    #[test]
    fn test_deserializes_tagged_artifact() {
        let model: EmbeddingModel = serde_json::from_str(
            r#"{"kind":"neighbors","nNeighbors":1,"points":[[0.0]],"embedding":[[1.0,2.0]]}"#,
        )
        .unwrap();
        assert_eq!(model.output_dimensions(), 2);
        assert_eq!(model.input_dimensions(), 1);
    }
}
