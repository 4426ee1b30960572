use std::collections::BTreeMap;

use crate::features::schema::FeatureVector;

/// Per-metric arithmetic mean over `vectors`, skipping missing values.
///
/// The result holds the union of all keys. A metric with no numeric value in
/// any vector stays missing rather than becoming zero.
pub fn mean_features(vectors: &[FeatureVector]) -> FeatureVector {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for vector in vectors {
        for (name, value) in vector.iter() {
            let entry = sums.entry(name).or_insert((0.0, 0));
            if let Some(value) = value {
                entry.0 += value;
                entry.1 += 1;
            }
        }
    }

    sums.into_iter()
        .map(|(name, (sum, count))| {
            let mean = (count > 0).then(|| sum / count as f64);
            (name.to_string(), mean)
        })
        .collect()
}
