// Weighted L1 (Manhattan) distance between two signatures.
//
//   distance = sum over features f of weight[f] * |a[f] - b[f]|
//
// Features are not normalized. Word length sits around 4-7 while the ratios
// live in [0, 1], so the weights carry the scale correction and have to be
// retuned together with any change to feature definitions.

use crate::signature::{Feature, Signature};

/// Per-feature weights for the distance metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureWeights {
    pub average_word_length: f64,
    pub different_to_total: f64,
    pub exactly_once_to_total: f64,
    pub average_sentence_length: f64,
    pub average_sentence_complexity: f64,
}

impl Default for FeatureWeights {
    /// Hand-tuned for line-segmented lyrics.
    fn default() -> Self {
        Self {
            average_word_length: 11.0,
            different_to_total: 33.0,
            exactly_once_to_total: 50.0,
            average_sentence_length: 1.5,
            average_sentence_complexity: 4.0,
        }
    }
}

impl FeatureWeights {
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::AverageWordLength => self.average_word_length,
            Feature::DifferentToTotal => self.different_to_total,
            Feature::ExactlyOnceToTotal => self.exactly_once_to_total,
            Feature::AverageSentenceLength => self.average_sentence_length,
            Feature::AverageSentenceComplexity => self.average_sentence_complexity,
        }
    }
}

/// Compute the weighted distance between two signatures. Lower is closer.
pub fn distance(a: &Signature, b: &Signature, weights: &FeatureWeights) -> f64 {
    Feature::ALL
        .iter()
        .map(|&f| (a.get(f) - b.get(f)).abs() * weights.get(f))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(values: [f64; 5]) -> Signature {
        Signature {
            average_word_length: values[0],
            different_to_total: values[1],
            exactly_once_to_total: values[2],
            average_sentence_length: values[3],
            average_sentence_complexity: values[4],
        }
    }

    #[test]
    fn test_distance_from_zero_is_weighted_sum() {
        let weights = FeatureWeights::default();
        let d = distance(&Signature::default(), &sig([1.0; 5]), &weights);
        // 11 + 33 + 50 + 1.5 + 4
        assert!((d - 99.5).abs() < 1e-9, "Expected 99.5, got {d}");
    }

    #[test]
    fn test_distance_uses_absolute_difference() {
        let weights = FeatureWeights::default();
        let a = sig([4.0, 0.5, 0.3, 6.0, 1.0]);
        let b = sig([5.0, 0.4, 0.5, 4.0, 1.5]);
        // 11*1 + 33*0.1 + 50*0.2 + 1.5*2 + 4*0.5 = 11 + 3.3 + 10 + 3 + 2
        let d = distance(&a, &b, &weights);
        assert!((d - 29.3).abs() < 1e-9, "Expected 29.3, got {d}");
    }

    #[test]
    fn test_identical_signatures_are_zero() {
        let a = sig([4.2, 0.7, 0.6, 8.0, 1.2]);
        assert_eq!(distance(&a, &a, &FeatureWeights::default()), 0.0);
    }

    #[test]
    fn test_custom_weights() {
        let weights = FeatureWeights {
            average_word_length: 0.0,
            different_to_total: 0.0,
            exactly_once_to_total: 0.0,
            average_sentence_length: 2.0,
            average_sentence_complexity: 0.0,
        };
        let d = distance(&sig([9.0, 1.0, 1.0, 3.0, 2.0]), &sig([1.0, 0.0, 0.0, 5.0, 1.0]), &weights);
        assert!((d - 4.0).abs() < 1e-9);
    }
}
