//! Linear bag-of-words text models.
//!
//! Trained artifacts are exported as JSON: a class list, a token vocabulary
//! mapping tokens to feature columns, one weight row per class, and a bias
//! per class. Inference is a dot product over token counts followed by a
//! softmax.

use std::collections::HashMap;

use serde::Deserialize;

use skillpath_core::traits::{CapabilityError, Prediction, TextClassifier};

/// A linear classifier over bag-of-words features.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearTextModel {
    /// Capability name reported in health checks.
    pub name: String,
    /// Output labels, one per weight row.
    pub classes: Vec<String>,
    /// Token to feature-column mapping.
    pub vocabulary: HashMap<String, usize>,
    /// One weight row per class; each row spans the vocabulary columns.
    pub weights: Vec<Vec<f64>>,
    /// One bias term per class.
    pub bias: Vec<f64>,
}

impl LinearTextModel {
    /// Validate internal consistency after deserialization.
    pub fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("model has no classes".to_string());
        }
        if self.weights.len() != self.classes.len() {
            return Err(format!(
                "weight rows ({}) do not match classes ({})",
                self.weights.len(),
                self.classes.len()
            ));
        }
        if self.bias.len() != self.classes.len() {
            return Err(format!(
                "bias terms ({}) do not match classes ({})",
                self.bias.len(),
                self.classes.len()
            ));
        }
        let columns = self.vocabulary.values().max().map_or(0, |m| m + 1);
        for (i, row) in self.weights.iter().enumerate() {
            if row.len() < columns {
                return Err(format!(
                    "weight row {} has {} columns, vocabulary needs {}",
                    i,
                    row.len(),
                    columns
                ));
            }
        }
        Ok(())
    }

    /// Bag-of-words token counts for known vocabulary entries.
    fn features(&self, text: &str) -> HashMap<usize, f64> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }
        counts
    }
}

impl TextClassifier for LinearTextModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn classify(&self, text: &str) -> Result<Prediction, CapabilityError> {
        let features = self.features(text);
        if features.is_empty() {
            return Err(CapabilityError::UnrepresentableInput(
                "no known tokens in input".to_string(),
            ));
        }

        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| {
                bias + features
                    .iter()
                    .map(|(&column, &count)| row[column] * count)
                    .sum::<f64>()
            })
            .collect();

        // Softmax in shifted space for numeric stability.
        let max_logit = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|l| (l - max_logit).exp()).collect();
        let sum: f64 = exps.iter().sum();

        let (best, _) = logits
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(bi, bv), (i, &v)| {
                if v > bv {
                    (i, v)
                } else {
                    (bi, bv)
                }
            });

        Ok(Prediction {
            label: self.classes[best].clone(),
            confidence: exps[best] / sum,
        })
    }
}
