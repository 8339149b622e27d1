//! Ripeness predictions.
//!
//! [`Predictor`] is the seam between the dashboard and whatever produces a
//! distribution for an image. The only implementation today is
//! [`SyntheticPredictor`], which fabricates a plausible distribution from a
//! random source and never looks at the pixels.

use std::cmp::Ordering;

use derive_more::Display;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::upload::ImageInfo;

pub const PALETTE: [&str; 5] = ["#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#0088FE"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, Serialize, Deserialize)]
pub enum Ripeness {
    Unripe,
    Ripe,
    Overripe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, Serialize, Deserialize)]
pub enum FruitType {
    Apple,
    Banana,
    Orange,
    Mango,
    Strawberry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{} {}", ripeness, fruit)]
pub struct ClassLabel {
    pub ripeness: Ripeness,
    pub fruit: FruitType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: String,
    pub probability: f64,
}

impl PredictionResult {
    fn new(label: ClassLabel, probability: f64) -> Self {
        Self {
            label: label.to_string(),
            probability,
        }
    }

    pub fn percentage(&self) -> f64 {
        self.probability * 100.0
    }
}

pub trait Predictor {
    fn predict(&mut self, image: &ImageInfo) -> Vec<PredictionResult>;
}

/// Mock classifier producing a random but well-formed distribution.
pub struct SyntheticPredictor<R: Rng> {
    rng: R,
    epsilon: f64,
}

impl<R: Rng> SyntheticPredictor<R> {
    pub fn new(rng: R, epsilon: f64) -> Self {
        Self { rng, epsilon }
    }
}

impl SyntheticPredictor<StdRng> {
    pub fn from_entropy(epsilon: f64) -> Self {
        Self::new(StdRng::from_entropy(), epsilon)
    }
}

impl<R: Rng> Predictor for SyntheticPredictor<R> {
    fn predict(&mut self, image: &ImageInfo) -> Vec<PredictionResult> {
        let predictions = synthesize(&mut self.rng, self.epsilon);
        log::debug!(
            "Synthesized {} predictions for {} (top: {})",
            predictions.len(),
            image.name,
            predictions[0].label
        );
        predictions
    }
}

/// Builds one distribution. The first entry is always the dominant label.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R, epsilon: f64) -> Vec<PredictionResult> {
    let fruits: Vec<FruitType> = FruitType::iter().collect();
    let states: Vec<Ripeness> = Ripeness::iter().collect();

    let fruit = fruits[rng.gen_range(0..fruits.len())];
    let dominant = rng.gen_range(0..states.len());
    let dominant_probability: f64 = rng.gen_range(0.65..0.95);

    let mut predictions = vec![PredictionResult::new(
        ClassLabel {
            ripeness: states[dominant],
            fruit,
        },
        dominant_probability,
    )];

    let mut remaining = 1.0 - dominant_probability;
    for (i, &ripeness) in states.iter().enumerate() {
        if i == dominant {
            continue;
        }
        let share = remaining * rng.r#gen::<f64>();
        remaining -= share;
        predictions.push(PredictionResult::new(ClassLabel { ripeness, fruit }, share));
    }

    if remaining > epsilon {
        let others: Vec<FruitType> = fruits.iter().copied().filter(|f| *f != fruit).collect();
        let label = ClassLabel {
            ripeness: states[rng.gen_range(0..states.len())],
            fruit: others[rng.gen_range(0..others.len())],
        };
        predictions.push(PredictionResult::new(label, remaining));
    } else {
        predictions[0].probability += remaining;
    }

    predictions
}

pub fn sorted_by_probability(predictions: &[PredictionResult]) -> Vec<PredictionResult> {
    let mut sorted = predictions.to_vec();
    sorted.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

pub fn top_prediction(predictions: &[PredictionResult]) -> Option<&PredictionResult> {
    predictions.iter().max_by(|a, b| {
        a.probability
            .partial_cmp(&b.probability)
            .unwrap_or(Ordering::Equal)
    })
}

pub fn total_probability(predictions: &[PredictionResult]) -> f64 {
    predictions.iter().map(|p| p.probability).sum()
}

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_label_is_first_and_largest() {
        let mut rng = StdRng::seed_from_u64(7);
        let predictions = synthesize(&mut rng, 0.001);
        let top = top_prediction(&predictions).unwrap();
        assert_eq!(top, &predictions[0]);
        assert!(top.probability >= 0.65);
    }

    #[test]
    fn same_fruit_covers_every_ripeness() {
        let mut rng = StdRng::seed_from_u64(11);
        let predictions = synthesize(&mut rng, 0.001);
        let fruit = predictions[0].label.split(' ').nth(1).unwrap().to_string();
        let same_fruit = predictions[..3]
            .iter()
            .filter(|p| p.label.ends_with(&fruit))
            .count();
        assert_eq!(same_fruit, 3);
        for state in Ripeness::iter() {
            let label = format!("{} {}", state, fruit);
            assert!(predictions.iter().any(|p| p.label == label));
        }
    }

    #[test]
    fn leftover_goes_to_a_different_fruit() {
        let mut rng = StdRng::seed_from_u64(3);
        let predictions = synthesize(&mut rng, 0.0);
        assert_eq!(predictions.len(), 4);
        let fruit = predictions[0].label.split(' ').nth(1).unwrap();
        assert!(!predictions[3].label.ends_with(fruit));
    }

    #[test]
    fn small_leftover_folds_into_dominant() {
        // Leftover never exceeds 0.35, so an epsilon of 1.0 always folds.
        let mut rng = StdRng::seed_from_u64(3);
        let predictions = synthesize(&mut rng, 1.0);
        assert_eq!(predictions.len(), 3);
        assert!((total_probability(&predictions) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sorting_is_descending() {
        let result = |label: &str, probability| PredictionResult {
            label: label.into(),
            probability,
        };
        let predictions = vec![
            result("Ripe Apple", 0.1),
            result("Unripe Apple", 0.7),
            result("Overripe Apple", 0.2),
        ];
        let sorted = sorted_by_probability(&predictions);
        let labels: Vec<&str> = sorted.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Unripe Apple", "Overripe Apple", "Ripe Apple"]);
    }

    #[test]
    fn label_format() {
        let label = ClassLabel {
            ripeness: Ripeness::Overripe,
            fruit: FruitType::Strawberry,
        };
        assert_eq!(label.to_string(), "Overripe Strawberry");
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(palette_color(0), "#8884d8");
        assert_eq!(palette_color(5), "#8884d8");
        assert_eq!(palette_color(6), "#82ca9d");
    }

    #[test]
    fn predictor_trait_object() {
        let mut predictor: Box<dyn Predictor> =
            Box::new(SyntheticPredictor::new(StdRng::seed_from_u64(1), 0.001));
        let image = ImageInfo::new("pear.png", "image/png", 10);
        let predictions = predictor.predict(&image);
        assert!((total_probability(&predictions) - 1.0).abs() < 1e-9);
    }
}
