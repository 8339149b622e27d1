use rand::SeedableRng;
use rand::rngs::StdRng;
use shared::prediction::{synthesize, top_prediction, total_probability};
use shared::{ImageInfo, Predictor, SyntheticPredictor};

#[test]
fn distributions_are_well_formed() {
    for seed in 0..2_000u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let predictions = synthesize(&mut rng, 0.001);

        assert!(!predictions.is_empty());
        assert!(predictions.len() == 3 || predictions.len() == 4);
        assert!(
            (total_probability(&predictions) - 1.0).abs() <= 1e-6,
            "seed {seed} sums to {}",
            total_probability(&predictions)
        );
        for p in &predictions {
            assert!((0.0..=1.0).contains(&p.probability), "seed {seed}: {p:?}");
        }

        let top = top_prediction(&predictions).unwrap();
        assert!(top.probability >= 0.65 && top.probability <= 0.951);
    }
}

#[test]
fn labels_are_unique() {
    for seed in 0..500u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let predictions = synthesize(&mut rng, 0.001);
        let mut labels: Vec<&str> = predictions.iter().map(|p| p.label.as_str()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), predictions.len());
    }
}

#[test]
fn predictor_ignores_image_contents() {
    let images = [
        ImageInfo::new("apple.jpg", "image/jpeg", 1),
        ImageInfo::new("", "image/png", 0),
        ImageInfo::new("huge.webp", "image/webp", u64::MAX),
    ];
    let mut predictor = SyntheticPredictor::new(StdRng::seed_from_u64(42), 0.001);
    for image in &images {
        let predictions = predictor.predict(image);
        assert!((total_probability(&predictions) - 1.0).abs() <= 1e-6);
    }
}

#[test]
fn seeded_predictors_agree() {
    let image = ImageInfo::new("mango.png", "image/png", 2048);
    let mut a = SyntheticPredictor::new(StdRng::seed_from_u64(9), 0.001);
    let mut b = SyntheticPredictor::new(StdRng::seed_from_u64(9), 0.001);
    assert_eq!(a.predict(&image), b.predict(&image));
}
