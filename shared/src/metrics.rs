//! Published evaluation figures for the ripeness classifier, shown on the
//! dashboard's analytics tab.

use crate::prediction::Ripeness;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassMetrics {
    pub class: Ripeness,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochRecord {
    pub epoch: u32,
    pub train_acc: f64,
    pub val_acc: f64,
    pub train_loss: f64,
    pub val_loss: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetSplit {
    pub training: u32,
    pub validation: u32,
    pub test: u32,
}

pub const CLASS_METRICS: [ClassMetrics; 3] = [
    ClassMetrics {
        class: Ripeness::Unripe,
        precision: 0.93,
        recall: 0.91,
        f1: 0.92,
        accuracy: 0.94,
    },
    ClassMetrics {
        class: Ripeness::Ripe,
        precision: 0.95,
        recall: 0.97,
        f1: 0.96,
        accuracy: 0.96,
    },
    ClassMetrics {
        class: Ripeness::Overripe,
        precision: 0.89,
        recall: 0.87,
        f1: 0.88,
        accuracy: 0.91,
    },
];

pub const TRAINING_HISTORY: [EpochRecord; 6] = [
    EpochRecord {
        epoch: 1,
        train_acc: 0.65,
        val_acc: 0.64,
        train_loss: 0.78,
        val_loss: 0.80,
    },
    EpochRecord {
        epoch: 5,
        train_acc: 0.78,
        val_acc: 0.75,
        train_loss: 0.52,
        val_loss: 0.56,
    },
    EpochRecord {
        epoch: 10,
        train_acc: 0.85,
        val_acc: 0.82,
        train_loss: 0.38,
        val_loss: 0.42,
    },
    EpochRecord {
        epoch: 15,
        train_acc: 0.89,
        val_acc: 0.86,
        train_loss: 0.29,
        val_loss: 0.34,
    },
    EpochRecord {
        epoch: 20,
        train_acc: 0.92,
        val_acc: 0.89,
        train_loss: 0.23,
        val_loss: 0.27,
    },
    EpochRecord {
        epoch: 25,
        train_acc: 0.94,
        val_acc: 0.91,
        train_loss: 0.18,
        val_loss: 0.22,
    },
];

/// Rows are actual classes, columns predicted, both in [`Ripeness`] order.
pub const CONFUSION_MATRIX: [[u32; 3]; 3] = [[45, 3, 2], [2, 48, 0], [1, 4, 45]];

pub const CLASS_DISTRIBUTION: [(Ripeness, u32); 3] = [
    (Ripeness::Unripe, 150),
    (Ripeness::Ripe, 180),
    (Ripeness::Overripe, 140),
];

pub const DATASET: DatasetSplit = DatasetSplit {
    training: 470,
    validation: 120,
    test: 150,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
}

pub fn summary(metrics: &[ClassMetrics]) -> Summary {
    let n = metrics.len().max(1) as f64;
    let mean = |f: fn(&ClassMetrics) -> f64| metrics.iter().map(f).sum::<f64>() / n;
    Summary {
        precision: mean(|m| m.precision),
        recall: mean(|m| m.recall),
        f1: mean(|m| m.f1),
        accuracy: mean(|m| m.accuracy),
    }
}

/// Share of the diagonal for each actual class.
pub fn per_class_recall(matrix: &[[u32; 3]; 3]) -> [f64; 3] {
    let mut recall = [0.0; 3];
    for (i, row) in matrix.iter().enumerate() {
        let total: u32 = row.iter().sum();
        if total > 0 {
            recall[i] = f64::from(row[i]) / f64::from(total);
        }
    }
    recall
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_matches_published_averages() {
        let s = summary(&CLASS_METRICS);
        assert!((s.precision - 0.9233).abs() < 1e-3);
        assert!((s.recall - 0.9167).abs() < 1e-3);
        assert!((s.f1 - 0.92).abs() < 1e-9);
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        assert_eq!(summary(&[]).precision, 0.0);
    }

    #[test]
    fn confusion_recall() {
        let recall = per_class_recall(&CONFUSION_MATRIX);
        assert!((recall[0] - 0.9).abs() < 1e-9);
        assert!((recall[1] - 0.96).abs() < 1e-9);
        assert!((recall[2] - 0.9).abs() < 1e-9);
    }

    #[test]
    fn distribution_totals_training_set() {
        let total: u32 = CLASS_DISTRIBUTION.iter().map(|(_, n)| n).sum();
        assert_eq!(total, DATASET.training);
    }
}
