//! Fixed-answer classifier backend
//!
//! Used in demos and tests where no model server is running, and as the
//! default backend when the `remote` feature is compiled out. It never
//! fails and never blocks.

use crate::error::Result;
use crate::rendering::raster::TargetGrid;
use crate::Classifier;

/// A classifier that always answers with the same digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineClassifier {
    label: u8,
}

impl OfflineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer with the given digit instead of 0. Values above 9 are clamped
    /// so the answer always stays a valid label.
    pub fn with_label(label: u8) -> Self {
        Self {
            label: label.min(9),
        }
    }
}

impl Classifier for OfflineClassifier {
    fn name(&self) -> &str {
        "offline"
    }

    fn classify(&self, _grid: &TargetGrid) -> Result<u8> {
        Ok(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_configured_label() {
        let classifier = OfflineClassifier::with_label(4);
        let grid = TargetGrid::zeroed();
        assert_eq!(classifier.classify(&grid).unwrap(), 4);
        assert_eq!(classifier.name(), "offline");
    }

    #[test]
    fn default_answers_zero_and_clamps() {
        let grid = TargetGrid::zeroed();
        assert_eq!(OfflineClassifier::new().classify(&grid).unwrap(), 0);
        assert_eq!(
            OfflineClassifier::with_label(99).classify(&grid).unwrap(),
            9
        );
    }
}
