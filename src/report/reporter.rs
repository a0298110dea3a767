use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::glyph::grid::GlyphGrid;

/// A class name with the confidence the network assigned it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub class_name: String,
    pub confidence: f64,
}

/// Ranks confidences and renders the terminal report for one pattern.
///
/// Constructed once with the grid geometry and the class-name list; the
/// list order must match the index order of the classifier's output.
#[derive(Debug, Clone)]
pub struct PredictionReporter {
    grid: GlyphGrid,
    class_names: Vec<String>,
}

impl PredictionReporter {
    /// # Panics
    ///
    /// Panics if `class_names` is empty.
    pub fn new(grid: GlyphGrid, class_names: &[String]) -> PredictionReporter {
        assert!(!class_names.is_empty(), "reporter needs at least one class");
        PredictionReporter {
            grid,
            class_names: class_names.to_vec(),
        }
    }

    /// Pairs each confidence with its class by index and sorts descending.
    /// The sort is stable, so exactly equal confidences keep their class
    /// order and the first-listed class wins the tie.
    pub fn rank(&self, confidences: &[f64]) -> Result<Vec<Prediction>> {
        if confidences.len() != self.class_names.len() {
            return Err(Error::DimensionMismatch {
                expected: self.class_names.len(),
                actual: confidences.len(),
            });
        }
        let mut predictions: Vec<Prediction> = self
            .class_names
            .iter()
            .zip(confidences)
            .map(|(name, &confidence)| Prediction {
                class_name: name.clone(),
                confidence,
            })
            .collect();
        predictions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });
        Ok(predictions)
    }

    /// Renders the full report for one pattern: label header, best guess
    /// with its percentage, every class's percentage in ranked order, then
    /// the pattern redrawn as a `#`/`.` grid.
    pub fn report(&self, label: &str, confidences: &[f64], pattern: &[f64]) -> Result<String> {
        let predictions = self.rank(confidences)?;
        let rows = self.grid.render_lines(pattern)?;
        // the constructor rejects an empty class list, so rank returned
        // at least one entry
        let best = &predictions[0];

        let mut out = String::new();
        out.push_str(&format!("{label}:\n"));
        out.push_str(&format!(
            "Best guess: {} ({:.1}% confidence)\n",
            best.class_name,
            best.confidence * 100.0
        ));
        out.push_str("All predictions:\n");
        for prediction in &predictions {
            out.push_str(&format!(
                "  {}: {:.1}%\n",
                prediction.class_name,
                prediction.confidence * 100.0
            ));
        }
        out.push_str("Pattern:\n");
        for row in rows {
            out.push_str(&format!("  {row}\n"));
        }
        Ok(out)
    }
}
