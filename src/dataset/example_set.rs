use crate::error::{Error, Result};
use crate::glyph::grid::GlyphGrid;

/// A feature vector paired with its one-hot target. Built once at startup
/// and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

/// Encoded training data under a fixed class ordering.
///
/// The target ordering, `class_names()` ordering, and the index ordering of
/// the classifier's output vector are all the same ordering; everything
/// downstream relies on that.
#[derive(Debug, Clone)]
pub struct ExampleSet {
    class_names: Vec<String>,
    examples: Vec<TrainingExample>,
}

impl ExampleSet {
    /// Encodes one glyph per class and pairs it with a one-hot target at
    /// that class's index. Entries are `(class_name, glyph)` in the order
    /// the classes should be reported.
    pub fn build(grid: &GlyphGrid, entries: &[(&str, &str)]) -> Result<ExampleSet> {
        if entries.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }

        let mut class_names: Vec<String> = Vec::with_capacity(entries.len());
        for (name, _) in entries {
            if class_names.iter().any(|existing| existing == name) {
                return Err(Error::DuplicateClass((*name).to_string()));
            }
            class_names.push((*name).to_string());
        }

        let mut examples = Vec::with_capacity(entries.len());
        for (index, (_, glyph)) in entries.iter().enumerate() {
            let input = grid.encode(glyph)?;
            let mut target = vec![0.0; entries.len()];
            target[index] = 1.0;
            examples.push(TrainingExample { input, target });
        }

        Ok(ExampleSet {
            class_names,
            examples,
        })
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn num_classes(&self) -> usize {
        self.class_names.len()
    }
}
