//! End-to-end tests for the letter classification demo:
//! - Training on the three canonical glyphs terminates within the iteration cap
//! - Perfect patterns classify to their own class
//! - Hand-perturbed patterns still classify to the intended class
//! - Confidence vectors have the right shape and range

use glyph_nn::{
    Classifier, ExampleSet, GlyphGrid, Network, PredictionReporter, TrainConfig, TrainingSummary,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const LETTER_A: &str = concat!(
    ".#####.",
    "#.....#",
    "#.....#",
    "#######",
    "#.....#",
    "#.....#",
    "#.....#"
);

const LETTER_B: &str = concat!(
    "######.",
    "#.....#",
    "#.....#",
    "######.",
    "#.....#",
    "#.....#",
    "######."
);

const LETTER_C: &str = concat!(
    "#######",
    "#......",
    "#......",
    "#......",
    "#......",
    "#......",
    "#######"
);

const MODIFIED_A: &str = concat!(
    ".#####.",
    "#.....#",
    "#.....#",
    "###.###",
    "#.....#",
    "#.....#",
    "#.....#"
);

const MODIFIED_B: &str = concat!(
    "######.",
    "#.....#",
    "#.....#",
    "######.",
    "#.....#",
    "#....##",
    "######."
);

const MODIFIED_C: &str = concat!(
    "#######",
    "#......",
    "#..#...",
    "#......",
    "#......",
    "#......",
    "#######"
);

const CUSTOM_A: &str = concat!(
    ".#####.",
    "#....##",
    "#.....#",
    "#######",
    "#.....#",
    "#.....#",
    "#.....#"
);

fn canonical_set(grid: &GlyphGrid) -> ExampleSet {
    ExampleSet::build(grid, &[("A", LETTER_A), ("B", LETTER_B), ("C", LETTER_C)]).unwrap()
}

fn trained_network(examples: &ExampleSet, seed: u64) -> (Network, TrainingSummary) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = Network::perceptron(&[49, 20, 3], &mut rng);
    let config = TrainConfig {
        shuffle: false,
        log_every: 0,
        ..TrainConfig::default()
    };
    let summary = network.train(examples.examples(), &config).unwrap();
    (network, summary)
}

fn best_class(reporter: &PredictionReporter, network: &Network, pattern: &[f64]) -> String {
    let confidences = network.activate(pattern).unwrap();
    let ranked = reporter.rank(&confidences).unwrap();
    ranked[0].class_name.clone()
}

#[test]
fn test_training_stops_within_iteration_cap() {
    let grid = GlyphGrid::new(7, 7);
    let examples = canonical_set(&grid);
    let (_, summary) = trained_network(&examples, 1234);

    let config = TrainConfig::default();
    assert!(
        summary.final_error <= config.target_error
            || summary.iterations_run == config.max_iterations,
        "run must stop at the target error or the iteration cap, got error {} after {} iterations",
        summary.final_error,
        summary.iterations_run
    );
    assert!(summary.iterations_run >= 1);
}

#[test]
fn test_training_reaches_low_error_on_three_letters() {
    let grid = GlyphGrid::new(7, 7);
    let examples = canonical_set(&grid);
    let (_, summary) = trained_network(&examples, 1234);

    // Three separable patterns and 5000 passes leave plenty of headroom.
    assert!(
        summary.final_error < 0.05,
        "expected a well-trained network, final error was {}",
        summary.final_error
    );
}

#[test]
fn test_confidence_vector_shape() {
    let grid = GlyphGrid::new(7, 7);
    let examples = canonical_set(&grid);
    let (network, _) = trained_network(&examples, 1234);

    for example in examples.examples() {
        let confidences = network.activate(&example.input).unwrap();
        assert_eq!(confidences.len(), 3);
        for confidence in confidences {
            assert!((0.0..=1.0).contains(&confidence));
        }
    }
}

#[test]
fn test_perfect_letters_classify_correctly() {
    let grid = GlyphGrid::new(7, 7);
    let examples = canonical_set(&grid);
    let (network, _) = trained_network(&examples, 1234);
    let reporter = PredictionReporter::new(grid, examples.class_names());

    for (name, example) in examples.class_names().iter().zip(examples.examples()) {
        assert_eq!(&best_class(&reporter, &network, &example.input), name);
    }
}

#[test]
fn test_modified_letters_classify_correctly() {
    let grid = GlyphGrid::new(7, 7);
    let examples = canonical_set(&grid);
    let (network, _) = trained_network(&examples, 1234);
    let reporter = PredictionReporter::new(grid, examples.class_names());

    let cases = [("A", MODIFIED_A), ("B", MODIFIED_B), ("C", MODIFIED_C)];
    for (expected, glyph) in cases {
        let pattern = grid.encode(glyph).unwrap();
        assert_eq!(best_class(&reporter, &network, &pattern), expected);
    }
}

#[test]
fn test_custom_variant_classifies_as_a() {
    let grid = GlyphGrid::new(7, 7);
    let examples = canonical_set(&grid);
    let (network, _) = trained_network(&examples, 99);
    let reporter = PredictionReporter::new(grid, examples.class_names());

    let pattern = grid.encode(CUSTOM_A).unwrap();
    assert_eq!(best_class(&reporter, &network, &pattern), "A");
}

#[test]
fn test_report_for_trained_letter() {
    let grid = GlyphGrid::new(7, 7);
    let examples = canonical_set(&grid);
    let (network, _) = trained_network(&examples, 1234);
    let reporter = PredictionReporter::new(grid, examples.class_names());

    let pattern = &examples.examples()[0].input;
    let confidences = network.activate(pattern).unwrap();
    let report = reporter.report("A (perfect)", &confidences, pattern).unwrap();

    assert!(report.starts_with("A (perfect):\nBest guess: A ("));
    assert!(report.contains("All predictions:\n"));
    assert!(report.contains("Pattern:\n  .#####.\n"));
    assert!(report.ends_with("#.....#\n"));
}
