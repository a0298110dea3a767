use std::process;

use glyph_nn::{
    logging, Classifier, ExampleSet, GlyphGrid, Network, PredictionReporter, TrainConfig,
};
use rand::thread_rng;

const GRID_WIDTH: usize = 7;
const GRID_HEIGHT: usize = 7;
const HIDDEN_NEURONS: usize = 20;

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
    "###.###", // pixel missing
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
    "#....##", // extra pixel
    "######."
);

const MODIFIED_C: &str = concat!(
    "#######",
    "#......",
    "#..#...", // added noise
    "#......",
    "#......",
    "#......",
    "#######"
);

const CUSTOM_A: &str = concat!(
    ".#####.",
    "#....##", // slightly different A
    "#.....#",
    "#######",
    "#.....#",
    "#.....#",
    "#.....#"
);

fn main() {
    if let Err(err) = run() {
        eprintln!("letter demo failed: {err}");
        process::exit(1);
    }
}

fn run() -> glyph_nn::Result<()> {
    let grid = GlyphGrid::new(GRID_WIDTH, GRID_HEIGHT);
    let examples = ExampleSet::build(
        &grid,
        &[("A", LETTER_A), ("B", LETTER_B), ("C", LETTER_C)],
    )?;
    let reporter = PredictionReporter::new(grid, examples.class_names());

    println!("Creating neural network...");
    let mut rng = thread_rng();
    let mut network = Network::perceptron(
        &[grid.cell_count(), HIDDEN_NEURONS, examples.num_classes()],
        &mut rng,
    );

    println!("Training network...");
    let config = TrainConfig::default();
    let summary = network.train(examples.examples(), &config)?;

    println!("Training completed!");
    println!("Final error: {:.6}", summary.final_error);
    println!("Iterations: {}", summary.iterations_run);

    if let Err(err) = logging::log_training_run(&config, &summary) {
        eprintln!("failed to record training run: {err}");
    }

    println!("\n=== Testing with perfect patterns ===");
    for (name, example) in examples.class_names().iter().zip(examples.examples()) {
        report_pattern(&reporter, &network, &format!("{name} (perfect)"), &example.input)?;
    }

    println!("\n=== Testing with modified patterns ===");
    report_glyph(&grid, &reporter, &network, "A (modified)", MODIFIED_A)?;
    report_glyph(&grid, &reporter, &network, "B (modified)", MODIFIED_B)?;
    report_glyph(&grid, &reporter, &network, "C (modified)", MODIFIED_C)?;

    println!("\n=== Testing custom pattern ===");
    report_glyph(&grid, &reporter, &network, "Custom A variant", CUSTOM_A)?;

    Ok(())
}

/// Test hook for arbitrary glyph strings: encode, classify, report.
fn report_glyph(
    grid: &GlyphGrid,
    reporter: &PredictionReporter,
    network: &Network,
    label: &str,
    glyph: &str,
) -> glyph_nn::Result<()> {
    let pattern = grid.encode(glyph)?;
    report_pattern(reporter, network, label, &pattern)
}

fn report_pattern(
    reporter: &PredictionReporter,
    network: &Network,
    label: &str,
    pattern: &[f64],
) -> glyph_nn::Result<()> {
    let confidences = network.activate(pattern)?;
    let predictions = reporter.rank(&confidences)?;
    if let Err(err) = logging::log_prediction(label, &predictions) {
        eprintln!("failed to record prediction: {err}");
    }
    println!();
    print!("{}", reporter.report(label, &confidences, pattern)?);
    Ok(())
}
