pub mod grid;

pub use grid::GlyphGrid;
