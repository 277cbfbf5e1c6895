//! Chord tokens — extraction from raw text and normalization for comparison.

pub mod extractor;
pub mod normalize;
pub mod note;
pub mod token;

pub use extractor::{extract_chords, ChordExtractor};
pub use normalize::normalize_chord;
pub use token::ChordToken;
