//! Chordmap — infers a chord map (song sections and arrangement) from the
//! noisy OCR text of a musical score.

pub mod chord;
pub mod config;
pub mod error;
pub mod map;
pub mod metadata;
pub mod section;
pub mod sequence;

pub use error::{Error, Result};
pub use map::{analyze, ChordMap, ChordMapper};
