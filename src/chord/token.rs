//! Token type produced by the chord extractor.

/// A chord spelling found in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    /// The chord as written, e.g. `Em7`, `F#m`, `C/G`.
    pub symbol: String,
    /// Byte offset of the first character in the source text.
    pub offset: usize,
}

impl ChordToken {
    /// Token for `symbol` starting at byte `offset`.
    pub fn new(symbol: impl Into<String>, offset: usize) -> Self {
        Self {
            symbol: symbol.into(),
            offset,
        }
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.offset + self.symbol.len()
    }
}
