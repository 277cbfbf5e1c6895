//! Plain-text rendering of a chord map, for pasting into notes or chat.

use super::ChordMap;

/// Repeat-sign glyphs wrapped around verse and chorus.
pub const REPEAT_OPEN: &str = "𝄆";
pub const REPEAT_CLOSE: &str = "𝄇";

/// Render `map` in the clipboard layout. The title is upper-cased.
pub fn render_text(map: &ChordMap) -> String {
    format!(
        "{title}\n\
         Tonalità: {key}\n\
         Tempo: {tempo}\n\
         \n\
         INTRO: {intro}\n\
         \n\
         VERSE (A): {open} {verse} {close}\n\
         CHORUS (B): {open} {chorus} {close}\n\
         \n\
         STRUTTURA: {structure}\n\
         \n\
         BRIDGE: {bridge}\n\
         OUTRO: {outro}",
        title = map.title.to_uppercase(),
        key = map.key,
        tempo = map.tempo,
        intro = map.intro,
        verse = map.verse,
        chorus = map.chorus,
        structure = map.structure,
        bridge = map.bridge,
        outro = map.outro,
        open = REPEAT_OPEN,
        close = REPEAT_CLOSE,
    )
}
