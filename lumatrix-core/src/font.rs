//! Bitmap glyphs for the clock face.
//!
//! Digits are 3 columns wide, the colon is a single column; all glyphs
//! are 5 rows tall. Characters without a glyph render as nothing.

/// Rows in every glyph
pub const GLYPH_HEIGHT: usize = 5;

/// Cursor advance after a digit (3 columns + 1 spacer)
const DIGIT_ADVANCE: u8 = 4;

/// Cursor advance after the colon (narrow glyph, no trailing gap)
const COLON_ADVANCE: u8 = 2;

/// One renderable character's pixel mask
///
/// Rows are strings of `'0'`/`'1'` bits, top to bottom, all the same
/// width within a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Bit rows
    pub rows: [&'static str; GLYPH_HEIGHT],
    /// Columns to advance the layout cursor after stamping
    pub advance: u8,
}

const fn digit(rows: [&'static str; GLYPH_HEIGHT]) -> Glyph {
    Glyph {
        rows,
        advance: DIGIT_ADVANCE,
    }
}

static DIGIT_0: Glyph = digit(["111", "101", "101", "101", "111"]);
static DIGIT_1: Glyph = digit(["010", "110", "010", "010", "111"]);
static DIGIT_2: Glyph = digit(["111", "001", "111", "100", "111"]);
static DIGIT_3: Glyph = digit(["111", "001", "111", "001", "111"]);
static DIGIT_4: Glyph = digit(["101", "101", "111", "001", "001"]);
static DIGIT_5: Glyph = digit(["111", "100", "111", "001", "111"]);
static DIGIT_6: Glyph = digit(["111", "100", "111", "101", "111"]);
static DIGIT_7: Glyph = digit(["111", "001", "001", "010", "010"]);
static DIGIT_8: Glyph = digit(["111", "101", "111", "101", "111"]);
static DIGIT_9: Glyph = digit(["111", "101", "111", "001", "111"]);

static COLON: Glyph = Glyph {
    rows: ["0", "1", "0", "1", "0"],
    advance: COLON_ADVANCE,
};

/// Look up the glyph for a character
///
/// Unknown characters yield `None` and are skipped by the renderer.
pub fn glyph_for(c: char) -> Option<&'static Glyph> {
    match c {
        '0' => Some(&DIGIT_0),
        '1' => Some(&DIGIT_1),
        '2' => Some(&DIGIT_2),
        '3' => Some(&DIGIT_3),
        '4' => Some(&DIGIT_4),
        '5' => Some(&DIGIT_5),
        '6' => Some(&DIGIT_6),
        '7' => Some(&DIGIT_7),
        '8' => Some(&DIGIT_8),
        '9' => Some(&DIGIT_9),
        ':' => Some(&COLON),
        _ => None,
    }
}
