use heapless::String;

use segclock_core::display::DisplaySegments;

// Segment assignment inside a 7-bit glyph field, matching the encoder's
// table: top, top-left, top-right, middle, bottom-left, bottom-right,
// bottom.
const SEG_TOP: u32 = 1 << 0;
const SEG_TOP_LEFT: u32 = 1 << 1;
const SEG_TOP_RIGHT: u32 = 1 << 2;
const SEG_MIDDLE: u32 = 1 << 3;
const SEG_BOTTOM_LEFT: u32 = 1 << 4;
const SEG_BOTTOM_RIGHT: u32 = 1 << 5;
const SEG_BOTTOM: u32 = 1 << 6;

/// Rendered face: three rows of segment art plus the meridiem tag.
pub struct FaceImage {
    pub rows: [String<24>; 3],
    pub meridiem: &'static str,
}

/// Draws a latched display word as three rows of ASCII segment art.
///
/// Each digit cell is three columns wide; a dark cell (the suppressed
/// leading hours digit) renders as blank columns, exactly the zero bits
/// it carries on the wire.
pub fn render(pattern: DisplaySegments) -> FaceImage {
    let mut rows: [String<24>; 3] = [String::new(), String::new(), String::new()];

    // Fields walk the face left to right: tens-of-hours down to
    // ones-of-minutes, with the colon between the pairs.
    for (pos, field) in [3usize, 2, 1, 0].iter().enumerate() {
        match pos {
            2 => push_colon(&mut rows),
            0 => {}
            _ => push_gap(&mut rows),
        }
        push_cell(&mut rows, pattern.digit_field(*field));
    }

    let meridiem = if pattern.am_lit() {
        "AM"
    } else if pattern.pm_lit() {
        "PM"
    } else {
        ""
    };

    FaceImage { rows, meridiem }
}

fn push_cell(rows: &mut [String<24>; 3], glyph: u32) {
    let seg = |mask: u32, lit: char| if glyph & mask != 0 { lit } else { ' ' };

    rows[0].push(' ').unwrap();
    rows[0].push(seg(SEG_TOP, '_')).unwrap();
    rows[0].push(' ').unwrap();

    rows[1].push(seg(SEG_TOP_LEFT, '|')).unwrap();
    rows[1].push(seg(SEG_MIDDLE, '_')).unwrap();
    rows[1].push(seg(SEG_TOP_RIGHT, '|')).unwrap();

    rows[2].push(seg(SEG_BOTTOM_LEFT, '|')).unwrap();
    rows[2].push(seg(SEG_BOTTOM, '_')).unwrap();
    rows[2].push(seg(SEG_BOTTOM_RIGHT, '|')).unwrap();
}

fn push_gap(rows: &mut [String<24>; 3]) {
    for row in rows.iter_mut() {
        row.push(' ').unwrap();
    }
}

fn push_colon(rows: &mut [String<24>; 3]) {
    rows[0].push(' ').unwrap();
    rows[1].push(':').unwrap();
    rows[2].push(' ').unwrap();
}
