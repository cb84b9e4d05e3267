// src/pdf/metrics.rs
//
// Advance widths of the standard Helvetica faces (AFM units per 1000 em) and
// greedy line wrapping against a column width.

/// Printable ASCII, `' '` through `'~'`.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used for anything outside printable ASCII.
const FALLBACK: u16 = 556;

const MM_PER_PT: f32 = 25.4 / 72.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
}

impl Face {
    fn advance(self, c: char) -> u16 {
        let table = match self {
            Face::Regular => &HELVETICA,
            Face::Bold => &HELVETICA_BOLD,
        };
        match c {
            ' '..='~' => table[c as usize - ' ' as usize],
            _ => FALLBACK,
        }
    }
}

/// Rendered width of `text` in mm at `size` pt.
pub fn text_width(text: &str, size: f32, face: Face) -> f32 {
    let units: u32 = text.chars().map(|c| face.advance(c) as u32).sum();
    units as f32 / 1000.0 * size * MM_PER_PT
}

/// Break points: whitespace between words, and after a hyphen inside one.
/// The flag says whether the piece joins the previous one without a space.
fn pieces(text: &str) -> Vec<(&str, bool)> {
    let mut out = Vec::new();
    for word in text.split_whitespace() {
        for (i, part) in word.split_inclusive('-').enumerate() {
            out.push((part, i > 0));
        }
    }
    out
}

/// Split a piece that is wider than `max_w` on its own, keeping at least
/// one char per line.
fn split_chars(piece: &str, max_w: f32, size: f32, face: Face) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for c in piece.chars() {
        let mut next = line.clone();
        next.push(c);
        if !line.is_empty() && text_width(&next, size, face) > max_w {
            lines.push(std::mem::take(&mut line));
            line.push(c);
        } else {
            line = next;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Greedy wrap of `text` into lines no wider than `max_w` mm. Always yields
/// at least one line (empty for blank text).
pub fn wrap_text(text: &str, max_w: f32, size: f32, face: Face) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for (piece, glued) in pieces(text) {
        let candidate = match (line.is_empty(), glued) {
            (true, _) => piece.to_string(),
            (false, true) => format!("{line}{piece}"),
            (false, false) => format!("{line} {piece}"),
        };
        if text_width(&candidate, size, face) <= max_w {
            line = candidate;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if text_width(piece, size, face) <= max_w {
            line = piece.to_string();
        } else {
            let mut parts = split_chars(piece, max_w, size, face);
            line = parts.pop().unwrap_or_default();
            lines.extend(parts);
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
