//! Text rendering of the board

use ziffi_core::{Engine, Square};

/// The presentation view of `engine` as text, with rank and file labels.
///
/// Pieces use their Unicode symbols, empty squares a dot. `highlights` marks
/// canonical squares (selection targets) with `*` when empty and brackets
/// around the piece otherwise.
pub fn render_board(engine: &Engine, highlights: &[Square]) -> String {
    let flipped = engine.is_flipped();
    let board = engine.board(flipped);
    let files: Vec<char> = if flipped {
        ('a'..='h').rev().collect()
    } else {
        ('a'..='h').collect()
    };

    let mut out = String::new();
    for row in 0..8 {
        let rank = if flipped { row + 1 } else { 8 - row };
        out.push_str(&format!("{rank} "));
        for col in 0..8 {
            let canonical = if flipped { (7 - row, 7 - col) } else { (row, col) };
            let marked = highlights
                .iter()
                .any(|sq| (sq.row, sq.col) == canonical);
            let cell = match (board.get(row, col), marked) {
                (Some(pc), true) => format!("[{}]", pc.symbol()),
                (Some(pc), false) => format!(" {} ", pc.symbol()),
                (None, true) => " * ".to_string(),
                (None, false) => " . ".to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for f in files {
        out.push_str(&format!(" {f} "));
    }
    out.push('\n');
    out
}
