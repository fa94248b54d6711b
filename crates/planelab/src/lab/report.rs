use std::fmt::Write as _;

use super::{Determinant, Sweep};

const COLUMNS: [&str; 4] = ["Epsilon", "Left", "Right", "Collinear"];
const CELL: usize = 13;

/// ASCII table of side counts per tolerance for one determinant.
pub fn format_table(sweep: &Sweep, det: Determinant) -> String {
    let rule = format!("+{}+", vec!["-".repeat(CELL + 2); COLUMNS.len()].join("+"));
    let mut out = String::new();
    let _ = writeln!(out, "{}", det.name());
    let _ = writeln!(out, "{rule}");
    let header: Vec<String> = COLUMNS.iter().map(|c| format!(" {c:>w$} ", w = CELL)).collect();
    let _ = writeln!(out, "|{}|", header.join("|"));
    let _ = writeln!(out, "{rule}");
    for (i, eps) in sweep.epsilons().iter().enumerate() {
        let c = sweep.counts(det, i);
        let _ = writeln!(
            out,
            "| {:>w$e} | {:>w$} | {:>w$} | {:>w$} |",
            eps,
            c.left,
            c.right,
            c.collinear,
            w = CELL
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}
