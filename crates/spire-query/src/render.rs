//! Text rendering of decoded spire results.

use spirelet::{CoreSpec, SpireGrid};

/// Render the spire as a text table, highest floor first.
///
/// Trap characters render verbatim; empty cells render as '.'.
pub fn render_grid(grid: &SpireGrid) -> String {
    let mut out = String::new();
    for row in grid.rows_top_down() {
        for cell in row {
            out.push(cell.unwrap_or('.'));
        }
        out.push('\n');
    }
    out
}

/// Render the core badge line: the tier name followed by one
/// `name magnitude%` entry per modifier, or `none` without a core.
pub fn render_core(core: Option<&CoreSpec>) -> String {
    let Some(core) = core else {
        return "none".to_string();
    };

    let mut line = core.tier.name().to_string();
    for modifier in &core.modifiers {
        line.push_str(&format!(" {} {}%", modifier.code.name(), modifier.magnitude));
    }
    line
}
