//! Output formatting for the CLI

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:22} {}", format!("{}:", key), value);
}

/// Row labels of the Q-grid, one per state in index order
pub const STATE_LABELS: [&str; 4] = ["(0,0)", "(0,1)", "(1,0)", "(1,1)"];

/// Render the 4x2 Q-grid as a labeled text table
pub fn format_q_grid(grid: &[[f64; 2]; 4]) -> String {
    let mut out = String::new();
    out.push_str("  state  |         L         R\n");
    out.push_str("  -------+--------------------\n");
    for (label, row) in STATE_LABELS.iter().zip(grid) {
        out.push_str(&format!("  {label}  | {:9.5} {:9.5}\n", row[0], row[1]));
    }
    out
}

/// Print the Q-grid with a subsection heading
pub fn print_q_grid(grid: &[[f64; 2]; 4]) {
    println!("\nLearned Q-values (state x action)");
    print!("{}", format_q_grid(grid));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q_grid_lists_states_in_index_order() {
        let grid = [[0.0, 0.1], [0.2, 0.3], [0.4, 0.5], [0.6, 0.7]];
        let rendered = format_q_grid(&grid);
        let positions: Vec<usize> = STATE_LABELS
            .iter()
            .map(|label| rendered.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(rendered.contains("0.70000"));
    }
}
