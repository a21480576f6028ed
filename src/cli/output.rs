//! Plain-text report formatting for CLI commands

const RULE_WIDTH: usize = 40;

/// A title framed by rules
pub fn section(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}")
}

/// A title underlined with a shorter rule
pub fn subsection(title: &str) -> String {
    format!("\n{title}\n{}", "-".repeat(title.len().max(8)))
}

/// An indented, aligned `key: value` line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {:16} {value}", format!("{key}:"))
}

/// Describe a depth-adjusted minimax score from O's point of view.
///
/// `score` is the value of a position right after a move, so a win found at
/// search depth `d` is `d + 1` plies away counting that move.
pub fn describe_score(score: i32) -> String {
    let plies = |depth: i32| {
        let n = depth + 1;
        if n == 1 {
            "1 ply".to_string()
        } else {
            format!("{n} plies")
        }
    };
    match score {
        s if s > 0 => format!("O wins in {}", plies(10 - s)),
        s if s < 0 => format!("X wins in {}", plies(10 + s)),
        _ => "draw".to_string(),
    }
}
