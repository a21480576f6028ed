//! Win counts that persist across the games of one session

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Wins per player, keyed by the player's label.
///
/// Both labels are present from construction and no other key is ever
/// inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    wins: BTreeMap<String, u32>,
}

impl ScoreTable {
    pub fn new() -> Self {
        let wins = [Player::X, Player::O]
            .into_iter()
            .map(|player| (player.label().to_string(), 0))
            .collect();
        ScoreTable { wins }
    }

    /// Count one more win for `player`. Draws are never recorded.
    pub fn record_win(&mut self, player: Player) {
        if let Some(count) = self.wins.get_mut(player.label()) {
            *count += 1;
        }
    }

    pub fn get(&self, player: Player) -> u32 {
        self.wins.get(player.label()).copied().unwrap_or(0)
    }

    /// `(label, wins)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.wins.iter().map(|(label, &count)| (label.as_str(), count))
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scores:")?;
        for (label, count) in self.iter() {
            writeln!(f, "{label}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let scores = ScoreTable::new();
        assert_eq!(scores.get(Player::X), 0);
        assert_eq!(scores.get(Player::O), 0);
        assert_eq!(scores.iter().count(), 2);
    }

    #[test]
    fn test_record_win() {
        let mut scores = ScoreTable::new();
        scores.record_win(Player::X);
        scores.record_win(Player::X);
        scores.record_win(Player::O);

        let collected: Vec<_> = scores.iter().collect();
        assert_eq!(collected, vec![("Player 1 (X)", 2), ("Player 2 (O)", 1)]);
    }

    #[test]
    fn test_display() {
        let mut scores = ScoreTable::new();
        scores.record_win(Player::O);
        assert_eq!(
            scores.to_string(),
            "Scores:\nPlayer 1 (X): 0\nPlayer 2 (O): 1\n"
        );
    }
}
