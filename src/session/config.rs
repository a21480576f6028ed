//! Configuration for a play session

use serde::{Deserialize, Serialize};

/// Who plays O
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two people share the keyboard
    HumanVsHuman,
    /// A person plays X against the minimax search as O
    HumanVsAi,
}

impl GameMode {
    pub fn against_ai(self) -> bool {
        self == GameMode::HumanVsAi
    }
}

/// Options controlling a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed mode for every game; `None` asks before each game
    pub mode: Option<GameMode>,

    /// Clear the screen before drawing the board
    pub clear_screen: bool,

    /// Print the rules and the numbered grid at the start of each game
    pub show_instructions: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: None,
            clear_screen: true,
            show_instructions: true,
        }
    }
}

impl SessionConfig {
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn with_instructions(mut self, show_instructions: bool) -> Self {
        self.show_instructions = show_instructions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"mode": "human-vs-ai"}"#).unwrap();
        assert_eq!(config.mode, Some(GameMode::HumanVsAi));
        assert!(config.clear_screen);
        assert!(config.show_instructions);
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(
            serde_json::to_string(&GameMode::HumanVsHuman).unwrap(),
            r#""human-vs-human""#
        );
        assert!(GameMode::HumanVsAi.against_ai());
        assert!(!GameMode::HumanVsHuman.against_ai());
    }
}
