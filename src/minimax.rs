//! Exhaustive minimax search for move selection
//!
//! O is the maximizing side and X the minimizing side. Scores come from
//! [`Board::evaluate`] and are adjusted by depth so that faster wins and slower
//! losses are preferred. The whole remaining game tree is searched; there is
//! no pruning and no caching.
//!
//! The search mutates a single scratch board in place and restores every
//! tentative placement before returning.

use crate::tictactoe::{Board, O_WIN_SCORE, Player, Position, X_WIN_SCORE};

/// Starting bound for the maximizing side, below any reachable score
pub const SEARCH_FLOOR: i32 = -1000;

/// Starting bound for the minimizing side, above any reachable score
pub const SEARCH_CEILING: i32 = 1000;

/// Outcome of a top-level move search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// The chosen cell
    pub position: Position,
    /// Depth-adjusted minimax value of the chosen cell (O's point of view)
    pub score: i32,
    /// Number of positions visited by the recursive search
    pub nodes: u64,
}

/// Recursive minimax evaluator that counts the positions it visits.
#[derive(Debug, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited since this evaluator was created
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `board` with O to move when `maximizing`, X otherwise.
    ///
    /// `board` is used as scratch space and is identical on return.
    pub fn search(&mut self, board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        let score = board.evaluate();
        if score == O_WIN_SCORE {
            return score - depth;
        }
        if score == X_WIN_SCORE {
            return score + depth;
        }
        if board.is_full() {
            return 0;
        }

        let (mover, mut best) = if maximizing {
            (Player::O, SEARCH_FLOOR)
        } else {
            (Player::X, SEARCH_CEILING)
        };

        for position in board.empty_positions() {
            board.place_unchecked(position, mover);
            let value = self.search(board, depth + 1, !maximizing);
            board.undo(position);

            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }

    /// Minimax value of every empty cell if `player` were to take it, in scan
    /// order.
    pub fn evaluate_moves(&mut self, board: &Board, player: Player) -> Vec<(Position, i32)> {
        let mut scratch = *board;
        let next_maximizing = player == Player::X;

        board
            .empty_positions()
            .into_iter()
            .map(|position| {
                scratch.place_unchecked(position, player);
                let value = self.search(&mut scratch, 0, next_maximizing);
                scratch.undo(position);
                (position, value)
            })
            .collect()
    }

    /// Pick the best cell for `player`.
    ///
    /// The first cell with a strictly better value wins, so ties go to the
    /// lowest-numbered position. Returns `None` when the board has no empty
    /// cell.
    pub fn best_move_for(&mut self, board: &Board, player: Player) -> Option<SearchReport> {
        let start_nodes = self.nodes;
        let maximizing = player == Player::O;
        let mut best_value = if maximizing {
            SEARCH_FLOOR
        } else {
            SEARCH_CEILING
        };
        let mut best_move = None;

        for (position, value) in self.evaluate_moves(board, player) {
            let improves = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improves {
                best_value = value;
                best_move = Some(position);
            }
        }

        best_move.map(|position| SearchReport {
            position,
            score: best_value,
            nodes: self.nodes - start_nodes,
        })
    }
}

/// Best cell for O, the AI side
pub fn best_move(board: &Board) -> Option<Position> {
    best_move_for(board, Player::O).map(|report| report.position)
}

/// Best cell for either side, with search statistics
pub fn best_move_for(board: &Board, player: Player) -> Option<SearchReport> {
    Minimax::new().best_move_for(board, player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(picture: &str) -> Board {
        Board::from_picture(picture).unwrap()
    }

    #[test]
    fn test_terminal_scores_are_depth_adjusted() {
        let mut minimax = Minimax::new();

        let mut o_won = board("OOO XX. X..");
        assert_eq!(minimax.search(&mut o_won, 0, false), 10);
        assert_eq!(minimax.search(&mut o_won, 3, false), 7);

        let mut x_won = board("XXX OO. ...");
        assert_eq!(minimax.search(&mut x_won, 0, true), -10);
        assert_eq!(minimax.search(&mut x_won, 4, true), -6);

        let mut drawn = board("XOX XOO OXX");
        assert_eq!(minimax.search(&mut drawn, 2, true), 0);
    }

    #[test]
    fn test_search_restores_board() {
        let mut scratch = board("X.. .O. ..X");
        let before = scratch;
        Minimax::new().search(&mut scratch, 0, true);
        assert_eq!(scratch, before);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X .
        // O O .
        // X . .
        let report = best_move_for(&board("XX. OO. X.."), Player::O).unwrap();
        assert_eq!(report.position.number(), 6);
        assert_eq!(report.score, 10);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X X .
        // . O .
        // . . .
        assert_eq!(best_move(&board("XX. .O. ...")).map(Position::number), Some(3));
    }

    #[test]
    fn test_x_completes_line() {
        // X X .
        // O O .
        // . . .
        let report = best_move_for(&board("XX. OO. ..."), Player::X).unwrap();
        assert_eq!(report.position.number(), 3);
        assert_eq!(report.score, -10);
    }

    #[test]
    fn test_ties_keep_first_cell_in_scan_order() {
        // Every corner draws against a centre opening; edges lose.
        assert_eq!(best_move(&board("... .X. ...")).map(Position::number), Some(1));
    }

    #[test]
    fn test_last_cell() {
        // X O X
        // O X O
        // O X .
        let report = best_move_for(&board("XOX OXO OX."), Player::X).unwrap();
        assert_eq!(report.position.number(), 9);
        assert_eq!(report.nodes, 1);
    }

    #[test]
    fn test_evaluate_moves_covers_every_empty_cell() {
        // X X .
        // . O .
        // . . .
        let values = Minimax::new().evaluate_moves(&board("XX. .O. ..."), Player::O);
        let cells: Vec<u8> = values.iter().map(|(p, _)| p.number()).collect();
        assert_eq!(cells, vec![3, 4, 6, 7, 8, 9]);
        // Not blocking lets X complete the top row on the next ply
        for &(position, value) in &values[1..] {
            assert_eq!(value, -9, "cell {position}");
        }
        assert!(values[0].1 > -9);
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(best_move(&board("XOX XOO OXX")), None);
    }
}
