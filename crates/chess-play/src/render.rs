//! Text rendering of a game for the terminal.

use chess_engine::Game;

/// The board followed by a status line: whose turn it is, or the label
/// of the current state when there is one.
pub fn render(game: &Game) -> String {
    let to_move = game.current_player();
    let status = match (game.state_label(), game.is_game_over()) {
        ("", _) => format!("{} to move", to_move),
        (label, true) => label.to_string(),
        (label, false) => format!("{} {} to move", label, to_move),
    };
    format!("{}\n{}", game.board(), status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Move, Square};

    #[test]
    fn starting_position() {
        let text = render(&Game::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
        assert_eq!(lines[9], "White to move");
    }

    #[test]
    fn check_and_end_of_game_labels() {
        let sq = |row, col| Square::new(row, col).unwrap();
        let mut game = Game::from_fen("4k3/1P6/8/8/8/8/8/4K3 w").unwrap();
        assert!(game.apply_move(Move::new(sq(1, 1), sq(0, 1))));
        assert!(render(&game).ends_with("Check! Black to move"));

        let game = Game::from_fen("k7/2Q5/1K6/8/8/8/8/8 b").unwrap();
        assert!(render(&game).ends_with("\nDraw!"));
    }
}
