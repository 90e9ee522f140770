use std::io::{self, BufRead, Write};
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{
    Board, Outcome, PlaceError, PlayerKind, Position, TicTacToeGameState,
};
use common::log;

use crate::config::GameConfig;
use crate::input::parse_coordinates;
use crate::menu::{BadParameters, MenuCommand, parse_command};

#[derive(Debug)]
pub enum TerminalError {
    Io(io::Error),
    Place(PlaceError),
}

impl std::fmt::Display for TerminalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalError::Io(e) => write!(f, "Terminal IO error: {}", e),
            TerminalError::Place(e) => write!(f, "Illegal move: {}", e),
        }
    }
}

impl std::error::Error for TerminalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerminalError::Io(e) => Some(e),
            TerminalError::Place(e) => Some(e),
        }
    }
}

impl From<io::Error> for TerminalError {
    fn from(e: io::Error) -> Self {
        TerminalError::Io(e)
    }
}

impl From<PlaceError> for TerminalError {
    fn from(e: PlaceError) -> Self {
        TerminalError::Place(e)
    }
}

/// Menu and turn loop over any line source and sink.
pub struct TerminalGame<R: BufRead, W: Write> {
    input: R,
    output: W,
    rng: SessionRng,
    config: GameConfig,
}

impl<R: BufRead, W: Write> TerminalGame<R, W> {
    pub fn new(input: R, output: W, rng: SessionRng, config: GameConfig) -> Self {
        Self {
            input,
            output,
            rng,
            config,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs menu commands until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), TerminalError> {
        loop {
            write!(self.output, "Input command: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let players = match parse_command(&line) {
                Ok(MenuCommand::Exit) => return Ok(()),
                Ok(MenuCommand::Start { players }) => players.or_else(|| {
                    self.config
                        .default_players
                        .map(|defaults| (defaults.x, defaults.o))
                }),
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            let Some((player_x, player_o)) = players else {
                writeln!(self.output, "{}", BadParameters)?;
                continue;
            };

            if self.play(player_x, player_o)?.is_none() {
                log!("Input closed during a game");
                return Ok(());
            }
        }
    }

    /// Plays one game to the end. `None` if the input ran out first.
    pub fn play(
        &mut self,
        player_x: PlayerKind,
        player_o: PlayerKind,
    ) -> Result<Option<Outcome>, TerminalError> {
        log!("Starting game: X={} O={} seed={}", player_x, player_o, self.rng.seed());
        let mut state = TicTacToeGameState::new(player_x, player_o);

        loop {
            writeln!(self.output, "{}", state.board())?;

            let player = state.current_player();
            if player.strategy().is_some() {
                if self.config.announce_moves {
                    writeln!(self.output, "Making move level \"{}\"", player)?;
                }
                if self.config.bot_move_delay_ms > 0 {
                    std::thread::sleep(Duration::from_millis(self.config.bot_move_delay_ms));
                }
                state.play_bot_move(&mut self.rng)?;
            } else {
                let Some(position) = self.read_human_move(state.board())? else {
                    return Ok(None);
                };
                state.place_mark(position)?;
            }

            let status = state.status();
            if status.is_over() {
                writeln!(self.output, "{}", state.board())?;
                writeln!(self.output, "{}", status)?;
                if let Some(line) = state.winning_line() {
                    log!("{} won from {} to {}", line.mark, line.start, line.end);
                }
                return Ok(Some(status));
            }
        }
    }

    fn read_human_move(&mut self, board: &Board) -> Result<Option<Position>, TerminalError> {
        loop {
            write!(self.output, "Enter the coordinates: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_coordinates(&line) {
                Ok(position) if !board.is_empty_at(position) => {
                    writeln!(self.output, "This cell is occupied! Choose another one!")?;
                }
                Ok(position) => return Ok(Some(position)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultPlayers;

    fn run_session(script: &str, config: GameConfig) -> String {
        let mut game =
            TerminalGame::new(script.as_bytes(), Vec::new(), SessionRng::new(42), config);
        game.run().unwrap();
        String::from_utf8(game.into_output()).unwrap()
    }

    #[test]
    fn test_exit_stops_menu() {
        let output = run_session("exit\nstart hard hard\n", GameConfig::default());
        assert_eq!(output, "Input command: ");
    }

    #[test]
    fn test_bad_commands_are_reported() {
        let output = run_session("start\nplay\nstart easy\nexit\n", GameConfig::default());
        assert_eq!(output.matches("Bad parameters!").count(), 3);
    }

    #[test]
    fn test_human_game_x_wins() {
        let output = run_session(
            "start user user\n1 1\n2 1\n1 2\n2 2\n1 3\nexit\n",
            GameConfig::default(),
        );
        assert!(output.contains("| X X X |\n| O O _ |\n| _ _ _ |"));
        assert!(output.ends_with("X wins\nInput command: "));
    }

    #[test]
    fn test_human_input_errors() {
        let output = run_session(
            "start user user\nfoo bar\n4 1\n2 2\n2 2\n",
            GameConfig::default(),
        );
        assert!(output.contains("You should enter numbers!"));
        assert!(output.contains("Coordinates should be from 1 to 3!"));
        assert!(output.contains("This cell is occupied! Choose another one!"));
        assert!(!output.contains("wins"));
    }

    #[test]
    fn test_hard_vs_hard_is_draw() {
        let output = run_session("start hard hard\nexit\n", GameConfig::default());
        assert_eq!(output.matches("Making move level \"hard\"").count(), 9);
        assert!(output.contains("Draw\n"));
    }

    #[test]
    fn test_hard_beats_missed_block() {
        // O ignores X's open row, so the hard X must finish it.
        let output = run_session(
            "start hard user\n3 3\n3 2\nexit\n",
            GameConfig {
                announce_moves: false,
                ..GameConfig::default()
            },
        );
        assert!(!output.contains("Making move level"));
        assert!(output.contains("X wins\n"));
    }

    #[test]
    fn test_bare_start_uses_default_players() {
        let config = GameConfig {
            default_players: Some(DefaultPlayers {
                x: PlayerKind::Medium,
                o: PlayerKind::Easy,
            }),
            ..GameConfig::default()
        };
        let output = run_session("start\nexit\n", config);
        assert!(output.contains("Making move level \"medium\""));
        assert!(output.contains("Making move level \"easy\""));
        assert!(!output.contains("Bad parameters!"));
    }

    #[test]
    fn test_play_returns_outcome() {
        let mut game = TerminalGame::new(
            "".as_bytes(),
            Vec::new(),
            SessionRng::new(1),
            GameConfig::default(),
        );
        let outcome = game.play(PlayerKind::Easy, PlayerKind::Hard).unwrap();
        assert!(matches!(outcome, Some(Outcome::OWins) | Some(Outcome::Draw)));
    }
}
