use common::games::tictactoe::PlayerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// `players` is `None` for a bare `start`, which falls back to the configured defaults.
    Start { players: Option<(PlayerKind, PlayerKind)> },
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadParameters;

impl std::fmt::Display for BadParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bad parameters!")
    }
}

impl std::error::Error for BadParameters {}

pub fn parse_command(line: &str) -> Result<MenuCommand, BadParameters> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["exit"] => Ok(MenuCommand::Exit),
        ["start"] => Ok(MenuCommand::Start { players: None }),
        ["start", x, o] => {
            let x = x.parse::<PlayerKind>().map_err(|_| BadParameters)?;
            let o = o.parse::<PlayerKind>().map_err(|_| BadParameters)?;
            Ok(MenuCommand::Start {
                players: Some((x, o)),
            })
        }
        _ => Err(BadParameters),
    }
}
