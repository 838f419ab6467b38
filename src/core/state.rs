//! Game lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a game.
///
/// `Init -> Playing -> Finished`, with `Paused` as a side branch of `Playing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    #[default]
    Init,
    Playing,
    Paused,
    Finished,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Init => "init",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::Finished => "finished",
        };
        f.write_str(name)
    }
}
