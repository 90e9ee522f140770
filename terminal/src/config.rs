use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::PlayerKind;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.yaml";
const MAX_BOT_MOVE_DELAY_MS: u64 = 5000;

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// Players used by a bare `start` command.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct DefaultPlayers {
    pub x: PlayerKind,
    pub o: PlayerKind,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    /// Fixed seed for the easy and medium players; random per run when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_announce_moves")]
    pub announce_moves: bool,
    #[serde(default)]
    pub default_players: Option<DefaultPlayers>,
    #[serde(default)]
    pub bot_move_delay_ms: u64,
}

fn default_announce_moves() -> bool {
    true
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must not exceed {} (got {})",
                MAX_BOT_MOVE_DELAY_MS, self.bot_move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            announce_moves: default_announce_moves(),
            default_players: None,
            bot_move_delay_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigError, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let config = GameConfig {
            seed: Some(42),
            default_players: Some(DefaultPlayers {
                x: PlayerKind::User,
                o: PlayerKind::Hard,
            }),
            ..GameConfig::default()
        };
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&config).unwrap();
        assert!(serialized.contains("hard"));
        let deserialized: GameConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_manager_saves_and_reloads() {
        let config = GameConfig {
            seed: Some(7),
            announce_moves: false,
            default_players: None,
            bot_move_delay_ms: 250,
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);
        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(config, reloaded);
        assert_eq!(manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider.set_config_content("seed: 3\n").unwrap();

        let config = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(config.seed, Some(3));
        assert!(config.announce_moves);
        assert_eq!(config.bot_move_delay_ms, 0);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider.set_config_content("bot_move_delay_ms: 60000\n").unwrap();

        let result = get_config_manager(&file_path).get_config();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_unknown_player_kind_cant_be_read() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("default_players:\n  x: user\n  o: nightmare\n")
            .unwrap();

        let result = get_config_manager(&file_path).get_config();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);
        let config = GameConfig {
            bot_move_delay_ms: MAX_BOT_MOVE_DELAY_MS + 1,
            ..GameConfig::default()
        };
        assert!(matches!(manager.set_config(&config), Err(ConfigError::Invalid(_))));
        assert!(!std::path::Path::new(&file_path).exists());
    }
}
