use std::io::ErrorKind;

use serde::{Deserialize, Serialize};
use tictactoe_engine::types::Mark;

use crate::opponent::OpponentKind;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub games: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    pub engine_mark: Mark,
    pub opponent: OpponentKind,
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("Game count must be at least 1".to_string());
        }
        if self.engine_mark == Mark::Empty {
            return Err("Engine mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            engine_mark: Mark::X,
            opponent: OpponentKind::Random,
        }
    }
}

pub fn load_config(file_path: &str) -> Result<Config, String> {
    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_config(file_path: &str, config: &Config) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(file_path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
