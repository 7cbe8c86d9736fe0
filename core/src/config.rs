use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::validate::{DateMode, ValidationPolicy};

const DEFAULT_DIR_NAME: &str = ".triplog";
const DEFAULT_OWNER: &str = "local";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub owner_id: String,
    pub policy: ValidationPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup("TRIPLOG_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };

        let owner_id = lookup("TRIPLOG_OWNER")
            .or_else(|| lookup("USER"))
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| DEFAULT_OWNER.to_string());

        let date_mode = match lookup("TRIPLOG_DATE_MODE").as_deref() {
            None | Some("lenient") => DateMode::Lenient,
            Some("strict") => DateMode::Strict,
            Some(other) => return Err(anyhow!("invalid TRIPLOG_DATE_MODE: {}", other)),
        };

        let allow_negative = match lookup("TRIPLOG_ALLOW_NEGATIVE") {
            None => true,
            Some(v) => v
                .parse::<bool>()
                .map_err(|err| anyhow!("invalid TRIPLOG_ALLOW_NEGATIVE: {}", err))?,
        };

        Ok(Self {
            data_dir,
            owner_id,
            policy: ValidationPolicy {
                date_mode,
                allow_negative,
            },
        })
    }
}
