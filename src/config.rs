use std::env;

use anyhow::Context;

use crate::password::HashCost;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub password_cost: HashCost,
    /// Fixed rng seed for reproducible fixture runs.
    pub fixtures_seed: Option<u64>,
    /// Keep existing rows instead of purging before seeding.
    pub fixtures_append: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let password_cost = match env::var("PASSWORD_HASH_COST") {
            Ok(value) => value.parse::<HashCost>()?,
            Err(_) => HashCost::Default,
        };
        let fixtures_seed = env::var("FIXTURES_SEED")
            .ok()
            .map(|s| s.parse::<u64>())
            .transpose()
            .context("FIXTURES_SEED must be an unsigned integer")?;
        let fixtures_append = env::var("FIXTURES_APPEND")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Ok(Self {
            port,
            database_url,
            host,
            password_cost,
            fixtures_seed,
            fixtures_append,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn flags_accept_common_truthy_spellings() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag(value), "{value} should be truthy");
        }
        for value in ["0", "false", "", "nope"] {
            assert!(!parse_flag(value), "{value} should be falsy");
        }
    }
}
