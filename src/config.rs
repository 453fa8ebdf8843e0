use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::env;

use crate::time::parse_timezone;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub timezone: Tz,
    pub seed_demo_data: bool,
    pub notifications_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string());

        let timezone_name = env::var("FLEET_TIMEZONE")
            .unwrap_or_else(|_| "UTC".to_string());
        let timezone = parse_timezone(&timezone_name)
            .map_err(|e| anyhow!("FLEET_TIMEZONE is invalid: {}", e))?;

        let seed_demo_data = parse_flag("FLEET_SEED_DEMO_DATA", true)?;
        let notifications_enabled = parse_flag("FLEET_NOTIFICATIONS_ENABLED", true)?;

        Ok(Self {
            log_level,
            timezone,
            seed_demo_data,
            notifications_enabled,
        })
    }
}

fn parse_flag(name: &str, default: bool) -> Result<bool> {
    match env::var(name) {
        Ok(value) => parse_bool(&value)
            .ok_or_else(|| anyhow!("{} must be true or false, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
