use std::{env, str::FromStr};

use log::*;

use crate::helpers::clamp_order_code_length;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/active_orders.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_EVENT_BUFFER_SIZE: usize = 25;
const DEFAULT_ORDER_CODE_LENGTH: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// The capacity of each event hook channel. Publishers wait when a channel is full.
    pub event_buffer_size: usize,
    /// The number of characters in a generated order code.
    pub order_code_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            event_buffer_size: DEFAULT_EVENT_BUFFER_SIZE,
            order_code_length: DEFAULT_ORDER_CODE_LENGTH,
        }
    }
}

impl EngineConfig {
    pub fn new(database_url: &str) -> Self {
        Self { database_url: database_url.to_string(), ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let database_url = env::var("AOE_DATABASE_URL").ok().unwrap_or_else(|| {
            info!("🪛️ AOE_DATABASE_URL is not set. Using the default, {DEFAULT_DATABASE_URL}.");
            DEFAULT_DATABASE_URL.to_string()
        });
        let max_connections = match parse_env_or("AOE_DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS) {
            0 => {
                error!(
                    "🪛️ AOE_DB_MAX_CONNECTIONS must be at least 1. Using the default, {DEFAULT_MAX_CONNECTIONS}, \
                     instead."
                );
                DEFAULT_MAX_CONNECTIONS
            },
            n => n,
        };
        let event_buffer_size = parse_env_or("AOE_EVENT_BUFFER_SIZE", DEFAULT_EVENT_BUFFER_SIZE);
        let order_code_length =
            clamp_order_code_length(parse_env_or("AOE_ORDER_CODE_LENGTH", DEFAULT_ORDER_CODE_LENGTH));
        Self { database_url, max_connections, event_buffer_size, order_code_length }
    }
}

fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(s) => s.parse::<T>().unwrap_or_else(|e| {
            error!("🪛️ {s} is not a valid value for {key}. {e} Using the default, {default}, instead.");
            default
        }),
        Err(_) => default,
    }
}
