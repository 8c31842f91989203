use std::env;

use crate::services::{binance, telegram, yahoo};

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    pub alarms_file: String,
    pub check_interval_secs: u64,

    pub bot_token: String,
    pub chat_id: Option<i64>,

    pub binance_api_base: String,
    pub yahoo_api_base: String,
    pub telegram_api_base: String,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    let alarms_file = env::var("ALARMS_FILE").unwrap_or_else(|_| "alarms.json".to_string());

    let check_interval_secs = env::var("CHECK_INTERVAL")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(60);

    let bot_token = env::var("BOT_TOKEN").unwrap_or_default();

    // A CHAT_ID that is not an integer counts as absent.
    let chat_id = env::var("CHAT_ID").ok().and_then(|s| s.trim().parse::<i64>().ok());

    let binance_api_base =
        env::var("BINANCE_API_BASE").unwrap_or_else(|_| binance::DEFAULT_API_BASE.to_string());

    let yahoo_api_base =
        env::var("YAHOO_API_BASE").unwrap_or_else(|_| yahoo::DEFAULT_API_BASE.to_string());

    let telegram_api_base =
        env::var("TELEGRAM_API_BASE").unwrap_or_else(|_| telegram::DEFAULT_API_BASE.to_string());

    Settings {
        host,
        port,
        alarms_file,
        check_interval_secs,
        bot_token,
        chat_id,
        binance_api_base,
        yahoo_api_base,
        telegram_api_base,
    }
}
