use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.binance.com";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Spot ticker client for USDT pairs.
#[derive(Clone)]
pub struct BinanceClient {
    http: Client,
    base: String,
}

impl BinanceClient {
    pub fn new(base: String) -> Self {
        Self {
            http: Client::new(),
            base,
        }
    }

    pub async fn ticker_price(&self, symbol: &str) -> Result<f64, String> {
        let url = format!("{}/api/v3/ticker/price", self.base);
        let res = self
            .http
            .get(&url)
            .query(&[("symbol", symbol)])
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("Binance ticker failed: {status} {body}"));
        }

        let ticker = res
            .json::<TickerResponse>()
            .await
            .map_err(|e| e.to_string())?;

        ticker.price.parse::<f64>().map_err(|e| e.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    pub symbol: String,

    // Binance sends the price as a decimal string.
    pub price: String,
}
