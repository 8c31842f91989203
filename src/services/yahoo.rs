use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://query1.finance.yahoo.com";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Chart-endpoint client for everything Binance cannot price: stocks,
/// commodities, FX.
#[derive(Clone)]
pub struct YahooClient {
    http: Client,
    base: String,
}

impl YahooClient {
    pub fn new(base: String) -> Self {
        Self {
            http: Client::new(),
            base,
        }
    }

    /// Most recent close from a one-day window.
    pub async fn last_close(&self, symbol: &str) -> Result<f64, String> {
        let url = format!("{}/v8/finance/chart/{}", self.base, symbol);
        let res = self
            .http
            .get(&url)
            .query(&[("range", "1d"), ("interval", "1d")])
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("Yahoo chart failed: {status} {body}"));
        }

        let chart = res
            .json::<ChartResponse>()
            .await
            .map_err(|e| e.to_string())?;

        let result = chart
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| format!("empty chart result for {symbol}"))?;

        // The close series can hold nulls for sessions without prints.
        result
            .indicators
            .quote
            .into_iter()
            .next()
            .and_then(|q| q.close.into_iter().flatten().last())
            .ok_or_else(|| format!("no close in window for {symbol}"))
    }
}

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    pub quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteBlock {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}
