use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::services::binance::BinanceClient;
use crate::services::yahoo::YahooClient;

const BACKOFF_STEP: Duration = Duration::from_secs(30);
const BACKOFF_CAP: Duration = Duration::from_secs(300);

struct Cooldown {
    failures: u32,
    until: Instant,
}

/// Routes a symbol to the backend that can price it and folds every
/// failure mode into one opaque error; callers retry on the next tick.
#[derive(Clone)]
pub struct PriceResolver {
    binance: BinanceClient,
    yahoo: YahooClient,
    cooldowns: Arc<Mutex<HashMap<String, Cooldown>>>,
}

impl PriceResolver {
    pub fn new(binance: BinanceClient, yahoo: YahooClient) -> Self {
        Self {
            binance,
            yahoo,
            cooldowns: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// USDT pairs go to the Binance ticker; everything else to the Yahoo
    /// chart endpoint. Fresh round trip every call, no caching.
    pub async fn fetch(&self, symbol: &str) -> Result<f64, String> {
        if let Some(wait) = self.cooldown_remaining(symbol).await {
            return Err(format!(
                "{symbol} backing off after repeated failures ({}s left)",
                wait.as_secs()
            ));
        }

        let fetched = if symbol.ends_with("USDT") {
            self.binance.ticker_price(symbol).await
        } else {
            self.yahoo.last_close(symbol).await
        };

        match fetched {
            Ok(price) if price.is_finite() && price > 0.0 => {
                self.clear_cooldown(symbol).await;
                Ok(price)
            }
            Ok(price) => {
                self.note_failure(symbol).await;
                Err(format!("bogus price {price} for {symbol}"))
            }
            Err(e) => {
                self.note_failure(symbol).await;
                Err(e)
            }
        }
    }

    async fn cooldown_remaining(&self, symbol: &str) -> Option<Duration> {
        let cooldowns = self.cooldowns.lock().await;
        let cd = cooldowns.get(symbol)?;
        cd.until.checked_duration_since(Instant::now())
    }

    async fn clear_cooldown(&self, symbol: &str) {
        self.cooldowns.lock().await.remove(symbol);
    }

    // 30s per consecutive failure, capped at five minutes.
    async fn note_failure(&self, symbol: &str) {
        let mut cooldowns = self.cooldowns.lock().await;
        let cd = cooldowns.entry(symbol.to_string()).or_insert(Cooldown {
            failures: 0,
            until: Instant::now(),
        });
        cd.failures += 1;
        cd.until = Instant::now() + (BACKOFF_STEP * cd.failures).min(BACKOFF_CAP);
    }
}
