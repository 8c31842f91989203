use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;

use crate::error::AlarmError;
use crate::models::Alarm;
use crate::AppState;

/// Handle for the background monitor. `shutdown` lets the in-flight
/// tick finish before the task stops.
pub struct MonitorHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl MonitorHandle {
    pub async fn shutdown(self) {
        let _ = self.stop_tx.send(true);
        let _ = self.task.await;
    }
}

pub fn spawn_alarm_monitor(state: AppState) -> MonitorHandle {
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        // interval() panics on zero, clamp misconfigured values
        let secs = state.settings.check_interval_secs.max(1);
        let mut interval = time::interval(Duration::from_secs(secs));

        loop {
            tokio::select! {
                _ = interval.tick() => {}
                _ = stop_rx.changed() => break,
            }

            if let Err(e) = run_tick(&state).await {
                tracing::error!("[alarm-monitor] tick error: {e}");
            }

            if *stop_rx.borrow() {
                break;
            }
        }
    });

    MonitorHandle { stop_tx, task }
}

/// One evaluation pass over the full alarm set. Public so tests can
/// drive single ticks instead of racing the timer.
pub async fn run_tick(state: &AppState) -> Result<(), AlarmError> {
    // 1) Snapshot the whole collection
    let snapshot = state.store.load_all().await;
    if snapshot.is_empty() {
        return Ok(());
    }

    // 2) Group by symbol => one quote request per symbol per tick
    let mut by_symbol: HashMap<String, Vec<Alarm>> = HashMap::new();
    for alarm in snapshot {
        by_symbol.entry(alarm.symbol.clone()).or_default().push(alarm);
    }

    let mut triggered: Vec<Alarm> = Vec::new();

    // 3) Check each symbol once, sequentially
    for (sym, group) in by_symbol {
        let price = match state.prices.fetch(&sym).await {
            Ok(p) => p,
            Err(e) => {
                // Skipped alarms stay untouched until the next tick.
                tracing::warn!("[alarm-monitor] skipping {sym} this tick: {e}");
                continue;
            }
        };

        // 4) Dispatch crossed thresholds
        for alarm in group {
            if !alarm.is_hit(price) {
                continue;
            }

            let text = notification_text(&alarm, price);
            let sent = match alarm.owner.as_deref().and_then(|o| o.parse::<i64>().ok()) {
                Some(chat) => state.notifier.send_to(chat, &text).await,
                None => state.notifier.send(&text).await,
            };

            match sent {
                Ok(()) => triggered.push(alarm),
                // Keep the alarm; the next tick retries, so a crossing
                // can fire twice rather than get lost.
                Err(e) => {
                    tracing::error!("[alarm-monitor] dispatch failed for {}: {e}", alarm.symbol)
                }
            }
        }
    }

    // 5) Retire everything delivered in one batch write
    if !triggered.is_empty() {
        state
            .store
            .remove_where(|a| triggered.iter().any(|t| t == a))
            .await?;
    }

    Ok(())
}

fn notification_text(alarm: &Alarm, price: f64) -> String {
    format!(
        "🚨 {} reached {}!\nNote: {}\nPrice: {}",
        alarm.symbol, alarm.target, alarm.note, price
    )
}
