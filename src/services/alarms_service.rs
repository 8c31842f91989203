use regex::Regex;

use crate::error::AlarmError;
use crate::models::{Alarm, Direction};
use crate::AppState;

// Uppercase instrument identifiers: BTCUSDT, AAPL, THYAO.IS, CL=F, XAUUSD.
fn is_valid_symbol(s: &str) -> bool {
    let re = Regex::new(r"^[A-Z0-9][A-Z0-9.=\-]{0,19}$").unwrap();
    re.is_match(s)
}

/// Creates an alarm, defaulting the direction from the live price when
/// the caller does not give one. Creation fails if that price cannot be
/// fetched.
pub async fn create_alarm(
    state: &AppState,
    symbol: &str,
    target: f64,
    direction: Option<Direction>,
    note: &str,
    owner: Option<String>,
) -> Result<Alarm, AlarmError> {
    let sym = symbol.trim().to_uppercase();
    if !is_valid_symbol(&sym) {
        return Err(AlarmError::BadSymbol(symbol.to_string()));
    }

    let direction = match direction {
        Some(d) => d,
        None => {
            let current = state
                .prices
                .fetch(&sym)
                .await
                .map_err(|_| AlarmError::PriceUnavailable(sym.clone()))?;
            Direction::infer(target, current)
        }
    };

    let alarm = Alarm {
        symbol: sym,
        target,
        direction,
        note: note.trim().to_string(),
        owner,
    };

    state.store.add(alarm.clone()).await?;

    Ok(alarm)
}

pub async fn list_alarms(state: &AppState, owner: Option<&str>) -> Vec<Alarm> {
    let alarms = state.store.load_all().await;
    match owner {
        Some(o) => alarms
            .into_iter()
            .filter(|a| a.owner.as_deref() == Some(o))
            .collect(),
        None => alarms,
    }
}

/// Removes all alarms for `symbol` (scoped to `owner` when given);
/// returns the removed count, zero when nothing matched.
pub async fn remove_alarms(
    state: &AppState,
    symbol: &str,
    owner: Option<&str>,
) -> Result<usize, AlarmError> {
    let sym = symbol.trim().to_uppercase();
    state
        .store
        .remove_where(|a| {
            a.symbol == sym && owner.map_or(true, |o| a.owner.as_deref() == Some(o))
        })
        .await
}
