use serde::{Deserialize, Serialize};

/// Which side of the target price counts as "reached".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Above,
    Below,
}

impl Direction {
    /// Direction for a new alarm when the caller only gives a target:
    /// wait for the price to rise when the target sits at or above the
    /// current price, to fall otherwise.
    pub fn infer(target: f64, current: f64) -> Self {
        if target >= current {
            Direction::Above
        } else {
            Direction::Below
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    pub symbol: String,
    pub target: f64,
    pub direction: Direction,

    #[serde(default)]
    pub note: String,

    // Absent for global alarms; a value that parses as a chat id also
    // routes the notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Alarm {
    /// Non-strict on both sides: a print exactly at the target triggers.
    pub fn is_hit(&self, price: f64) -> bool {
        match self.direction {
            Direction::Above => price >= self.target,
            Direction::Below => price <= self.target,
        }
    }
}
