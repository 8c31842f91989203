pub mod binance;
pub mod yahoo;
pub mod price_source;

pub mod store;
pub mod telegram;

pub mod alarms_service;
pub mod alarm_monitor;
