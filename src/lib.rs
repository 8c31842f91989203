//! Library entrypoint for PriceWatch.
//!
//! This file exists mainly to make controller and monitor tests easy
//! (integration tests under `tests/` can import the app state, routers,
//! controllers, services).

pub mod config;
pub mod error;
pub mod models;

pub mod services;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub store: services::store::AlarmStore,
    pub prices: services::price_source::PriceResolver,
    pub notifier: services::telegram::TelegramNotifier,
}
