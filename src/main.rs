use std::net::SocketAddr;

use pricewatch::services::{
    alarm_monitor,
    binance::BinanceClient,
    price_source::PriceResolver,
    store::AlarmStore,
    telegram::TelegramNotifier,
    yahoo::YahooClient,
};
use pricewatch::{AppState, config, routes};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    let prices = PriceResolver::new(
        BinanceClient::new(settings.binance_api_base.clone()),
        YahooClient::new(settings.yahoo_api_base.clone()),
    );

    let notifier = TelegramNotifier::new(
        settings.telegram_api_base.clone(),
        settings.bot_token.clone(),
        settings.chat_id,
    );

    if !notifier.is_enabled() {
        tracing::warn!("BOT_TOKEN/CHAT_ID not set, alarm notifications will only be logged");
    }

    let state = AppState {
        store: AlarmStore::new(&settings.alarms_file),
        prices,
        notifier,
        settings: settings.clone(),
    };

    let monitor = alarm_monitor::spawn_alarm_monitor(state.clone());

    let app = routes::app(state);

    let addr = SocketAddr::from((
        settings
            .host
            .parse::<std::net::IpAddr>()
            .expect("HOST must be a valid IP address"),
        settings.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .expect("server error");

    // Let the in-flight tick finish before exiting.
    monitor.shutdown().await;
}
