use pricewatch::models::{Alarm, Direction};
use pricewatch::services::store::AlarmStore;
use tempfile::tempdir;

fn alarm(symbol: &str, target: f64) -> Alarm {
    Alarm {
        symbol: symbol.to_string(),
        target,
        direction: Direction::Above,
        note: String::new(),
        owner: None,
    }
}

#[tokio::test]
async fn load_all_on_missing_file_is_empty() {
    let dir = tempdir().unwrap();
    let store = AlarmStore::new(dir.path().join("alarms.json"));

    assert!(store.load_all().await.is_empty());
}

#[tokio::test]
async fn add_then_load_round_trips_all_fields() {
    let dir = tempdir().unwrap();
    let store = AlarmStore::new(dir.path().join("alarms.json"));

    let a = Alarm {
        symbol: "BTCUSDT".to_string(),
        target: 50000.0,
        direction: Direction::Above,
        note: "sell".to_string(),
        owner: Some("alice".to_string()),
    };
    store.add(a.clone()).await.unwrap();

    assert_eq!(store.load_all().await, vec![a]);
}

#[tokio::test]
async fn corrupt_file_loads_as_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("alarms.json");
    std::fs::write(&path, "this is not json{{{").unwrap();

    let store = AlarmStore::new(path);
    assert!(store.load_all().await.is_empty());
}

#[tokio::test]
async fn save_all_replaces_contents_and_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("alarms.json");
    let store = AlarmStore::new(&path);

    store
        .save_all(&[alarm("BTCUSDT", 1.0), alarm("ETHUSDT", 2.0)])
        .await
        .unwrap();
    store.save_all(&[alarm("AAPL", 3.0)]).await.unwrap();

    let alarms = store.load_all().await;
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].symbol, "AAPL");

    assert!(path.exists());
    assert!(!dir.path().join("alarms.json.tmp").exists());
}

#[tokio::test]
async fn remove_where_removes_only_matching() {
    let dir = tempdir().unwrap();
    let store = AlarmStore::new(dir.path().join("alarms.json"));

    store.add(alarm("BTCUSDT", 1.0)).await.unwrap();
    store.add(alarm("BTCUSDT", 2.0)).await.unwrap();
    store.add(alarm("ETHUSDT", 3.0)).await.unwrap();

    let removed = store.remove_where(|a| a.symbol == "BTCUSDT").await.unwrap();
    assert_eq!(removed, 2);

    let left = store.load_all().await;
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].symbol, "ETHUSDT");
}

#[tokio::test]
async fn remove_where_without_match_returns_zero_and_changes_nothing() {
    let dir = tempdir().unwrap();
    let store = AlarmStore::new(dir.path().join("alarms.json"));

    store.add(alarm("BTCUSDT", 1.0)).await.unwrap();
    let before = store.load_all().await;

    let removed = store.remove_where(|a| a.symbol == "XRPUSDT").await.unwrap();
    assert_eq!(removed, 0);
    assert_eq!(store.load_all().await, before);
}

#[tokio::test]
async fn concurrent_adds_are_not_lost() {
    let dir = tempdir().unwrap();
    let store = AlarmStore::new(dir.path().join("alarms.json"));

    let mut handles = Vec::new();
    for i in 0..10 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.add(alarm(&format!("SYM{i}USDT"), i as f64 + 1.0)).await.unwrap();
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    assert_eq!(store.load_all().await.len(), 10);
}
