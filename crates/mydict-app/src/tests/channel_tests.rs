use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mydict_config::Config;
use mydict_config::api::ApiConfig;
use mydict_config::search::SearchConfig;
use mydict_config::ui::UiConfig;
use mydict_core::overrides::OverrideTable;
use mydict_core::resolver::LookupResolver;
use mydict_source::{DictionarySource, LookupError, SourceMetadata};
use mydict_types::{AppEvent, DictionaryEntry, UiEvent};
use mydict_ui::UiBridge;
use tokio::time::timeout;

use crate::controller::{AppController, ChannelSet};
use crate::state::AppState;

struct EmptySource;

#[async_trait]
impl DictionarySource for EmptySource {
    async fn fetch(&self, _word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        Ok(vec![])
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "empty".to_string(),
        }
    }
}

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(Config {
        api: ApiConfig::new("test-key", "http://127.0.0.1:9/json"),
        search: SearchConfig::default(),
        ui: UiConfig::default(),
    }))
}

#[tokio::test]
async fn test_shutdown_stops_spawned_tasks() {
    let controller = AppController::new(test_state());
    let resolver = Arc::new(LookupResolver::new(
        Arc::new(OverrideTable::empty()),
        Arc::new(EmptySource),
        1,
    ));

    let mut tasks = controller.spawn_tasks(resolver);
    assert_eq!(tasks.len(), 1);

    controller.shutdown();

    let joined = timeout(Duration::from_secs(2), tasks.join_next())
        .await
        .expect("Timeout - event loop ignored shutdown");
    match joined {
        Some(Ok(Ok(()))) => {}
        other => panic!("Event loop did not exit cleanly: {:?}", other),
    }
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_try_send_from_outside_any_runtime_task() {
    let channels = ChannelSet::new();
    let bridge = UiBridge::new(channels.ui_to_app.0.clone(), channels.app_to_ui.1.clone());
    let rx = channels.ui_to_app.1;

    let sent = std::thread::spawn(move || bridge.try_send(UiEvent::Unmounted))
        .join()
        .unwrap();
    assert!(sent);

    let event = timeout(Duration::from_secs(1), rx.recv()).await.unwrap().unwrap();
    assert!(matches!(event, AppEvent::UiEvent(UiEvent::Unmounted)));
}

#[tokio::test]
async fn test_bridge_try_send_reports_a_full_inbox() {
    let channels = ChannelSet::new();
    let bridge = UiBridge::new(channels.ui_to_app.0.clone(), channels.app_to_ui.1.clone());

    let mut accepted = 0;
    while bridge.try_send(UiEvent::SearchText(format!("word {accepted}"))) {
        accepted += 1;
        assert!(accepted <= 64, "UI inbox is not bounded");
    }
    assert_eq!(accepted, 64);

    // draining one slot makes room again, in order
    let first = channels.ui_to_app.1.recv().await.unwrap();
    assert!(matches!(first, AppEvent::UiEvent(UiEvent::SearchText(ref t)) if t == "word 0"));
    assert!(bridge.try_send(UiEvent::Unmounted));
}
