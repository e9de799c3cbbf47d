//! Event loop tests: debounce, stale result handling, navigation and shortcuts

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use mydict_config::Config;
use mydict_config::api::ApiConfig;
use mydict_config::search::SearchConfig;
use mydict_config::ui::UiConfig;
use mydict_core::overrides::OverrideTable;
use mydict_core::resolver::LookupResolver;
use mydict_source::{DictionarySource, LookupError, SourceMetadata};
use mydict_types::{AppEvent, DictionaryEntry, FETCH_ERROR, Key, KeyPress, UiEvent};
use tokio::task::JoinHandle;
use tokio::time::{Instant, timeout};
use tokio_util::sync::CancellationToken;

use crate::controller::ChannelSet;
use crate::events::event_loop;
use crate::state::AppState;

/// Answers after a per-word delay; "unknown" has no records, "broken" fails
struct DelayedSource {
    delays: HashMap<&'static str, Duration>,
    calls: Mutex<Vec<String>>,
}

impl DelayedSource {
    fn new(delays: &[(&'static str, u64)]) -> Arc<Self> {
        Arc::new(Self {
            delays: delays
                .iter()
                .map(|(word, ms)| (*word, Duration::from_millis(*ms)))
                .collect(),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DictionarySource for DelayedSource {
    async fn fetch(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        self.calls.lock().unwrap().push(word.to_string());

        if let Some(delay) = self.delays.get(word) {
            tokio::time::sleep(*delay).await;
        }

        match word {
            "unknown" => Ok(vec![]),
            "broken" => Err(LookupError::ApiError("HTTP 500".to_string())),
            _ => Ok(vec![DictionaryEntry::new(word, format!("definition of {word}"))]),
        }
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "delayed".to_string(),
        }
    }
}

struct Harness {
    to_app: AsyncSender<AppEvent>,
    from_app: AsyncReceiver<AppEvent>,
    source: Arc<DelayedSource>,
    cancel: CancellationToken,
    task: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    fn start(debounce_ms: u64, source: Arc<DelayedSource>) -> Self {
        let config = Config {
            api: ApiConfig::new("test-key", "http://127.0.0.1:9/json"),
            search: SearchConfig {
                debounce_ms,
                max_results: 1,
            },
            ui: UiConfig::default(),
        };
        let state = Arc::new(AppState::new(config));

        let overrides = Arc::new(OverrideTable::embedded().unwrap());
        let resolver = Arc::new(LookupResolver::new(overrides, source.clone(), 1));

        let channels = ChannelSet::new();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(event_loop(
            state,
            resolver,
            channels.ui_to_app.1.clone(),
            channels.app_to_ui.0.clone(),
            channels.ui_to_app.0.clone(),
            cancel.clone(),
        ));

        Self {
            to_app: channels.ui_to_app.0,
            from_app: channels.app_to_ui.1,
            source,
            cancel,
            task,
        }
    }

    async fn send(&self, event: UiEvent) {
        self.to_app
            .send(AppEvent::UiEvent(event))
            .await
            .expect("event loop inbox closed");
    }

    async fn type_text(&self, text: &str) {
        self.send(UiEvent::SearchText(text.to_string())).await;
    }

    async fn press(&self, press: KeyPress) {
        self.send(UiEvent::KeyPressed(press)).await;
    }

    /// Next event matching `pred`, skipping the others
    async fn expect<F>(&self, mut pred: F) -> AppEvent
    where
        F: FnMut(&AppEvent) -> bool,
    {
        let result = timeout(Duration::from_secs(2), async {
            loop {
                let event = self.from_app.recv().await.expect("ui channel closed");
                if pred(&event) {
                    return event;
                }
            }
        })
        .await;

        result.expect("timed out waiting for event")
    }

    async fn expect_results(&self) -> Vec<DictionaryEntry> {
        match self
            .expect(|e| matches!(e, AppEvent::ShowResults { .. }))
            .await
        {
            AppEvent::ShowResults { results, .. } => results,
            _ => unreachable!(),
        }
    }

    /// Next non-empty result list, skipping the clears sent on new input
    async fn expect_lookup_results(&self) -> Vec<DictionaryEntry> {
        match self
            .expect(|e| matches!(e, AppEvent::ShowResults { results, .. } if !results.is_empty()))
            .await
        {
            AppEvent::ShowResults { results, .. } => results,
            _ => unreachable!(),
        }
    }

    /// Every event delivered within `window`
    async fn collect_for(&self, window: Duration) -> Vec<AppEvent> {
        let deadline = Instant::now() + window;
        let mut events = Vec::new();

        while let Ok(Ok(event)) = tokio::time::timeout_at(deadline, self.from_app.recv()).await {
            events.push(event);
        }

        events
    }

    async fn stop(self) {
        self.cancel.cancel();
        let result = timeout(Duration::from_secs(2), self.task)
            .await
            .expect("event loop did not stop");
        result.expect("event loop panicked").expect("event loop failed");
    }
}

fn shown_words(events: &[AppEvent]) -> Vec<Vec<String>> {
    events
        .iter()
        .filter_map(|event| match event {
            AppEvent::ShowResults { results, .. } => {
                Some(results.iter().map(|r| r.word.clone()).collect())
            }
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_slow_first_lookup_never_clobbers_newer_results() {
    let source = DelayedSource::new(&[("slow", 300), ("fast", 10)]);
    let harness = Harness::start(20, source);

    harness.type_text("slow").await;
    harness
        .expect(|e| matches!(e, AppEvent::ShowLoading(true)))
        .await;

    harness.type_text("fast").await;
    let events = harness.collect_for(Duration::from_millis(600)).await;

    assert_eq!(shown_words(&events), vec![vec!["fast".to_string()]]);
    // the superseded request still ran to completion
    assert_eq!(harness.source.calls(), vec!["slow", "fast"]);

    harness.stop().await;
}

#[tokio::test]
async fn test_rapid_typing_issues_a_single_request() {
    let source = DelayedSource::new(&[]);
    let harness = Harness::start(80, source);

    for text in ["h", "he", "hel", "hell", "hello"] {
        harness.type_text(text).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let results = harness.expect_results().await;
    assert_eq!(results, vec![DictionaryEntry::new("hello", "definition of hello")]);
    assert_eq!(harness.source.calls(), vec!["hello"]);

    harness.stop().await;
}

#[tokio::test]
async fn test_blank_input_clears_without_request() {
    let source = DelayedSource::new(&[]);
    let harness = Harness::start(20, source);

    harness.type_text("word").await;
    assert_eq!(harness.expect_results().await.len(), 1);

    harness.type_text("   ").await;
    assert!(harness.expect_results().await.is_empty());

    let later = harness.collect_for(Duration::from_millis(100)).await;
    assert!(shown_words(&later).is_empty());
    assert_eq!(harness.source.calls(), vec!["word"]);

    harness.stop().await;
}

#[tokio::test]
async fn test_new_input_never_shows_previous_results() {
    let source = DelayedSource::new(&[("dog", 200), ("dogs", 50)]);
    let harness = Harness::start(30, source);

    harness.type_text("cat").await;
    assert_eq!(harness.expect_results().await[0].word, "cat");

    // the settled "cat" cards are cleared as soon as the term changes
    harness.type_text("dog").await;
    let events = harness.collect_for(Duration::from_millis(120)).await;
    assert_eq!(shown_words(&events), vec![Vec::<String>::new()]);
    assert!(events.iter().any(|e| matches!(e, AppEvent::ShowLoading(true))));

    // typing over the in-flight "dog" lookup, then arrowing before anything settles
    harness.type_text("dogs").await;
    harness.press(KeyPress::plain(Key::Down)).await;

    let events = harness.collect_for(Duration::from_millis(500)).await;
    assert_eq!(shown_words(&events), vec![vec!["dogs".to_string()]]);
    assert!(
        !events.iter().any(|e| matches!(e, AppEvent::SelectionChanged(_))),
        "highlight moved over stale cards: {:?}",
        events
    );
    assert_eq!(harness.source.calls(), vec!["cat", "dog", "dogs"]);

    harness.stop().await;
}

#[tokio::test]
async fn test_clearing_drops_an_in_flight_lookup() {
    let source = DelayedSource::new(&[("slow", 150)]);
    let harness = Harness::start(20, source);

    harness.type_text("slow").await;
    harness
        .expect(|e| matches!(e, AppEvent::ShowLoading(true)))
        .await;
    harness.type_text("").await;

    let events = harness.collect_for(Duration::from_millis(400)).await;
    assert_eq!(shown_words(&events), vec![Vec::<String>::new()]);

    harness.stop().await;
}

#[tokio::test]
async fn test_custom_word_resolves_without_request() {
    let source = DelayedSource::new(&[]);
    let harness = Harness::start(20, source);

    harness.type_text("  NABIN  ").await;
    let results = harness.expect_results().await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word, "Nabin");
    assert_eq!(results[0].meanings.len(), 2);
    assert!(harness.source.calls().is_empty());

    harness.stop().await;
}

#[tokio::test]
async fn test_navigation_and_detail_round_trip() {
    let source = DelayedSource::new(&[]);
    let harness = Harness::start(20, source);

    harness.type_text("hello").await;
    let results = harness.expect_results().await;

    harness.press(KeyPress::plain(Key::Down)).await;
    let moved = harness
        .expect(|e| matches!(e, AppEvent::SelectionChanged(_)))
        .await;
    assert!(matches!(moved, AppEvent::SelectionChanged(0)));

    harness.press(KeyPress::plain(Key::Enter)).await;
    match harness.expect(|e| matches!(e, AppEvent::ShowDetail(_))).await {
        AppEvent::ShowDetail(entry) => assert_eq!(entry, results[0]),
        _ => unreachable!(),
    }

    harness.send(UiEvent::CloseDetail).await;
    harness.expect(|e| matches!(e, AppEvent::HideDetail)).await;

    harness.press(KeyPress::plain(Key::Enter)).await;
    harness.expect(|e| matches!(e, AppEvent::ShowDetail(_))).await;
    harness.press(KeyPress::plain(Key::Escape)).await;
    harness.expect(|e| matches!(e, AppEvent::HideDetail)).await;

    harness.stop().await;
}

#[tokio::test]
async fn test_placeholders_never_open_in_detail() {
    let source = DelayedSource::new(&[]);
    let harness = Harness::start(20, source);

    harness.type_text("broken").await;
    let results = harness.expect_results().await;
    assert_eq!(results[0].definition, FETCH_ERROR);

    harness.press(KeyPress::plain(Key::Enter)).await;
    harness.send(UiEvent::SelectResult(0)).await;

    let events = harness.collect_for(Duration::from_millis(150)).await;
    assert!(
        !events.iter().any(|e| matches!(e, AppEvent::ShowDetail(_))),
        "placeholder opened: {:?}",
        events
    );

    harness.type_text("unknown").await;
    let results = harness.expect_lookup_results().await;
    assert!(results[0].is_placeholder());

    harness.press(KeyPress::plain(Key::Enter)).await;
    let events = harness.collect_for(Duration::from_millis(150)).await;
    assert!(!events.iter().any(|e| matches!(e, AppEvent::ShowDetail(_))));

    harness.stop().await;
}

#[tokio::test]
async fn test_focus_shortcut_follows_mount_lifecycle() {
    let source = DelayedSource::new(&[]);
    let harness = Harness::start(20, source);
    let ctrl_k = KeyPress::ctrl(Key::Char('k'));

    harness.press(ctrl_k).await;
    let events = harness.collect_for(Duration::from_millis(100)).await;
    assert!(!events.iter().any(|e| matches!(e, AppEvent::FocusSearch)));

    harness.send(UiEvent::Mounted).await;
    harness.press(ctrl_k).await;
    harness.expect(|e| matches!(e, AppEvent::FocusSearch)).await;

    // works from the detail view too
    harness.type_text("hello").await;
    harness.expect_results().await;
    harness.press(KeyPress::plain(Key::Enter)).await;
    harness.expect(|e| matches!(e, AppEvent::ShowDetail(_))).await;
    harness.press(ctrl_k).await;
    harness.expect(|e| matches!(e, AppEvent::FocusSearch)).await;

    harness.send(UiEvent::Unmounted).await;
    harness.press(ctrl_k).await;
    let events = harness.collect_for(Duration::from_millis(100)).await;
    assert!(!events.iter().any(|e| matches!(e, AppEvent::FocusSearch)));

    harness.stop().await;
}
