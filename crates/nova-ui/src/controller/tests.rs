use std::sync::Arc;
use std::time::Duration;

use nova_config::NovaConfig;
use serde_json::json;
use tokio::runtime::Handle;

use crate::event::{Key, KeyEvent, KeyPhase, Propagation, UiEvent};
use crate::test_support::{settle, Op, RecordingCallbacks, RecordingClipboard, RecordingSurface};

use super::{UiBindings, UiController};

struct Harness {
    controller: UiController,
    progress: Arc<RecordingSurface>,
    panel: Arc<RecordingSurface>,
    clipboard: Arc<RecordingClipboard>,
    callbacks: Arc<RecordingCallbacks>,
}

fn harness() -> Harness {
    harness_with(RecordingCallbacks::default())
}

fn harness_with(callbacks: RecordingCallbacks) -> Harness {
    let progress = Arc::new(RecordingSurface::default());
    let panel = Arc::new(RecordingSurface::default());
    let clipboard = Arc::new(RecordingClipboard::default());
    let callbacks = Arc::new(callbacks);

    let controller = UiController::new(
        Handle::current(),
        &NovaConfig::default(),
        UiBindings {
            progress: progress.clone(),
            panel: panel.clone(),
            clipboard: clipboard.clone(),
            callbacks: callbacks.clone(),
        },
    );

    Harness {
        controller,
        progress,
        panel,
        clipboard,
        callbacks,
    }
}

// =============================================================================
// HOST MESSAGES
// =============================================================================

#[tokio::test(start_paused = true)]
async fn progressbar_message_starts_animation() {
    let mut h = harness();
    assert!(h
        .controller
        .handle_json(r#"{"action":"progressbar","label":"Healing","duration":1000}"#));

    assert!(h.controller.progress().is_running());
    assert_eq!(h.progress.ops()[0], Op::Label("Healing".into()));

    tokio::time::sleep(Duration::from_millis(1300)).await;
    assert_eq!(h.progress.visible(), Some(false));
    assert!(!h.controller.progress().is_running());
}

#[tokio::test(start_paused = true)]
async fn progressbar_with_null_duration_completes_at_once() {
    let mut h = harness();
    assert!(h
        .controller
        .handle_json(r#"{"action":"progressbar","label":null,"duration":null}"#));
    assert_eq!(h.progress.ops()[0], Op::Label(String::new()));

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(h.progress.last_fill(), Some(100.0));
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(h.progress.visible(), Some(false));
}

#[tokio::test(start_paused = true)]
async fn hide_message_stops_animation() {
    let mut h = harness();
    h.controller
        .handle_json(r#"{"action":"progressbar","label":"Healing","duration":1000}"#);
    tokio::time::sleep(Duration::from_millis(100)).await;

    h.controller.handle_json(r#"{"action":"hideProgressbar"}"#);
    assert!(!h.controller.progress().is_running());
    assert_eq!(h.progress.visible(), Some(false));
}

#[tokio::test(start_paused = true)]
async fn open_message_opens_panel() {
    let mut h = harness();
    h.controller.handle_json(r#"{"action":"openTpcds"}"#);

    assert!(h.controller.panel().is_open());
    settle().await;
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(
        h.panel.ops(),
        vec![Op::ClearInput, Op::Visible(true), Op::FocusInput]
    );
}

#[tokio::test(start_paused = true)]
async fn copy_message_uses_clipboard_only_for_text() {
    let mut h = harness();
    h.controller
        .handle_json(r#"{"action":"copyToClipboard","text":"-1037.5, 200.1, 30.0"}"#);
    h.controller
        .handle_json(r#"{"action":"copyToClipboard","text":""}"#);
    h.controller.handle_json(r#"{"action":"copyToClipboard"}"#);

    assert_eq!(
        *h.clipboard.copied.lock().unwrap(),
        vec!["-1037.5, 200.1, 30.0"]
    );
}

#[tokio::test(start_paused = true)]
async fn unknown_and_malformed_messages_have_no_effect() {
    let mut h = harness();
    assert!(h.controller.handle_json(r#"{"action":"teleport","x":1}"#));
    assert!(!h.controller.handle_json("garbage"));

    settle().await;
    assert!(h.progress.ops().is_empty());
    assert!(h.panel.ops().is_empty());
    assert!(h.callbacks.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn ui_event_envelope_routes_messages_and_keys() {
    let mut h = harness();

    let outcome = h
        .controller
        .handle_event(UiEvent::Nui(json!({"action": "openTpcds"})));
    assert!(outcome.is_none());
    assert!(h.controller.panel().is_open());

    let outcome = h
        .controller
        .handle_event(UiEvent::Key(KeyEvent::input(Key::Enter, "1 2 3")));
    assert_eq!(outcome.unwrap().propagation, Propagation::Stop);
    assert!(!h.controller.panel().is_open());

    assert!(h
        .controller
        .handle_event(UiEvent::Nui(json!({"nope": true})))
        .is_none());
}

// =============================================================================
// COORDINATE PANEL
// =============================================================================

#[tokio::test(start_paused = true)]
async fn enter_with_vector3_submits_coordinates() {
    let mut h = harness();
    h.controller.handle_json(r#"{"action":"openTpcds"}"#);

    let outcome = h
        .controller
        .handle_key(&KeyEvent::input(Key::Enter, "vector3(1.0, -2.5, 3)"));
    assert_eq!(outcome.propagation, Propagation::Stop);
    assert!(outcome.default_prevented);
    assert!(!h.controller.panel().is_open());

    settle().await;
    assert_eq!(
        h.callbacks.calls(),
        vec![(
            "tpcds_result".to_string(),
            json!({"x": 1.0, "y": -2.5, "z": 3.0})
        )]
    );
}

#[tokio::test(start_paused = true)]
async fn enter_with_plain_list_submits_coordinates() {
    let mut h = harness();
    h.controller.handle_json(r#"{"action":"openTpcds"}"#);
    h.controller
        .handle_key(&KeyEvent::input(Key::Enter, "1, -2.5 3"));

    settle().await;
    assert_eq!(
        h.callbacks.calls(),
        vec![(
            "tpcds_result".to_string(),
            json!({"x": 1.0, "y": -2.5, "z": 3.0})
        )]
    );
}

#[tokio::test(start_paused = true)]
async fn unparseable_or_empty_input_keeps_panel_open() {
    let mut h = harness();
    h.controller.handle_json(r#"{"action":"openTpcds"}"#);

    for input in ["abc", "", "   ", "1 2"] {
        let outcome = h.controller.handle_key(&KeyEvent::input(Key::Enter, input));
        assert!(outcome.default_prevented);
        assert!(h.controller.panel().is_open(), "closed on {input:?}");
    }

    settle().await;
    assert!(h.callbacks.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn all_input_key_phases_stop_propagation() {
    let mut h = harness();
    h.controller.handle_json(r#"{"action":"openTpcds"}"#);

    for phase in [KeyPhase::Down, KeyPhase::Up, KeyPhase::Press] {
        let outcome = h
            .controller
            .handle_key(&KeyEvent::input("w", "1").with_phase(phase));
        assert_eq!(outcome.propagation, Propagation::Stop);
        assert!(!outcome.default_prevented);
    }
}

#[tokio::test(start_paused = true)]
async fn enter_while_panel_closed_sends_nothing() {
    let mut h = harness();
    let outcome = h.controller.handle_key(&KeyEvent::input(Key::Enter, "1 2 3"));
    assert_eq!(outcome.propagation, Propagation::Stop);

    settle().await;
    assert!(h.callbacks.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn enter_keyup_does_not_submit() {
    let mut h = harness();
    h.controller.handle_json(r#"{"action":"openTpcds"}"#);
    h.controller
        .handle_key(&KeyEvent::input(Key::Enter, "1 2 3").with_phase(KeyPhase::Up));
    assert!(h.controller.panel().is_open());
}

// =============================================================================
// ESCAPE
// =============================================================================

#[tokio::test(start_paused = true)]
async fn escape_with_panel_open_cancels() {
    let mut h = harness();
    h.controller.handle_json(r#"{"action":"openTpcds"}"#);

    let outcome = h.controller.handle_key(&KeyEvent::document(Key::Escape));
    assert_eq!(outcome.propagation, Propagation::Continue);
    assert!(!h.controller.panel().is_open());
    assert_eq!(h.panel.visible(), Some(false));

    settle().await;
    assert_eq!(
        h.callbacks.calls(),
        vec![("tpcds_result".to_string(), json!({"cancelled": true}))]
    );
}

#[tokio::test(start_paused = true)]
async fn escape_inside_input_is_contained() {
    let mut h = harness();
    h.controller.handle_json(r#"{"action":"openTpcds"}"#);

    for phase in [KeyPhase::Down, KeyPhase::Up, KeyPhase::Press] {
        let outcome = h
            .controller
            .handle_key(&KeyEvent::input(Key::Escape, "12").with_phase(phase));
        assert_eq!(outcome.propagation, Propagation::Stop);
    }
    assert!(h.controller.panel().is_open());

    settle().await;
    assert!(h.callbacks.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn escape_with_panel_closed_requests_close_ui() {
    let mut h = harness();
    h.controller.handle_key(&KeyEvent::document(Key::Escape));

    settle().await;
    assert_eq!(
        h.callbacks.calls(),
        vec![("closeUI".to_string(), json!({}))]
    );
}

#[tokio::test(start_paused = true)]
async fn second_escape_after_cancel_requests_close_ui() {
    let mut h = harness();
    h.controller.handle_json(r#"{"action":"openTpcds"}"#);
    h.controller.handle_key(&KeyEvent::document(Key::Escape));
    h.controller.handle_key(&KeyEvent::document(Key::Escape));

    settle().await;
    let names: Vec<String> = h.callbacks.calls().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["tpcds_result", "closeUI"]);
}

#[tokio::test(start_paused = true)]
async fn other_document_keys_are_ignored() {
    let mut h = harness();
    let outcome = h.controller.handle_key(&KeyEvent::document("F2"));
    assert_eq!(outcome.propagation, Propagation::Continue);
    h.controller
        .handle_key(&KeyEvent::document(Key::Escape).with_phase(KeyPhase::Up));

    settle().await;
    assert!(h.callbacks.calls().is_empty());
}

// =============================================================================
// CALLBACK FAILURES
// =============================================================================

#[tokio::test(start_paused = true)]
async fn callback_failure_is_contained() {
    let mut h = harness_with(RecordingCallbacks {
        fail: true,
        ..Default::default()
    });
    h.controller.handle_json(r#"{"action":"openTpcds"}"#);
    h.controller
        .handle_key(&KeyEvent::input(Key::Enter, "4 5 6"));

    settle().await;
    assert_eq!(h.callbacks.calls().len(), 1);
    assert!(!h.controller.panel().is_open());
}

#[tokio::test(start_paused = true)]
async fn finish_callbacks_waits_for_in_flight_result() {
    let mut h = harness_with(RecordingCallbacks {
        delay: Some(Duration::from_secs(2)),
        ..Default::default()
    });
    h.controller.handle_json(r#"{"action":"openTpcds"}"#);
    h.controller
        .handle_key(&KeyEvent::input(Key::Enter, "1 2 3"));
    assert_eq!(h.controller.pending_callbacks(), 1);

    assert_eq!(h.controller.finish_callbacks().await, 0);
    assert_eq!(
        h.callbacks.calls(),
        vec![(
            "tpcds_result".to_string(),
            json!({"x": 1.0, "y": 2.0, "z": 3.0})
        )]
    );
    assert_eq!(h.controller.pending_callbacks(), 0);
}

#[tokio::test(start_paused = true)]
async fn finish_callbacks_gives_up_after_timeout() {
    let mut h = harness_with(RecordingCallbacks {
        delay: Some(Duration::from_secs(60)),
        ..Default::default()
    });
    h.controller.handle_key(&KeyEvent::document(Key::Escape));

    let started = tokio::time::Instant::now();
    assert_eq!(h.controller.finish_callbacks().await, 1);
    assert_eq!(started.elapsed(), Duration::from_secs(10));
    assert!(h.callbacks.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn finish_callbacks_with_nothing_pending() {
    let mut h = harness();
    assert_eq!(h.controller.finish_callbacks().await, 0);
}
