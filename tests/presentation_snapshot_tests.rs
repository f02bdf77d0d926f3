use std::time::Duration;

use slide_deck::DeckError;
use slide_deck::Presentation;
use slide_deck::api::{PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1, PresentationSnapshot};
use slide_deck::charts::{FrameChartBackend, NEWSPAPER_CHART_TARGET, SOCIAL_MEDIA_CHART_TARGET};
use slide_deck::core::{ChartTargetId, Viewport};
use slide_deck::display::HeadlessDisplay;
use slide_deck::render::NullRenderer;

fn settled_snapshot() -> PresentationSnapshot {
    let backend =
        FrameChartBackend::new(NullRenderer::default(), Viewport::default()).expect("backend");
    let display = HeadlessDisplay::with_slides(12)
        .with_chart_target(NEWSPAPER_CHART_TARGET)
        .with_chart_target(SOCIAL_MEDIA_CHART_TARGET);
    let mut presentation = Presentation::with_default_deck(display, backend).expect("init");
    presentation.chart_library_ready();
    presentation.advance_time(Duration::from_millis(250));
    presentation.go_to_slide(5);
    presentation.snapshot()
}

#[test]
fn snapshot_reflects_navigation_and_chart_state() {
    let snapshot = settled_snapshot();
    assert_eq!(snapshot.current_slide, 5);
    assert_eq!(snapshot.total_slides, 12);
    assert!(!snapshot.controls.previous_disabled);
    assert!(!snapshot.controls.next_disabled);
    assert!(snapshot.chart_library_ready);
    assert_eq!(snapshot.pending_tasks, 1);
    assert_eq!(snapshot.elapsed_ms, 250);
    assert_eq!(
        snapshot.live_charts,
        vec![
            ChartTargetId::new(NEWSPAPER_CHART_TARGET),
            ChartTargetId::new(SOCIAL_MEDIA_CHART_TARGET),
        ]
    );
}

#[test]
fn contract_v1_json_round_trips() {
    let snapshot = settled_snapshot();
    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"newspaperChart\""));

    let restored = PresentationSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = settled_snapshot();
    let json = serde_json::to_string(&snapshot).expect("serialize bare");
    let restored = PresentationSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = settled_snapshot();
    let payload = serde_json::json!({
        "schema_version": PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1 + 1,
        "snapshot": snapshot,
    });
    let err = PresentationSnapshot::from_json_compat_str(&payload.to_string())
        .expect_err("future schema");
    assert!(matches!(err, DeckError::InvalidData(_)));
}
