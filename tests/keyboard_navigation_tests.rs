use slide_deck::Presentation;
use slide_deck::charts::FrameChartBackend;
use slide_deck::core::Viewport;
use slide_deck::display::HeadlessDisplay;
use slide_deck::interaction::{KeyInput, KeyOutcome};
use slide_deck::render::NullRenderer;

fn default_deck() -> Presentation<HeadlessDisplay, FrameChartBackend<NullRenderer>> {
    let backend =
        FrameChartBackend::new(NullRenderer::default(), Viewport::default()).expect("backend");
    Presentation::with_default_deck(HeadlessDisplay::with_slides(12), backend)
        .expect("presentation init")
}

#[test]
fn eleven_right_presses_reach_the_last_slide_and_a_twelfth_stays() {
    let mut presentation = default_deck();
    for _ in 0..11 {
        assert_eq!(
            presentation.handle_key(KeyInput::ArrowRight),
            KeyOutcome::Consumed
        );
    }
    assert_eq!(presentation.current_slide(), 12);

    assert_eq!(
        presentation.handle_key(KeyInput::ArrowRight),
        KeyOutcome::Consumed
    );
    assert_eq!(presentation.current_slide(), 12);
    assert_eq!(presentation.display().counter_text(), "12");
}

#[test]
fn left_arrow_at_first_slide_is_consumed_without_moving() {
    let mut presentation = default_deck();
    let outcome = presentation.handle_key(KeyInput::ArrowLeft);
    assert!(outcome.prevents_default());
    assert_eq!(presentation.current_slide(), 1);
}

#[test]
fn left_arrow_steps_back() {
    let mut presentation = default_deck();
    presentation.go_to_slide(8);
    presentation.handle_key(KeyInput::ArrowLeft);
    presentation.handle_key(KeyInput::ArrowLeft);
    assert_eq!(presentation.current_slide(), 6);
}

#[test]
fn other_keys_are_ignored() {
    let mut presentation = default_deck();
    presentation.go_to_slide(4);
    for name in ["ArrowUp", "ArrowDown", "Enter", " ", "PageDown", "l"] {
        let outcome = presentation.handle_key(KeyInput::from_key_name(name));
        assert_eq!(outcome, KeyOutcome::Ignored, "key {name:?}");
        assert!(!outcome.prevents_default());
    }
    assert_eq!(presentation.current_slide(), 4);
}

#[test]
fn key_names_are_parsed_from_dom_style_strings() {
    let mut presentation = default_deck();
    presentation.handle_key(KeyInput::from_key_name("ArrowRight"));
    presentation.handle_key(KeyInput::from_key_name("ArrowRight"));
    presentation.handle_key(KeyInput::from_key_name("ArrowLeft"));
    assert_eq!(presentation.current_slide(), 2);
}
