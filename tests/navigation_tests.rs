use slide_deck::Presentation;
use slide_deck::charts::{FrameChartBackend, NEWSPAPER_CHART_TARGET, SOCIAL_MEDIA_CHART_TARGET};
use slide_deck::core::Viewport;
use slide_deck::display::HeadlessDisplay;
use slide_deck::interaction::ControlId;
use slide_deck::render::NullRenderer;

type HeadlessPresentation = Presentation<HeadlessDisplay, FrameChartBackend<NullRenderer>>;

fn default_deck_with(display: HeadlessDisplay) -> HeadlessPresentation {
    let backend =
        FrameChartBackend::new(NullRenderer::default(), Viewport::default()).expect("backend");
    Presentation::with_default_deck(display, backend).expect("presentation init")
}

fn default_deck() -> HeadlessPresentation {
    default_deck_with(
        HeadlessDisplay::with_slides(12)
            .with_chart_target(NEWSPAPER_CHART_TARGET)
            .with_chart_target(SOCIAL_MEDIA_CHART_TARGET),
    )
}

#[test]
fn startup_shows_first_slide_with_previous_disabled() {
    let presentation = default_deck();
    let display = presentation.display();

    assert_eq!(presentation.current_slide(), 1);
    assert_eq!(presentation.total_slides(), 12);
    assert_eq!(display.active_slides(), vec![1]);
    assert_eq!(display.counter_text(), "1");
    assert!(display.is_control_disabled(ControlId::Previous));
    assert!(!display.is_control_disabled(ControlId::Next));
}

#[test]
fn next_twice_reaches_slide_three_and_updates_counter() {
    let mut presentation = default_deck();
    assert!(presentation.next_slide());
    assert!(presentation.next_slide());

    assert_eq!(presentation.current_slide(), 3);
    assert_eq!(presentation.display().counter_text(), "3");
    assert_eq!(presentation.display().active_slides(), vec![3]);
}

#[test]
fn out_of_range_targets_leave_state_untouched() {
    let mut presentation = default_deck();
    assert!(presentation.go_to_slide(6));

    for slide in [0, 13, 100, u32::MAX] {
        assert!(!presentation.go_to_slide(slide));
        assert_eq!(presentation.current_slide(), 6);
        assert_eq!(presentation.display().active_slides(), vec![6]);
        assert_eq!(presentation.display().counter_text(), "6");
    }
}

#[test]
fn direct_jumps_keep_exactly_one_active_slide() {
    let mut presentation = default_deck();
    for slide in [12, 1, 7, 7, 2, 11] {
        assert!(presentation.go_to_slide(slide));
        assert_eq!(presentation.display().active_slides(), vec![slide]);
        assert_eq!(presentation.current_slide(), slide);
    }
}

#[test]
fn previous_at_first_slide_is_a_no_op() {
    let mut presentation = default_deck();
    assert!(!presentation.previous_slide());
    assert_eq!(presentation.current_slide(), 1);
    assert_eq!(presentation.pending_task_count(), 0);
}

#[test]
fn next_at_last_slide_is_a_no_op() {
    let mut presentation = default_deck();
    assert!(presentation.go_to_slide(12));
    assert!(!presentation.next_slide());
    assert_eq!(presentation.current_slide(), 12);
    assert!(presentation.display().is_control_disabled(ControlId::Next));
    assert!(!presentation.display().is_control_disabled(ControlId::Previous));
}

#[test]
fn control_flags_track_boundaries_after_every_move() {
    let mut presentation = default_deck();
    let mut slide = 1;
    while presentation.next_slide() {
        slide += 1;
        let controls = presentation.control_state();
        let display = presentation.display();
        assert_eq!(controls.previous_disabled, slide == 1);
        assert_eq!(controls.next_disabled, slide == 12);
        assert_eq!(
            display.is_control_disabled(ControlId::Previous),
            controls.previous_disabled
        );
        assert_eq!(
            display.is_control_disabled(ControlId::Next),
            controls.next_disabled
        );
    }
    assert_eq!(slide, 12);
}

#[test]
fn clicking_controls_navigates_like_the_arrow_keys() {
    let mut presentation = default_deck();
    assert!(presentation.click(ControlId::Next));
    assert!(presentation.click(ControlId::Next));
    assert!(presentation.click(ControlId::Previous));
    assert_eq!(presentation.current_slide(), 2);
    assert!(presentation.click(ControlId::Previous));
    assert!(!presentation.click(ControlId::Previous));
    assert_eq!(presentation.current_slide(), 1);
}

#[test]
fn slide_without_display_region_cannot_be_activated() {
    let mut presentation = default_deck_with(HeadlessDisplay::with_slides(12).without_slide(4));
    assert!(presentation.go_to_slide(3));
    assert!(!presentation.next_slide());
    assert_eq!(presentation.current_slide(), 3);
    assert_eq!(presentation.display().active_slides(), vec![3]);
}
