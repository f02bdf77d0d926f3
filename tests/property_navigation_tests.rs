use proptest::prelude::*;
use slide_deck::Presentation;
use slide_deck::charts::FrameChartBackend;
use slide_deck::core::Viewport;
use slide_deck::display::HeadlessDisplay;
use slide_deck::interaction::{ControlId, KeyInput};
use slide_deck::render::NullRenderer;

#[derive(Debug, Clone)]
enum Action {
    GoTo(u32),
    Previous,
    Next,
    Key(KeyInput),
    Click(ControlId),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u32..20).prop_map(Action::GoTo),
        Just(Action::Previous),
        Just(Action::Next),
        prop_oneof![
            Just(KeyInput::ArrowLeft),
            Just(KeyInput::ArrowRight),
            Just(KeyInput::Other),
        ]
        .prop_map(Action::Key),
        prop_oneof![Just(ControlId::Previous), Just(ControlId::Next)].prop_map(Action::Click),
    ]
}

fn deck() -> Presentation<HeadlessDisplay, FrameChartBackend<NullRenderer>> {
    let backend =
        FrameChartBackend::new(NullRenderer::default(), Viewport::default()).expect("backend");
    Presentation::with_default_deck(HeadlessDisplay::with_slides(12), backend).expect("init")
}

proptest! {
    #[test]
    fn out_of_range_targets_never_move(start in 1u32..=12, target in prop_oneof![Just(0u32), 13u32..10_000]) {
        let mut presentation = deck();
        prop_assert!(presentation.go_to_slide(start));
        prop_assert!(!presentation.go_to_slide(target));
        prop_assert_eq!(presentation.current_slide(), start);
    }

    #[test]
    fn valid_targets_leave_exactly_that_slide_active(target in 1u32..=12) {
        let mut presentation = deck();
        prop_assert!(presentation.go_to_slide(target));
        prop_assert_eq!(presentation.display().active_slides(), vec![target]);
        prop_assert_eq!(presentation.display().counter_text(), target.to_string());
    }

    #[test]
    fn any_action_sequence_preserves_navigation_invariants(
        actions in prop::collection::vec(action_strategy(), 0..64)
    ) {
        let mut presentation = deck();
        for action in actions {
            let before = presentation.current_slide();
            let moved = match action {
                Action::GoTo(slide) => presentation.go_to_slide(slide),
                Action::Previous => presentation.previous_slide(),
                Action::Next => presentation.next_slide(),
                Action::Key(key) => {
                    presentation.handle_key(key);
                    presentation.current_slide() != before
                }
                Action::Click(control) => presentation.click(control),
            };

            let current = presentation.current_slide();
            prop_assert!((1..=12).contains(&current));
            if !moved {
                prop_assert_eq!(current, before);
            }
            let display = presentation.display();
            prop_assert_eq!(display.active_slides(), vec![current]);
            prop_assert_eq!(display.is_control_disabled(ControlId::Previous), current == 1);
            prop_assert_eq!(display.is_control_disabled(ControlId::Next), current == 12);
        }
    }
}
