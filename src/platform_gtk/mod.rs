//! GTK4 glue: maps GDK key events onto presentation input.

use gtk4 as gtk;
use gtk::gdk;
use gtk::glib::Propagation;

use crate::interaction::{KeyInput, KeyOutcome};

#[must_use]
pub fn key_input_from_gdk(key: gdk::Key) -> KeyInput {
    if key == gdk::Key::Left {
        KeyInput::ArrowLeft
    } else if key == gdk::Key::Right {
        KeyInput::ArrowRight
    } else {
        KeyInput::Other
    }
}

/// Signal propagation for a key outcome: consumed keys stop the event.
#[must_use]
pub fn propagation_for(outcome: KeyOutcome) -> Propagation {
    if outcome.prevents_default() {
        Propagation::Stop
    } else {
        Propagation::Proceed
    }
}
