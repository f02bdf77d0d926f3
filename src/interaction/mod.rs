use serde::{Deserialize, Serialize};

/// The two navigation controls of a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlId {
    Previous,
    Next,
}

/// Keyboard input as far as presentation navigation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyInput {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl KeyInput {
    /// Maps a DOM-style key name (`"ArrowLeft"`, `"ArrowRight"`, ...).
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }

    /// Control this key acts as, if any.
    #[must_use]
    pub fn navigation_control(self) -> Option<ControlId> {
        match self {
            Self::ArrowLeft => Some(ControlId::Previous),
            Self::ArrowRight => Some(ControlId::Next),
            Self::Other => None,
        }
    }
}

/// What the host should do with an input event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyOutcome {
    /// The presentation handled the key; suppress default handling.
    Consumed,
    Ignored,
}

impl KeyOutcome {
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::{ControlId, KeyInput, KeyOutcome};

    #[test]
    fn arrow_names_map_to_controls() {
        assert_eq!(
            KeyInput::from_key_name("ArrowLeft").navigation_control(),
            Some(ControlId::Previous)
        );
        assert_eq!(
            KeyInput::from_key_name("ArrowRight").navigation_control(),
            Some(ControlId::Next)
        );
        assert_eq!(KeyInput::from_key_name("ArrowUp"), KeyInput::Other);
        assert_eq!(KeyInput::from_key_name("Enter").navigation_control(), None);
    }

    #[test]
    fn only_consumed_prevents_default() {
        assert!(KeyOutcome::Consumed.prevents_default());
        assert!(!KeyOutcome::Ignored.prevents_default());
    }
}
