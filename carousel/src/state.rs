use crate::Size;

/// Where the selection state machine currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    /// Waiting for the viewport to reach the item at expanded index `target`.
    Settling { target: usize, animated: bool },
    /// The logical item `index` is selected.
    Selected(usize),
}

/// A lightweight, serializable snapshot of the committed selection.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionState {
    /// Logical index of the last committed selection.
    pub current_index: Option<usize>,
    /// Set while a tap-initiated selection is settling.
    pub pending_tap_selection: bool,
}

/// A lightweight, serializable snapshot of the viewport geometry and scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub size: Size,
    pub offset: f32,
}
