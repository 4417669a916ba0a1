use crate::index;
use crate::{Phase, ScrollPolicy, SelectionState};

/// A committed selection change.
///
/// Observers must be told about `deselected()` (if any) before the new selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<usize>,
    pub index: usize,
    pub tapped: bool,
}

impl SelectionChange {
    /// The previously selected index, unless it is the one being selected again.
    pub fn deselected(&self) -> Option<usize> {
        self.previous.filter(|&previous| previous != self.index)
    }
}

/// The drag → settle → select state machine.
///
/// This type only tracks state; geometry and hit-testing are resolved by the caller, which
/// feeds the resulting target index back through [`Self::settle`]. A new gesture always
/// supersedes a pending target.
#[derive(Clone, Debug)]
pub struct SelectionController {
    policy: ScrollPolicy,
    phase: Phase,
    state: SelectionState,
    velocity: Option<f32>,
    scroll_enabled: bool,
}

impl SelectionController {
    pub fn new(policy: ScrollPolicy) -> Self {
        let policy = policy.normalized();
        Self {
            policy,
            phase: Phase::Idle,
            state: SelectionState::default(),
            velocity: None,
            scroll_enabled: policy.allows_scrolling(),
        }
    }

    pub fn policy(&self) -> ScrollPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ScrollPolicy) {
        self.policy = policy.normalized();
        self.scroll_enabled = self.policy.allows_scrolling();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, Phase::Settling { .. })
    }

    /// Release velocity retained from the last fling, cleared on commit.
    pub fn velocity(&self) -> Option<f32> {
        self.velocity
    }

    /// Enters `Dragging`. Returns `false` when scrolling is disabled.
    pub fn begin_drag(&mut self) -> bool {
        if !self.scroll_enabled {
            return false;
        }
        self.phase = Phase::Dragging;
        self.state.pending_tap_selection = false;
        self.velocity = None;
        true
    }

    /// Records the release velocity clamped to `±max_velocity`, if a drag is in progress.
    ///
    /// A non-finite velocity counts as a release at rest.
    pub fn end_drag(&mut self, velocity: f32, max_velocity: f32) -> Option<f32> {
        if self.phase != Phase::Dragging {
            return None;
        }
        let velocity = if !velocity.is_finite() {
            0.0
        } else if max_velocity > 0.0 {
            velocity.clamp(-max_velocity, max_velocity)
        } else {
            0.0
        };
        self.velocity = Some(velocity);
        Some(velocity)
    }

    /// Applies the `MaxSteps` limit to a drag that started on expanded index `origin` and
    /// resolved to expanded index `target`.
    ///
    /// Both indexes are expanded so the direction of travel survives the wrap between the last
    /// and first logical item. Returns the copy of the limited item closest to `target`.
    pub fn limit_target(&self, origin: usize, target: usize, count: usize) -> usize {
        let ScrollPolicy::MaxSteps(max_steps) = self.policy else {
            return target;
        };
        let Ok(limited) = index::clamp_step(origin, target, max_steps, count) else {
            return target;
        };
        index::nearest_copy(limited, target, count).unwrap_or(target)
    }

    pub fn begin_tap(&mut self) {
        self.state.pending_tap_selection = true;
        self.velocity = None;
    }

    /// Enters `Settling` towards the expanded index `target`.
    ///
    /// A fling under `MaxSteps` disables further dragging until the selection commits.
    pub fn settle(&mut self, target: usize, animated: bool) {
        self.phase = Phase::Settling { target, animated };
        if matches!(self.policy, ScrollPolicy::MaxSteps(_)) && self.velocity.is_some() {
            self.scroll_enabled = false;
        }
    }

    /// Completes a pending settle, entering `Selected`.
    ///
    /// Returns `None` if nothing is settling.
    pub fn commit(&mut self, count: usize) -> Option<SelectionChange> {
        let Phase::Settling { target, .. } = self.phase else {
            return None;
        };
        let index = index::to_logical(target, count).ok()?;
        let change = SelectionChange {
            previous: self.state.current_index,
            index,
            tapped: self.state.pending_tap_selection,
        };

        self.phase = Phase::Selected(index);
        self.state.current_index = Some(index);
        self.state.pending_tap_selection = false;
        self.velocity = None;
        self.scroll_enabled = self.policy.allows_scrolling();
        Some(change)
    }

    /// Abandons a gesture or pending settle, returning to the last committed state.
    pub fn cancel(&mut self) {
        self.phase = match self.state.current_index {
            Some(index) => Phase::Selected(index),
            None => Phase::Idle,
        };
        self.state.pending_tap_selection = false;
        self.velocity = None;
        self.scroll_enabled = self.policy.allows_scrolling();
    }

    /// Forgets all selection state, e.g. after the items were replaced.
    pub fn reset(&mut self) {
        *self = Self::new(self.policy);
    }
}
