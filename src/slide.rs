//! Slide state machine: pure decision logic for drag gestures
//!
//! `step` maps (machine state, gesture sample, configuration, live
//! geometry) to a new machine state and a [`SlideAction`] for the host to
//! apply. It owns no resources and performs no I/O; the host threads the
//! returned state back in on the next sample, so the only record of
//! in-progress gesture intent is the value flowing through this function.
//!
//! Two modes:
//! - interactive: `Changed` samples reposition the panel continuously and
//!   release snaps to the nearest resting state;
//! - non-interactive: the gesture is read only for directional intent
//!   (first nonzero translation sign) and the panel commits to a discrete
//!   state on release.

use crate::geometry::{PanelState, Rect, EXPANDED_TOP_MARGIN};
use crate::gesture::{GesturePhase, GestureSample};

/// Vertical direction of a drag, inferred from translation sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Dragging upward (negative translation) -> Expanded.
    Up,
    /// Dragging downward (positive translation) -> Collapsed.
    Down,
}

impl SlideDirection {
    /// Infer a direction from a translation delta. Zero carries no
    /// intent and yields `None`.
    pub fn from_translation(translation: f32) -> Option<Self> {
        if translation > 0.0 {
            Some(SlideDirection::Down)
        } else if translation < 0.0 {
            Some(SlideDirection::Up)
        } else {
            None
        }
    }

    /// The resting state this direction drives toward.
    pub fn target_state(&self) -> PanelState {
        match self {
            SlideDirection::Up => PanelState::Expanded,
            SlideDirection::Down => PanelState::Collapsed,
        }
    }
}

/// Where the machine is within a gesture sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlidePhase {
    /// No gesture in progress. Terminal per gesture, re-enterable.
    #[default]
    Idle,
    /// Non-interactive gesture started; animation paused mid-flight.
    Armed,
    /// Interactive gesture live-tracking the pointer.
    Dragging,
}

/// Machine state threaded through [`step`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideState {
    pub phase: SlidePhase,
    /// Direction inferred once per gesture (non-interactive mode).
    pub direction: Option<SlideDirection>,
}

/// Inputs for one transition.
#[derive(Debug, Clone, Copy)]
pub struct SlideInput {
    pub sample: GestureSample,
    /// Interactive (continuous tracking) vs. non-interactive (discrete).
    pub interactable: bool,
    /// Current vertical origin of the attached child.
    pub child_y: f32,
    /// Live host frame; targets are recomputed from it on every step.
    pub host: Rect,
}

/// What the host should do with the animation driver and child surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideAction {
    /// Nothing to apply.
    None,
    /// Move the child directly to this y (interactive tracking).
    MoveTo(f32),
    /// Animate to the nearest resting state (interactive release).
    SettleTo(PanelState),
    /// Retarget the driver at this state's offset and pause immediately,
    /// so the panel arms without moving (non-interactive press).
    Arm(PanelState),
    /// Run the armed (or freshly inferred) transition to completion with
    /// an ease-in-out curve and no additional delay (non-interactive
    /// release).
    Commit(PanelState),
}

/// Choose the resting state nearest to a candidate position.
///
/// Compares the candidate's offset past the expanded margin against the
/// host midpoint's offset past the candidate. Deliberately not a
/// symmetric distance metric; ties resolve to Expanded. Callers depend
/// on this exact comparison, so changing it changes where releases land.
pub fn nearest_state(candidate: f32, host: &Rect) -> PanelState {
    if (candidate - EXPANDED_TOP_MARGIN) <= (host.mid_y() - candidate) {
        PanelState::Expanded
    } else {
        PanelState::Collapsed
    }
}

/// Advance the machine by one gesture sample.
pub fn step(state: SlideState, input: &SlideInput) -> (SlideState, SlideAction) {
    if input.interactable {
        step_interactive(state, input)
    } else {
        step_discrete(state, input)
    }
}

fn step_interactive(state: SlideState, input: &SlideInput) -> (SlideState, SlideAction) {
    let t = input.sample.translation;
    match input.sample.phase {
        GesturePhase::Began => (
            SlideState {
                phase: SlidePhase::Dragging,
                direction: None,
            },
            SlideAction::None,
        ),
        GesturePhase::Changed => (
            SlideState {
                phase: SlidePhase::Dragging,
                direction: state.direction,
            },
            SlideAction::MoveTo(input.child_y + t),
        ),
        GesturePhase::Ended => (
            SlideState::default(),
            SlideAction::SettleTo(nearest_state(input.child_y + t, &input.host)),
        ),
        GesturePhase::Other => (state, SlideAction::None),
    }
}

fn step_discrete(state: SlideState, input: &SlideInput) -> (SlideState, SlideAction) {
    let t = input.sample.translation;
    match input.sample.phase {
        GesturePhase::Began => {
            // Direction resets per gesture; a zero translation at press
            // leaves it undetermined and arms nothing yet.
            let direction = SlideDirection::from_translation(t);
            let action = match direction {
                Some(dir) => SlideAction::Arm(dir.target_state()),
                None => SlideAction::None,
            };
            (
                SlideState {
                    phase: SlidePhase::Armed,
                    direction,
                },
                action,
            )
        }
        GesturePhase::Changed => {
            // Only the first nonzero sample determines intent.
            let direction = state
                .direction
                .or_else(|| SlideDirection::from_translation(t));
            (SlideState { direction, ..state }, SlideAction::None)
        }
        GesturePhase::Ended => {
            let action = match state.direction {
                Some(dir) => SlideAction::Commit(dir.target_state()),
                None => SlideAction::None,
            };
            (SlideState::default(), action)
        }
        GesturePhase::Other => (state, SlideAction::None),
    }
}
