//! Panel host: owns the attachment and applies slide actions
//!
//! The host composes a child [`Surface`] with one [`Animator`] and the
//! slide machine's threaded state. Attachment is an explicit enum, so
//! there is no representable "driver exists but child was never set"
//! condition, and gesture events with no attachment fail with
//! [`PanelError::StaleAnimationHandle`].

use std::time::{Duration, Instant};

use tracing::debug;

use crate::animator::{Animator, Easing};
use crate::error::PanelError;
use crate::geometry::{PanelState, Rect};
use crate::gesture::GestureSample;
use crate::slide::{self, SlideAction, SlideInput, SlideState};

/// Default duration of a settle/commit transition.
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(500);

/// The child surface capability: anything with a mutable frame.
///
/// The host only ever reads the frame and rewrites its vertical origin;
/// rendering the surface is the caller's concern.
pub trait Surface {
    fn frame(&self) -> Rect;
    fn set_frame(&mut self, frame: Rect);

    /// Rewrite only the vertical origin, keeping size and x.
    fn set_origin_y(&mut self, y: f32) {
        let mut frame = self.frame();
        frame.y = y;
        self.set_frame(frame);
    }
}

/// Plain rect-backed surface, used by tests and the demo shell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameSurface {
    frame: Rect,
}

impl FrameSurface {
    pub fn new(frame: Rect) -> Self {
        Self { frame }
    }
}

impl Surface for FrameSurface {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

/// Exclusive ownership of the attached child and its driver. Replacing
/// the attachment drops both, so a stale paused animation can never be
/// resumed against a new child.
enum Attachment<S> {
    Unattached,
    Attached {
        child: S,
        driver: Animator,
        machine: SlideState,
        state: PanelState,
    },
}

/// Hosts one slide-up panel inside a parent frame.
pub struct PanelHost<S: Surface> {
    host_frame: Rect,
    interactable: bool,
    duration: Duration,
    attachment: Attachment<S>,
}

impl<S: Surface> PanelHost<S> {
    pub fn new(host_frame: Rect) -> Self {
        Self {
            host_frame,
            interactable: true,
            duration: DEFAULT_SLIDE_DURATION,
            attachment: Attachment::Unattached,
        }
    }

    /// Override the settle/commit transition duration. Takes effect at
    /// the next `attach`.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Attach `child` at `initial`'s resting offset, replacing (and
    /// dropping) any previous child and driver.
    pub fn attach(&mut self, mut child: S, initial: PanelState) -> Result<(), PanelError> {
        if self.host_frame.is_degenerate() {
            return Err(PanelError::InvalidHostGeometry {
                width: self.host_frame.width,
                height: self.host_frame.height,
            });
        }

        let target = initial.target_y(&self.host_frame);
        child.set_frame(self.host_frame.offset_by(0.0, target));

        debug!(?initial, target, "attaching slide panel");

        // Fresh driver per attachment, already started so position
        // updates and pauses are always valid.
        let driver = Animator::start(self.duration, Easing::EaseInOut, target);
        self.attachment = Attachment::Attached {
            child,
            driver,
            machine: SlideState::default(),
            state: initial,
        };
        Ok(())
    }

    /// Remove the current child, discarding its driver and any paused
    /// animation.
    pub fn detach(&mut self) -> Option<S> {
        match std::mem::replace(&mut self.attachment, Attachment::Unattached) {
            Attachment::Unattached => None,
            Attachment::Attached { child, .. } => Some(child),
        }
    }

    /// Feed one gesture sample through the slide machine and apply the
    /// resulting action.
    pub fn handle_gesture_event(
        &mut self,
        sample: GestureSample,
        now: Instant,
    ) -> Result<(), PanelError> {
        let Attachment::Attached {
            child,
            driver,
            machine,
            state,
        } = &mut self.attachment
        else {
            return Err(PanelError::StaleAnimationHandle);
        };

        let input = SlideInput {
            sample,
            interactable: self.interactable,
            child_y: child.frame().y,
            host: self.host_frame,
        };
        let (next, action) = slide::step(*machine, &input);
        *machine = next;

        match action {
            SlideAction::None => {}
            SlideAction::MoveTo(y) => {
                driver.set_position(y);
                child.set_origin_y(y);
            }
            SlideAction::SettleTo(target_state) => {
                let target = target_state.target_y(&self.host_frame);
                debug!(?target_state, target, "settling to nearest state");
                driver.animate_to(target, now);
                *state = target_state;
            }
            SlideAction::Arm(target_state) => {
                let target = target_state.target_y(&self.host_frame);
                debug!(?target_state, target, "arming paused transition");
                driver.animate_to(target, now);
                driver.pause(now);
            }
            SlideAction::Commit(target_state) => {
                debug!(?target_state, "committing to state");
                if driver.is_paused() {
                    driver.resume(Easing::EaseInOut, now);
                } else {
                    // Began carried zero translation, so nothing was
                    // armed; run the whole transition now.
                    driver.animate_to(target_state.target_y(&self.host_frame), now);
                }
                *state = target_state;
            }
        }
        Ok(())
    }

    /// Sample the driver and write the child's position. Returns true
    /// while an animation is in flight (caller should keep redrawing).
    pub fn tick(&mut self, now: Instant) -> bool {
        let Attachment::Attached { child, driver, .. } = &mut self.attachment else {
            return false;
        };
        let active = driver.tick(now);
        child.set_origin_y(driver.position(now));
        active
    }

    /// When true, drags reposition the panel continuously; when false,
    /// a drag only signals the final intended state.
    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.attachment, Attachment::Attached { .. })
    }

    /// The discrete resting state the panel last settled or committed
    /// to. None when nothing is attached.
    pub fn current_state(&self) -> Option<PanelState> {
        match &self.attachment {
            Attachment::Attached { state, .. } => Some(*state),
            Attachment::Unattached => None,
        }
    }

    pub fn child(&self) -> Option<&S> {
        match &self.attachment {
            Attachment::Attached { child, .. } => Some(child),
            Attachment::Unattached => None,
        }
    }

    pub fn host_frame(&self) -> Rect {
        self.host_frame
    }

    /// Update the host frame (e.g. on window resize). Resting targets
    /// recompute from live geometry, so no repositioning happens here.
    pub fn set_host_frame(&mut self, frame: Rect) {
        self.host_frame = frame;
    }
}
