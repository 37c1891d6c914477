//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use slidepanel::geometry::{PanelState, Rect};
use slidepanel::gesture::GestureSample;
use slidepanel::host::{FrameSurface, PanelHost, Surface};

/// Standard 400x800 host frame at the origin
pub fn host_frame() -> Rect {
    Rect::new(0.0, 0.0, 400.0, 800.0)
}

/// Create a host with an attached child resting at `initial`
pub fn attached_host(initial: PanelState) -> PanelHost<FrameSurface> {
    let mut host = PanelHost::new(host_frame());
    host.attach(FrameSurface::default(), initial)
        .expect("attach to a well-formed host frame");
    host
}

/// Same as [`attached_host`] but in non-interactive mode
pub fn discrete_host(initial: PanelState) -> PanelHost<FrameSurface> {
    let mut host = attached_host(initial);
    host.set_interactable(false);
    host
}

/// Child vertical origin after all animations have run to completion
pub fn settled_y(host: &mut PanelHost<FrameSurface>, from: Instant) -> f32 {
    host.tick(from + Duration::from_secs(10));
    host.child().expect("host has a child attached").frame().y
}

/// Drive a full interactive drag: began, one changed per delta, ended
pub fn drag(host: &mut PanelHost<FrameSurface>, deltas: &[f32], now: Instant) {
    host.handle_gesture_event(GestureSample::began(0.0), now)
        .expect("gesture on attached host");
    for &dy in deltas {
        host.handle_gesture_event(GestureSample::changed(dy), now)
            .expect("gesture on attached host");
    }
    host.handle_gesture_event(GestureSample::ended(0.0), now)
        .expect("gesture on attached host");
}
