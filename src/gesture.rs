//! Gesture input types
//!
//! A drag gesture arrives as a sequence of samples: one `Began`, zero or
//! more `Changed`, then one `Ended`. Each sample carries the vertical
//! translation since the previous sample; the event source resets its
//! accumulated translation after reporting, so a delta is never applied
//! twice.

/// Phase of a drag gesture, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Pointer went down; a drag sequence starts.
    Began,
    /// Pointer moved while down.
    Changed,
    /// Pointer released; the sequence ends.
    Ended,
    /// Anything else (cancelled, failed). No panel reaction.
    Other,
}

/// One sample of an in-progress drag gesture.
///
/// Ephemeral value, consumed immediately by the slide machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    /// Vertical delta since the previous sample, in logical pixels.
    /// Positive is downward.
    pub translation: f32,
}

impl GestureSample {
    pub fn new(phase: GesturePhase, translation: f32) -> Self {
        Self { phase, translation }
    }

    pub fn began(translation: f32) -> Self {
        Self::new(GesturePhase::Began, translation)
    }

    pub fn changed(translation: f32) -> Self {
        Self::new(GesturePhase::Changed, translation)
    }

    pub fn ended(translation: f32) -> Self {
        Self::new(GesturePhase::Ended, translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_constructors() {
        assert_eq!(GestureSample::began(0.0).phase, GesturePhase::Began);
        assert_eq!(GestureSample::changed(-5.0).phase, GesturePhase::Changed);
        assert_eq!(GestureSample::changed(-5.0).translation, -5.0);
        assert_eq!(GestureSample::ended(2.5).phase, GesturePhase::Ended);
    }
}
