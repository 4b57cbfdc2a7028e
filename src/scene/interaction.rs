//! Pointer mapping and hover bookkeeping
//!
//! Picking starts from a pointer position in viewport pixels; the scene
//! normalizes it into `[-1, 1] x [-1, 1]` (y up) before casting a ray. The
//! hover tracker keeps the identity of the cabinet currently under the
//! pointer and reports each transition so the consumer can swap color maps
//! between the normal and hover texture sets.

use glam::Vec2;

/// Convert a pointer position in viewport pixels into normalized device
/// coordinates, with y flipped so up is positive
pub fn pointer_to_ndc(x: f32, y: f32, viewport_width: f32, viewport_height: f32) -> Vec2 {
    Vec2::new(
        (x / viewport_width) * 2.0 - 1.0,
        -((y / viewport_height) * 2.0 - 1.0),
    )
}

/// Transition reported by [`HoverTracker::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange<Id> {
    /// Pointer entered `target`; if `replaced` is set, that object's normal
    /// color map must be restored
    Entered {
        /// Newly hovered object
        target: Id,
        /// Previously hovered object, if any
        replaced: Option<Id>,
    },
    /// Pointer moved within the same object
    Moved(Id),
    /// Pointer left the given object and is now over nothing
    Left(Id),
    /// Pointer is over nothing, as before
    Idle,
}

/// Tracks the object currently under the pointer
#[derive(Debug, Default)]
pub struct HoverTracker<Id> {
    current: Option<Id>,
}

impl<Id: Copy + PartialEq> HoverTracker<Id> {
    /// Create a tracker with nothing hovered
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The currently hovered object, if any
    pub fn current(&self) -> Option<Id> {
        self.current
    }

    /// Record the latest picking result and report the transition
    pub fn update(&mut self, hit: Option<Id>) -> HoverChange<Id> {
        match (self.current, hit) {
            (None, None) => HoverChange::Idle,
            (Some(old), None) => {
                self.current = None;
                HoverChange::Left(old)
            }
            (Some(old), Some(new)) if old == new => HoverChange::Moved(new),
            (old, Some(new)) => {
                self.current = Some(new);
                HoverChange::Entered {
                    target: new,
                    replaced: old,
                }
            }
        }
    }
}
