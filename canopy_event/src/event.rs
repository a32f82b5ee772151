// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event value and its stoppable state.

use kurbo::Point;
use smallvec::SmallVec;

use crate::types::{EventType, Modifiers, MouseButton, TouchPoint};

/// Mouse-event suppression state carried on an event.
///
/// The suppression tag is a plain convention between a touch-to-click
/// recreator and whatever later receives the native mouse follow-ups; it has
/// nothing to do with `prevent_default`. The `Armed` state models "a trigger
/// was attached but not yet invoked".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum MouseSuppression {
    Unsupported,
    Armed,
    Prevented,
}

/// A single input event, native or synthesized.
///
/// `K` is the host's node key type. Data fields are plain public state; the
/// stoppable flags (`prevent_default`, `stop_propagation`, mouse-event
/// suppression) are private and reachable only through methods so that a
/// synthesized copy always starts with fresh ones.
///
/// Optional fields are genuinely optional: an event with no `key_code` is
/// simply never an action key, an event with no touch data recreates into a
/// click with no position. Constructors default every optional field to
/// absent and `bubbles` to true; synthesis overrides what it must.
///
/// ```
/// use canopy_event::{Event, EventType};
///
/// let mut e = Event::<u32>::new(EventType::Click, Some(3));
/// assert!(!e.default_prevented());
/// e.prevent_default();
/// assert!(e.default_prevented());
/// ```
#[derive(Clone, Debug)]
pub struct Event<K> {
    /// Normalized event type.
    pub event_type: EventType,
    /// Node the event targets.
    pub target: Option<K>,
    /// Node the pointer moved from/to, for over/out transitions.
    pub related_target: Option<K>,
    /// Key code for keyboard events.
    pub key_code: Option<u16>,
    /// Modifier keys held.
    pub modifiers: Modifiers,
    /// Mouse button, for pointer events.
    pub button: Option<MouseButton>,
    /// Pointer position in client space.
    pub client: Option<Point>,
    /// Pointer position in screen space.
    pub screen: Option<Point>,
    /// Active touch points.
    pub touches: SmallVec<[TouchPoint; 2]>,
    /// Touch points that changed in this event.
    pub changed_touches: SmallVec<[TouchPoint; 2]>,
    /// Event time in the host's clock, milliseconds.
    pub time_stamp: u64,
    /// Whether the event propagates up the tree.
    pub bubbles: bool,
    /// For synthesized events, the type of the event they were derived from.
    pub original_event_type: Option<EventType>,
    default_prevented: bool,
    propagation_stopped: bool,
    suppression: MouseSuppression,
}

impl<K> Event<K> {
    /// Create an event of `event_type` aimed at `target`.
    pub fn new(event_type: EventType, target: Option<K>) -> Self {
        Self {
            event_type,
            target,
            related_target: None,
            key_code: None,
            modifiers: Modifiers::empty(),
            button: None,
            client: None,
            screen: None,
            touches: SmallVec::new(),
            changed_touches: SmallVec::new(),
            time_stamp: 0,
            bubbles: true,
            original_event_type: None,
            default_prevented: false,
            propagation_stopped: false,
            suppression: MouseSuppression::Unsupported,
        }
    }

    /// Set the related target (over/out transitions).
    pub fn with_related_target(mut self, related: K) -> Self {
        self.related_target = Some(related);
        self
    }

    /// Set the key code.
    pub fn with_key_code(mut self, code: u16) -> Self {
        self.key_code = Some(code);
        self
    }

    /// Set the held modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the mouse button.
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }

    /// Set the client-space position.
    pub fn with_client(mut self, p: Point) -> Self {
        self.client = Some(p);
        self
    }

    /// Set the screen-space position.
    pub fn with_screen(mut self, p: Point) -> Self {
        self.screen = Some(p);
        self
    }

    /// Set the timestamp.
    pub fn with_time_stamp(mut self, t: u64) -> Self {
        self.time_stamp = t;
        self
    }

    /// Mark the event's default action as cancelled.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether `prevent_default` has been called on this event.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop the event from propagating further.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether `stop_propagation` has been called on this event.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Tag the event so the native mouse follow-up sequence is ignored.
    ///
    /// Works on any event, whether or not suppression support was attached
    /// first. Unrelated to [`Event::prevent_default`].
    pub fn prevent_mouse_events(&mut self) {
        self.suppression = MouseSuppression::Prevented;
    }

    /// Whether this event carries the mouse-suppression tag.
    pub fn mouse_events_prevented(&self) -> bool {
        self.suppression == MouseSuppression::Prevented
    }

    /// Attach a suppression trigger without marking the event suppressed.
    ///
    /// The tag flips only once [`Event::trigger_prevent_mouse_events`] is
    /// invoked. Attaching support to an already-suppressed event does not
    /// clear the tag.
    pub fn add_prevent_mouse_events_support(&mut self) {
        if self.suppression == MouseSuppression::Unsupported {
            self.suppression = MouseSuppression::Armed;
        }
    }

    /// Invoke a previously attached suppression trigger.
    ///
    /// No-op when support was never attached.
    pub fn trigger_prevent_mouse_events(&mut self) {
        if self.suppression == MouseSuppression::Armed {
            self.suppression = MouseSuppression::Prevented;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prevent_default_and_stop_propagation_are_independent() {
        let mut e = Event::<u32>::new(EventType::Click, Some(1));
        e.prevent_default();
        assert!(e.default_prevented());
        assert!(!e.propagation_stopped());
        e.stop_propagation();
        assert!(e.propagation_stopped());
    }

    #[test]
    fn suppression_round_trip() {
        let mut e = Event::<u32>::new(EventType::TouchEnd, Some(1));
        assert!(!e.mouse_events_prevented());
        e.prevent_mouse_events();
        assert!(e.mouse_events_prevented());
    }

    #[test]
    fn armed_suppression_flips_only_on_trigger() {
        let mut e = Event::<u32>::new(EventType::TouchEnd, Some(1));
        e.add_prevent_mouse_events_support();
        assert!(!e.mouse_events_prevented());
        e.trigger_prevent_mouse_events();
        assert!(e.mouse_events_prevented());
    }

    #[test]
    fn trigger_without_support_is_a_no_op() {
        let mut e = Event::<u32>::new(EventType::TouchEnd, Some(1));
        e.trigger_prevent_mouse_events();
        assert!(!e.mouse_events_prevented());
    }

    #[test]
    fn suppression_is_distinct_from_prevent_default() {
        let mut e = Event::<u32>::new(EventType::TouchEnd, Some(1));
        e.prevent_mouse_events();
        assert!(!e.default_prevented());
        e.prevent_default();
        assert!(e.mouse_events_prevented());
    }

    #[test]
    fn clones_do_not_share_flag_state() {
        let mut original = Event::<u32>::new(EventType::Click, Some(1));
        let mut copy = original.clone();
        copy.prevent_default();
        copy.prevent_mouse_events();
        assert!(!original.default_prevented());
        assert!(!original.mouse_events_prevented());
        original.stop_propagation();
        assert!(!copy.propagation_stopped());
    }
}
