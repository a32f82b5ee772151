// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse event classification and enter/leave synthesis.
//!
//! ## Overview
//!
//! Hosts deliver `mouseover`/`mouseout` for every transition, including
//! moves between two descendants of the same element. A consumer that wants
//! `mouseenter`/`mouseleave` semantics only cares about transitions that
//! cross a boundary element's outer edge. [`is_mouse_special_event`] makes
//! that call with two containment questions, and
//! [`create_mouse_special_event`] builds the non-bubbling replacement event.
//!
//! [`is_modified_click_event`] is the unrelated third resident: it separates
//! plain clicks from modified ones that hosts conventionally treat as a
//! different gesture (open in new tab, add to selection).

use canopy_tree::{contains, ParentLookup};

use crate::env::Environment;
use crate::event::Event;
use crate::types::{EventType, Modifiers, MouseButton};

/// Whether a click-class event carries a gesture-changing modifier.
///
/// Platform conventions differ on the primary modifier: Meta on macOS-style
/// keyboards, Ctrl elsewhere ([`Environment::meta_is_primary`]).
/// Middle-button and Shift-clicks are modified everywhere.
pub fn is_modified_click_event<K>(event: &Event<K>, env: &Environment) -> bool {
    let primary_held = if env.meta_is_primary() {
        event.modifiers.contains(Modifiers::META)
    } else {
        event.modifiers.contains(Modifiers::CTRL)
    };
    primary_held
        || event.button == Some(MouseButton::Middle)
        || event.modifiers.contains(Modifiers::SHIFT)
}

/// The synthetic type a raw over/out event maps to, if any.
fn synthetic_for(source: EventType) -> Option<EventType> {
    match source {
        EventType::MouseOver => Some(EventType::MouseEnter),
        EventType::MouseOut => Some(EventType::MouseLeave),
        _ => None,
    }
}

/// Decide whether a raw `mouseover`/`mouseout` is a true enter/leave of
/// `boundary`'s subtree.
///
/// True iff all of:
///
/// - the event's type is the raw counterpart of the requested
///   `synthetic_type` (`mouseover` for `mouseenter`, `mouseout` for
///   `mouseleave`);
/// - the related target — the node the pointer came from (enter) or went to
///   (leave) — is *not* within `boundary`'s subtree;
/// - the event's target *is* within (or is) `boundary`'s subtree.
///
/// A transition between two descendants of `boundary` fails the second
/// condition and is never reported; only crossings of the outer edge
/// qualify. Events with no related target (pointer arriving from outside
/// the tree entirely) count as crossings.
///
/// ```
/// use canopy_event::mouse::is_mouse_special_event;
/// use canopy_event::{Event, EventType};
/// use canopy_tree::ParentMap;
///
/// // root(1) → child(2)
/// let mut parents: ParentMap<u32> = ParentMap::new();
/// parents.insert(2, 1);
///
/// // Pointer moved from the root onto the child: enters the child's
/// // subtree, but stays inside the root's.
/// let over = Event::new(EventType::MouseOver, Some(2)).with_related_target(1);
/// assert!(is_mouse_special_event(&over, EventType::MouseEnter, 2, &parents));
/// assert!(!is_mouse_special_event(&over, EventType::MouseEnter, 1, &parents));
/// ```
pub fn is_mouse_special_event<K: Copy + Eq>(
    event: &Event<K>,
    synthetic_type: EventType,
    boundary: K,
    parents: &impl ParentLookup<K>,
) -> bool {
    if synthetic_for(event.event_type) != Some(synthetic_type) {
        return false;
    }
    !contains(boundary, event.related_target, parents)
        && contains(boundary, event.target, parents)
}

/// Build the non-bubbling enter/leave event replacing a raw over/out event.
///
/// The result targets `boundary`, carries the mapped type, and copies the
/// pointer's position, button, modifier, related-target, and timestamp
/// fields from the source. Its `prevent_default`/`stop_propagation` state is
/// fresh and independent: cancelling the synthetic event leaves the source
/// untouched, and vice versa.
///
/// Returns `None` when the source event is not a `mouseover`/`mouseout`.
pub fn create_mouse_special_event<K: Copy>(event: &Event<K>, boundary: K) -> Option<Event<K>> {
    let synthetic_type = synthetic_for(event.event_type)?;
    let mut out = Event::new(synthetic_type, Some(boundary));
    out.related_target = event.related_target;
    out.modifiers = event.modifiers;
    out.button = event.button;
    out.client = event.client;
    out.screen = event.screen;
    out.time_stamp = event.time_stamp;
    out.bubbles = false;
    Some(out)
}
