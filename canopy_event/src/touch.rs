// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-to-click recreation.
//!
//! Touch hosts end a tap with a `touchend`, then (sometimes, and after a
//! delay) a compatibility click. Consumers that unify touch and mouse
//! activation recreate the `touchend` as a click-like event immediately and
//! tag the original native sequence for suppression via
//! [`crate::event::Event::prevent_mouse_events`].

use crate::event::Event;
use crate::types::{EventType, TouchPoint};

/// Rebuild a touch event as a click-like event.
///
/// Position comes from the first changed touch if the changed list is
/// non-empty, else the first active touch, else nowhere: a touch event with
/// no touch data yields a click with absent position fields, which consumers
/// must read as "unknown position", never as the origin. Client and screen
/// coordinates are copied; page coordinates are not.
///
/// The result's type is `click`; the source's type is preserved in
/// [`Event::original_event_type`] so downstream consumers can tell a
/// recreated tap from a real click. Its cancellation state is fresh, and its
/// timestamp is `now` — the recreation time supplied by the caller, not the
/// original touch time.
///
/// ```
/// use canopy_event::touch::recreate_touch_event_as_click;
/// use canopy_event::{Event, EventType, TouchPoint};
/// use kurbo::Point;
///
/// let mut touchend = Event::<u32>::new(EventType::TouchEnd, Some(4));
/// touchend.changed_touches.push(TouchPoint::at(Point::new(5.0, 6.0), Point::new(7.0, 8.0)));
///
/// let click = recreate_touch_event_as_click(&touchend, 1_000);
/// assert_eq!(click.event_type, EventType::Click);
/// assert_eq!(click.original_event_type, Some(EventType::TouchEnd));
/// assert_eq!(click.client, Some(Point::new(5.0, 6.0)));
/// ```
pub fn recreate_touch_event_as_click<K: Copy>(event: &Event<K>, now: u64) -> Event<K> {
    let point: Option<&TouchPoint> = event
        .changed_touches
        .first()
        .or_else(|| event.touches.first());

    let mut out = Event::new(EventType::Click, event.target);
    out.original_event_type = Some(event.event_type);
    out.modifiers = event.modifiers;
    out.time_stamp = now;
    if let Some(p) = point {
        out.client = p.client;
        out.screen = p.screen;
    }
    out
}
