// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener binding resolution.
//!
//! Hosts expose one of two registration mechanisms, and the event type plus
//! capture flag a listener actually needs depends on which. This module
//! folds both into a single [`EventBinding`]; performing the registration
//! against the host mechanism stays with the host.

use crate::types::EventType;

/// The listener registration mechanism a host provides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Registration {
    /// Standard registration with a capture-phase flag.
    W3c,
    /// Legacy bubble-only registration, with `focusin`/`focusout` standing
    /// in for the non-bubbling focus events.
    Legacy,
}

/// What to register with the host: the concrete event type to subscribe to
/// and whether to observe the capture phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventBinding {
    /// Event type to subscribe to.
    pub event_type: EventType,
    /// Whether to observe the capture phase.
    pub capture: bool,
}

/// Resolve the binding for a requested event type under a registration
/// mechanism.
///
/// `focus`, `blur`, `error`, and `load` do not bubble, so under [`W3c`]
/// registration a delegating listener observes them in the capture phase.
/// Under [`Legacy`] registration there is no capture phase; focus and blur
/// are observed through their bubbling `focusin`/`focusout` variants
/// instead. Everything else binds as-is without capture.
///
/// [`W3c`]: Registration::W3c
/// [`Legacy`]: Registration::Legacy
///
/// ```
/// use canopy_event::listen::{resolve_binding, Registration};
/// use canopy_event::EventType;
///
/// let w3c = resolve_binding(EventType::Focus, Registration::W3c);
/// assert_eq!(w3c.event_type, EventType::Focus);
/// assert!(w3c.capture);
///
/// let legacy = resolve_binding(EventType::Focus, Registration::Legacy);
/// assert_eq!(legacy.event_type, EventType::FocusIn);
/// assert!(!legacy.capture);
/// ```
pub fn resolve_binding(event_type: EventType, registration: Registration) -> EventBinding {
    match registration {
        Registration::W3c => EventBinding {
            event_type,
            capture: matches!(
                event_type,
                EventType::Focus | EventType::Blur | EventType::Error | EventType::Load
            ),
        },
        Registration::Legacy => {
            let event_type = match event_type {
                EventType::Focus => EventType::FocusIn,
                EventType::Blur => EventType::FocusOut,
                other => other,
            };
            EventBinding {
                event_type,
                capture: false,
            }
        }
    }
}
