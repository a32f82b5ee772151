// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Event: normalization of raw UI input events.
//!
//! ## Overview
//!
//! Hosts deliver input as a stream of raw events whose types do not line up
//! with user intent: a `mouseover` may or may not be an *enter*, a `keydown`
//! may or may not be an *activation*, a `touchend` is usually a *click* in
//! disguise, and a click with Ctrl held is a different gesture than a plain
//! one. This crate classifies raw [`Event`] values and synthesizes
//! normalized replacements, leaving delivery and any higher-level action
//! dispatch to the host.
//!
//! The pieces, leaf first:
//!
//! - [`key::is_action_key_event`] — should this keyboard event activate its
//!   target, the way assistive tech and keyboard users expect Enter/Space to
//!   activate controls? Encodes the full rule table for which elements take
//!   which key, and refuses to double-fire where the host already converts
//!   the key into a click.
//! - [`mouse::is_mouse_special_event`] / [`mouse::create_mouse_special_event`]
//!   — decide whether a raw `mouseover`/`mouseout` crosses a boundary
//!   element's outer edge, and synthesize the non-bubbling
//!   `mouseenter`/`mouseleave` for it.
//! - [`mouse::is_modified_click_event`] — separate plain clicks from
//!   modified ones (Ctrl/Meta/Shift/middle-button) that hosts treat as
//!   open-in-new-tab-style gestures.
//! - [`touch::recreate_touch_event_as_click`] — rebuild a `touchend` as a
//!   click-like event carrying the touch point's position.
//! - Mouse-event suppression on [`Event`] — a plain boolean tag (unrelated
//!   to `prevent_default`) marking that the follow-up native mouse sequence
//!   after a synthesized click should be ignored.
//! - [`listen::resolve_binding`] — fold the host's dual listener-attachment
//!   APIs into one "event type + capture flag" binding.
//!
//! Classifiers read three inputs and nothing else: the [`Event`] value, a
//! host-provided [`target::TargetProps`] snapshot of the target element, and
//! an explicit [`env::Environment`] capability descriptor. Tree structure is
//! consulted through [`canopy_tree::ParentLookup`], recomputed per call.
//! Every function is total over its documented inputs: missing optional
//! fields degrade to `false` or `None`, never to a panic.
//!
//! ## Synthesized events
//!
//! Synthesis copies fields into a fresh [`Event`]; the result shares no
//! state with its source, so `prevent_default` on one never leaks to the
//! other. Recreated clicks record where they came from in
//! [`Event::original_event_type`].
//!
//! ## Minimal example
//!
//! ```
//! use canopy_event::{Environment, Event, EventType, TargetProps, Tag, Role, keys};
//! use canopy_event::key::is_action_key_event;
//! use kurbo::Rect;
//!
//! // A div dressed up as a button: tabbable, visible, role=button.
//! let target = TargetProps::new(Tag::Div)
//!     .with_role(Role::Button)
//!     .with_tab_index(0)
//!     .with_rect(Rect::new(0.0, 0.0, 40.0, 16.0));
//!
//! let event = Event::<u32>::new(EventType::KeyDown, Some(7)).with_key_code(keys::ENTER);
//! assert!(is_action_key_event(&event, &target, &Environment::default()));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod env;
pub mod event;
pub mod key;
pub mod listen;
pub mod mouse;
pub mod target;
pub mod touch;
pub mod types;

pub use env::{Engine, Environment, Platform};
pub use event::Event;
pub use listen::{EventBinding, Registration};
pub use target::{InputType, Role, Tag, TargetProps};
pub use types::{keys, EventType, Modifiers, MouseButton, TouchPoint};
