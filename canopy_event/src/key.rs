// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard activation classification.
//!
//! ## Overview
//!
//! Keyboard users and assistive tech activate controls with Enter and Space,
//! but which key activates what is control-specific, and for several control
//! shapes the host itself already converts the key into a click. This module
//! decides whether a keydown should be treated as a logical activation of
//! its target — and only then, so callers neither miss keyboard activations
//! on role-built widgets nor fire twice on native buttons.
//!
//! The decision runs down a fixed rule ladder:
//!
//! 1. The key must be Enter or Space, after folding the WebKit keypad-Enter
//!    code into Enter on engines that report it
//!    ([`Environment::has_alternate_enter`]).
//! 2. Only unmodified `keydown` events qualify.
//! 3. The target must be a valid action-key target: never a text-entry
//!    surface or editable region
//!    ([`TargetProps::is_valid_action_key_target`]).
//! 4. Space is dropped on elements whose Space handling is native
//!    (real checkbox/radio/file inputs).
//! 5. The target must be focusable and visible
//!    ([`TargetProps::is_focusable`]).
//! 6. The key must be a trigger for the target's identifier — explicit role
//!    first, then input type, then tag — per this module's trigger tables;
//!    identifiers not in the tables take Enter only.
//! 7. Natively-activatable controls are dropped last: the host converts the
//!    key into a click there, and reporting the key too would activate the
//!    control twice.
//!
//! The classifier is a pure predicate; it never mutates the event.

use crate::env::Environment;
use crate::event::Event;
use crate::target::{InputType, Role, Tag, TargetProps};
use crate::types::{keys, EventType};

/// Which action keys trigger activation for a given element identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum KeyTrigger {
    /// Enter only.
    Enter,
    /// Space only.
    Space,
    /// Either key.
    Both,
}

impl KeyTrigger {
    fn includes(self, key: u16) -> bool {
        match self {
            Self::Enter => key == keys::ENTER,
            Self::Space => key == keys::SPACE,
            Self::Both => key == keys::ENTER || key == keys::SPACE,
        }
    }
}

/// Trigger table keyed by ARIA role.
fn role_trigger(role: Role) -> Option<KeyTrigger> {
    match role {
        Role::Button
        | Role::Menu
        | Role::MenuBar
        | Role::MenuItem
        | Role::MenuItemCheckbox
        | Role::MenuItemRadio
        | Role::Option
        | Role::Tab => Some(KeyTrigger::Both),
        Role::Checkbox | Role::Radio | Role::RadioGroup | Role::Switch => Some(KeyTrigger::Space),
        Role::Combobox | Role::Gridcell | Role::Link | Role::Listbox | Role::Tree
        | Role::TreeItem => Some(KeyTrigger::Enter),
        Role::TextBox => None,
    }
}

/// Trigger table keyed by `<input>` type.
fn input_trigger(input_type: InputType) -> Option<KeyTrigger> {
    match input_type {
        InputType::Button | InputType::File | InputType::Reset | InputType::Submit => {
            Some(KeyTrigger::Both)
        }
        InputType::Checkbox | InputType::Radio => Some(KeyTrigger::Space),
        _ => None,
    }
}

/// Trigger table keyed by tag, for elements without role or input type.
fn tag_trigger(tag: Tag) -> Option<KeyTrigger> {
    match tag {
        Tag::Anchor => Some(KeyTrigger::Enter),
        Tag::Button | Tag::Option => Some(KeyTrigger::Both),
        _ => None,
    }
}

/// Look up the element's trigger, honoring identifier precedence:
/// an explicit role masks the input type, which masks the tag.
fn activation_trigger(target: &TargetProps) -> Option<KeyTrigger> {
    if let Some(role) = target.role {
        return role_trigger(role);
    }
    if target.tag == Tag::Input {
        return target.input_type.and_then(input_trigger);
    }
    tag_trigger(target.tag)
}

/// Decide whether a keyboard event is a logical activation of its target.
///
/// See the module docs for the rule ladder. Returns `false` for events with
/// no key code.
///
/// ```
/// use canopy_event::key::is_action_key_event;
/// use canopy_event::{Environment, Event, EventType, Role, Tag, TargetProps, keys};
/// use kurbo::Rect;
///
/// let env = Environment::default();
/// let checkbox = TargetProps::new(Tag::Div)
///     .with_role(Role::Checkbox)
///     .with_tab_index(0)
///     .with_rect(Rect::new(0.0, 0.0, 16.0, 16.0));
///
/// let space = Event::<u32>::new(EventType::KeyDown, Some(1)).with_key_code(keys::SPACE);
/// let enter = Event::<u32>::new(EventType::KeyDown, Some(1)).with_key_code(keys::ENTER);
///
/// // A checkbox-role widget activates on Space, not Enter.
/// assert!(is_action_key_event(&space, &checkbox, &env));
/// assert!(!is_action_key_event(&enter, &checkbox, &env));
/// ```
pub fn is_action_key_event<K>(
    event: &Event<K>,
    target: &TargetProps,
    env: &Environment,
) -> bool {
    let Some(raw) = event.key_code else {
        return false;
    };
    let key = if env.has_alternate_enter() && raw == keys::MAC_ENTER {
        keys::ENTER
    } else {
        raw
    };
    if key != keys::ENTER && key != keys::SPACE {
        return false;
    }
    if event.event_type != EventType::KeyDown
        || !target.is_valid_action_key_target()
        || !event.modifiers.is_empty()
    {
        return false;
    }
    // The host toggles real checkboxes and friends on Space itself; only the
    // ensuing native click should be handled.
    if key == keys::SPACE && target.handles_space_natively() {
        return false;
    }
    // Stray keystrokes on elements keyboard focus cannot reach are noise.
    if !target.is_focusable() {
        return false;
    }
    let fires = match activation_trigger(target) {
        Some(trigger) => trigger.includes(key),
        None => key == keys::ENTER,
    };
    // Natively-activatable controls already get a click from the host.
    fires && !target.is_natively_activatable()
}

/// Decide whether a keyboard event is a Space press on an element for which
/// Space is this system's responsibility.
///
/// Reuses the action-key target validity check and excludes elements whose
/// Space handling is native, without requiring focusability — callers use
/// this to decide scroll-suppression, not activation.
pub fn is_space_key_event<K>(event: &Event<K>, target: &TargetProps) -> bool {
    event.key_code == Some(keys::SPACE)
        && target.is_valid_action_key_target()
        && !target.handles_space_natively()
}
