// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event vocabulary: event types, key codes, buttons, modifiers, touches.

use kurbo::Point;

/// The normalized set of event types this crate classifies or produces.
///
/// Hosts map whatever their native type tags are onto these before handing
/// events in. `MouseEnter`/`MouseLeave` never arrive raw: they exist only as
/// synthesized outputs of [`crate::mouse::create_mouse_special_event`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Pointer activation.
    Click,
    /// Primary-button press.
    MouseDown,
    /// Primary-button release.
    MouseUp,
    /// Pointer moved onto the target or one of its descendants (bubbling).
    MouseOver,
    /// Pointer moved off the target or one of its descendants (bubbling).
    MouseOut,
    /// Pointer motion.
    MouseMove,
    /// Synthesized non-bubbling counterpart of `MouseOver`.
    MouseEnter,
    /// Synthesized non-bubbling counterpart of `MouseOut`.
    MouseLeave,
    /// Key pressed.
    KeyDown,
    /// Character-producing key press (legacy repeat of `KeyDown`).
    KeyPress,
    /// Key released.
    KeyUp,
    /// Touch point placed.
    TouchStart,
    /// Touch point moved.
    TouchMove,
    /// Touch point lifted.
    TouchEnd,
    /// Target gained focus (non-bubbling).
    Focus,
    /// Target lost focus (non-bubbling).
    Blur,
    /// Bubbling variant of `Focus`.
    FocusIn,
    /// Bubbling variant of `Blur`.
    FocusOut,
    /// Resource error (non-bubbling).
    Error,
    /// Resource load (non-bubbling).
    Load,
    /// Scroll position changed.
    Scroll,
}

impl EventType {
    /// The raw event type a consumer must observe to synthesize this type.
    ///
    /// `MouseEnter` and `MouseLeave` are never delivered by hosts; callers
    /// listen for the bubbling counterpart and run it through
    /// [`crate::mouse::is_mouse_special_event`]. Returns `None` for types
    /// that are delivered directly.
    pub const fn mouse_special_source(self) -> Option<Self> {
        match self {
            Self::MouseEnter => Some(Self::MouseOver),
            Self::MouseLeave => Some(Self::MouseOut),
            _ => None,
        }
    }
}

/// Key codes the action-key classifier cares about.
///
/// Kept as raw codes rather than an enum so events can carry any key the
/// host delivers; everything outside this module's constants is simply
/// never an action key.
pub mod keys {
    /// Enter.
    pub const ENTER: u16 = 13;
    /// Space bar.
    pub const SPACE: u16 = 32;
    /// Numeric-keypad Enter as reported by WebKit-family engines.
    pub const MAC_ENTER: u16 = 3;
}

/// Mouse button associated with a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Auxiliary (wheel) button.
    Middle,
    /// Secondary button.
    Right,
}

bitflags::bitflags! {
    /// Modifier keys held while an event fired.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CTRL = 1 << 1;
        /// Alt/Option key.
        const ALT = 1 << 2;
        /// Meta/Command key.
        const META = 1 << 3;
    }
}

/// A single touch point within an event's touch lists.
///
/// All positions are optional: hosts occasionally deliver partial points,
/// and downstream consumers must treat absence as "unknown position", never
/// as the origin. Page coordinates are carried for completeness but are not
/// copied into recreated clicks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TouchPoint {
    /// Position in the viewport's client space.
    pub client: Option<Point>,
    /// Position in screen space.
    pub screen: Option<Point>,
    /// Position in page space (unused by recreation).
    pub page: Option<Point>,
}

impl TouchPoint {
    /// A touch point with matching client and screen positions.
    pub const fn at(client: Point, screen: Point) -> Self {
        Self {
            client: Some(client),
            screen: Some(screen),
            page: None,
        }
    }
}
