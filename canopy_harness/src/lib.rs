// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Harness: fire native-like event sequences against a fake host.
//!
//! ## Overview
//!
//! The classifiers in `canopy_event` are pure functions, but their callers
//! live inside event handlers, and the interesting bugs live in sequences:
//! does a `prevent_default` in `mousedown` make the whole click sequence
//! report cancelled, does pressing Enter on a button produce the click the
//! real host would produce, in the right place in the sequence? This crate
//! is a miniature host for answering those questions in tests.
//!
//! A [`Harness`] owns a node registry ([`TargetProps`] per node, parent
//! links in a [`ParentMap`]), an [`Environment`], a monotonic clock, and a
//! listener table keyed by resolved [`EventBinding`]s. Dispatch is
//! synchronous: [`Harness::fire`] runs every matching handler in-line, in
//! registration order, and returns whether the event survived without
//! `prevent_default` — the contract the sequence helpers build on:
//!
//! - [`Harness::fire_click_sequence`] — mousedown, mouseup, click. All
//!   three always fire; the result ANDs each step, so one `prevent_default`
//!   anywhere makes the sequence report `false`.
//! - [`Harness::simulate_key_press`] — keydown, keypress, keyup, with a
//!   click inserted where real hosts insert one: between keypress and keyup
//!   for Enter on a `<button>`, after keyup for Space.
//!
//! Mouse events default their coordinates to the target's recorded bounds
//! origin, falling back to the origin of the coordinate space when no
//! position is known.
//!
//! This crate is `no_std` and uses `alloc`. It is test scaffolding: nothing
//! here belongs in a production event path.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;

use canopy_event::listen::resolve_binding;
use canopy_event::types::keys;
use canopy_event::{Environment, Event, EventBinding, EventType, Modifiers, MouseButton, Tag, TargetProps};
use canopy_tree::ParentMap;

/// Handle returned by [`Harness::listen`], used to unregister.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ListenerId(usize);

type Handler<K> = Box<dyn FnMut(&mut Event<K>)>;

struct ListenerEntry<K> {
    node: K,
    binding: EventBinding,
    handler: Handler<K>,
}

/// A miniature synchronous host: nodes, parent links, listeners, a clock.
pub struct Harness<K> {
    environment: Environment,
    nodes: HashMap<K, TargetProps>,
    parents: ParentMap<K>,
    listeners: Vec<Option<ListenerEntry<K>>>,
    clock: u64,
}

impl<K> core::fmt::Debug for Harness<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Harness")
            .field("environment", &self.environment)
            .field("nodes", &self.nodes.len())
            .field("listeners", &self.listeners.iter().filter(|l| l.is_some()).count())
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + core::hash::Hash> Harness<K> {
    /// Create a harness for the given environment.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            nodes: HashMap::new(),
            parents: ParentMap::new(),
            listeners: Vec::new(),
            clock: 0,
        }
    }

    /// The environment events are fired under.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Register a root node.
    pub fn insert_node(&mut self, node: K, props: TargetProps) {
        self.nodes.insert(node, props);
    }

    /// Register a node as a child of `parent`.
    pub fn insert_child(&mut self, node: K, props: TargetProps, parent: K) {
        self.nodes.insert(node, props);
        self.parents.insert(node, parent);
    }

    /// The recorded properties of a node.
    pub fn props(&self, node: &K) -> Option<&TargetProps> {
        self.nodes.get(node)
    }

    /// The parent links of the registered nodes, for containment queries.
    pub fn parents(&self) -> &ParentMap<K> {
        &self.parents
    }

    /// Current value of the harness clock, milliseconds.
    pub fn now(&self) -> u64 {
        self.clock
    }

    /// Register a handler for `event_type` on `node`.
    ///
    /// The binding is resolved against the environment's registration
    /// mechanism first, so asking for `Focus` under legacy registration
    /// subscribes the handler to `FocusIn` — exactly what a delegation
    /// layer would end up registered for.
    pub fn listen(
        &mut self,
        node: K,
        event_type: EventType,
        handler: impl FnMut(&mut Event<K>) + 'static,
    ) -> ListenerId {
        let binding = resolve_binding(event_type, self.environment.registration);
        let id = self.listeners.len();
        self.listeners.push(Some(ListenerEntry {
            node,
            binding,
            handler: Box::new(handler),
        }));
        ListenerId(id)
    }

    /// Unregister a handler. Unknown ids are ignored.
    pub fn unlisten(&mut self, id: ListenerId) {
        if let Some(slot) = self.listeners.get_mut(id.0) {
            *slot = None;
        }
    }

    /// Dispatch an event to every matching handler, in registration order.
    ///
    /// Advances the clock, stamps the event if it carries no timestamp, and
    /// returns `true` unless some handler called `prevent_default`.
    pub fn fire(&mut self, mut event: Event<K>) -> bool {
        self.clock += 16;
        if event.time_stamp == 0 {
            event.time_stamp = self.clock;
        }
        let Some(target) = event.target else {
            return !event.default_prevented();
        };
        for slot in &mut self.listeners {
            let Some(entry) = slot.as_mut() else {
                continue;
            };
            if entry.node == target && entry.binding.event_type == event.event_type {
                (entry.handler)(&mut event);
            }
        }
        !event.default_prevented()
    }

    /// Fire a bare event of `event_type` at `target`.
    pub fn fire_dom_event(&mut self, event_type: EventType, target: K) -> bool {
        self.fire(Event::new(event_type, Some(target)))
    }

    /// Simulate the target gaining focus.
    ///
    /// The fired type follows the environment's registration mechanism:
    /// `focus` under W3C registration, `focusin` under legacy.
    pub fn fire_focus_event(&mut self, target: K) -> bool {
        let t = resolve_binding(EventType::Focus, self.environment.registration).event_type;
        self.fire_dom_event(t, target)
    }

    /// Simulate the target losing focus. See [`Harness::fire_focus_event`].
    pub fn fire_blur_event(&mut self, target: K) -> bool {
        let t = resolve_binding(EventType::Blur, self.environment.registration).event_type;
        self.fire_dom_event(t, target)
    }

    /// Simulate a scroll on the target.
    pub fn fire_scroll_event(&mut self, target: K) -> bool {
        self.fire_dom_event(EventType::Scroll, target)
    }

    /// The position events on `target` default to: the recorded bounds
    /// origin, or the coordinate-space origin when no bounds are known.
    pub fn event_position(&self, target: K) -> Point {
        self.nodes
            .get(&target)
            .and_then(|p| p.rect)
            .map_or(Point::ZERO, |r| r.origin())
    }

    /// Build a mouse-button event without firing it.
    ///
    /// The button defaults to the primary one and the position to
    /// [`Harness::event_position`]; screen coordinates mirror client
    /// coordinates, as if the window sat at the screen origin. Setting
    /// `modifier_key` holds both Ctrl and Meta so a test exercises the
    /// modified-click path on every platform convention.
    pub fn create_mouse_button_event(
        &self,
        event_type: EventType,
        target: K,
        button: Option<MouseButton>,
        coords: Option<Point>,
        modifier_key: bool,
    ) -> Event<K> {
        let at = coords.unwrap_or_else(|| self.event_position(target));
        let mut event = Event::new(event_type, Some(target))
            .with_button(button.unwrap_or(MouseButton::Left))
            .with_client(at)
            .with_screen(at);
        if modifier_key {
            event.modifiers = Modifiers::CTRL | Modifiers::META;
        }
        event
    }

    fn fire_mouse_button_event(
        &mut self,
        event_type: EventType,
        target: K,
        button: Option<MouseButton>,
        coords: Option<Point>,
    ) -> bool {
        let event = self.create_mouse_button_event(event_type, target, button, coords, false);
        self.fire(event)
    }

    /// Simulate a mousedown on the target.
    pub fn fire_mouse_down_event(
        &mut self,
        target: K,
        button: Option<MouseButton>,
        coords: Option<Point>,
    ) -> bool {
        self.fire_mouse_button_event(EventType::MouseDown, target, button, coords)
    }

    /// Simulate a mouseup on the target.
    pub fn fire_mouse_up_event(
        &mut self,
        target: K,
        button: Option<MouseButton>,
        coords: Option<Point>,
    ) -> bool {
        self.fire_mouse_button_event(EventType::MouseUp, target, button, coords)
    }

    /// Simulate a click on the target.
    pub fn fire_click_event(
        &mut self,
        target: K,
        button: Option<MouseButton>,
        coords: Option<Point>,
    ) -> bool {
        self.fire_mouse_button_event(EventType::Click, target, button, coords)
    }

    /// Simulate a mouseover on the target.
    pub fn fire_mouse_over_event(&mut self, target: K) -> bool {
        self.fire_mouse_button_event(EventType::MouseOver, target, None, None)
    }

    /// Simulate a mouseout on the target.
    pub fn fire_mouse_out_event(&mut self, target: K) -> bool {
        self.fire_mouse_button_event(EventType::MouseOut, target, None, None)
    }

    /// Simulate a mousemove on the target.
    pub fn fire_mouse_move_event(&mut self, target: K, coords: Option<Point>) -> bool {
        let at = coords.unwrap_or_else(|| self.event_position(target));
        let event = Event::new(EventType::MouseMove, Some(target))
            .with_client(at)
            .with_screen(at);
        self.fire(event)
    }

    /// Simulate a full primary-button press: mousedown, mouseup, click.
    ///
    /// Every step fires regardless of the earlier ones; the return value is
    /// the AND of each step's "not prevented" result.
    pub fn fire_click_sequence(
        &mut self,
        target: K,
        button: Option<MouseButton>,
        coords: Option<Point>,
    ) -> bool {
        let down = self.fire_mouse_down_event(target, button, coords);
        let up = self.fire_mouse_up_event(target, button, coords);
        let click = self.fire_click_event(target, button, coords);
        down & up & click
    }

    /// Fire a single keyboard event.
    pub fn fire_key_event(
        &mut self,
        event_type: EventType,
        target: K,
        key_code: u16,
        modifiers: Modifiers,
    ) -> bool {
        let event = Event::new(event_type, Some(target))
            .with_key_code(key_code)
            .with_modifiers(modifiers);
        self.fire(event)
    }

    /// Simulate a complete key press the way real hosts deliver one.
    ///
    /// Fires keydown, keypress, keyup. On `<button>` elements the host also
    /// fires a click: for Enter (either code) it lands between keypress and
    /// keyup, for Space after keyup. The return value ANDs every step.
    pub fn simulate_key_press(&mut self, target: K, key_code: u16, modifiers: Modifiers) -> bool {
        let is_button = self.nodes.get(&target).map(|p| p.tag) == Some(Tag::Button);
        let mut ok = self.fire_key_event(EventType::KeyDown, target, key_code, modifiers);
        ok &= self.fire_key_event(EventType::KeyPress, target, key_code, modifiers);
        if (key_code == keys::ENTER || key_code == keys::MAC_ENTER) && is_button {
            ok &= self.fire_activation_click(target, modifiers);
        }
        ok &= self.fire_key_event(EventType::KeyUp, target, key_code, modifiers);
        if key_code == keys::SPACE && is_button {
            ok &= self.fire_activation_click(target, modifiers);
        }
        ok
    }

    fn fire_activation_click(&mut self, target: K, modifiers: Modifiers) -> bool {
        let mut click = self.create_mouse_button_event(EventType::Click, target, None, None, false);
        click.modifiers = modifiers;
        self.fire(click)
    }
}

impl<K: Copy + Eq + core::hash::Hash> Default for Harness<K> {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use kurbo::Rect;

    use canopy_event::key::is_action_key_event;
    use canopy_event::mouse::{create_mouse_special_event, is_mouse_special_event};
    use canopy_event::touch::recreate_touch_event_as_click;
    use canopy_event::{Engine, Platform, Registration, Role, TouchPoint};

    fn button_props() -> TargetProps {
        TargetProps::new(Tag::Button).with_rect(Rect::new(10.0, 20.0, 50.0, 40.0))
    }

    fn log_handle() -> (Rc<RefCell<Vec<EventType>>>, Rc<RefCell<Vec<EventType>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (log.clone(), log)
    }

    #[test]
    fn click_sequence_fires_all_three_steps_in_order() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, button_props());
        let (log, writer) = log_handle();
        for t in [EventType::MouseDown, EventType::MouseUp, EventType::Click] {
            let writer = writer.clone();
            h.listen(1, t, move |e| writer.borrow_mut().push(e.event_type));
        }
        assert!(h.fire_click_sequence(1, None, None));
        assert_eq!(
            *log.borrow(),
            vec![EventType::MouseDown, EventType::MouseUp, EventType::Click]
        );
    }

    #[test]
    fn prevent_default_anywhere_fails_the_sequence_without_stopping_it() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, button_props());
        h.listen(1, EventType::MouseDown, |e| e.prevent_default());
        let (log, writer) = log_handle();
        h.listen(1, EventType::Click, move |e| writer.borrow_mut().push(e.event_type));

        assert!(!h.fire_click_sequence(1, None, None));
        // The later steps still fired.
        assert_eq!(*log.borrow(), vec![EventType::Click]);
    }

    #[test]
    fn mouse_events_default_to_the_target_position() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, button_props());
        let seen = Rc::new(RefCell::new(None));
        let writer = seen.clone();
        h.listen(1, EventType::MouseDown, move |e| {
            *writer.borrow_mut() = e.client;
        });
        h.fire_mouse_down_event(1, None, None);
        assert_eq!(*seen.borrow(), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn unknown_position_falls_back_to_the_origin() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(2, TargetProps::new(Tag::Div));
        assert_eq!(h.event_position(2), Point::ZERO);
        // Unregistered nodes degrade the same way.
        assert_eq!(h.event_position(9), Point::ZERO);
    }

    #[test]
    fn explicit_coords_and_buttons_are_honored() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, button_props());
        let e = h.create_mouse_button_event(
            EventType::Click,
            1,
            Some(MouseButton::Middle),
            Some(Point::new(3.0, 4.0)),
            true,
        );
        assert_eq!(e.button, Some(MouseButton::Middle));
        assert_eq!(e.client, Some(Point::new(3.0, 4.0)));
        assert_eq!(e.screen, Some(Point::new(3.0, 4.0)));
        assert!(e.modifiers.contains(Modifiers::CTRL | Modifiers::META));
    }

    #[test]
    fn enter_on_a_button_clicks_between_keypress_and_keyup() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, button_props());
        let (log, writer) = log_handle();
        for t in [EventType::KeyDown, EventType::KeyPress, EventType::KeyUp, EventType::Click] {
            let writer = writer.clone();
            h.listen(1, t, move |e| writer.borrow_mut().push(e.event_type));
        }
        assert!(h.simulate_key_press(1, keys::ENTER, Modifiers::empty()));
        assert_eq!(
            *log.borrow(),
            vec![
                EventType::KeyDown,
                EventType::KeyPress,
                EventType::Click,
                EventType::KeyUp,
            ]
        );
    }

    #[test]
    fn space_on_a_button_clicks_after_keyup() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, button_props());
        let (log, writer) = log_handle();
        for t in [EventType::KeyDown, EventType::KeyUp, EventType::Click] {
            let writer = writer.clone();
            h.listen(1, t, move |e| writer.borrow_mut().push(e.event_type));
        }
        assert!(h.simulate_key_press(1, keys::SPACE, Modifiers::empty()));
        assert_eq!(
            *log.borrow(),
            vec![EventType::KeyDown, EventType::KeyUp, EventType::Click]
        );
    }

    #[test]
    fn key_press_on_a_non_button_fires_no_click() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, TargetProps::new(Tag::Div).with_tab_index(0));
        let (log, writer) = log_handle();
        h.listen(1, EventType::Click, move |e| writer.borrow_mut().push(e.event_type));
        assert!(h.simulate_key_press(1, keys::ENTER, Modifiers::empty()));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn prevented_keyup_fails_the_whole_press() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, button_props());
        h.listen(1, EventType::KeyUp, |e| e.prevent_default());
        assert!(!h.simulate_key_press(1, keys::ENTER, Modifiers::empty()));
    }

    #[test]
    fn legacy_registration_binds_focus_listeners_to_focusin() {
        let env = Environment::new(Engine::Trident, Platform::Other, Registration::Legacy);
        let mut h: Harness<u32> = Harness::new(env);
        h.insert_node(1, button_props());
        let (log, writer) = log_handle();
        h.listen(1, EventType::Focus, move |e| writer.borrow_mut().push(e.event_type));
        assert!(h.fire_focus_event(1));
        assert_eq!(*log.borrow(), vec![EventType::FocusIn]);
    }

    #[test]
    fn w3c_focus_and_blur_round_trip_unchanged() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, button_props());
        let (log, writer) = log_handle();
        for t in [EventType::Focus, EventType::Blur] {
            let writer = writer.clone();
            h.listen(1, t, move |e| writer.borrow_mut().push(e.event_type));
        }
        assert!(h.fire_focus_event(1));
        assert!(h.fire_blur_event(1));
        assert_eq!(*log.borrow(), vec![EventType::Focus, EventType::Blur]);
    }

    #[test]
    fn unlisten_stops_delivery() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, button_props());
        let count = Rc::new(RefCell::new(0));
        let writer = count.clone();
        let id = h.listen(1, EventType::Click, move |_| *writer.borrow_mut() += 1);
        h.fire_click_event(1, None, None);
        h.unlisten(id);
        h.fire_click_event(1, None, None);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn clock_advances_and_stamps_events() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, button_props());
        let stamp = Rc::new(RefCell::new(0_u64));
        let writer = stamp.clone();
        h.listen(1, EventType::Click, move |e| *writer.borrow_mut() = e.time_stamp);
        h.fire_click_event(1, None, None);
        let first = *stamp.borrow();
        assert!(first > 0);
        h.fire_click_event(1, None, None);
        assert!(*stamp.borrow() > first);
        assert!(h.now() >= *stamp.borrow());
    }

    // End-to-end scenarios: classifiers driven by harness-delivered events.

    #[test]
    fn hover_boundary_classification_over_harness_tree() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(1, TargetProps::new(Tag::Div));
        h.insert_child(2, TargetProps::new(Tag::Div), 1);
        h.insert_child(3, TargetProps::new(Tag::Div), 2);

        // Pointer slides from child(2) onto subchild(3): only the subchild
        // boundary sees an enter.
        let over = Event::new(EventType::MouseOver, Some(3)).with_related_target(2);
        assert!(!is_mouse_special_event(&over, EventType::MouseEnter, 1, h.parents()));
        assert!(!is_mouse_special_event(&over, EventType::MouseEnter, 2, h.parents()));
        assert!(is_mouse_special_event(&over, EventType::MouseEnter, 3, h.parents()));

        let enter = create_mouse_special_event(&over, 3).unwrap();
        assert_eq!(enter.event_type, EventType::MouseEnter);
        assert!(!enter.bubbles);
    }

    #[test]
    fn keyboard_activation_end_to_end() {
        let mut h: Harness<u32> = Harness::default();
        let widget = TargetProps::new(Tag::Div)
            .with_role(Role::Button)
            .with_tab_index(0)
            .with_rect(Rect::new(0.0, 0.0, 30.0, 10.0));
        h.insert_node(1, widget);

        let activations = Rc::new(RefCell::new(0));
        let writer = activations.clone();
        let props = h.props(&1).cloned().unwrap();
        let env = h.environment();
        h.listen(1, EventType::KeyDown, move |e| {
            if is_action_key_event(e, &props, &env) {
                *writer.borrow_mut() += 1;
            }
        });

        h.simulate_key_press(1, keys::ENTER, Modifiers::empty());
        h.simulate_key_press(1, keys::SPACE, Modifiers::empty());
        h.simulate_key_press(1, 64, Modifiers::empty());
        h.simulate_key_press(1, keys::ENTER, Modifiers::SHIFT);
        assert_eq!(*activations.borrow(), 2);
    }

    #[test]
    fn recreated_tap_uses_the_harness_clock_and_suppression_tag() {
        let mut h: Harness<u32> = Harness::default();
        h.insert_node(4, TargetProps::new(Tag::Div).with_tab_index(0));
        h.fire_dom_event(EventType::TouchStart, 4);

        let mut touchend = Event::new(EventType::TouchEnd, Some(4));
        touchend.changed_touches.push(TouchPoint::at(Point::new(5.0, 6.0), Point::new(5.0, 6.0)));
        touchend.add_prevent_mouse_events_support();
        touchend.trigger_prevent_mouse_events();

        let click = recreate_touch_event_as_click(&touchend, h.now());
        assert_eq!(click.event_type, EventType::Click);
        assert_eq!(click.original_event_type, Some(EventType::TouchEnd));
        assert_eq!(click.client, Some(Point::new(5.0, 6.0)));
        assert_eq!(click.time_stamp, h.now());
        // The tag lives on the touch event; the recreated click is clean.
        assert!(touchend.mouse_events_prevented());
        assert!(!click.mouse_events_prevented());
    }
}
