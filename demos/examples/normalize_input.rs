// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw events in, normalized decisions out.
//!
//! This demo walks a small node tree through the three normalization paths:
//! - `canopy_event::mouse` for enter/leave synthesis from raw over/out,
//! - `canopy_event::key` for keyboard activation of a role-built button,
//! - `canopy_event::touch` for recreating a tap as a click.
//!
//! Run:
//! - `cargo run -p canopy_demos --example normalize_input`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};

use canopy_event::key::is_action_key_event;
use canopy_event::mouse::{create_mouse_special_event, is_mouse_special_event};
use canopy_event::touch::recreate_touch_event_as_click;
use canopy_event::types::keys;
use canopy_event::{Event, EventType, Modifiers, Role, Tag, TargetProps, TouchPoint};
use canopy_harness::Harness;

fn main() {
    let mut harness: Harness<u32> = Harness::default();

    // panel(1) → card(2) → label(3), plus a div acting as a button.
    harness.insert_node(1, TargetProps::new(Tag::Div));
    harness.insert_child(2, TargetProps::new(Tag::Div), 1);
    harness.insert_child(3, TargetProps::new(Tag::Span), 2);
    let fake_button = TargetProps::new(Tag::Div)
        .with_role(Role::Button)
        .with_tab_index(0)
        .with_rect(Rect::new(0.0, 0.0, 80.0, 24.0));
    harness.insert_child(4, fake_button.clone(), 1);

    // 1. Enter/leave synthesis: the pointer slides from the card onto its
    //    label. Only the label's boundary registers an enter; the card and
    //    panel were never left.
    let over = Event::new(EventType::MouseOver, Some(3)).with_related_target(2);
    for boundary in [1_u32, 2, 3] {
        let entered = is_mouse_special_event(&over, EventType::MouseEnter, boundary, harness.parents());
        println!("mouseover card→label vs boundary {boundary}: enter = {entered}");
    }
    let enter = create_mouse_special_event(&over, 3).expect("mouseover maps to mouseenter");
    println!(
        "synthesized {:?} targeting {:?}, bubbles = {}\n",
        enter.event_type, enter.target, enter.bubbles
    );

    // 2. Keyboard activation: Enter activates the role-built button, Space
    //    and modified presses do not double-fire anything the host owns.
    let activations = Rc::new(RefCell::new(0));
    let sink = activations.clone();
    let env = harness.environment();
    harness.listen(4, EventType::KeyDown, move |e| {
        if is_action_key_event(e, &fake_button, &env) {
            *sink.borrow_mut() += 1;
        }
    });
    harness.simulate_key_press(4, keys::ENTER, Modifiers::empty());
    harness.simulate_key_press(4, keys::ENTER, Modifiers::CTRL);
    harness.simulate_key_press(4, 64, Modifiers::empty());
    println!("keyboard activations observed: {}\n", activations.borrow());

    // 3. Touch-to-click: a tap ends, we recreate the click immediately and
    //    tag the original so its native mouse follow-ups get ignored.
    let mut touchend = Event::new(EventType::TouchEnd, Some(4));
    touchend
        .changed_touches
        .push(TouchPoint::at(Point::new(12.0, 8.0), Point::new(12.0, 8.0)));
    touchend.prevent_mouse_events();

    let click = recreate_touch_event_as_click(&touchend, harness.now());
    println!(
        "recreated {:?} (from {:?}) at {:?}, native mouse suppressed = {}",
        click.event_type,
        click.original_event_type,
        click.client,
        touchend.mouse_events_prevented()
    );
}
