//! Layered cursor replacement: an immediate dot, two spring-driven trailing
//! rings, and a one-shot click ripple, fed by document-wide pointer events.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::motion::{Spring2, Vec2, RING_SPRING, TRAIL_SPRING};
use crate::pointer::{
    magnetic_target, CursorState, PointerInput, ATTRACT_RADIUS, ATTRACT_STRENGTH,
    HOVERABLE_SELECTOR, MAGNETIC_SELECTOR,
};

const RIPPLE_CLASS: &str = "is-rippling";

/// Follower state shared between the move listener and the frame loop.
struct FollowerRig {
    target: Vec2,
    trail: Spring2,
    ring: Spring2,
    last_timestamp: Option<f64>,
    seen_pointer: bool,
}

impl FollowerRig {
    fn new() -> Self {
        // Parked offscreen until the first pointer event arrives.
        let start = Vec2::new(-100.0, -100.0);
        Self {
            target: start,
            trail: Spring2::new(TRAIL_SPRING, start),
            ring: Spring2::new(RING_SPRING, start),
            last_timestamp: None,
            seen_pointer: false,
        }
    }

    fn retarget(&mut self, target: Vec2) {
        if !self.seen_pointer {
            // No fly-in from the parking spot on the first event.
            self.trail.snap_to(target);
            self.ring.snap_to(target);
            self.seen_pointer = true;
        }
        self.target = target;
    }

    /// One animation-frame step; runs whether or not new events arrived,
    /// so the followers keep easing toward the last known target.
    fn tick(&mut self, timestamp_ms: f64) {
        let dt = match self.last_timestamp {
            Some(previous) => ((timestamp_ms - previous) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        self.trail.step(self.target, dt);
        self.ring.step(self.target, dt);
    }
}

/// Bounding-box centers of every magnetic element currently in the document.
fn magnetic_centers() -> Vec<Vec2> {
    let Some(document) = super::document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(MAGNETIC_SELECTOR) else {
        return Vec::new();
    };

    let mut centers = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Some(element) = node.dyn_ref::<Element>() else {
            continue;
        };
        let rect = element.get_bounding_client_rect();
        centers.push(Vec2::new(
            rect.left() + rect.width() / 2.0,
            rect.top() + rect.height() / 2.0,
        ));
    }
    centers
}

fn event_is_over_interactive(event: &MouseEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(HOVERABLE_SELECTOR).ok().flatten())
        .is_some()
}

fn set_layer_position(layer: &NodeRef, position: Vec2) {
    if let Some(element) = layer.cast::<HtmlElement>() {
        let _ = element.style().set_property(
            "transform",
            &format!("translate3d({:.2}px, {:.2}px, 0)", position.x, position.y),
        );
    }
}

/// Restart the ripple at the press point. Removing the class and forcing a
/// reflow lets a new press cancel a running ripple instead of stacking.
fn restart_ripple(ripple: &NodeRef, position: Vec2) {
    let Some(element) = ripple.cast::<HtmlElement>() else {
        return;
    };
    let _ = element.style().set_property("left", &format!("{:.0}px", position.x));
    let _ = element.style().set_property("top", &format!("{:.0}px", position.y));

    let class_list = element.class_list();
    let _ = class_list.remove_1(RIPPLE_CLASS);
    let _ = element.offset_width();
    let _ = class_list.add_1(RIPPLE_CLASS);
}

fn schedule_frame(
    handle: Rc<RefCell<Option<AnimationFrame>>>,
    rig: Rc<RefCell<FollowerRig>>,
    dot: NodeRef,
    trail: NodeRef,
    ring: NodeRef,
) {
    let next_handle = handle.clone();
    let frame = request_animation_frame(move |timestamp| {
        {
            let mut rig = rig.borrow_mut();
            rig.tick(timestamp);
            set_layer_position(&dot, rig.target);
            set_layer_position(&trail, rig.trail.position);
            set_layer_position(&ring, rig.ring.position);
        }
        schedule_frame(next_handle.clone(), rig.clone(), dot.clone(), trail.clone(), ring.clone());
    });
    *handle.borrow_mut() = Some(frame);
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let dot_layer = use_node_ref();
    let trail_layer = use_node_ref();
    let ring_layer = use_node_ref();
    let ripple = use_node_ref();
    let state = use_state_eq(CursorState::default);

    {
        let dot_layer = dot_layer.clone();
        let trail_layer = trail_layer.clone();
        let ring_layer = ring_layer.clone();
        let ripple = ripple.clone();
        let state = state.clone();

        use_effect_with((), move |_| {
            let guard = super::NativeCursorGuard::acquire();
            let rig = Rc::new(RefCell::new(FollowerRig::new()));
            // Mirror of the pure state for listeners; the yew handle only
            // re-renders when hover/press actually flip.
            let model = Rc::new(Cell::new(CursorState::default()));
            let mut listeners = Vec::new();

            if let Some(window) = web_sys::window() {
                {
                    let rig = rig.clone();
                    let model = model.clone();
                    let state = state.clone();
                    listeners.push(EventListener::new(&window, "mousemove", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let raw = Vec2::new(event.client_x() as f64, event.client_y() as f64);
                        let target = magnetic_target(
                            raw,
                            &magnetic_centers(),
                            ATTRACT_RADIUS,
                            ATTRACT_STRENGTH,
                        );
                        rig.borrow_mut().retarget(target);

                        let mut next = model.get();
                        next.apply(PointerInput::Move {
                            over_interactive: event_is_over_interactive(event),
                        });
                        model.set(next);
                        state.set(next);
                    }));
                }

                {
                    let model = model.clone();
                    let state = state.clone();
                    let ripple = ripple.clone();
                    listeners.push(EventListener::new(&window, "mousedown", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let mut next = model.get();
                        next.apply(PointerInput::Down);
                        model.set(next);
                        state.set(next);
                        restart_ripple(
                            &ripple,
                            Vec2::new(event.client_x() as f64, event.client_y() as f64),
                        );
                    }));
                }

                {
                    // Release observed anywhere, so an off-target mouseup
                    // can never leave the cursor stuck pressed.
                    let model = model.clone();
                    let state = state.clone();
                    listeners.push(EventListener::new(&window, "mouseup", move |_| {
                        let mut next = model.get();
                        next.apply(PointerInput::Up);
                        model.set(next);
                        state.set(next);
                    }));
                }
            }

            if let Some(document) = super::document() {
                let model = model.clone();
                let state = state.clone();
                listeners.push(EventListener::new(&document, "mouseleave", move |_| {
                    let mut next = model.get();
                    next.apply(PointerInput::Leave);
                    model.set(next);
                    state.set(next);
                }));
            }

            let frame_handle = Rc::new(RefCell::new(None));
            schedule_frame(frame_handle.clone(), rig, dot_layer, trail_layer, ring_layer);

            move || {
                frame_handle.borrow_mut().take();
                drop(listeners);
                drop(guard);
            }
        });
    }

    let hovering = state.hovering.then_some("is-hovering");
    let pressed = state.pressed.then_some("is-pressed");

    html! {
        <>
            <div ref={dot_layer} class="cursor-layer cursor-layer-dot" aria-hidden="true">
                <div class={classes!("cursor-dot", hovering, pressed)}></div>
            </div>
            <div ref={trail_layer} class="cursor-layer cursor-layer-trail" aria-hidden="true">
                <div class={classes!("cursor-trail", hovering)}></div>
            </div>
            <div ref={ring_layer} class="cursor-layer cursor-layer-ring" aria-hidden="true">
                <div class={classes!("cursor-ring", hovering)}></div>
            </div>
            <div ref={ripple} class="cursor-ripple" aria-hidden="true"></div>
        </>
    }
}
