//! Floating navigation: fixed header, scroll-tracked section highlight, and
//! a side dot dock that appears once the viewer has scrolled past the hero.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;

use crate::content::{PERSON, SECTIONS};
use crate::scroll::{active_section, dock_visible};

/// Smooth-scroll to a section anchor; a missing element is silently skipped.
fn scroll_to_section(id: &str) {
    let Some(element) = super::document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Offset tops of every section anchor present in the document right now.
fn section_tops() -> Vec<(&'static str, f64)> {
    let Some(document) = super::document() else {
        return Vec::new();
    };
    SECTIONS
        .iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.id)?;
            let element = element.dyn_into::<HtmlElement>().ok()?;
            Some((section.id, f64::from(element.offset_top())))
        })
        .collect()
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let dock_shown = use_state_eq(|| false);
    let active = use_state_eq(|| Option::<&'static str>::None);

    {
        let dock_shown = dock_shown.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            let recompute = {
                let dock_shown = dock_shown.clone();
                let active = active.clone();
                move || {
                    let scroll_y = super::scroll_offset();
                    let (_, viewport_height) = super::viewport_size();
                    dock_shown.set(dock_visible(scroll_y, viewport_height));
                    active.set(active_section(&section_tops(), scroll_y, viewport_height));
                }
            };
            recompute();

            // Scroll events are folded down to one recompute per frame.
            let scheduled = Rc::new(Cell::new(false));
            let frame_handle: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
            let mut listener = None;
            if let Some(window) = web_sys::window() {
                let scheduled = scheduled.clone();
                let frame_handle = frame_handle.clone();
                listener = Some(EventListener::new(&window, "scroll", move |_| {
                    if scheduled.replace(true) {
                        return;
                    }
                    let scheduled = scheduled.clone();
                    let recompute = recompute.clone();
                    *frame_handle.borrow_mut() = Some(request_animation_frame(move |_| {
                        scheduled.set(false);
                        recompute();
                    }));
                }));
            }

            move || {
                frame_handle.borrow_mut().take();
                drop(listener);
            }
        });
    }

    let on_wordmark = Callback::from(|_| scroll_to_top());

    let nav_buttons = SECTIONS
        .iter()
        .map(|section| {
            let is_active = *active == Some(section.id);
            let onclick = Callback::from(move |_| scroll_to_section(section.id));
            html! {
                <button
                    type="button"
                    class={classes!("nav-link", is_active.then_some("is-active"))}
                    onclick={onclick}
                    data-hoverable=""
                >
                    {section.label}
                </button>
            }
        })
        .collect::<Html>();

    let dock_buttons = SECTIONS
        .iter()
        .map(|section| {
            let is_active = *active == Some(section.id);
            let onclick = Callback::from(move |_| scroll_to_section(section.id));
            html! {
                <button type="button" class="dock-item" onclick={onclick} data-hoverable="">
                    <span class="dock-label">{section.id}</span>
                    <span class={classes!("dock-dot", is_active.then_some("is-active"))}></span>
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <header class="site-header">
                <div class="site-header-inner">
                    <button type="button" class="wordmark" onclick={on_wordmark} data-magnetic="">
                        {PERSON.initials()}
                        <span class="wordmark-accent">{"."}</span>
                    </button>
                    <nav class="header-nav" aria-label="Sections">
                        {nav_buttons}
                    </nav>
                    <a
                        class="header-cta"
                        href={format!("mailto:{}", PERSON.email)}
                        data-magnetic=""
                    >
                        {"Contact"}
                    </a>
                </div>
            </header>

            <nav
                class={classes!("side-dock", dock_shown.then_some("is-visible"))}
                aria-label="Section shortcuts"
            >
                {dock_buttons}
            </nav>
        </>
    }
}
