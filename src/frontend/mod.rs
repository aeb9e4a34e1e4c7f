mod cursor;
mod nav;
mod scene;
mod sections;

use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};
use yew::prelude::*;

/// Stylesheet injected while the custom cursor owns the pointer; carries
/// the ripple keyframes with it.
const CURSOR_OVERRIDE_CSS: &str = "\
*, *::before, *::after { cursor: none !important; }\n\
@keyframes ripple-expand {\n\
  0% { transform: translate(-50%, -50%) scale(0); opacity: 0.6; }\n\
  100% { transform: translate(-50%, -50%) scale(1); opacity: 0; }\n\
}\n\
.is-rippling { animation: ripple-expand 0.6s cubic-bezier(0.22, 1, 0.36, 1) forwards; }\n";

pub(crate) fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub(crate) fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub(crate) fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Scoped global override hiding the platform pointer. Acquired when the
/// custom cursor mounts; dropping it removes the stylesheet and restores
/// the native pointer no matter how the component came down.
pub(crate) struct NativeCursorGuard {
    style: Element,
}

impl NativeCursorGuard {
    pub(crate) fn acquire() -> Option<Self> {
        let document = document()?;
        let style = document.create_element("style").ok()?;
        style.set_text_content(Some(CURSOR_OVERRIDE_CSS));
        document.head()?.append_child(&style).ok()?;

        if let Some(body) = document.body() {
            let _ = body.style().set_property("cursor", "none");
        }

        Some(Self { style })
    }
}

impl Drop for NativeCursorGuard {
    fn drop(&mut self) {
        self.style.remove();
        if let Some(body) = document().and_then(|d| d.body()) {
            let _ = body.style().set_property("cursor", "auto");
        }
    }
}

/// Scoped smooth-scroll override on the root element, released on teardown.
pub(crate) struct SmoothScrollGuard {
    root: HtmlElement,
}

impl SmoothScrollGuard {
    pub(crate) fn acquire() -> Option<Self> {
        let root = document()?
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        root.style().set_property("scroll-behavior", "smooth").ok()?;
        Some(Self { root })
    }
}

impl Drop for SmoothScrollGuard {
    fn drop(&mut self) {
        let _ = self.root.style().set_property("scroll-behavior", "auto");
    }
}

#[function_component(App)]
fn app() -> Html {
    let reduced_motion = use_memo((), |_| prefers_reduced_motion());

    use_effect_with((), move |_| {
        let smooth_scroll = SmoothScrollGuard::acquire();
        move || drop(smooth_scroll)
    });

    html! {
        <div class="page">
            if !*reduced_motion {
                <cursor::CustomCursor />
            }
            <nav::Navigation />
            <main>
                <sections::HeroSection />
                <sections::AboutSection />
                <sections::ProjectsSection />
                <sections::SkillsSection />
                <sections::AchievementsSection />
                <sections::ContactSection />
            </main>
            <div class="page-gradients" aria-hidden="true">
                <div class="page-gradient page-gradient-top"></div>
                <div class="page-gradient page-gradient-bottom"></div>
            </div>
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
