//! Canvas painter for the ambient background. Everything it draws comes
//! from the pure model in `crate::scene`; this module only sizes the
//! canvas, tracks the pointer, and strokes projected geometry.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::motion::Vec2;
use crate::scene::{
    icosahedron, orbiter_pose, particle_rotation, primary_pose, project, ring_points,
    satellite_pose, sphere_rings, ParticleField, Projected, ShapePose, Vec3,
};

const PRIMARY_COLOR: &str = "#00d4ff";
const SPHERE_RADIUS: f64 = 1.5;
const SPHERE_SEGMENTS: usize = 48;
const RING_RADIUS: f64 = 0.6;
const RING_SEGMENTS: usize = 40;
const SATELLITE_RADIUS: f64 = 0.4;

struct Painter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    particles: ParticleField,
    sphere: Vec<Vec<Vec3>>,
    ring: Vec<Vec3>,
    satellite: (Vec<Vec3>, Vec<(usize, usize)>),
}

impl Painter {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| "2d context request failed".to_string())?
            .ok_or_else(|| "2d context unavailable".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context has unexpected type".to_string())?;

        Ok(Self {
            canvas,
            context,
            particles: ParticleField::new(js_sys::Date::now() as u64),
            sphere: sphere_rings(SPHERE_RADIUS, SPHERE_SEGMENTS),
            ring: ring_points(RING_RADIUS, RING_SEGMENTS),
            satellite: icosahedron(SATELLITE_RADIUS),
        })
    }

    /// Match the backing store to the element's CSS size and pixel ratio.
    fn resize(&self) {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .max(1.0);
        let rect = self.canvas.get_bounding_client_rect();
        self.canvas.set_width((rect.width() * dpr) as u32);
        self.canvas.set_height((rect.height() * dpr) as u32);
    }

    fn to_screen(&self, p: Projected) -> (f64, f64) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let half = height / 2.0;
        (width / 2.0 + p.x * half, height / 2.0 + p.y * half)
    }

    fn paint(&self, t: f64, pointer: Vec2) {
        let ctx = &self.context;
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        ctx.clear_rect(0.0, 0.0, width, height);

        self.paint_particles(t);
        self.paint_glow(t, pointer);
        self.paint_wireframes(t, pointer);
    }

    fn paint_particles(&self, t: f64) {
        let ctx = &self.context;
        let (rx, ry) = particle_rotation(t);
        ctx.set_fill_style_str(PRIMARY_COLOR);
        for &point in self.particles.points() {
            let Some(projected) = project(point.rotated_x(rx).rotated_y(ry)) else {
                continue;
            };
            let (x, y) = self.to_screen(projected);
            // Farther particles fade and shrink.
            let alpha = (0.6 * (6.0 / projected.depth)).clamp(0.05, 0.6);
            let size = (2.4 / projected.depth * 6.0).clamp(0.5, 3.0);
            ctx.set_global_alpha(alpha);
            ctx.fill_rect(x - size / 2.0, y - size / 2.0, size, size);
        }
        ctx.set_global_alpha(1.0);
    }

    /// Soft halo behind the primary sphere, cheap concentric fills instead
    /// of a gradient.
    fn paint_glow(&self, t: f64, pointer: Vec2) {
        let ctx = &self.context;
        let pose = primary_pose(t, pointer);
        let Some(center) = project(pose.offset) else {
            return;
        };
        let (x, y) = self.to_screen(center);
        let base = self.canvas.height() as f64 * 0.22;

        ctx.set_fill_style_str(PRIMARY_COLOR);
        for (factor, alpha) in [(1.8, 0.025), (1.3, 0.04), (0.9, 0.06)] {
            ctx.set_global_alpha(alpha);
            ctx.begin_path();
            let _ = ctx.arc(x, y, base * factor, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }

    fn paint_wireframes(&self, t: f64, pointer: Vec2) {
        let primary = primary_pose(t, pointer);
        for circle in &self.sphere {
            self.stroke_loop(circle, primary, 0.5, 1.5);
        }

        let orbiter = orbiter_pose(t);
        self.stroke_loop(&self.ring, orbiter, 0.7, 1.5);

        let satellite = satellite_pose(t);
        let (vertices, edges) = &self.satellite;
        let posed: Vec<Option<Projected>> = vertices
            .iter()
            .map(|&v| project(satellite.apply(v)))
            .collect();
        let ctx = &self.context;
        ctx.set_stroke_style_str(PRIMARY_COLOR);
        ctx.set_global_alpha(0.55);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        for &(a, b) in edges {
            let (Some(pa), Some(pb)) = (posed[a], posed[b]) else {
                continue;
            };
            let (ax, ay) = self.to_screen(pa);
            let (bx, by) = self.to_screen(pb);
            ctx.move_to(ax, ay);
            ctx.line_to(bx, by);
        }
        ctx.stroke();
        ctx.set_global_alpha(1.0);
    }

    fn stroke_loop(&self, points: &[Vec3], pose: ShapePose, alpha: f64, line_width: f64) {
        let ctx = &self.context;
        ctx.set_stroke_style_str(PRIMARY_COLOR);
        ctx.set_global_alpha(alpha);
        ctx.set_line_width(line_width);
        ctx.begin_path();

        let mut pen_down = false;
        for &point in points.iter().chain(points.first()) {
            match project(pose.apply(point)) {
                Some(projected) => {
                    let (x, y) = self.to_screen(projected);
                    if pen_down {
                        ctx.line_to(x, y);
                    } else {
                        ctx.move_to(x, y);
                        pen_down = true;
                    }
                }
                None => pen_down = false,
            }
        }
        ctx.stroke();
        ctx.set_global_alpha(1.0);
    }
}

fn schedule_frame(
    handle: Rc<RefCell<Option<AnimationFrame>>>,
    painter: Rc<Painter>,
    pointer: Rc<Cell<Vec2>>,
    start_ms: Rc<Cell<Option<f64>>>,
) {
    let next_handle = handle.clone();
    let frame = request_animation_frame(move |timestamp| {
        let start = match start_ms.get() {
            Some(start) => start,
            None => {
                start_ms.set(Some(timestamp));
                timestamp
            }
        };
        painter.paint((timestamp - start) / 1000.0, pointer.get());
        schedule_frame(
            next_handle.clone(),
            painter.clone(),
            pointer.clone(),
            start_ms.clone(),
        );
    });
    *handle.borrow_mut() = Some(frame);
}

/// Decorative background layer. If the 2d context cannot be created the
/// component logs one warning and the page carries on without it.
#[function_component(AmbientScene)]
pub fn ambient_scene() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            let frame_handle: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

            'setup: {
                let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                    break 'setup;
                };
                let painter = match Painter::new(canvas) {
                    Ok(painter) => Rc::new(painter),
                    Err(reason) => {
                        console::warn_1(&format!("ambient scene disabled: {reason}").into());
                        break 'setup;
                    }
                };
                painter.resize();

                // Normalized pointer in -1..1, +y up, like the model expects.
                let pointer = Rc::new(Cell::new(Vec2::ZERO));

                if let Some(window) = web_sys::window() {
                    {
                        let pointer = pointer.clone();
                        listeners.push(EventListener::new(&window, "mousemove", move |event| {
                            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let (width, height) = super::viewport_size();
                            if width <= 0.0 || height <= 0.0 {
                                return;
                            }
                            pointer.set(Vec2::new(
                                event.client_x() as f64 / width * 2.0 - 1.0,
                                1.0 - event.client_y() as f64 / height * 2.0,
                            ));
                        }));
                    }

                    {
                        let painter = painter.clone();
                        listeners.push(EventListener::new(&window, "resize", move |_| {
                            painter.resize();
                        }));
                    }
                }

                if super::prefers_reduced_motion() {
                    // One static frame, no loop.
                    painter.paint(0.0, Vec2::ZERO);
                } else {
                    schedule_frame(
                        frame_handle.clone(),
                        painter,
                        pointer,
                        Rc::new(Cell::new(None)),
                    );
                }
            }

            move || {
                frame_handle.borrow_mut().take();
                drop(listeners);
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class="hero-canvas" aria-hidden="true"></canvas>
    }
}
