use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::{JsRandom, Node, ParticleField};
use super::frame_loop::FrameLoop;
use crate::config::FieldConfig;

#[derive(Debug, Error)]
pub enum AnimatorError {
    #[error("background canvas is not in the document")]
    CanvasMissing,
    #[error("2d context unavailable on background canvas")]
    ContextUnavailable,
    #[error("no window to size the background against")]
    WindowUnavailable,
}

struct AnimatorState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
}

impl AnimatorState {
    fn fit_to(&mut self, window: &Window) {
        let width = viewport_dim(window.inner_width());
        let height = viewport_dim(window.inner_height());

        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.resize(width, height, &mut JsRandom);
        debug!(
            "Background resized to {}x{} with {} nodes",
            width,
            height,
            self.field.nodes().len()
        );
    }

    fn render_frame(&mut self) {
        self.field.step();

        let (w, h) = self.field.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
        for node in self.field.nodes() {
            if let Err(err) = paint_node(&self.ctx, node) {
                debug!("Skipping background node: {:?}", err);
            }
        }
    }
}

fn viewport_dim(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

fn paint_node(ctx: &CanvasRenderingContext2d, node: &Node) -> Result<(), JsValue> {
    let gradient = ctx.create_radial_gradient(node.x, node.y, 0.0, node.x, node.y, node.radius)?;
    gradient.add_color_stop(0.0, &node.color.rgba(node.alpha))?;
    gradient.add_color_stop(1.0, &node.color.rgba(0.0))?;

    ctx.begin_path();
    ctx.arc(node.x, node.y, node.radius, 0.0, TAU)?;
    ctx.set_fill_style(&gradient);
    ctx.fill();
    Ok(())
}

/// Paints the particle field onto a full-viewport canvas.
pub struct ParticleAnimator;

impl ParticleAnimator {
    /// Sizes `canvas` to the window, seeds the field and starts drawing.
    ///
    /// Nothing is installed when this fails, so the caller can just drop the error.
    pub fn mount(
        canvas: Option<HtmlCanvasElement>,
        config: FieldConfig,
    ) -> Result<AnimatorHandle, AnimatorError> {
        let canvas = canvas.ok_or(AnimatorError::CanvasMissing)?;
        let window = web_sys::window().ok_or(AnimatorError::WindowUnavailable)?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(AnimatorError::ContextUnavailable)?;

        let state = Rc::new(RefCell::new(AnimatorState {
            canvas,
            ctx,
            field: ParticleField::new(config),
        }));
        state.borrow_mut().fit_to(&window);

        let resize = {
            let state = Rc::clone(&state);
            let target = window.clone();
            EventListener::new(&window, "resize", move |_| {
                state.borrow_mut().fit_to(&target);
            })
        };

        let frames = {
            let state = Rc::clone(&state);
            FrameLoop::start(move || state.borrow_mut().render_frame())
        };

        Ok(AnimatorHandle {
            frames,
            resize: Some(resize),
        })
    }
}

/// Keeps the animation alive. Dropping it has the same effect as `stop`.
pub struct AnimatorHandle {
    frames: FrameLoop,
    resize: Option<EventListener>,
}

impl AnimatorHandle {
    pub fn stop(&mut self) {
        self.frames.stop();
        self.resize.take();
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }
}
