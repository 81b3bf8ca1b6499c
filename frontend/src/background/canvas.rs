use log::{debug, warn};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::animator::ParticleAnimator;
use crate::config::FieldConfig;

pub const CANVAS_ID: &str = "bg-canvas";

#[function_component(BackgroundCanvas)]
pub fn background_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(move |_| {
            let handle = match ParticleAnimator::mount(
                canvas_ref.cast::<HtmlCanvasElement>(),
                FieldConfig::default(),
            ) {
                Ok(handle) => Some(handle),
                Err(err) => {
                    warn!("Background animation disabled: {}", err);
                    None
                }
            };

            move || {
                if let Some(mut handle) = handle {
                    if handle.is_running() {
                        debug!("Stopping background animation");
                        handle.stop();
                    }
                }
            }
        }, ());
    }

    html! {
        <>
            <canvas id={CANVAS_ID} ref={canvas_ref} class="bg-canvas" />
            <style>
                {r#"
                .bg-canvas {
                    position: fixed;
                    inset: 0;
                    width: 100vw;
                    height: 100vh;
                    z-index: 0;
                    pointer-events: none;
                    background: #0a0a12;
                }
                "#}
            </style>
        </>
    }
}
