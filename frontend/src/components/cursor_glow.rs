use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlowState {
    pub x: i32,
    pub y: i32,
    pub visible: bool,
}

impl GlowState {
    pub fn moved_to(self, x: i32, y: i32) -> Self {
        Self { x, y, visible: true }
    }

    /// Keeps the last position so the fade-out happens in place.
    pub fn left(self) -> Self {
        Self { visible: false, ..self }
    }

    pub fn style(&self) -> String {
        format!(
            "position: fixed; width: 300px; height: 300px; border-radius: 50%; \
             background: radial-gradient(circle, rgba(200,255,87,0.04) 0%, transparent 70%); \
             pointer-events: none; z-index: 5; transform: translate(-50%, -50%); \
             transition: opacity 0.4s; left: {}px; top: {}px; opacity: {};",
            self.x,
            self.y,
            if self.visible { "1" } else { "0" }
        )
    }
}

pub enum GlowAction {
    Move(i32, i32),
    Leave,
}

impl Reducible for GlowState {
    type Action = GlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            GlowAction::Move(x, y) => self.moved_to(x, y),
            GlowAction::Leave => self.left(),
        };
        Rc::new(next)
    }
}

#[function_component(CursorGlow)]
pub fn cursor_glow() -> Html {
    let glow = use_reducer(GlowState::default);

    {
        let dispatcher = glow.dispatcher();
        use_effect_with_deps(move |_| {
            let listeners = web_sys::window().and_then(|w| w.document()).map(|document| {
                let on_move = {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&document, "mousemove", move |event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            dispatcher.dispatch(GlowAction::Move(event.client_x(), event.client_y()));
                        }
                    })
                };
                let on_leave = EventListener::new(&document, "mouseleave", move |_| {
                    dispatcher.dispatch(GlowAction::Leave);
                });
                (on_move, on_leave)
            });

            move || drop(listeners)
        }, ());
    }

    html! {
        <div class="cursor-glow" style={glow.style()}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_first_move() {
        let s = GlowState::default();
        assert!(!s.visible);
        assert!(s.style().contains("opacity: 0;"));

        let s = s.moved_to(120, 48);
        assert!(s.visible);
        assert!(s.style().contains("left: 120px; top: 48px; opacity: 1;"));
    }

    #[test]
    fn leaving_hides_in_place() {
        let s = GlowState::default().moved_to(10, 20).left();
        assert_eq!(s, GlowState { x: 10, y: 20, visible: false });
    }

    #[test]
    fn reducer_tracks_pointer() {
        let s = Rc::new(GlowState::default());
        let s = s.reduce(GlowAction::Move(5, 6));
        let s = s.reduce(GlowAction::Leave);
        assert_eq!(*s, GlowState { x: 5, y: 6, visible: false });
    }
}
