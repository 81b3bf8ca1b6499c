use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

mod config;
mod background {
    pub mod animator;
    pub mod canvas;
    pub mod field;
    pub mod frame_loop;
}
mod components {
    pub mod agent_form;
    pub mod char_counter;
    pub mod cursor_glow;
    pub mod waveform;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


/// Reads an observer batch of `is_intersecting` flags. The nav counts as scrolled
/// once the top sentinel has left the viewport; an empty batch changes nothing.
pub fn scrolled_from_batch(mut visibility: impl Iterator<Item = bool>) -> Option<bool> {
    visibility.next().map(|sentinel_visible| !sentinel_visible)
}

const SENTINEL_STYLE: &str =
    "position:absolute;top:0;left:0;height:1px;width:100%;pointer-events:none;";

/// A 1px marker at the top of the body and the observer watching it.
/// Dropping it disconnects the observer and removes the marker.
struct ScrollSentinel {
    observer: IntersectionObserver,
    sentinel: Element,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ScrollSentinel {
    fn install(on_change: Callback<bool>) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let sentinel = document.create_element("div")?;
        sentinel.set_attribute("style", SENTINEL_STYLE)?;
        body.prepend_with_node_1(&sentinel)?;

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| entry.is_intersecting());
            if let Some(scrolled) = scrolled_from_batch(batch) {
                on_change.emit(scrolled);
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(0.0));
        options.root_margin("-1px 0px 0px 0px");

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(&sentinel);

        Ok(Self { observer, sentinel, _callback: callback })
    }
}

impl Drop for ScrollSentinel {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.sentinel.remove();
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let on_change = Callback::from(move |scrolled: bool| is_scrolled.set(scrolled));
            let sentinel = match ScrollSentinel::install(on_change) {
                Ok(sentinel) => Some(sentinel),
                Err(err) => {
                    warn!("Nav scroll tracking disabled: {:?}", err);
                    None
                }
            };

            move || drop(sentinel)
        }, ());
    }

    html! {
        <nav class={classes!("nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Landing} classes="nav-logo">
                    {"VOX"}
                </Link<Route>>
                <div class="nav-right">
                    <a href="#how" class="nav-link">{"So funktioniert's"}</a>
                    <a href="#agentForm" class="nav-cta">{"Agent erstellen"}</a>
                </div>
            </div>
            <style>
                {r#"
                .nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 20;
                    padding: 1.25rem 2rem;
                    transition: background 0.3s ease, padding 0.3s ease, border-color 0.3s ease;
                    border-bottom: 1px solid transparent;
                }
                .nav.scrolled {
                    padding: 0.75rem 2rem;
                    background: rgba(10, 10, 18, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom-color: rgba(244, 244, 240, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    color: #c8ff57;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }
                .nav-link, .nav-cta {
                    color: rgba(244, 244, 240, 0.7);
                    text-decoration: none;
                    font-size: 0.9rem;
                }
                .nav-cta {
                    color: #0a0a12;
                    background: #c8ff57;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_leaving_viewport_marks_scrolled() {
        assert_eq!(scrolled_from_batch([false].into_iter()), Some(true));
        assert_eq!(scrolled_from_batch([true].into_iter()), Some(false));
    }

    #[test]
    fn empty_batch_leaves_nav_alone() {
        assert_eq!(scrolled_from_batch(std::iter::empty()), None);
    }

    #[test]
    fn first_entry_of_a_batch_decides() {
        assert_eq!(scrolled_from_batch([true, false].into_iter()), Some(false));
        assert_eq!(scrolled_from_batch([false, true].into_iter()), Some(true));
    }
}
