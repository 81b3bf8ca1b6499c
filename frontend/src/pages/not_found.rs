use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Diese Seite gibt es nicht."}</p>
            <Link<Route> to={Route::Landing} classes="not-found-link">
                {"Zurück zur Startseite"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #0a0a12;
                    color: #f4f4f0;
                }
                .not-found h1 {
                    font-size: 5rem;
                    margin: 0;
                    color: #c8ff57;
                }
                .not-found-link {
                    color: #c8ff57;
                }
                "#}
            </style>
        </div>
    }
}
