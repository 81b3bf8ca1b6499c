use yew::prelude::*;

use crate::background::canvas::BackgroundCanvas;
use crate::components::agent_form::AgentForm;
use crate::components::cursor_glow::CursorGlow;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing">
            <BackgroundCanvas />
            <CursorGlow />

            <section class="hero">
                <div class="hero-copy">
                    <div class="hero-badge">{"AI Voice Agents"}</div>
                    <h1>{"Dein Telefon."}<br/>{"Deine Stimme."}<br/><span class="accent">{"Dein Agent."}</span></h1>
                    <p class="hero-subtitle">
                        {"VOX erstellt in Sekunden einen Voice Agent, der Anrufe annimmt, Termine bucht und Kunden qualifiziert. Beschreib einfach, was er tun soll."}
                    </p>
                </div>
                <AgentForm />
            </section>

            <section id="how" class="how">
                <h2>{"So funktioniert's"}</h2>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">{"01"}</span>
                        <h3>{"Aufgabe beschreiben"}</h3>
                        <p>{"Sag uns in einem Satz, wofür dein Agent da ist."}</p>
                    </div>
                    <div class="step">
                        <span class="step-number">{"02"}</span>
                        <h3>{"Persönlichkeit wählen"}</h3>
                        <p>{"Ton, Tempo und Stil passend zu deiner Marke."}</p>
                    </div>
                    <div class="step">
                        <span class="step-number">{"03"}</span>
                        <h3>{"Live gehen"}</h3>
                        <p>{"Nummer verbinden und ab sofort keinen Anruf mehr verpassen."}</p>
                    </div>
                </div>
            </section>

            <footer class="landing-footer">
                {"© VOX"}
            </footer>

            <style>
                {r#"
                body {
                    margin: 0;
                    background: #0a0a12;
                    color: #f4f4f0;
                    font-family: var(--font-body, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif);
                }

                .landing {
                    position: relative;
                    min-height: 100vh;
                    overflow-x: hidden;
                }

                .hero {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 9rem 2rem 6rem;
                    display: grid;
                    grid-template-columns: 1.1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.35rem 0.9rem;
                    border-radius: 999px;
                    border: 1px solid rgba(200, 255, 87, 0.3);
                    color: #c8ff57;
                    font-size: 0.8rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }

                .hero h1 {
                    font-size: clamp(2.5rem, 5vw, 4.5rem);
                    line-height: 1.05;
                    margin: 0 0 1.5rem;
                }

                .hero h1 .accent {
                    color: #c8ff57;
                }

                .hero-subtitle {
                    font-size: 1.1rem;
                    line-height: 1.6;
                    color: rgba(244, 244, 240, 0.65);
                    max-width: 34rem;
                }

                .how {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 2rem 6rem;
                }

                .how h2 {
                    font-size: 2rem;
                    margin-bottom: 2.5rem;
                }

                .steps {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .step {
                    padding: 1.5rem;
                    border-radius: 16px;
                    border: 1px solid rgba(244, 244, 240, 0.08);
                    background: rgba(20, 20, 30, 0.4);
                }

                .step-number {
                    color: #c8ff57;
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                }

                .step p {
                    color: rgba(244, 244, 240, 0.6);
                    line-height: 1.5;
                }

                .landing-footer {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                    padding: 2rem;
                    color: rgba(244, 244, 240, 0.3);
                    font-size: 0.8rem;
                }

                @media (max-width: 900px) {
                    .hero {
                        grid-template-columns: 1fr;
                        padding-top: 7rem;
                    }
                    .steps {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
