use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use serde::Serialize;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::char_counter::{char_count, CharCounter};
use crate::components::waveform::{WaveAction, Waveform, WaveformState};
use crate::config::{LOADING_DELAY_MS, SUCCESS_HOLD_MS};

const SHAKE_KEYFRAMES_ID: &str = "shake-kf";
const SHAKE_KEYFRAMES: &str = r#"
        @keyframes shake {
          0%, 100% { transform: translateX(0); }
          20% { transform: translateX(-6px); }
          40% { transform: translateX(6px); }
          60% { transform: translateX(-4px); }
          80% { transform: translateX(4px); }
        }
      "#;

/// What the agent would be created with. Only ever logged.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AgentConfig {
    pub task: String,
    pub company: String,
    pub personality: String,
}

impl AgentConfig {
    pub fn from_fields(task: &str, company: &str, personality: &str) -> Self {
        Self {
            task: task.trim().to_string(),
            company: company.trim().to_string(),
            personality: personality.trim().to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Loading,
    Success,
}

impl FormPhase {
    pub fn label(self) -> &'static str {
        match self {
            FormPhase::Idle => "Agent erstellen",
            FormPhase::Loading => "Wird erstellt",
            FormPhase::Success => "Agent bereit ✓",
        }
    }

    /// The button only accepts clicks when nothing is in flight.
    pub fn button_disabled(self) -> bool {
        self != FormPhase::Idle
    }

    pub fn is_loading(self) -> bool {
        self == FormPhase::Loading
    }

    pub fn button_background(self) -> Option<&'static str> {
        match self {
            FormPhase::Success => Some("#2ed573"),
            _ => None,
        }
    }

    pub fn card_success(self) -> bool {
        self == FormPhase::Success
    }

    /// The phase a running submission moves to next, and how long to wait first.
    /// `Idle` is where a submission ends.
    pub fn advance(self) -> Option<(FormPhase, u32)> {
        match self {
            FormPhase::Idle => None,
            FormPhase::Loading => Some((FormPhase::Success, LOADING_DELAY_MS)),
            FormPhase::Success => Some((FormPhase::Idle, SUCCESS_HOLD_MS)),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum SubmitCheck {
    Accepted(AgentConfig),
    /// Task was blank; the field gets shaken.
    Rejected,
    /// A previous submission is still running.
    Busy,
}

pub fn check_submit(phase: FormPhase, config: AgentConfig) -> SubmitCheck {
    if phase != FormPhase::Idle {
        SubmitCheck::Busy
    } else if config.task.is_empty() {
        SubmitCheck::Rejected
    } else {
        SubmitCheck::Accepted(config)
    }
}

fn field_value(field: &NodeRef) -> String {
    field
        .cast::<HtmlTextAreaElement>()
        .map(|t| t.value())
        .unwrap_or_default()
}

fn auto_resize(textarea: &HtmlTextAreaElement) {
    let style = textarea.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", textarea.scroll_height()));
}

fn ensure_shake_keyframes() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if document.get_element_by_id(SHAKE_KEYFRAMES_ID).is_some() {
        return;
    }
    if let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) {
        style.set_id(SHAKE_KEYFRAMES_ID);
        style.set_text_content(Some(SHAKE_KEYFRAMES));
        let _ = head.append_child(&style);
    }
}

fn shake_field(field: &NodeRef) {
    if let Some(el) = field.cast::<HtmlElement>() {
        ensure_shake_keyframes();
        let style = el.style();
        let _ = style.set_property("animation", "none");
        let _ = el.offset_height(); // force reflow so the animation restarts
        let _ = style.set_property("animation", "shake 0.4s ease");
    }
}

fn log_payload(config: &AgentConfig) {
    match serde_json::to_string(config) {
        Ok(json) => info!("Agent Config: {}", json),
        Err(e) => info!("Agent Config: {:?} ({})", config, e),
    }
}

#[function_component(AgentForm)]
pub fn agent_form() -> Html {
    let phase = use_state(FormPhase::default);
    let waveform = use_reducer(WaveformState::default);
    let task_len = use_state(|| None::<usize>);

    let task_ref = use_node_ref();
    let company_ref = use_node_ref();
    let personality_ref = use_node_ref();
    let task_field_ref = use_node_ref();

    let on_focus = {
        let waveform = waveform.dispatcher();
        Callback::from(move |_: FocusEvent| waveform.dispatch(WaveAction::Focus))
    };

    let on_blur = {
        let waveform = waveform.dispatcher();
        Callback::from(move |_: FocusEvent| waveform.dispatch(WaveAction::Blur))
    };

    let on_input = {
        let waveform = waveform.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                auto_resize(&textarea);
            }
            waveform.dispatch(WaveAction::Input);
        })
    };

    let on_task_input = {
        let on_input = on_input.clone();
        let task_len = task_len.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                task_len.set(Some(char_count(&textarea.value())));
            }
            on_input.emit(e);
        })
    };

    let on_submit = {
        let phase = phase.clone();
        let task_ref = task_ref.clone();
        let company_ref = company_ref.clone();
        let personality_ref = personality_ref.clone();
        let task_field_ref = task_field_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let config = AgentConfig::from_fields(
                &field_value(&task_ref),
                &field_value(&company_ref),
                &field_value(&personality_ref),
            );

            match check_submit(*phase, config) {
                SubmitCheck::Rejected => shake_field(&task_field_ref),
                SubmitCheck::Busy => debug!("Ignoring submit while agent is being created"),
                SubmitCheck::Accepted(config) => {
                    phase.set(FormPhase::Loading);
                    let phase = phase.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let mut current = FormPhase::Loading;
                        while let Some((next, delay)) = current.advance() {
                            TimeoutFuture::new(delay).await;
                            phase.set(next);
                            if next == FormPhase::Success {
                                log_payload(&config);
                            }
                            current = next;
                        }
                    });
                }
            }
        })
    };

    let button_style = phase
        .button_background()
        .map(|bg| format!("background: {};", bg))
        .unwrap_or_default();

    html! {
        <div class={classes!("hero-card", phase.card_success().then(|| "success"))}>
            <div class="card-header">
                <span class="card-title">{"Dein Voice Agent"}</span>
                <Waveform state={(*waveform).clone()} />
            </div>
            <form id="agentForm" class="agent-form" onsubmit={on_submit}>
                <div class="form-field" ref={task_field_ref} style="position: relative;">
                    <label for="task">{"Was soll dein Agent tun?"}</label>
                    <textarea
                        id="task"
                        class="field-textarea"
                        rows="2"
                        placeholder="z.B. Termine vereinbaren, Leads qualifizieren…"
                        ref={task_ref}
                        onfocus={on_focus.clone()}
                        onblur={on_blur.clone()}
                        oninput={on_task_input}
                    />
                    <CharCounter count={*task_len} />
                </div>
                <div class="form-field">
                    <label for="company">{"Unternehmen"}</label>
                    <textarea
                        id="company"
                        class="field-textarea"
                        rows="1"
                        placeholder="Name und Branche"
                        ref={company_ref}
                        onfocus={on_focus.clone()}
                        onblur={on_blur.clone()}
                        oninput={on_input.clone()}
                    />
                </div>
                <div class="form-field">
                    <label for="personality">{"Persönlichkeit"}</label>
                    <textarea
                        id="personality"
                        class="field-textarea"
                        rows="1"
                        placeholder="Freundlich, direkt, humorvoll…"
                        ref={personality_ref}
                        onfocus={on_focus}
                        onblur={on_blur}
                        oninput={on_input}
                    />
                </div>
                <button
                    id="submitBtn"
                    type="submit"
                    class={classes!("submit-btn", phase.is_loading().then(|| "loading"))}
                    disabled={phase.button_disabled()}
                    style={button_style}
                >
                    <span class="btn-text">{phase.label()}</span>
                    <span class="btn-spinner"></span>
                </button>
            </form>
            <style>
                {r#"
                .hero-card {
                    position: relative;
                    z-index: 2;
                    max-width: 520px;
                    width: 100%;
                    padding: 2rem;
                    border-radius: 24px;
                    background: rgba(20, 20, 30, 0.6);
                    backdrop-filter: blur(20px);
                    border: 1px solid rgba(244, 244, 240, 0.08);
                    transition: border-color 0.4s ease, box-shadow 0.4s ease;
                }
                .hero-card.success {
                    border-color: rgba(46, 213, 115, 0.5);
                    box-shadow: 0 0 40px rgba(46, 213, 115, 0.15);
                }
                .card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }
                .card-title {
                    color: #f4f4f0;
                    font-weight: 600;
                }
                .waveform {
                    display: flex;
                    gap: 3px;
                    align-items: center;
                    height: 24px;
                }
                .waveform span {
                    width: 3px;
                    border-radius: 2px;
                    background: #c8ff57;
                    transition: height 0.15s ease;
                }
                .form-field {
                    margin-bottom: 1rem;
                }
                .form-field label {
                    display: block;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: rgba(244, 244, 240, 0.5);
                    margin-bottom: 0.4rem;
                }
                .field-textarea {
                    width: 100%;
                    box-sizing: border-box;
                    resize: none;
                    overflow: hidden;
                    padding: 0.75rem 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(244, 244, 240, 0.1);
                    background: rgba(10, 10, 18, 0.5);
                    color: #f4f4f0;
                    font: inherit;
                }
                .field-textarea:focus {
                    outline: none;
                    border-color: rgba(200, 255, 87, 0.5);
                }
                .submit-btn {
                    width: 100%;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 999px;
                    background: #c8ff57;
                    color: #0a0a12;
                    font-weight: 700;
                    cursor: pointer;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.5rem;
                    transition: background 0.3s ease;
                }
                .submit-btn:disabled {
                    cursor: default;
                }
                .btn-spinner {
                    display: none;
                    width: 14px;
                    height: 14px;
                    border: 2px solid rgba(10, 10, 18, 0.3);
                    border-top-color: #0a0a12;
                    border-radius: 50%;
                    animation: spin 0.8s linear infinite;
                }
                .submit-btn.loading .btn-spinner {
                    display: inline-block;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_task_is_rejected_without_leaving_idle() {
        let config = AgentConfig::from_fields("   ", "Acme", "friendly");
        assert_eq!(check_submit(FormPhase::Idle, config), SubmitCheck::Rejected);
        assert!(!FormPhase::Idle.button_disabled());
        assert!(!FormPhase::Idle.is_loading());
    }

    #[test]
    fn book_meetings_walks_through_every_phase() {
        let config = AgentConfig::from_fields("Book meetings", "", "");
        let accepted = match check_submit(FormPhase::Idle, config) {
            SubmitCheck::Accepted(c) => c,
            other => panic!("expected acceptance, got {:?}", other),
        };
        assert_eq!(accepted.task, "Book meetings");

        let loading = FormPhase::Loading;
        assert!(loading.button_disabled());
        assert!(loading.is_loading());
        assert_eq!(loading.label(), "Wird erstellt");
        assert!(!loading.card_success());

        let success = FormPhase::Success;
        assert!(success.button_disabled());
        assert!(!success.is_loading());
        assert_eq!(success.label(), "Agent bereit ✓");
        assert_eq!(success.button_background(), Some("#2ed573"));
        assert!(success.card_success());

        let reset = FormPhase::default();
        assert_eq!(reset, FormPhase::Idle);
        assert!(!reset.button_disabled());
        assert_eq!(reset.label(), "Agent erstellen");
        assert_eq!(reset.button_background(), None);
        assert!(!reset.card_success());
    }

    #[test]
    fn submit_while_busy_is_ignored() {
        let config = AgentConfig::from_fields("Book meetings", "", "");
        assert_eq!(check_submit(FormPhase::Loading, config.clone()), SubmitCheck::Busy);
        assert_eq!(check_submit(FormPhase::Success, config), SubmitCheck::Busy);
    }

    #[test]
    fn payload_is_trimmed_and_serializable() {
        let config = AgentConfig::from_fields(" Book meetings\n", " Acme GmbH ", "calm ");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "task": "Book meetings",
                "company": "Acme GmbH",
                "personality": "calm",
            })
        );
    }

    #[test]
    fn submission_runs_loading_success_idle_with_fixed_delays() {
        let mut steps = Vec::new();
        let mut current = FormPhase::Loading;
        while let Some((next, delay)) = current.advance() {
            steps.push((next, delay));
            current = next;
        }

        assert_eq!(
            steps,
            vec![(FormPhase::Success, 1_800), (FormPhase::Idle, 3_000)]
        );
        assert!(!current.button_disabled());
        assert!(!current.card_success());
    }

    #[test]
    fn idle_form_has_nothing_scheduled() {
        assert_eq!(FormPhase::Idle.advance(), None);
    }
}
