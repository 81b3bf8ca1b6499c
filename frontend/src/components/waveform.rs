use std::rc::Rc;

use yew::prelude::*;

use crate::background::field::{JsRandom, RandomSource};
use crate::config::{WAVEFORM_ACTIVE_OPACITY, WAVEFORM_BARS, WAVEFORM_IDLE_OPACITY};

pub const BAR_MIN_PX: u32 = 4;
pub const BAR_JITTER_PX: f64 = 20.0;

/// Focus bookkeeping and bar heights for the voice waveform.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveformState {
    focused: usize,
    bars: Vec<u32>,
}

impl Default for WaveformState {
    fn default() -> Self {
        Self {
            focused: 0,
            bars: vec![BAR_MIN_PX; WAVEFORM_BARS],
        }
    }
}

impl WaveformState {
    pub fn focus(&mut self) {
        self.focused += 1;
    }

    pub fn blur(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    /// Active while any textarea holds focus.
    pub fn is_active(&self) -> bool {
        self.focused > 0
    }

    pub fn opacity(&self) -> &'static str {
        if self.is_active() {
            WAVEFORM_ACTIVE_OPACITY
        } else {
            WAVEFORM_IDLE_OPACITY
        }
    }

    pub fn jitter(&mut self, rng: &mut impl RandomSource) {
        for bar in &mut self.bars {
            *bar = BAR_MIN_PX + (rng.next_unit() * BAR_JITTER_PX).round() as u32;
        }
    }

    pub fn bars(&self) -> &[u32] {
        &self.bars
    }
}

pub enum WaveAction {
    Focus,
    Blur,
    Input,
}

impl Reducible for WaveformState {
    type Action = WaveAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WaveAction::Focus => next.focus(),
            WaveAction::Blur => next.blur(),
            WaveAction::Input => next.jitter(&mut JsRandom),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct WaveformProps {
    pub state: WaveformState,
}

#[function_component(Waveform)]
pub fn waveform(props: &WaveformProps) -> Html {
    let state = &props.state;

    html! {
        <div
            id="waveform"
            class="waveform"
            style={format!("opacity: {}; transition: opacity 0.5s ease;", state.opacity())}
        >
            { for state.bars().iter().map(|h| html! {
                <span style={format!("height: {}px;", h)}></span>
            }) }
        </div>
    }
}
