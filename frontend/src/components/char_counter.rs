use yew::prelude::*;

use crate::config::CHAR_WARN_THRESHOLD;

pub const NORMAL_COLOR: &str = "rgba(244,244,240,0.2)";
pub const WARN_COLOR: &str = "rgba(255,100,100,0.5)";

pub fn counter_color(len: usize) -> &'static str {
    if len > CHAR_WARN_THRESHOLD {
        WARN_COLOR
    } else {
        NORMAL_COLOR
    }
}

/// Length in UTF-16 code units, the same number the browser reports as `value.length`.
pub fn char_count(value: &str) -> usize {
    value.encode_utf16().count()
}

#[derive(Properties, PartialEq)]
pub struct CharCounterProps {
    /// `None` until the field has received input.
    pub count: Option<usize>,
}

#[function_component(CharCounter)]
pub fn char_counter(props: &CharCounterProps) -> Html {
    let (text, color) = match props.count {
        Some(len) => (len.to_string(), counter_color(len)),
        None => (String::new(), NORMAL_COLOR),
    };

    html! {
        <span
            class="char-counter"
            style={format!(
                "position: absolute; bottom: 10px; right: 12px; font-size: 10px; color: {}; \
                 font-family: var(--font-body, monospace); pointer-events: none; transition: color 0.2s;",
                color
            )}
        >
            {text}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(counter_color(200), NORMAL_COLOR);
        assert_eq!(counter_color(201), WARN_COLOR);
        assert_eq!(counter_color(0), NORMAL_COLOR);
    }

    #[test]
    fn counts_utf16_units_like_the_browser() {
        assert_eq!(char_count("Agent bereit ✓"), 14);
        assert_eq!(char_count(&"ä".repeat(201)), 201);
        assert_eq!(counter_color(char_count(&"a".repeat(201))), WARN_COLOR);
    }

    #[test]
    fn astral_characters_count_twice() {
        let emoji = "📞".repeat(150);
        assert_eq!(char_count(&emoji), 300);
        assert_eq!(counter_color(char_count(&emoji)), WARN_COLOR);
        assert_eq!(counter_color(char_count(&"📞".repeat(100))), NORMAL_COLOR);
    }
}
