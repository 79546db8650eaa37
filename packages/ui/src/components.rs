//! Small shared widgets used across the views.

use dioxus::prelude::*;

use crate::validation::{password_strength, strength_color, strength_label};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertSeverity {
    Success,
    Error,
    Info,
    Warning,
}

impl AlertSeverity {
    fn class(self) -> &'static str {
        match self {
            AlertSeverity::Success => "alert alert-success",
            AlertSeverity::Error => "alert alert-error",
            AlertSeverity::Info => "alert alert-info",
            AlertSeverity::Warning => "alert alert-warning",
        }
    }
}

/// Inline message box above a form or list.
#[component]
pub fn AlertBanner(severity: AlertSeverity, message: String) -> Element {
    rsx! {
        div { class: severity.class(), role: "alert", "{message}" }
    }
}

/// Transient confirmation shown bottom-center after an action. The parent
/// owns visibility; on web it auto-dismisses after four seconds.
#[component]
pub fn Snackbar(message: String, severity: AlertSeverity, onclose: EventHandler<()>) -> Element {
    #[cfg(target_arch = "wasm32")]
    {
        let onclose = onclose;
        use_future(move || async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
            onclose.call(());
        });
    }

    rsx! {
        div { class: "snackbar",
            div { class: severity.class(),
                span { "{message}" }
                button {
                    class: "snackbar-close",
                    onclick: move |_| onclose.call(()),
                    "×"
                }
            }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}

/// 1–5 star picker used when a client closes a project. `value == 0` means
/// nothing selected yet.
#[component]
pub fn StarRating(value: u8, onchange: EventHandler<u8>) -> Element {
    rsx! {
        div { class: "star-rating",
            for star in 1u8..=5 {
                button {
                    key: "{star}",
                    class: if star <= value { "star star-filled" } else { "star" },
                    onclick: move |_| onchange.call(star),
                    "★"
                }
            }
        }
    }
}

/// Five-segment strength meter under the password input.
#[component]
pub fn PasswordStrengthBar(password: String) -> Element {
    let score = password_strength(&password);
    let color = strength_color(score);

    rsx! {
        div { class: "strength-bar",
            span { class: "strength-caption", "Force du mot de passe:" }
            div { class: "strength-segments",
                for level in 1u8..=5 {
                    div {
                        key: "{level}",
                        class: "strength-segment",
                        style: if level <= score {
                            format!("background-color: {color};")
                        } else {
                            "background-color: #e0e0e0;".to_string()
                        },
                    }
                }
            }
            span { class: "strength-caption", "{strength_label(score)}" }
        }
    }
}
