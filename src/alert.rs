//! Alert system for displaying error messages to users.
//!
//! Alerts are swapped into the `#alert-container` element of the base page
//! by HTMX.

use maud::{Markup, html};

/// A dismissable message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something did not work.
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (message, details, container_style) = match self {
            Alert::Error { message, details } => (
                message,
                details,
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
            ),
        };

        html! {
            div
                role="alert"
                class=(container_style)
                hx-on:click="this.remove()"
            {
                span class="font-medium" { (message) }

                @if !details.is_empty() {
                    p { (details) }
                }
            }
        }
    }
}
