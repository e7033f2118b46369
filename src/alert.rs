//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the `#alert-container` element that every page
//! provides. Handlers that answer with an alert on its own return
//! [Alert::into_response], while handlers that swap some other element can
//! append [Alert::into_oob_html] to their fragment.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// A message shown in the alert container.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Success { message: String, details: String },
    SuccessSimple { message: String },
    Error { message: String, details: String },
}

impl Alert {
    fn parts(&self) -> (&str, &str, bool) {
        match self {
            Alert::Success { message, details } => (message, details, true),
            Alert::SuccessSimple { message } => (message, "", true),
            Alert::Error { message, details } => (message, details, false),
        }
    }

    fn view(&self, swap_oob: bool) -> Markup {
        let (message, details, is_success) = self.parts();

        let container_style = if is_success {
            "flex items-start gap-3 p-4 rounded-lg border shadow-lg \
            bg-emerald-50 border-emerald-200 text-emerald-800 \
            dark:bg-emerald-900/40 dark:border-emerald-700 dark:text-emerald-100"
        } else {
            "flex items-start gap-3 p-4 rounded-lg border shadow-lg \
            bg-rose-50 border-rose-200 text-rose-800 \
            dark:bg-rose-900/40 dark:border-rose-700 dark:text-rose-100"
        };

        html!(
            div
                id="alert-container"
                hx-swap-oob=[swap_oob.then_some("true")]
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div
                    role=(if is_success { "status" } else { "alert" })
                    aria-live=(if is_success { "polite" } else { "assertive" })
                    class=(container_style)
                {
                    div class="flex-1"
                    {
                        p class="text-sm font-medium" { (message) }

                        @if !details.is_empty() {
                            p class="mt-1 text-sm opacity-90" { (details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="text-lg leading-none opacity-70 hover:opacity-100"
                        onclick="document.getElementById('alert-container').classList.add('hidden')"
                    {
                        "×"
                    }
                }
            }
        )
    }

    /// Render the alert as a standalone fragment that replaces the alert container.
    pub fn into_html(self) -> Markup {
        self.view(false)
    }

    /// Render the alert for an out-of-band swap alongside another fragment.
    pub fn into_oob_html(self) -> Markup {
        self.view(true)
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}
