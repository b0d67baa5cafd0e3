//! Alert messages shown to the user after an action succeeds or fails.
//!
//! Alerts are HTML fragments that HTMX swaps into the `#alert-container`
//! element of the page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// A success or error message with optional details.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The action succeeded.
    Success { message: String, details: String },
    /// The action failed.
    Error { message: String, details: String },
}

impl Alert {
    /// Create a success alert.
    pub fn success(message: &str, details: &str) -> Self {
        Alert::Success {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Alert::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html! {
            div
                class=(container_style)
                role="alert"
            {
                span class="font-medium" { (message) }

                @if !details.is_empty() {
                    " " (details)
                }
            }
        }
    }

    /// Render the alert with `status_code`.
    pub fn into_response_with_status(self, status_code: StatusCode) -> Response {
        (status_code, self.into_html()).into_response()
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_response_with_status(StatusCode::OK)
    }
}
