//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A budget amount was empty, not a number, or not greater than zero.
    ///
    /// Holds the raw text the user entered.
    #[error("\"{0}\" is not a positive number")]
    InvalidBudgetAmount(String),

    /// A verification code was not exactly six digits.
    #[error("the verification code must be exactly six digits")]
    InvalidOtpCode,

    /// Two transactions in the loaded snapshot share the same ID.
    #[error("the transaction ID \"{0}\" is used more than once")]
    DuplicateTransactionId(String),

    /// The transactions could not be read or parsed.
    ///
    /// The string describes the underlying I/O or JSON error and should
    /// only be logged on the server.
    #[error("could not load transactions: {0}")]
    TransactionSource(String),

    /// Could not acquire the lock on a piece of shared, mutable state.
    #[error("could not acquire the state lock")]
    StateLockError,

    /// The body of an HTTP request or response could not be read.
    #[error("could not read the HTTP body: {0}")]
    BodyRead(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::TransactionSource(_) => InternalServerError {
                description: "Transactions Unavailable",
                fix: "The transactions could not be loaded. Check the server logs for details.",
            }
            .into_response(),
            Error::StateLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::StateLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details: "Could not update your settings. Please try again.".to_owned(),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
