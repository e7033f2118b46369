//! The settings page and the two-factor set-up endpoints.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::html;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    alert::Alert,
    settings::{
        two_factor::{TwoFactorSettings, VerificationMethod},
        view::{settings_view, two_factor_view},
    },
};

/// The state needed for the settings page and endpoints.
#[derive(Debug, Clone)]
pub struct SettingsState {
    pub two_factor: Arc<Mutex<TwoFactorSettings>>,
}

impl FromRef<AppState> for SettingsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            two_factor: state.two_factor.clone(),
        }
    }
}

/// The form for choosing a verification method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodForm {
    pub method: VerificationMethod,
}

/// The form for submitting a verification code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyForm {
    #[serde(default)]
    pub code: String,
}

fn lock(state: &SettingsState) -> Result<MutexGuard<'_, TwoFactorSettings>, Error> {
    state.two_factor.lock().map_err(|error| {
        tracing::error!("could not acquire two-factor settings lock: {error}");
        Error::StateLockError
    })
}

/// Display the security, privacy and accessibility settings.
pub async fn get_settings_page(State(state): State<SettingsState>) -> Response {
    match lock(&state) {
        Ok(settings) => settings_view(&settings).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Switch two-factor authentication on or off.
pub async fn toggle_two_factor(State(state): State<SettingsState>) -> Response {
    let mut settings = match lock(&state) {
        Ok(settings) => settings,
        Err(error) => return error.into_alert_response(),
    };

    let enabled = !settings.enabled;
    settings.set_enabled(enabled);
    tracing::debug!("two-factor set-up switched {}", if enabled { "on" } else { "off" });

    two_factor_view(&settings).into_response()
}

/// Choose how verification codes are delivered.
pub async fn set_two_factor_method(
    State(state): State<SettingsState>,
    Form(form): Form<MethodForm>,
) -> Response {
    let mut settings = match lock(&state) {
        Ok(settings) => settings,
        Err(error) => return error.into_alert_response(),
    };

    settings.set_method(form.method);

    two_factor_view(&settings).into_response()
}

/// Check the submitted code and enable two-factor authentication if it is valid.
///
/// An invalid code re-renders the panel with an inline error.
pub async fn verify_two_factor(
    State(state): State<SettingsState>,
    Form(form): Form<VerifyForm>,
) -> Response {
    let mut settings = match lock(&state) {
        Ok(settings) => settings,
        Err(error) => return error.into_alert_response(),
    };

    match settings.verify(&form.code) {
        Ok(()) => {
            tracing::info!(
                "two-factor authentication enabled via {}",
                settings.method.as_str()
            );

            let alert = Alert::SuccessSimple {
                message: "Two-factor authentication enabled".to_owned(),
            };

            html!(
                (two_factor_view(&settings))
                (alert.into_oob_html())
            )
            .into_response()
        }
        Err(error) => {
            tracing::debug!("rejected verification code: {error}");
            two_factor_view(&settings).into_response()
        }
    }
}

/// Abandon two-factor set-up.
pub async fn cancel_two_factor(State(state): State<SettingsState>) -> Response {
    let mut settings = match lock(&state) {
        Ok(settings) => settings,
        Err(error) => return error.into_alert_response(),
    };

    settings.cancel();

    two_factor_view(&settings).into_response()
}


#[cfg(test)]
mod two_factor_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Form, extract::State, http::StatusCode};
    use scraper::Selector;

    use crate::{
        endpoints,
        settings::{
            page::{
                MethodForm, SettingsState, VerifyForm, cancel_two_factor, set_two_factor_method,
                toggle_two_factor, verify_two_factor,
            },
            two_factor::{TwoFactorSettings, VerificationMethod},
        },
        test_utils::{assert_hx_endpoint, assert_valid_html, parse_html_fragment, select_text},
    };

    fn get_state(enabled: bool) -> SettingsState {
        let mut settings = TwoFactorSettings::default();
        settings.set_enabled(enabled);

        SettingsState {
            two_factor: Arc::new(Mutex::new(settings)),
        }
    }

    #[tokio::test]
    async fn toggle_on_shows_setup_panel() {
        let state = get_state(false);

        let response = toggle_two_factor(State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.two_factor.lock().unwrap().enabled);

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let switch = html
            .select(&Selector::parse("button[role='switch']").unwrap())
            .next()
            .expect("No switch found");
        assert_eq!(switch.value().attr("aria-checked"), Some("true"));
        assert_hx_endpoint(&switch, endpoints::TWO_FACTOR_TOGGLE, "hx-post");

        let checked = html
            .select(&Selector::parse("input[type='radio'][checked]").unwrap())
            .map(|input| input.value().attr("value").unwrap_or_default().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(checked, ["totp"]);
        assert_eq!(
            select_text(&html, "[role='img']").as_deref(),
            Some("QR")
        );
    }

    #[tokio::test]
    async fn toggle_off_clears_entered_code() {
        let state = get_state(true);
        {
            let mut settings = state.two_factor.lock().unwrap();
            let _ = settings.verify("12");
        }

        let response = toggle_two_factor(State(state.clone())).await;

        let settings = state.two_factor.lock().unwrap().clone();
        assert!(!settings.enabled);
        assert_eq!(settings.code, "");
        assert_eq!(settings.error, None);

        let html = parse_html_fragment(response).await;
        assert!(select_text(&html, "#otp-code-error").is_none());
    }

    #[tokio::test]
    async fn sms_method_shows_send_code_button() {
        let state = get_state(true);

        let response = set_two_factor_method(
            State(state.clone()),
            Form(MethodForm {
                method: VerificationMethod::Sms,
            }),
        )
        .await;

        assert_eq!(
            state.two_factor.lock().unwrap().method,
            VerificationMethod::Sms
        );

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let instructions = select_text(&html, "[data-method-instructions='sms'] p")
            .expect("SMS instructions missing");
        assert!(instructions.contains("ending in ••32"));

        let buttons = html
            .select(&Selector::parse("[data-method-instructions='sms'] button").unwrap())
            .map(|button| button.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(buttons, ["Send Code"]);
        assert!(select_text(&html, "[data-method-instructions='totp']").is_none());
    }

    #[tokio::test]
    async fn verify_rejects_invalid_code() {
        let state = get_state(true);

        let response = verify_two_factor(
            State(state.clone()),
            Form(VerifyForm {
                code: "12a4".to_owned(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_eq!(
            select_text(&html, "#otp-code-error").as_deref(),
            Some("Enter a valid 6-digit code.")
        );

        let input = html
            .select(&Selector::parse("#otp-code").unwrap())
            .next()
            .expect("No code input found");
        assert_eq!(input.value().attr("aria-invalid"), Some("true"));
        assert_eq!(input.value().attr("value"), Some("124"));
        assert!(select_text(&html, "#alert-container").is_none());
    }

    #[tokio::test]
    async fn verify_accepts_six_digits_and_shows_alert() {
        let state = get_state(true);

        let response = verify_two_factor(
            State(state.clone()),
            Form(VerifyForm {
                code: "123456".to_owned(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.two_factor.lock().unwrap().verified);

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert!(select_text(&html, "#otp-code-error").is_none());
        assert_eq!(
            select_text(&html, "#alert-container p.text-sm.font-medium").as_deref(),
            Some("Two-factor authentication enabled")
        );
    }

    #[tokio::test]
    async fn cancel_disables_two_factor() {
        let state = get_state(true);

        let response = cancel_two_factor(State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(!state.two_factor.lock().unwrap().enabled);

        let html = parse_html_fragment(response).await;
        let switch = html
            .select(&Selector::parse("button[role='switch']").unwrap())
            .next()
            .expect("No switch found");
        assert_eq!(switch.value().attr("aria-checked"), Some("false"));
    }
}
