//! Rendering for the settings page.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_ERROR_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base,
    },
    navigation::NavBar,
    settings::two_factor::{OTP_CODE_LENGTH, TwoFactorSettings, VerificationMethod},
};

/// The ID of the element that every two-factor endpoint replaces.
pub(super) const TWO_FACTOR_ID: &str = "two-factor";

const SETTINGS_CARD_STYLE: &str = "p-4 rounded-xl border border-gray-200 bg-white \
    dark:bg-gray-800 dark:border-gray-700";

pub(super) fn settings_view(two_factor: &TwoFactorSettings) -> Markup {
    let nav_bar = NavBar::new(endpoints::SETTINGS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main
            id="main"
            aria-labelledby="settings-heading"
            class=(PAGE_CONTAINER_STYLE)
        {
            h2 id="settings-heading" class="text-xl font-semibold" { "Settings" }

            div class="grid md:grid-cols-2 gap-6"
            {
                (two_factor_view(two_factor))

                div class="space-y-4"
                {
                    (privacy_card_view())
                    (accessibility_card_view())
                }
            }
        }
    );

    base("Settings", &[], &content)
}

/// The two-factor toggle and, when switched on, the set-up panel.
pub(super) fn two_factor_view(settings: &TwoFactorSettings) -> Markup {
    let target = format!("#{TWO_FACTOR_ID}");
    let enabled = settings.enabled;

    let switch_style = if enabled {
        "relative inline-flex h-6 w-11 shrink-0 items-center rounded-full transition-colors \
        focus:outline-none focus:ring-2 focus:ring-blue-500 bg-blue-600"
    } else {
        "relative inline-flex h-6 w-11 shrink-0 items-center rounded-full transition-colors \
        focus:outline-none focus:ring-2 focus:ring-blue-500 bg-gray-300"
    };
    let knob_style = if enabled {
        "inline-block h-5 w-5 transform rounded-full bg-white transition-transform translate-x-5"
    } else {
        "inline-block h-5 w-5 transform rounded-full bg-white transition-transform translate-x-1"
    };

    html!(
        div id=(TWO_FACTOR_ID) class="space-y-4"
        {
            div class={ "flex items-start justify-between gap-4 " (SETTINGS_CARD_STYLE) }
            {
                div
                {
                    label for="two-factor-toggle" class="font-medium text-gray-900 dark:text-white"
                    {
                        "Two-Factor Authentication"
                    }
                    p class="text-sm text-gray-600 dark:text-gray-400"
                    {
                        "Add an extra layer of security to your account."
                    }
                }

                button
                    id="two-factor-toggle"
                    type="button"
                    role="switch"
                    aria-checked=(if enabled { "true" } else { "false" })
                    hx-post=(endpoints::TWO_FACTOR_TOGGLE)
                    hx-target=(target)
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    class=(switch_style)
                {
                    span class=(knob_style) {}
                }
            }

            @if enabled {
                (setup_panel_view(settings, &target))
            }
        }
    )
}

fn setup_panel_view(settings: &TwoFactorSettings, target: &str) -> Markup {
    let has_error = settings.error.is_some();

    html!(
        div class={ "space-y-3 " (SETTINGS_CARD_STYLE) } aria-live="polite"
        {
            form
                hx-post=(endpoints::TWO_FACTOR_METHOD)
                hx-trigger="change"
                hx-target=(target)
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
            {
                fieldset
                {
                    legend class=(FORM_LABEL_STYLE) { "Verification method" }

                    div class="mt-2 flex gap-4"
                    {
                        @for method in VerificationMethod::ALL {
                            label class="flex items-center gap-2 text-sm"
                            {
                                input
                                    type="radio"
                                    name="method"
                                    value=(method.as_str())
                                    checked[method == settings.method];
                                (method.label())
                            }
                        }
                    }
                }
            }

            @match settings.method {
                VerificationMethod::Totp => {
                    div data-method-instructions="totp" class="text-sm text-gray-700 dark:text-gray-300"
                    {
                        p class="mb-2"
                        {
                            "Scan the QR code in your authenticator app, then enter the 6-digit code to confirm."
                        }
                        div
                            role="img"
                            aria-label="QR code placeholder"
                            class="aspect-square w-28 rounded-md bg-gray-200 grid place-items-center text-gray-600"
                        {
                            "QR"
                        }
                    }
                }
                VerificationMethod::Sms => {
                    div data-method-instructions="sms" class="text-sm text-gray-700 dark:text-gray-300"
                    {
                        p class="mb-2"
                        {
                            "We will send a verification code to your phone number ending in ••32."
                        }
                        button type="button" class=(BUTTON_SECONDARY_STYLE) { "Send Code" }
                    }
                }
            }

            form
                hx-post=(endpoints::TWO_FACTOR_VERIFY)
                hx-target=(target)
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                class="space-y-3"
            {
                div
                {
                    label for="otp-code" class=(FORM_LABEL_STYLE) { "6-digit code" }

                    input
                        id="otp-code"
                        name="code"
                        type="text"
                        inputmode="numeric"
                        autocomplete="one-time-code"
                        pattern="[0-9]{6}"
                        maxlength=(OTP_CODE_LENGTH)
                        value=(settings.code)
                        required
                        data-digits-only="true"
                        aria-invalid=(if has_error { "true" } else { "false" })
                        aria-describedby=[has_error.then_some("otp-code-error")]
                        class={ "mt-1 " (if has_error { FORM_TEXT_INPUT_ERROR_STYLE } else { FORM_TEXT_INPUT_STYLE }) };

                    @if let Some(error) = settings.error {
                        p id="otp-code-error" class=(FORM_ERROR_STYLE) { (error) }
                    }
                }

                @if settings.verified {
                    p data-verified="true" class="text-sm text-emerald-700 dark:text-emerald-400"
                    {
                        "Two-factor authentication is enabled."
                    }
                }

                div class="flex gap-3"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Verify & Enable" }

                    button
                        type="button"
                        hx-post=(endpoints::TWO_FACTOR_CANCEL)
                        hx-target=(target)
                        hx-swap="outerHTML"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Cancel"
                    }
                }
            }
        }
    )
}

fn privacy_card_view() -> Markup {
    html!(
        section aria-labelledby="privacy-heading" class=(SETTINGS_CARD_STYLE)
        {
            h3 id="privacy-heading" class="text-sm font-medium text-gray-800 dark:text-gray-100"
            {
                "Privacy"
            }
            p class="text-sm text-gray-600 dark:text-gray-400 mt-1"
            {
                "We use industry-standard encryption and never store your credentials in plain text."
            }
        }
    )
}

fn accessibility_card_view() -> Markup {
    html!(
        section aria-labelledby="accessibility-heading" class=(SETTINGS_CARD_STYLE)
        {
            h3 id="accessibility-heading" class="text-sm font-medium text-gray-800 dark:text-gray-100"
            {
                "Accessibility"
            }
            ul class="list-disc pl-5 text-sm text-gray-700 dark:text-gray-300 space-y-1"
            {
                li { "Keyboard navigable interface" }
                li { "ARIA landmarks and labels" }
                li { "Color contrast compliant" }
            }
        }
    )
}
