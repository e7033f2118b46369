//! Shared page layout, style constants and formatting helpers for the views.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 rounded-md bg-blue-600 \
    text-white font-medium hover:bg-blue-700 focus:outline-none focus:ring-2 \
    focus:ring-blue-500";

pub const BUTTON_SECONDARY_STYLE: &str = "px-4 py-2 rounded-md bg-gray-100 \
    text-gray-800 font-medium hover:bg-gray-200 focus:outline-none \
    focus:ring-2 focus:ring-blue-500 dark:bg-gray-700 dark:text-gray-100";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block text-sm font-medium text-gray-700 dark:text-gray-200";
pub const FORM_TEXT_INPUT_STYLE: &str = "w-full px-3 py-2 rounded-md border \
    border-gray-300 bg-white text-gray-900 placeholder:text-gray-400 \
    focus:outline-none focus:ring-2 focus:ring-blue-500 \
    dark:bg-gray-700 dark:border-gray-600 dark:text-white";
pub const FORM_TEXT_INPUT_ERROR_STYLE: &str = "w-full px-3 py-2 rounded-md border \
    border-rose-500 ring-rose-200 bg-white text-gray-900 focus:outline-none \
    focus:ring-2 focus:ring-blue-500 dark:bg-gray-700 dark:text-white";
pub const FORM_ERROR_STYLE: &str = "mt-1 text-sm text-rose-600 dark:text-rose-400";

// Card styles
pub const CARD_STYLE: &str = "rounded-2xl border border-gray-200 bg-white p-5 \
    dark:bg-gray-800 dark:border-gray-700";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-4 py-3";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "max-w-6xl mx-auto px-4 py-6 space-y-6 text-gray-900 dark:text-white";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Fintrack" }
                link rel="icon" type="image/png" href="/static/favicon-32x32.png" sizes="32x32";
                link href="/static/main.css" rel="stylesheet";

                script src="/static/htmx-2.0.8-min.js" integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" {}
                script src="/static/htmx-ext-response-targets-2.0.4.js" integrity="sha384-T41oglUPvXLGBVyRdZsVRxNWnOOqCynaPubjUVjxhsjFTKrFJGEMm3/0KGmNQ+Pg" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }

                script src="/static/app.js" defer {}
            }

            body
                hx-ext="response-targets"
                class="min-h-screen bg-[#F0F2F5] text-[#333333] dark:bg-gray-900 pb-[calc(5rem+env(safe-area-inset-bottom))] md:pb-0"
            {
                a
                    href="#main"
                    class="sr-only focus:not-sr-only focus:absolute focus:top-2
                        focus:left-2 focus:bg-white focus:text-black focus:px-3
                        focus:py-2 focus:rounded"
                {
                    "Skip to content"
                }

                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// Format `number` as US dollars with thousands separators and two decimal
/// places, e.g. "$1,800.00" and "-$82.35".
pub fn format_currency(number: f64) -> String {
    static DOLLAR_FMT: OnceLock<Formatter> = OnceLock::new();

    let dollar_fmt = DOLLAR_FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("'$' is a valid currency prefix")
            .precision(Precision::Decimals(0))
    });

    // Work in whole cents so the fraction digits never depend on how numfmt
    // rounds or trims.
    let cents = (number.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let dollars_string = if dollars == 0 {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0".to_owned()
    } else {
        dollar_fmt.fmt_string(dollars as f64)
    };

    let sign = if number < 0.0 && cents > 0 { "-" } else { "" };

    format!("{sign}{dollars_string}.{fraction:02}")
}

/// Format `amount` as currency with an explicit sign: "-" for expenses and
/// "+" for everything else, e.g. "-$82.35" and "+$1,800.00".
pub fn format_signed_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { '-' } else { '+' };

    format!("{sign}{}", format_currency(amount.abs()))
}

/// A link with blue text for use in a <p> tag.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE) { (text) }
    )
}
