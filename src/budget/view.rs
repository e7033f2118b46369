//! Rendering for the budgeting page.

use maud::{Markup, html};

use crate::{
    Error,
    budget::core::{BudgetAmount, BudgetDraft, BudgetFormData, BudgetProgress},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_ERROR_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_ERROR_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, base,
    },
    navigation::NavBar,
};

/// The ID of the element that every budget endpoint replaces.
pub(super) const BUDGET_PANEL_ID: &str = "budget-panel";

pub(super) const INVALID_BUDGET_MESSAGE: &str = "Please enter a positive number.";

pub(super) fn budgeting_view(panel: Markup) -> Markup {
    let nav_bar = NavBar::new(endpoints::BUDGETING_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main
            id="main"
            aria-labelledby="budgeting-heading"
            class=(PAGE_CONTAINER_STYLE)
        {
            h2 id="budgeting-heading" class="text-xl font-semibold" { "Budgeting" }

            (panel)
        }
    );

    base("Budgeting", &[], &content)
}

/// The budget form next to the tracking card.
///
/// `form` is rendered as typed so that the user's input survives validation
/// errors, and `progress` is computed from the same draft.
pub(super) fn budget_panel_view(
    form: &BudgetFormData,
    draft: &BudgetDraft,
    progress: &[BudgetProgress],
) -> Markup {
    let panel_target = format!("#{BUDGET_PANEL_ID}");

    html!(
        div id=(BUDGET_PANEL_ID) class="grid md:grid-cols-2 gap-6"
        {
            div class=(CARD_STYLE)
            {
                h3 class="text-sm font-medium text-gray-700 dark:text-gray-200 mb-3" { "Set Budgets" }

                form
                    hx-post=(endpoints::BUDGETS_API)
                    hx-target=(panel_target)
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    novalidate
                {
                    div class="space-y-4"
                    {
                        (budget_input_view("daily", "Daily Budget", &form.daily, &draft.daily))
                        (budget_input_view("monthly", "Monthly Budget", &form.monthly, &draft.monthly))
                    }

                    div class="mt-4 flex gap-3"
                    {
                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Budgets" }

                        button
                            type="button"
                            hx-post=(endpoints::BUDGETS_RESET)
                            hx-target=(panel_target)
                            hx-swap="outerHTML"
                            class=(BUTTON_SECONDARY_STYLE)
                        {
                            "Reset"
                        }
                    }
                }
            }

            div id="budget-tracking" class={ (CARD_STYLE) " space-y-4" }
            {
                h3 class="text-sm font-medium text-gray-700 dark:text-gray-200" { "Tracking" }

                div class="space-y-3"
                {
                    @for item in progress {
                        (progress_view(item))
                    }
                }
            }
        }
    )
}

fn budget_input_view(
    name: &str,
    label: &str,
    value: &str,
    parsed: &Result<BudgetAmount, Error>,
) -> Markup {
    let input_id = format!("{name}-budget");
    let error_id = format!("{input_id}-error");
    let is_invalid = parsed.is_err();

    html!(
        div
        {
            label for=(input_id) class=(FORM_LABEL_STYLE) { (label) }

            div class="mt-1 relative"
            {
                input
                    id=(input_id)
                    name=(name)
                    type="text"
                    inputmode="decimal"
                    value=(value)
                    required
                    aria-invalid=(if is_invalid { "true" } else { "false" })
                    aria-describedby=[is_invalid.then_some(&error_id)]
                    hx-post=(endpoints::BUDGETS_PREVIEW)
                    hx-trigger="input changed delay:300ms"
                    hx-target={ "#" (BUDGET_PANEL_ID) }
                    hx-swap="outerHTML"
                    class=(if is_invalid { FORM_TEXT_INPUT_ERROR_STYLE } else { FORM_TEXT_INPUT_STYLE });

                @if is_invalid {
                    p id=(error_id) class=(FORM_ERROR_STYLE) { (INVALID_BUDGET_MESSAGE) }
                }
            }
        }
    )
}

fn progress_view(progress: &BudgetProgress) -> Markup {
    let percent = progress.percent;

    html!(
        div data-budget-progress="true"
        {
            div class="flex justify-between text-sm text-gray-700 dark:text-gray-300 mb-1"
            {
                span { (progress.label) }
                span { (percent) "%" }
            }

            div
                class="h-2 w-full bg-gray-200 rounded-full dark:bg-gray-700"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=(percent)
                aria-label={ (progress.label) " progress" }
            {
                div
                    class={ "h-2 rounded-full " (progress.status.bar_style()) }
                    style={ "width: " (percent) "%" }
                {}
            }
        }
    )
}
