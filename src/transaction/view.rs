//! HTML rendering for the transactions page.

use maud::{Markup, html};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints,
    html::{
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, format_signed_currency, link,
    },
    navigation::NavBar,
};

use super::{
    core::{Category, Transaction},
    filter::{ALL_CATEGORIES, CategoryFilter, TransactionFilter},
};

/// The max number of graphemes to display for a merchant before truncating
/// and displaying ellipses.
const MAX_MERCHANT_GRAPHEMES: usize = 32;

/// The ID of the element swapped when the filters change.
pub(crate) const RESULTS_ID: &str = "transaction-results";

const EMPTY_MESSAGE: &str = "No transactions match your filters.";

const DATE_ATTRIBUTE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

const DATE_LABEL_FORMAT: &[BorrowedFormatItem] =
    format_description!("[month repr:short] [day padding:none], [year]");

fn amount_class(transaction: &Transaction) -> &'static str {
    if transaction.is_expense() {
        "text-rose-600 dark:text-rose-400"
    } else {
        "text-emerald-600 dark:text-emerald-400"
    }
}

pub(crate) fn transactions_view(
    transactions: &[&Transaction],
    filter: &TransactionFilter,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main id="main" role="main" class=(PAGE_CONTAINER_STYLE)
        {
            section aria-labelledby="transactions-heading" class="space-y-4"
            {
                div class="flex items-end justify-between gap-4 flex-wrap"
                {
                    h2 id="transactions-heading" class="text-xl font-semibold" { "Transactions" }

                    (filter_form_view(filter))
                }

                (transaction_results_view(transactions, filter))
            }
        }
    };

    base("Transactions", &[], &content)
}

fn filter_form_view(filter: &TransactionFilter) -> Markup {
    let category_options = std::iter::once(ALL_CATEGORIES.to_owned()).chain(
        Category::KNOWN
            .iter()
            .map(|category| category.as_str().to_owned()),
    );

    html! {
        form
            method="get"
            action=(endpoints::TRANSACTIONS_VIEW)
            role="search"
            hx-get=(endpoints::TRANSACTIONS_VIEW)
            hx-trigger="submit, input delay:200ms, change"
            hx-target={ "#" (RESULTS_ID) }
            hx-swap="outerHTML"
            hx-push-url="true"
            class="flex gap-2 flex-wrap"
        {
            label class="sr-only" for="search" { "Search" }
            input
                id="search"
                type="search"
                name="q"
                value=(filter.q)
                placeholder="Search by merchant, category, date"
                class={ "w-56 " (FORM_TEXT_INPUT_STYLE) };

            label class="sr-only" for="category" { "Category" }
            select
                id="category"
                name="category"
                class="px-3 py-2 rounded-md border border-gray-300 bg-white
                    focus:outline-none focus:ring-2 focus:ring-blue-500
                    dark:bg-gray-700 dark:border-gray-600"
            {
                @for option in category_options {
                    option value=(option) selected[option == filter.category.as_str()] { (option) }
                }
            }

            noscript
            {
                button type="submit" class="px-3 py-2 rounded-md bg-blue-600 text-white" { "Filter" }
            }

            @if filter.is_active() {
                p class="self-center text-sm" { (link(endpoints::TRANSACTIONS_VIEW, "Clear filters")) }
            }
        }
    }
}

/// The table of transactions that match `filter`.
///
/// This is the fragment returned for htmx requests.
pub(crate) fn transaction_results_view(
    transactions: &[&Transaction],
    filter: &TransactionFilter,
) -> Markup {
    html! {
        div
            id=(RESULTS_ID)
            class="overflow-hidden rounded-2xl border border-gray-200 bg-white
                dark:bg-gray-800 dark:border-gray-700"
        {
            table
                aria-label="Transaction history"
                class="w-full text-sm text-left text-gray-700 dark:text-gray-300"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Merchant" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (transaction_row_view(transaction, filter))
                    }

                    @if transactions.is_empty() {
                        tr
                        {
                            td
                                colspan="4"
                                data-empty-state="true"
                                class="px-4 py-6 text-center text-gray-600 dark:text-gray-400"
                            {
                                (EMPTY_MESSAGE)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row_view(transaction: &Transaction, filter: &TransactionFilter) -> Markup {
    let (merchant, tooltip) = format_merchant(&transaction.merchant);

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE)
            {
                time datetime=(date_datetime_attr(transaction.date)) { (date_label(transaction.date)) }
            }
            td class={ (TABLE_CELL_STYLE) " font-medium" } title=[tooltip] { (merchant) }
            td class=(TABLE_CELL_STYLE) { (category_badge_view(&transaction.category, filter)) }
            td class={ (TABLE_CELL_STYLE) " text-right font-semibold " (amount_class(transaction)) }
            {
                (format_signed_currency(transaction.amount))
            }
        }
    }
}

/// The category badge links to the results for that category, keeping the
/// search text.
fn category_badge_view(category: &Category, filter: &TransactionFilter) -> Markup {
    let style = format!(
        "inline-flex items-center px-2 py-1 rounded-full text-xs font-medium {}",
        category.badge_style()
    );

    // A link would turn the category filter off instead of selecting this category.
    if category.as_str() == ALL_CATEGORIES {
        return html! { span class=(style) { (category) } };
    }

    let category_url = TransactionFilter::new(&filter.q, CategoryFilter::from(category.as_str()))
        .to_url(endpoints::TRANSACTIONS_VIEW);

    html! {
        a href=(category_url) class=(style) { (category) }
    }
}

fn date_datetime_attr(date: Date) -> String {
    date.format(DATE_ATTRIBUTE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

fn date_label(date: Date) -> String {
    date.format(DATE_LABEL_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

fn format_merchant(merchant: &str) -> (String, Option<&str>) {
    let merchant_length = merchant.graphemes(true).count();

    if merchant_length <= MAX_MERCHANT_GRAPHEMES {
        (merchant.to_owned(), None)
    } else {
        let truncated: String = merchant
            .graphemes(true)
            .take(MAX_MERCHANT_GRAPHEMES - 3)
            .collect();
        let truncated = truncated + "...";
        (truncated, Some(merchant))
    }
}
