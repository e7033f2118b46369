//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for the week's spending:
//! - **Daily Spending**: Bar chart of the amount spent on each of the last seven days
//! - **Weekly Progress**: Line chart of the running total spent over the week
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Line, bar::Bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{dashboard::summary::DashboardSnapshot, html::HeadElement};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// Describes the chart for screen readers.
    pub description: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto"
        {
            div class="grid md:grid-cols-2 gap-6"
            {
                @for chart in charts {
                    figure
                        class="rounded-2xl bg-white border border-gray-200 p-4
                            dark:bg-gray-100"
                    {
                        div
                            id=(chart.id)
                            role="img"
                            aria-label=(chart.description)
                            class="min-h-[240px]"
                        {}
                    }
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Creates the dashboard charts from `snapshot`.
///
/// The chart options are serialized to JSON for ECharts consumption.
pub(super) fn build_dashboard_charts(snapshot: &DashboardSnapshot) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "daily-spending-chart",
            description: "Bar chart showing daily spending for the last 7 days",
            options: daily_spending_chart(snapshot).to_string(),
        },
        DashboardChart {
            id: "weekly-progress-chart",
            description: "Line chart showing weekly cumulative spending",
            options: weekly_progress_chart(snapshot).to_string(),
        },
    ]
}

pub(super) fn daily_spending_chart(snapshot: &DashboardSnapshot) -> Chart {
    let labels = snapshot
        .daily_spending
        .iter()
        .map(|day| day.label)
        .collect::<Vec<_>>();
    let values = snapshot
        .daily_spending
        .iter()
        .map(|day| day.amount)
        .collect::<Vec<_>>();

    Chart::new()
        .title(
            Title::new()
                .text("Daily Spending")
                .subtext("Last seven days"),
        )
        .tooltip(currency_tooltip())
        .grid(chart_grid())
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .max(snapshot.daily_spending_max)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name("Spending").data(values))
}

pub(super) fn weekly_progress_chart(snapshot: &DashboardSnapshot) -> Chart {
    let labels = (1..=snapshot.weekly_progress.len())
        .map(|day| format!("Day {day}"))
        .collect::<Vec<_>>();

    Chart::new()
        .title(
            Title::new()
                .text("Weekly Progress")
                .subtext("Cumulative spending"),
        )
        .tooltip(currency_tooltip())
        .grid(chart_grid())
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .max(snapshot.weekly_progress_max)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Line::new()
                .name("Spent so far")
                .data(snapshot.weekly_progress.clone()),
        )
}

fn chart_grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .bottom("3%")
        .contain_label(true)
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
