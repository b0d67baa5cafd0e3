//! Chart generation and rendering for the expense breakdown.
//!
//! The breakdown is turned into parallel label/value sequences, then into an
//! ECharts doughnut configuration. The configuration is serialized to JSON and
//! applied by a small initialization script on the client.

use charming::{
    Chart,
    component::Legend,
    element::{Color, JsFunction, Label, Orient, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::{html::HeadElement, ledger::ExpenseBreakdown};

/// The greyscale palette used for the chart segments.
const CHART_PALETTE: [&str; 5] = ["#1a1a1a", "#595959", "#9ca3af", "#e5e7eb", "#d1d5db"];

/// The HTML element ID of the expense chart container.
pub(super) const EXPENSE_CHART_ID: &str = "expense-chart";

/// Expense totals as parallel sequences, largest expense first.
#[derive(Debug, Clone, PartialEq, Default)]
pub(super) struct ExpenseChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ExpenseChartData {
    /// Order the breakdown by amount, largest first, breaking ties by label.
    pub fn from_breakdown(breakdown: &ExpenseBreakdown) -> Self {
        let mut entries: Vec<(&String, &f64)> = breakdown.iter().collect();
        entries.sort_by(|(label_a, value_a), (label_b, value_b)| {
            value_b.total_cmp(value_a).then_with(|| label_a.cmp(label_b))
        });

        let (labels, values) = entries
            .into_iter()
            .map(|(label, value)| (label.clone(), *value))
            .unzip();

        Self { labels, values }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML container for a chart.
pub(super) fn chart_view(chart: &DashboardChart) -> Markup {
    html!(
        div
            id=(chart.id)
            class="min-h-[320px] w-full rounded dark:bg-gray-100"
        {}
    )
}

/// Generates the JavaScript that draws `chart` once the page has loaded.
///
/// Any chart already attached to the container is disposed before the new one
/// is created, so re-running the script never leaks chart instances.
pub(super) fn chart_script(chart: &DashboardChart) -> HeadElement {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chartDom = document.getElementById("{}");
            if (!chartDom) {{
                return;
            }}

            const existingChart = echarts.getInstanceByDom(chartDom);
            if (existingChart) {{
                existingChart.dispose();
            }}

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
        }});"#,
        chart.id, chart.options
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

/// Build the doughnut chart showing how expenses are split across labels.
pub(super) fn expense_chart(data: &ExpenseChartData) -> Chart {
    let segments: Vec<(f64, &str)> = data
        .values
        .iter()
        .copied()
        .zip(data.labels.iter().map(String::as_str))
        .collect();

    Chart::new()
        .color(CHART_PALETTE.into_iter().map(Color::from).collect())
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().orient(Orient::Vertical).left("right").top("middle"))
        .series(
            Pie::new()
                .name("Expenses")
                .radius(vec!["50%", "70%"])
                .avoid_label_overlap(false)
                .label(Label::new().show(false))
                .data(segments),
        )
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
