//! Plain-text rendering of page snapshots
//!
//! Pure functions of already-fetched data; no I/O and no fallible paths.

use crate::pages::{FinancePage, OperationsPage, OverviewPage, ProductUsagePage, UsersPage};

pub fn loading() -> String {
    "Loading...".to_string()
}

/// The error panel shown when a page batch fails
pub fn error_panel(message: &str) -> String {
    format!("Failed to load dashboard data\n  {message}")
}

pub fn overview(page: &OverviewPage) -> String {
    let mut out = String::new();
    out.push_str("== Overview ==\n");
    out.push_str(&format!(
        "DAU {}  WAU {}  MAU {}  (DAU/WAU {})\n",
        page.metrics.dau, page.metrics.wau, page.metrics.mau, page.metrics.dau_wau_ratio
    ));
    out.push_str(&format!(
        "Retention d1 {:.1}%  d7 {:.1}%  d30 {:.1}%\n",
        page.metrics.retention.d1 * 100.0,
        page.metrics.retention.d7 * 100.0,
        page.metrics.retention.d30 * 100.0
    ));
    out.push_str(&format!(
        "TTFV {:.1} min  Power users {}  Churn {:.1}%  Activation {:.1}%\n",
        page.metrics.ttfv,
        page.metrics.power_users,
        page.metrics.churn_rate,
        page.metrics.activation_rate
    ));
    out.push_str("\nOnboarding funnel:\n");
    for step in &page.funnel {
        out.push_str(&format!(
            "  {:<24} {:>8}  (drop-off {:.1}%)\n",
            step.name, step.value, step.drop_off
        ));
    }
    out.push_str(&format!(
        "\nJobs (24h): {}/{} failed, success rate {:.2}%\n",
        page.health.failed_jobs_24h, page.health.total_jobs_24h, page.health.success_rate
    ));
    out
}

pub fn users(page: &UsersPage) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "== Users ==  (segment: {}, status: {})\n",
        page.filters.segment.as_str(),
        page.filters.status.as_str()
    ));
    for user in &page.users {
        out.push_str(&format!(
            "  {:<20} {:<28} signed up {}  onboarding {:<12} health {:.0}\n",
            user.name,
            user.email,
            user.signup_date.format("%Y-%m-%d"),
            user.onboarding_status,
            user.health_score
        ));
    }
    out.push_str(&format!("{} users\n", page.users.len()));
    out
}

pub fn finance(page: &FinancePage) -> String {
    let mut out = String::new();
    out.push_str("== Finance ==\n");
    out.push_str(&format!("MRR ${:.2}\n", page.mrr.mrr));
    out.push_str(&format!(
        "Subscriptions: {} active, {} new, {} churned ({:.1}% churn)\n",
        page.subscriptions.active_subscriptions,
        page.subscriptions.new_this_month,
        page.subscriptions.churned_this_month,
        page.subscriptions.churn_rate
    ));
    out.push_str(&format!(
        "Revenue (30d): ${:.2}, {} ok / {} failed ({:.1}% failure)\n",
        page.revenue.total_revenue,
        page.revenue.successful_payments,
        page.revenue.failed_payments,
        page.revenue.failure_rate
    ));
    let runway = match page.runway.runway_months {
        Some(months) => format!("{months:.1} months"),
        None => "n/a".to_string(),
    };
    out.push_str(&format!(
        "Balance ${:.2}, burn ${:.2}/mo, runway {}\n",
        page.runway.total_balance, page.runway.monthly_burn, runway
    ));
    out.push_str(&format!(
        "Last month cash flow: in ${:.2}, out ${:.2}, net ${:.2}\n",
        page.summary.last_month_cash_flow.inflows,
        page.summary.last_month_cash_flow.outflows,
        page.summary.last_month_cash_flow.net_cash_flow
    ));
    out
}

pub fn operations(page: &OperationsPage) -> String {
    let mut out = String::new();
    out.push_str("== Operations ==\n");
    out.push_str(&format!(
        "APM: {:.0} ms avg, {:.2}% errors, {:.0} rpm, apdex {:.2}\n",
        page.apm.avg_response_time, page.apm.error_rate, page.apm.throughput, page.apm.apdex_score
    ));
    out.push_str(&format!(
        "Errors: {} total ({:.2}%), {} distinct top errors\n",
        page.errors.total_errors,
        page.errors.error_rate,
        page.errors.top_errors.len()
    ));
    out.push_str(&format!(
        "Database: {:.1} ms avg, {} slow of {} queries\n",
        page.database.avg_query_time, page.database.slow_queries, page.database.total_queries
    ));
    out.push_str(&format!(
        "External: {:.0} ms avg, {} slow of {} calls\n",
        page.external.avg_external_time, page.external.slow_calls, page.external.total_calls
    ));
    out
}

pub fn product_usage(page: &ProductUsagePage) -> String {
    let mut out = String::new();
    out.push_str("== Product usage ==\n");
    for feature in &page.features {
        out.push_str(&format!(
            "  {:<24} {:>6} users  {:>5.1}% adoption  {:>8} usages ({:.1}/user)\n",
            feature.feature_name,
            feature.unique_users,
            feature.adoption_rate,
            feature.total_usages,
            feature.avg_usages_per_user
        ));
    }
    if !page.timeline.is_empty() {
        out.push_str("\nTimeline (last 30 days):\n");
        for day in &page.timeline {
            out.push_str(&format!(
                "  {}  {:<24} {:>6} users {:>8} usages\n",
                day.date, day.feature_name, day.users, day.usages
            ));
        }
    }
    out
}
