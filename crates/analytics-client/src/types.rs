//! Response shapes for the admin analytics API
//!
//! Each struct mirrors the JSON one endpoint returns; the backend emits
//! camelCase field names. Values are immutable snapshots with no identity
//! beyond structural equality.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Retention rates at 1, 7 and 30 days
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RetentionMetrics {
    pub d1: f64,
    pub d7: f64,
    pub d30: f64,
}

/// Top-level product metrics for the overview page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewMetrics {
    pub retention: RetentionMetrics,
    pub dau: u64,
    pub wau: u64,
    pub mau: u64,
    pub dau_wau_ratio: String,
    /// Time to first value, in minutes
    pub ttfv: f64,
    pub power_users: u64,
    pub churn_rate: f64,
    pub activation_rate: f64,
}

/// One step of the onboarding funnel
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStep {
    pub name: String,
    pub value: u64,
    pub drop_off: f64,
}

/// Background job health over the last 24 hours
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    #[serde(rename = "failedJobs24h")]
    pub failed_jobs_24h: u64,
    #[serde(rename = "totalJobs24h")]
    pub total_jobs_24h: u64,
    pub success_rate: f64,
}

/// One row of the users table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItem {
    pub id: String,
    pub name: String,
    pub email: String,
    pub signup_date: DateTime<Utc>,
    pub onboarding_status: String,
    pub first_transaction: bool,
    pub activity_level: String,
    pub health_score: f64,
}

/// User segment filter; `All` is the sentinel that omits the parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSegment {
    #[default]
    All,
    New,
    AtRisk,
    Power,
}

impl UserSegment {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserSegment::All => "all",
            UserSegment::New => "new",
            UserSegment::AtRisk => "at-risk",
            UserSegment::Power => "power",
        }
    }
}

impl std::str::FromStr for UserSegment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(UserSegment::All),
            "new" => Ok(UserSegment::New),
            "at-risk" => Ok(UserSegment::AtRisk),
            "power" => Ok(UserSegment::Power),
            other => Err(format!("Unknown user segment: {other}")),
        }
    }
}

/// Onboarding status filter; `All` is the sentinel that omits the parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserStatus {
    #[default]
    All,
    Incomplete,
    NoCategories,
    NoTransactions,
    Inactive14d,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::All => "all",
            UserStatus::Incomplete => "incomplete",
            UserStatus::NoCategories => "no-categories",
            UserStatus::NoTransactions => "no-transactions",
            UserStatus::Inactive14d => "inactive-14d",
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(UserStatus::All),
            "incomplete" => Ok(UserStatus::Incomplete),
            "no-categories" => Ok(UserStatus::NoCategories),
            "no-transactions" => Ok(UserStatus::NoTransactions),
            "inactive-14d" => Ok(UserStatus::Inactive14d),
            other => Err(format!("Unknown user status: {other}")),
        }
    }
}

/// Filters for the users list query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserFilters {
    pub segment: UserSegment,
    pub status: UserStatus,
}

/// Monthly recurring revenue from Stripe
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StripeMrr {
    pub mrr: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripeSubscriptionMetrics {
    pub active_subscriptions: u64,
    pub new_this_month: u64,
    pub churned_this_month: u64,
    pub churn_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripeRevenueMetrics {
    pub total_revenue: f64,
    pub successful_payments: u64,
    pub failed_payments: u64,
    pub failure_rate: f64,
}

/// A Mercury bank account balance
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MercuryAccount {
    pub id: String,
    pub name: String,
    pub balance: f64,
    #[serde(rename = "type")]
    pub account_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MercuryCashFlow {
    pub inflows: f64,
    pub outflows: f64,
    pub net_cash_flow: f64,
    pub transaction_count: u64,
}

/// Runway projection; `runway_months` is null when burn is non-positive
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MercuryRunway {
    pub total_balance: f64,
    pub monthly_burn: f64,
    pub runway_months: Option<f64>,
    pub projected_zero_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSnapshot {
    pub inflows: f64,
    pub outflows: f64,
    pub net_cash_flow: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MercurySummary {
    pub total_balance: f64,
    pub monthly_burn: f64,
    pub runway_months: Option<f64>,
    pub last_month_cash_flow: CashFlowSnapshot,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRelicApm {
    pub avg_response_time: f64,
    pub error_rate: f64,
    pub throughput: f64,
    pub apdex_score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRelicErrors {
    pub total_errors: u64,
    pub error_rate: f64,
    /// Shape varies per error class; kept as raw JSON
    pub top_errors: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRelicDatabase {
    pub avg_query_time: f64,
    pub slow_queries: u64,
    pub total_queries: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRelicExternal {
    pub avg_external_time: f64,
    pub total_calls: u64,
    pub slow_calls: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAdoption {
    pub feature_name: String,
    pub unique_users: u64,
    pub adoption_rate: f64,
    pub total_usages: u64,
    pub avg_usages_per_user: f64,
    pub first_used_at: DateTime<Utc>,
    pub last_used_at: DateTime<Utc>,
}

/// Daily usage of one feature
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureTimeline {
    pub date: String,
    pub feature_name: String,
    pub users: u64,
    pub usages: u64,
}
