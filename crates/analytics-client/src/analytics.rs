//! Typed catalog of admin analytics queries
//!
//! One method per backend endpoint. Each builds its path and query string,
//! then delegates to [`ApiClient::get`]; no local computation, caching or
//! error mapping happens here.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::types::{
    FeatureAdoption, FeatureTimeline, FunnelStep, MercuryAccount, MercuryCashFlow, MercuryRunway,
    MercurySummary, NewRelicApm, NewRelicDatabase, NewRelicErrors, NewRelicExternal,
    OverviewMetrics, StripeMrr, StripeRevenueMetrics, StripeSubscriptionMetrics, SystemHealth,
    UserFilters, UserListItem, UserSegment, UserStatus,
};

const ANALYTICS_BASE: &str = "/api/v1/admin/analytics";

/// Facade over the admin analytics endpoints
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    api: Arc<ApiClient>,
}

impl AnalyticsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Overview metrics (retention, DAU/WAU/MAU, TTFV) over a trailing window
    pub async fn overview_metrics(&self, days: u32) -> crate::Result<OverviewMetrics> {
        let endpoint = Endpoint::new(ANALYTICS_BASE).query("days", &days.to_string());
        self.api.get(&endpoint.build()).await
    }

    /// Onboarding funnel steps
    pub async fn onboarding_funnel(&self) -> crate::Result<Vec<FunnelStep>> {
        self.api.get(&format!("{ANALYTICS_BASE}/funnel")).await
    }

    /// Background job health
    pub async fn system_health(&self) -> crate::Result<SystemHealth> {
        self.api
            .get(&format!("{ANALYTICS_BASE}/system-health"))
            .await
    }

    /// Users list; `all` filter values omit their query parameter entirely
    pub async fn users_list(&self, filters: &UserFilters) -> crate::Result<Vec<UserListItem>> {
        let mut endpoint = Endpoint::new(format!("{ANALYTICS_BASE}/users"));
        if filters.segment != UserSegment::All {
            endpoint = endpoint.query("segment", filters.segment.as_str());
        }
        if filters.status != UserStatus::All {
            endpoint = endpoint.query("status", filters.status.as_str());
        }
        self.api.get(&endpoint.build()).await
    }

    /// Monthly recurring revenue from Stripe
    pub async fn stripe_mrr(&self) -> crate::Result<StripeMrr> {
        self.api.get(&format!("{ANALYTICS_BASE}/stripe/mrr")).await
    }

    pub async fn stripe_subscriptions(&self) -> crate::Result<StripeSubscriptionMetrics> {
        self.api
            .get(&format!("{ANALYTICS_BASE}/stripe/subscriptions"))
            .await
    }

    /// Revenue metrics for a date range; both ISO dates are always included
    pub async fn stripe_revenue(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> crate::Result<StripeRevenueMetrics> {
        let endpoint = Endpoint::new(format!("{ANALYTICS_BASE}/stripe/revenue"))
            .query("startDate", start_date)
            .query("endDate", end_date);
        self.api.get(&endpoint.build()).await
    }

    /// Mercury account balances
    pub async fn mercury_balances(&self) -> crate::Result<Vec<MercuryAccount>> {
        self.api
            .get(&format!("{ANALYTICS_BASE}/mercury/balances"))
            .await
    }

    /// Cash flow for a date range
    pub async fn mercury_cash_flow(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> crate::Result<MercuryCashFlow> {
        let endpoint = Endpoint::new(format!("{ANALYTICS_BASE}/mercury/cash-flow"))
            .query("startDate", start_date)
            .query("endDate", end_date);
        self.api.get(&endpoint.build()).await
    }

    pub async fn mercury_runway(&self) -> crate::Result<MercuryRunway> {
        self.api
            .get(&format!("{ANALYTICS_BASE}/mercury/runway"))
            .await
    }

    pub async fn mercury_summary(&self) -> crate::Result<MercurySummary> {
        self.api
            .get(&format!("{ANALYTICS_BASE}/mercury/summary"))
            .await
    }

    pub async fn newrelic_apm(&self) -> crate::Result<NewRelicApm> {
        self.api
            .get(&format!("{ANALYTICS_BASE}/newrelic/apm"))
            .await
    }

    pub async fn newrelic_errors(&self) -> crate::Result<NewRelicErrors> {
        self.api
            .get(&format!("{ANALYTICS_BASE}/newrelic/errors"))
            .await
    }

    pub async fn newrelic_database(&self) -> crate::Result<NewRelicDatabase> {
        self.api
            .get(&format!("{ANALYTICS_BASE}/newrelic/database"))
            .await
    }

    pub async fn newrelic_external(&self) -> crate::Result<NewRelicExternal> {
        self.api
            .get(&format!("{ANALYTICS_BASE}/newrelic/external"))
            .await
    }

    /// Adoption metrics for every tracked feature
    pub async fn feature_adoption(&self) -> crate::Result<Vec<FeatureAdoption>> {
        self.api.get(&format!("{ANALYTICS_BASE}/features")).await
    }

    /// Daily feature usage over the last 30 days
    ///
    /// The query string is omitted entirely when no feature name is given.
    pub async fn feature_timeline(
        &self,
        feature_name: Option<&str>,
    ) -> crate::Result<Vec<FeatureTimeline>> {
        let mut endpoint = Endpoint::new(format!("{ANALYTICS_BASE}/features/timeline"));
        if let Some(name) = feature_name {
            endpoint = endpoint.query("featureName", name);
        }
        self.api.get(&endpoint.build()).await
    }
}
