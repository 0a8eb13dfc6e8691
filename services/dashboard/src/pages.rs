//! Page controllers: one concurrent fetch batch per dashboard tab
//!
//! Each loader issues its facade calls jointly and resolves only when every
//! call succeeded. A single failing call fails the whole batch and the
//! already-fetched results are dropped; the page renders either complete or
//! not at all.

use std::future::Future;

use analytics_client::types::{
    FeatureAdoption, FeatureTimeline, FunnelStep, MercuryRunway, MercurySummary, NewRelicApm,
    NewRelicDatabase, NewRelicErrors, NewRelicExternal, OverviewMetrics, StripeMrr,
    StripeRevenueMetrics, StripeSubscriptionMetrics, SystemHealth, UserFilters, UserListItem,
};
use analytics_client::AnalyticsClient;
use chrono::{Duration, Utc};

/// Display state of a dashboard page
///
/// A page starts `Loading`, then is replaced wholesale by either the loaded
/// snapshot or an error message.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }
}

/// Drive a page load from `Loading` to its terminal state
///
/// Logs the failure at the catch point; the message itself is carried into
/// the `Error` state for display.
pub async fn resolve<T, F>(load: F) -> PageState<T>
where
    F: Future<Output = analytics_client::Result<T>>,
{
    match load.await {
        Ok(snapshot) => PageState::Loaded(snapshot),
        Err(e) => {
            tracing::error!("Failed to load page data: {}", e);
            PageState::Error(e.to_string())
        }
    }
}

/// Overview tab: product metrics, onboarding funnel, job health
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewPage {
    pub metrics: OverviewMetrics,
    pub funnel: Vec<FunnelStep>,
    pub health: SystemHealth,
}

impl OverviewPage {
    /// Trailing window the overview metrics cover
    pub const DEFAULT_DAYS: u32 = 7;

    pub async fn load(analytics: &AnalyticsClient) -> analytics_client::Result<Self> {
        let (metrics, funnel, health) = tokio::try_join!(
            analytics.overview_metrics(Self::DEFAULT_DAYS),
            analytics.onboarding_funnel(),
            analytics.system_health(),
        )?;
        Ok(Self {
            metrics,
            funnel,
            health,
        })
    }
}

/// Users tab: filtered user list
#[derive(Debug, Clone, PartialEq)]
pub struct UsersPage {
    pub filters: UserFilters,
    pub users: Vec<UserListItem>,
}

impl UsersPage {
    pub async fn load(
        analytics: &AnalyticsClient,
        filters: UserFilters,
    ) -> analytics_client::Result<Self> {
        let users = analytics.users_list(&filters).await?;
        Ok(Self { filters, users })
    }
}

/// Finance tab: Stripe revenue plus Mercury runway and summary
#[derive(Debug, Clone, PartialEq)]
pub struct FinancePage {
    pub mrr: StripeMrr,
    pub subscriptions: StripeSubscriptionMetrics,
    pub revenue: StripeRevenueMetrics,
    pub runway: MercuryRunway,
    pub summary: MercurySummary,
}

impl FinancePage {
    /// Revenue window: the trailing 30 days
    pub const REVENUE_WINDOW_DAYS: i64 = 30;

    pub async fn load(analytics: &AnalyticsClient) -> analytics_client::Result<Self> {
        let end_date = Utc::now().date_naive();
        let start_date = end_date - Duration::days(Self::REVENUE_WINDOW_DAYS);
        let start = start_date.format("%Y-%m-%d").to_string();
        let end = end_date.format("%Y-%m-%d").to_string();

        let (mrr, subscriptions, revenue, runway, summary) = tokio::try_join!(
            analytics.stripe_mrr(),
            analytics.stripe_subscriptions(),
            analytics.stripe_revenue(&start, &end),
            analytics.mercury_runway(),
            analytics.mercury_summary(),
        )?;
        Ok(Self {
            mrr,
            subscriptions,
            revenue,
            runway,
            summary,
        })
    }
}

/// Operations tab: the four New Relic metric groups
#[derive(Debug, Clone, PartialEq)]
pub struct OperationsPage {
    pub apm: NewRelicApm,
    pub errors: NewRelicErrors,
    pub database: NewRelicDatabase,
    pub external: NewRelicExternal,
}

impl OperationsPage {
    pub async fn load(analytics: &AnalyticsClient) -> analytics_client::Result<Self> {
        let (apm, errors, database, external) = tokio::try_join!(
            analytics.newrelic_apm(),
            analytics.newrelic_errors(),
            analytics.newrelic_database(),
            analytics.newrelic_external(),
        )?;
        Ok(Self {
            apm,
            errors,
            database,
            external,
        })
    }
}

/// Product usage tab: feature adoption plus the usage timeline
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUsagePage {
    pub features: Vec<FeatureAdoption>,
    pub timeline: Vec<FeatureTimeline>,
}

impl ProductUsagePage {
    pub async fn load(
        analytics: &AnalyticsClient,
        timeline_feature: Option<&str>,
    ) -> analytics_client::Result<Self> {
        let (features, timeline) = tokio::try_join!(
            analytics.feature_adoption(),
            analytics.feature_timeline(timeline_feature),
        )?;
        Ok(Self { features, timeline })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use analytics_client::transport::{HttpRequest, HttpResponse, HttpTransport};
    use analytics_client::{ApiClient, ApiConfig, ClientError};
    use async_trait::async_trait;

    /// Transport stub keyed by endpoint path; unknown paths return 404
    struct StubTransport {
        responses: HashMap<String, String>,
    }

    impl StubTransport {
        fn new(responses: &[(&str, &str)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(path, body)| (path.to_string(), body.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn send(&self, request: HttpRequest) -> analytics_client::Result<HttpResponse> {
            let path = request
                .url
                .strip_prefix("http://localhost:3000")
                .unwrap_or(&request.url);
            match self.responses.get(path) {
                Some(body) => Ok(HttpResponse {
                    status: 200,
                    status_text: "OK".to_string(),
                    body: body.clone(),
                }),
                None => Ok(HttpResponse {
                    status: 404,
                    status_text: "Not Found".to_string(),
                    body: String::new(),
                }),
            }
        }
    }

    fn analytics_with(responses: &[(&str, &str)]) -> AnalyticsClient {
        let config = ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            ..ApiConfig::default()
        };
        let transport = Arc::new(StubTransport::new(responses));
        AnalyticsClient::new(Arc::new(ApiClient::new(config, transport)))
    }

    const OVERVIEW_BODY: &str = r#"{
        "retention": {"d1": 0.4, "d7": 0.3, "d30": 0.2},
        "dau": 100, "wau": 400, "mau": 1200,
        "dauWauRatio": "25%", "ttfv": 10.0,
        "powerUsers": 30, "churnRate": 5.0, "activationRate": 60.0
    }"#;
    const FUNNEL_BODY: &str =
        r#"[{"name": "Signed up", "value": 1000, "dropOff": 0.0},
            {"name": "First transaction", "value": 620, "dropOff": 38.0}]"#;
    const HEALTH_BODY: &str = r#"{"failedJobs24h": 2, "totalJobs24h": 900, "successRate": 99.8}"#;

    #[tokio::test]
    async fn overview_batch_loads_all_three() {
        let analytics = analytics_with(&[
            ("/api/v1/admin/analytics?days=7", OVERVIEW_BODY),
            ("/api/v1/admin/analytics/funnel", FUNNEL_BODY),
            ("/api/v1/admin/analytics/system-health", HEALTH_BODY),
        ]);

        let page = OverviewPage::load(&analytics).await.unwrap();
        assert_eq!(page.metrics.dau, 100);
        assert_eq!(page.funnel.len(), 2);
        assert_eq!(page.health.failed_jobs_24h, 2);
    }

    #[tokio::test]
    async fn overview_batch_fails_when_one_call_fails() {
        // system-health missing: that call 404s, the whole batch fails
        let analytics = analytics_with(&[
            ("/api/v1/admin/analytics?days=7", OVERVIEW_BODY),
            ("/api/v1/admin/analytics/funnel", FUNNEL_BODY),
        ]);

        let err = OverviewPage::load(&analytics).await.unwrap_err();
        assert_eq!(err.to_string(), "API Error: Not Found");
        assert!(matches!(err, ClientError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn resolve_moves_loading_to_loaded() {
        let analytics = analytics_with(&[
            ("/api/v1/admin/analytics?days=7", OVERVIEW_BODY),
            ("/api/v1/admin/analytics/funnel", FUNNEL_BODY),
            ("/api/v1/admin/analytics/system-health", HEALTH_BODY),
        ]);

        let state = resolve(OverviewPage::load(&analytics)).await;
        assert!(!state.is_loading());
        assert!(matches!(state, PageState::Loaded(_)));
    }

    #[tokio::test]
    async fn resolve_captures_error_message_and_discards_partial_results() {
        let analytics = analytics_with(&[("/api/v1/admin/analytics?days=7", OVERVIEW_BODY)]);

        let state = resolve(OverviewPage::load(&analytics)).await;
        // No OverviewPage value exists in the error state; the successful
        // metrics fetch is gone with the batch.
        assert_eq!(state, PageState::Error("API Error: Not Found".to_string()));
    }

    #[tokio::test]
    async fn users_page_passes_filters_through() {
        use analytics_client::types::{UserSegment, UserStatus};

        let analytics = analytics_with(&[(
            "/api/v1/admin/analytics/users?segment=power",
            r#"[{"id": "u1", "name": "Ada", "email": "ada@example.com",
                 "signupDate": "2025-11-03T14:20:00Z",
                 "onboardingStatus": "complete", "firstTransaction": true,
                 "activityLevel": "high", "healthScore": 87.5}]"#,
        )]);

        let filters = UserFilters {
            segment: UserSegment::Power,
            status: UserStatus::All,
        };
        let page = UsersPage::load(&analytics, filters).await.unwrap();
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.filters, filters);
    }

    #[tokio::test]
    async fn finance_batch_requests_trailing_thirty_days() {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(FinancePage::REVENUE_WINDOW_DAYS);
        let revenue_path = format!(
            "/api/v1/admin/analytics/stripe/revenue?startDate={}&endDate={}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
        );

        let analytics = analytics_with(&[
            ("/api/v1/admin/analytics/stripe/mrr", r#"{"mrr": 42000.0}"#),
            (
                "/api/v1/admin/analytics/stripe/subscriptions",
                r#"{"activeSubscriptions": 310, "newThisMonth": 24,
                    "churnedThisMonth": 9, "churnRate": 2.9}"#,
            ),
            (
                revenue_path.as_str(),
                r#"{"totalRevenue": 125000.0, "successfulPayments": 420,
                    "failedPayments": 7, "failureRate": 1.6}"#,
            ),
            (
                "/api/v1/admin/analytics/mercury/runway",
                r#"{"totalBalance": 500000.0, "monthlyBurn": 40000.0,
                    "runwayMonths": 12.5, "projectedZeroDate": "2027-09-10"}"#,
            ),
            (
                "/api/v1/admin/analytics/mercury/summary",
                r#"{"totalBalance": 500000.0, "monthlyBurn": 40000.0,
                    "runwayMonths": 12.5,
                    "lastMonthCashFlow": {"inflows": 80000.0, "outflows": 65000.0,
                                          "netCashFlow": 15000.0}}"#,
            ),
        ]);

        let page = FinancePage::load(&analytics).await.unwrap();
        assert_eq!(page.mrr.mrr, 42000.0);
        assert_eq!(page.revenue.successful_payments, 420);
        assert_eq!(page.runway.runway_months, Some(12.5));
        assert_eq!(page.summary.last_month_cash_flow.net_cash_flow, 15000.0);
    }

    #[tokio::test]
    async fn operations_batch_loads_all_four() {
        let analytics = analytics_with(&[
            (
                "/api/v1/admin/analytics/newrelic/apm",
                r#"{"avgResponseTime": 120.0, "errorRate": 0.4,
                    "throughput": 850.0, "apdexScore": 0.97}"#,
            ),
            (
                "/api/v1/admin/analytics/newrelic/errors",
                r#"{"totalErrors": 18, "errorRate": 0.4, "topErrors": []}"#,
            ),
            (
                "/api/v1/admin/analytics/newrelic/database",
                r#"{"avgQueryTime": 4.2, "slowQueries": 3, "totalQueries": 90000}"#,
            ),
            (
                "/api/v1/admin/analytics/newrelic/external",
                r#"{"avgExternalTime": 210.0, "totalCalls": 4200, "slowCalls": 12}"#,
            ),
        ]);

        let page = OperationsPage::load(&analytics).await.unwrap();
        assert_eq!(page.apm.apdex_score, 0.97);
        assert_eq!(page.errors.total_errors, 18);
        assert_eq!(page.database.slow_queries, 3);
        assert_eq!(page.external.slow_calls, 12);
    }

    #[tokio::test]
    async fn product_usage_batch_with_timeline_filter() {
        let analytics = analytics_with(&[
            (
                "/api/v1/admin/analytics/features",
                r#"[{"featureName": "ai_categorizer", "uniqueUsers": 120,
                     "adoptionRate": 34.0, "totalUsages": 480,
                     "avgUsagesPerUser": 4.0,
                     "firstUsedAt": "2026-06-01T00:00:00Z",
                     "lastUsedAt": "2026-08-28T12:00:00Z"}]"#,
            ),
            (
                "/api/v1/admin/analytics/features/timeline?featureName=ai_categorizer",
                r#"[{"date": "2026-08-28", "featureName": "ai_categorizer",
                     "users": 120, "usages": 480}]"#,
            ),
        ]);

        let page = ProductUsagePage::load(&analytics, Some("ai_categorizer"))
            .await
            .unwrap();
        assert_eq!(page.features[0].unique_users, 120);
        assert_eq!(page.timeline.len(), 1);
    }

    #[tokio::test]
    async fn product_usage_without_filter_fetches_full_timeline() {
        let analytics = analytics_with(&[
            ("/api/v1/admin/analytics/features", "[]"),
            ("/api/v1/admin/analytics/features/timeline", "[]"),
        ]);

        let page = ProductUsagePage::load(&analytics, None).await.unwrap();
        assert!(page.features.is_empty());
        assert!(page.timeline.is_empty());
    }
}
