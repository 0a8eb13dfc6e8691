//! Admin dashboard CLI
//!
//! Fetches one dashboard page from the analytics API and prints it.

use std::path::PathBuf;
use std::sync::Arc;

use admin_dashboard::pages::{
    self, FinancePage, OperationsPage, OverviewPage, PageState, ProductUsagePage, UsersPage,
};
use admin_dashboard::render;
use analytics_client::types::{UserFilters, UserSegment, UserStatus};
use analytics_client::{load_config, AnalyticsClient, ApiClient, ApiConfig, ReqwestTransport};
use clap::{Parser, ValueEnum};
use tracing::Level;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Page {
    Overview,
    Users,
    Finance,
    Operations,
    ProductUsage,
}

#[derive(Parser)]
#[command(name = "admin-dashboard")]
#[command(about = "Biyuya admin analytics dashboard")]
#[command(version)]
struct Args {
    /// Dashboard page to fetch
    #[arg(value_enum)]
    page: Page,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL (overrides config file and environment)
    #[arg(long)]
    base_url: Option<String>,

    /// User segment filter for the users page
    #[arg(long, default_value = "all")]
    segment: UserSegment,

    /// Onboarding status filter for the users page
    #[arg(long, default_value = "all")]
    status: UserStatus,

    /// Restrict the product-usage timeline to one feature
    #[arg(long)]
    feature: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        ApiConfig::default()
    };
    config.resolve_env();
    if let Some(base_url) = args.base_url.clone() {
        config.base_url = base_url;
    }

    tracing::info!("Fetching {:?} page from {}", args.page, config.base_url);

    let api = Arc::new(ApiClient::new(config, Arc::new(ReqwestTransport::new())));
    let analytics = AnalyticsClient::new(api);

    let state = load_page(&args, &analytics).await;
    match state {
        PageState::Loaded(body) => println!("{body}"),
        PageState::Error(message) => {
            println!("{}", render::error_panel(&message));
            std::process::exit(1);
        }
        PageState::Loading => println!("{}", render::loading()),
    }

    Ok(())
}

/// Run the selected page's batch and render its terminal state
async fn load_page(args: &Args, analytics: &AnalyticsClient) -> PageState<String> {
    match args.page {
        Page::Overview => {
            pages::resolve(async {
                OverviewPage::load(analytics)
                    .await
                    .map(|page| render::overview(&page))
            })
            .await
        }
        Page::Users => {
            let filters = UserFilters {
                segment: args.segment,
                status: args.status,
            };
            pages::resolve(async {
                UsersPage::load(analytics, filters)
                    .await
                    .map(|page| render::users(&page))
            })
            .await
        }
        Page::Finance => {
            pages::resolve(async {
                FinancePage::load(analytics)
                    .await
                    .map(|page| render::finance(&page))
            })
            .await
        }
        Page::Operations => {
            pages::resolve(async {
                OperationsPage::load(analytics)
                    .await
                    .map(|page| render::operations(&page))
            })
            .await
        }
        Page::ProductUsage => {
            pages::resolve(async {
                ProductUsagePage::load(analytics, args.feature.as_deref())
                    .await
                    .map(|page| render::product_usage(&page))
            })
            .await
        }
    }
}
