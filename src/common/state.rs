use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::feed::FeedClient;

/// Shared handle to the dashboard. The poller writes, the view handlers read.
pub type SharedDashboard = Arc<RwLock<Dashboard>>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub feed_client: Arc<FeedClient>,
    pub dashboard: SharedDashboard,
}

impl AppState {
    pub fn new(config: Config, feed_client: FeedClient) -> Self {
        Self {
            config: Arc::new(config),
            feed_client: Arc::new(feed_client),
            dashboard: Arc::new(RwLock::new(Dashboard::new())),
        }
    }
}
