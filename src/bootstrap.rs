use crate::config::Config;
use crate::database::Database;
use crate::services::{BookmarkService, ClassifierClient, TagService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub bookmark_service: BookmarkService,
    pub tag_service: TagService,
    pub user_service: UserService,
    pub classifier: ClassifierClient,
}

/// Wire every service against one database handle and one classifier client.
pub fn build_app_state(db: Database, config: &Config) -> AppState {
    let classifier = ClassifierClient::new(
        config.ml_service_url.clone(),
        config.ml_service_timeout_ms,
    );
    tracing::info!(
        "Classifier client initialized for {} (timeout {}ms)",
        config.ml_service_url,
        config.ml_service_timeout_ms
    );

    let tag_service = TagService::new(db.clone());
    let user_service = UserService::new(db.clone());
    let bookmark_service = BookmarkService::new(db, classifier.clone(), tag_service.clone());
    tracing::info!("Services initialized");

    AppState {
        bookmark_service,
        tag_service,
        user_service,
        classifier,
    }
}
