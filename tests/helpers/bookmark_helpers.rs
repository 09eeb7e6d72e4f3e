#![allow(dead_code)]
use linkstash::database::Database;
use linkstash::models::{Bookmark, ClassificationResult, CreateBookmarkRequest};
use linkstash::services::{BookmarkService, ClassifierClient, TagService};

/// Classifier client pointed at a dead endpoint; every classify call degrades
/// to the fallback result almost immediately.
pub fn unreachable_classifier() -> ClassifierClient {
    ClassifierClient::new("http://127.0.0.1:9".to_string(), 500)
}

/// Bookmark service wired against the given database and an unreachable
/// classifier.
pub fn build_bookmark_service(db: &Database) -> BookmarkService {
    BookmarkService::new(
        db.clone(),
        unreachable_classifier(),
        TagService::new(db.clone()),
    )
}

/// Bookmark service wired against a live classifier endpoint.
pub fn build_bookmark_service_with(db: &Database, classifier: ClassifierClient) -> BookmarkService {
    BookmarkService::new(db.clone(), classifier, TagService::new(db.clone()))
}

/// Create request with sane defaults.
pub fn bookmark_request(url: &str, title: &str, owner_id: &str) -> CreateBookmarkRequest {
    CreateBookmarkRequest {
        url: url.to_string(),
        title: title.to_string(),
        description: None,
        favicon: None,
        is_favorite: None,
        tags: None,
        owner_id: owner_id.to_string(),
    }
}

/// Build a bookmark entity without touching the classifier. Tests tweak
/// fields (category, timestamps) before inserting.
pub fn test_bookmark(url: &str, title: &str, owner_id: &str) -> Bookmark {
    Bookmark::from_create(
        &bookmark_request(url, title, owner_id),
        &ClassificationResult::fallback(),
    )
}

/// Insert a bookmark row directly, without tags.
pub async fn create_test_bookmark(
    db: &Database,
    url: &str,
    title: &str,
    owner_id: &str,
) -> Bookmark {
    let bookmark = test_bookmark(url, title, owner_id);
    db.create_bookmark(&bookmark, &[])
        .await
        .expect("Failed to create test bookmark");
    bookmark
}
