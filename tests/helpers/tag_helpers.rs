#![allow(dead_code)]
use linkstash::database::Database;
use linkstash::models::Tag;
use linkstash::services::TagService;

/// Create a tag row directly. `name` is stored as given, so pass the
/// canonical (lowercase) form.
pub async fn create_test_tag(db: &Database, name: &str, color: Option<String>) -> Tag {
    let tag = Tag::new(name.to_string(), color);
    db.create_tag(&tag)
        .await
        .expect("Failed to create test tag");
    tag
}

pub fn build_tag_service(db: &Database) -> TagService {
    TagService::new(db.clone())
}
