use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::models::{ClassificationResult, TagResponse};

pub const MAX_URL_LEN: usize = 2048;
pub const MAX_TITLE_LEN: usize = 255;

/// Bookmark entity. Every access is scoped by `owner_id`; tags live in the
/// `bookmark_tags` join table and are loaded separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub is_favorite: bool,
    pub ml_category: Option<String>,
    pub ml_confidence: Option<f64>,
    pub owner_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Bookmark {
    /// Build a fresh bookmark from a create request and its classification.
    pub fn from_create(req: &CreateBookmarkRequest, classification: &ClassificationResult) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            url: req.url.clone(),
            title: req.title.clone(),
            description: req.description.clone(),
            favicon: req.favicon.clone(),
            is_favorite: req.is_favorite.unwrap_or(false),
            ml_category: Some(classification.category.clone()),
            ml_confidence: Some(classification.confidence),
            owner_id: req.owner_id.clone(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

// ========== DTOs (Data Transfer Objects) ==========

/// Request to create a new bookmark
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmarkRequest {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub is_favorite: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub owner_id: String,
}

impl CreateBookmarkRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.owner_id.trim().is_empty() {
            return Err("ownerId is required".to_string());
        }
        validate_bookmark_url(&self.url)?;
        validate_bookmark_title(&self.title)?;
        Ok(())
    }
}

/// Request to update bookmark fields. Absent fields are left unchanged;
/// a present `tags` list replaces the whole tag set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookmarkRequest {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub is_favorite: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl UpdateBookmarkRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref url) = self.url {
            validate_bookmark_url(url)?;
        }
        if let Some(ref title) = self.title {
            validate_bookmark_title(title)?;
        }
        Ok(())
    }
}

/// Request to attach a single tag to a bookmark
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTagRequest {
    pub tag_name: String,
}

impl AddTagRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.tag_name.trim().is_empty() {
            return Err("tagName is required".to_string());
        }
        Ok(())
    }
}

pub fn validate_bookmark_url(raw: &str) -> Result<(), String> {
    if raw.len() > MAX_URL_LEN {
        return Err(format!("URL cannot exceed {} characters", MAX_URL_LEN));
    }
    match Url::parse(raw) {
        Ok(url) if url.has_host() => Ok(()),
        _ => Err("url must be a valid URL".to_string()),
    }
}

pub fn validate_bookmark_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(format!("Title cannot exceed {} characters", MAX_TITLE_LEN));
    }
    Ok(())
}

/// Bookmark response including its resolved tags
#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    #[serde(flatten)]
    pub bookmark: Bookmark,
    pub tags: Vec<TagResponse>,
}

impl BookmarkResponse {
    pub fn from_parts(bookmark: Bookmark, tags: Vec<crate::models::Tag>) -> Self {
        Self {
            bookmark,
            tags: tags.into_iter().map(TagResponse::from).collect(),
        }
    }
}

/// Paginated bookmark listing
#[derive(Debug, Serialize)]
pub struct BookmarkListResponse {
    pub data: Vec<BookmarkResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(validate_bookmark_url("https://github.com/tokio-rs/axum").is_ok());
        assert!(validate_bookmark_url("http://example.com").is_ok());
        assert!(validate_bookmark_url("not a url").is_err());
        assert!(validate_bookmark_url("example.com").is_err());
        let oversize = format!("https://example.com/{}", "a".repeat(MAX_URL_LEN));
        assert!(validate_bookmark_url(&oversize).is_err());
    }

    #[test]
    fn test_title_validation() {
        assert!(validate_bookmark_title("Axum").is_ok());
        assert!(validate_bookmark_title("").is_err());
        assert!(validate_bookmark_title(&"t".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn test_create_request_requires_owner() {
        let req = CreateBookmarkRequest {
            url: "https://example.com".to_string(),
            title: "Example".to_string(),
            description: None,
            favicon: None,
            is_favorite: None,
            tags: None,
            owner_id: "".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
