use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Color assigned to tags created without an explicit one.
pub const DEFAULT_TAG_COLOR: &str = "#6366f1";

/// Tag entity. Names are globally unique and stored lowercase;
/// the bookmark relationship lives in the `bookmark_tags` join table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: String,
}

impl Tag {
    /// Create a new tag. Callers normalize `name` before constructing.
    pub fn new(name: String, color: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            color: color.unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string()),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// ========== DTOs (Data Transfer Objects) ==========

/// Request to create a new tag
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
    pub color: Option<String>,
}

impl CreateTagRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_tag_name(&self.name)?;
        if let Some(ref color) = self.color {
            validate_hex_color(color)?;
        }
        Ok(())
    }
}

/// Request to update tag properties
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTagRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl UpdateTagRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref name) = self.name {
            validate_tag_name(name)?;
        }
        if let Some(ref color) = self.color {
            validate_hex_color(color)?;
        }
        Ok(())
    }
}

pub fn validate_tag_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Tag name cannot be empty".to_string());
    }
    Ok(())
}

/// Check the `#RRGGBB` shape.
pub fn validate_hex_color(color: &str) -> Result<(), String> {
    match color.strip_prefix('#') {
        Some(hex) if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) => Ok(()),
        _ => Err("Color must be a valid hex color (e.g., #6366f1)".to_string()),
    }
}

/// Canonical form of a tag name: trimmed and lowercased. Every path that
/// stores or matches a tag name goes through this.
pub fn canonical_tag_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Response containing full tag data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            color: tag.color,
            created_at: tag.created_at,
        }
    }
}

/// Tag detail including the bookmarks it is attached to
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDetailResponse {
    pub id: String,
    pub name: String,
    pub color: String,
    pub bookmarks: Vec<crate::models::Bookmark>,
    pub created_at: String,
}

impl TagDetailResponse {
    pub fn from_parts(tag: Tag, bookmarks: Vec<crate::models::Bookmark>) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            color: tag.color,
            bookmarks,
            created_at: tag.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color_applied() {
        let tag = Tag::new("rust".to_string(), None);
        assert_eq!(tag.color, DEFAULT_TAG_COLOR);
    }

    #[test]
    fn test_explicit_color_kept() {
        let tag = Tag::new("rust".to_string(), Some("#ff0000".to_string()));
        assert_eq!(tag.color, "#ff0000");
    }

    #[test]
    fn test_hex_color_validation() {
        assert!(validate_hex_color("#6366f1").is_ok());
        assert!(validate_hex_color("#ABCDEF").is_ok());
        assert!(validate_hex_color("6366f1").is_err());
        assert!(validate_hex_color("#6366f").is_err());
        assert!(validate_hex_color("#6366f1a").is_err());
        assert!(validate_hex_color("#zzzzzz").is_err());
    }

    #[test]
    fn test_create_request_rejects_blank_name() {
        let req = CreateTagRequest {
            name: "   ".to_string(),
            color: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_canonical_tag_name() {
        assert_eq!(canonical_tag_name("Rust"), "rust");
        assert_eq!(canonical_tag_name("  WebDev  "), "webdev");
        assert_eq!(canonical_tag_name("already-lower"), "already-lower");
    }
}
