use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::*,
};

/// Service for tag management. Tags are global: one row per canonical name,
/// shared by every bookmark that references it.
#[derive(Clone)]
pub struct TagService {
    db: Database,
}

impl TagService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create a new tag. The name is canonicalized before the uniqueness
    /// check, so "Rust" collides with an existing "rust".
    pub async fn create_tag(&self, request: CreateTagRequest) -> ApiResult<Tag> {
        // 1. Canonicalize the name
        let name = canonical_tag_name(&request.name);

        // 2. Reject duplicates up front
        if self.db.get_tag_by_name(&name).await?.is_some() {
            return Err(ApiError::Conflict(format!(
                "Tag with name '{}' already exists",
                name
            )));
        }

        // 3. Create and persist
        let tag = Tag::new(name, request.color);
        self.db.create_tag(&tag).await?;

        Ok(tag)
    }

    pub async fn list_tags(&self) -> ApiResult<Vec<Tag>> {
        self.db.list_tags().await
    }

    pub async fn get_tag(&self, tag_id: &str) -> ApiResult<Tag> {
        self.db
            .get_tag_by_id(tag_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Tag {} not found", tag_id)))
    }

    /// Tag detail together with every bookmark carrying it.
    pub async fn get_tag_with_bookmarks(&self, tag_id: &str) -> ApiResult<(Tag, Vec<Bookmark>)> {
        let tag = self.get_tag(tag_id).await?;
        let bookmarks = self.db.get_bookmarks_for_tag(&tag.id).await?;

        Ok((tag, bookmarks))
    }

    /// Look up a tag by name, canonicalizing first.
    pub async fn find_by_name(&self, name: &str) -> ApiResult<Option<Tag>> {
        self.db.get_tag_by_name(&canonical_tag_name(name)).await
    }

    pub async fn update_tag(&self, tag_id: &str, request: UpdateTagRequest) -> ApiResult<Tag> {
        // 1. Fetch the tag
        let mut tag = self.get_tag(tag_id).await?;

        // 2. Apply a rename, guarding against collisions with other tags
        if let Some(ref raw_name) = request.name {
            let name = canonical_tag_name(raw_name);
            if name != tag.name {
                if self.db.get_tag_by_name(&name).await?.is_some() {
                    return Err(ApiError::Conflict(format!(
                        "Tag with name '{}' already exists",
                        name
                    )));
                }
                tag.name = name;
            }
        }

        if let Some(color) = request.color {
            tag.color = color;
        }

        // 3. Persist
        self.db.update_tag(&tag).await?;

        Ok(tag)
    }

    pub async fn remove_tag(&self, tag_id: &str) -> ApiResult<()> {
        // Ensure it exists before deleting, so a bad id yields 404
        self.get_tag(tag_id).await?;
        self.db.delete_tag(tag_id).await?;

        Ok(())
    }

    /// Resolve a batch of raw names to tag rows, creating the missing ones.
    ///
    /// Names are canonicalized, blanks dropped, and duplicates collapsed
    /// before the lookup. Existing tags come back first, then newly created
    /// ones. When two requests race on the same new name, the loser detects
    /// the unique violation and re-reads the winner's row.
    pub async fn find_or_create_many(&self, names: Vec<String>) -> ApiResult<Vec<Tag>> {
        // 1. Canonicalize, drop blanks, dedup preserving first occurrence
        let mut wanted: Vec<String> = Vec::new();
        for raw in &names {
            let name = canonical_tag_name(raw);
            if !name.is_empty() && !wanted.contains(&name) {
                wanted.push(name);
            }
        }

        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        // 2. Batch lookup of what already exists
        let existing = self.db.get_tags_by_names(&wanted).await?;

        // 3. Create whatever is missing
        let mut created = Vec::new();
        for name in &wanted {
            if existing.iter().any(|t| &t.name == name) {
                continue;
            }

            let tag = Tag::new(name.clone(), None);
            match self.db.create_tag(&tag).await {
                Ok(()) => created.push(tag),
                // Lost a creation race; the row is there now, use it
                Err(ApiError::Conflict(_)) => {
                    let winner = self.db.get_tag_by_name(name).await?.ok_or_else(|| {
                        ApiError::Internal(format!("Tag '{}' vanished after conflict", name))
                    })?;
                    created.push(winner);
                }
                Err(e) => return Err(e),
            }
        }

        // 4. Existing tags first, then the new ones
        let mut tags = existing;
        tags.extend(created);

        Ok(tags)
    }
}
