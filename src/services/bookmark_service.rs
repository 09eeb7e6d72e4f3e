use tracing::info;

use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::*,
    services::{ClassifierClient, TagService},
};

/// Service orchestrating the bookmark lifecycle: classification, tag
/// resolution, persistence, and owner-scoped reads.
///
/// Every operation takes the caller's owner id; a bookmark belonging to
/// someone else is indistinguishable from one that does not exist.
#[derive(Clone)]
pub struct BookmarkService {
    db: Database,
    classifier: ClassifierClient,
    tags: TagService,
}

impl BookmarkService {
    pub fn new(db: Database, classifier: ClassifierClient, tags: TagService) -> Self {
        Self {
            db,
            classifier,
            tags,
        }
    }

    /// Create a bookmark: classify it, resolve the union of caller tags and
    /// classifier suggestions, persist, and return the stored state.
    pub async fn create_bookmark(&self, request: CreateBookmarkRequest) -> ApiResult<BookmarkResponse> {
        // 1. Classify (best-effort; degrades to the fallback internally)
        let classification = self
            .classifier
            .classify(&request.url, &request.title, request.description.as_deref())
            .await;

        // 2. Union of caller tags and classifier suggestions
        let mut tag_names = request.tags.clone().unwrap_or_default();
        tag_names.extend(classification.suggested_tags.iter().cloned());

        // 3. Resolve to tag rows, creating the missing ones
        let tags = self.tags.find_or_create_many(tag_names).await?;
        let tag_ids: Vec<String> = tags.iter().map(|t| t.id.clone()).collect();

        // 4. Persist bookmark and attachments together
        let bookmark = Bookmark::from_create(&request, &classification);
        self.db.create_bookmark(&bookmark, &tag_ids).await?;

        info!(
            "Created bookmark {} for owner {} (category '{}')",
            bookmark.id,
            bookmark.owner_id,
            classification.category
        );

        // 5. Answer with what was actually stored
        self.load_response(&bookmark.id, &request.owner_id).await
    }

    /// List one owner's bookmarks, newest first. `total` counts every match,
    /// not just the returned page.
    pub async fn list_bookmarks(
        &self,
        owner_id: &str,
        page: i64,
        limit: i64,
        category: Option<String>,
        tag: Option<String>,
        is_favorite: Option<bool>,
        search: Option<String>,
    ) -> ApiResult<BookmarkListResponse> {
        // 1. Sanitize the page window
        let page = page.max(1);
        let limit = limit.max(1);
        let offset = (page - 1) * limit;

        // 2. Tag filters match on canonical names
        let tag = tag.map(|t| canonical_tag_name(&t));

        // 3. Fetch the page and the unwindowed total
        let bookmarks = self
            .db
            .list_bookmarks(
                owner_id,
                limit,
                offset,
                category.clone(),
                tag.clone(),
                is_favorite,
                search.clone(),
            )
            .await?;
        let total = self
            .db
            .count_bookmarks(owner_id, category, tag, is_favorite, search)
            .await?;

        // 4. Attach tags per bookmark
        let mut data = Vec::new();
        for bookmark in bookmarks {
            let tags = self.db.get_tags_for_bookmark(&bookmark.id).await?;
            data.push(BookmarkResponse::from_parts(bookmark, tags));
        }

        Ok(BookmarkListResponse {
            data,
            total,
            page,
            limit,
        })
    }

    pub async fn get_bookmark(&self, id: &str, owner_id: &str) -> ApiResult<BookmarkResponse> {
        self.load_response(id, owner_id).await
    }

    pub async fn update_bookmark(
        &self,
        id: &str,
        owner_id: &str,
        request: UpdateBookmarkRequest,
    ) -> ApiResult<BookmarkResponse> {
        // 1. Fetch, scoped to the owner
        let mut bookmark = self
            .db
            .get_bookmark(id, owner_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Bookmark {} not found", id)))?;

        // 2. Apply scalar changes
        if let Some(url) = request.url {
            bookmark.url = url;
        }
        if let Some(title) = request.title {
            bookmark.title = title;
        }
        if let Some(description) = request.description {
            bookmark.description = Some(description);
        }
        if let Some(favicon) = request.favicon {
            bookmark.favicon = Some(favicon);
        }
        if let Some(fav) = request.is_favorite {
            bookmark.is_favorite = fav;
        }
        bookmark.updated_at = chrono::Utc::now().to_rfc3339();

        self.db.update_bookmark(&bookmark).await?;

        // 3. A present tag list replaces the whole set, empty list included
        if let Some(tag_names) = request.tags {
            let tags = self.tags.find_or_create_many(tag_names).await?;
            let tag_ids: Vec<String> = tags.iter().map(|t| t.id.clone()).collect();
            self.db.replace_bookmark_tags(&bookmark.id, &tag_ids).await?;
        }

        // 4. Answer with what was actually stored
        self.load_response(id, owner_id).await
    }

    pub async fn remove_bookmark(&self, id: &str, owner_id: &str) -> ApiResult<()> {
        self.db
            .get_bookmark(id, owner_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Bookmark {} not found", id)))?;

        self.db.delete_bookmark(id).await?;

        info!("Deleted bookmark {} for owner {}", id, owner_id);

        Ok(())
    }

    /// Attach a tag by name, creating the tag if needed. Attaching a tag the
    /// bookmark already carries is a no-op.
    pub async fn add_tag(
        &self,
        id: &str,
        owner_id: &str,
        tag_name: &str,
    ) -> ApiResult<BookmarkResponse> {
        // 1. Fetch, scoped to the owner
        let bookmark = self
            .db
            .get_bookmark(id, owner_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Bookmark {} not found", id)))?;

        // 2. Already attached? Report current state unchanged
        let name = canonical_tag_name(tag_name);
        let current = self.db.get_tags_for_bookmark(&bookmark.id).await?;
        if current.iter().any(|t| t.name == name) {
            return Ok(BookmarkResponse::from_parts(bookmark, current));
        }

        // 3. Resolve or create the tag, then attach it
        let tags = self
            .tags
            .find_or_create_many(vec![tag_name.to_string()])
            .await?;
        let tag = tags
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::BadRequest("tagName is required".to_string()))?;
        self.db.add_bookmark_tag(&bookmark.id, &tag.id).await?;

        self.load_response(id, owner_id).await
    }

    /// Detach a tag by id. Removing a tag the bookmark does not carry is a
    /// no-op; the tag row itself always survives.
    pub async fn remove_tag(
        &self,
        id: &str,
        owner_id: &str,
        tag_id: &str,
    ) -> ApiResult<BookmarkResponse> {
        let bookmark = self
            .db
            .get_bookmark(id, owner_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Bookmark {} not found", id)))?;

        let current = self.db.get_tags_for_bookmark(&bookmark.id).await?;
        if current.iter().any(|t| t.id == tag_id) {
            self.db.remove_bookmark_tag(&bookmark.id, tag_id).await?;
        }

        self.load_response(id, owner_id).await
    }

    /// Re-read a bookmark and its tags as stored.
    async fn load_response(&self, id: &str, owner_id: &str) -> ApiResult<BookmarkResponse> {
        let bookmark = self
            .db
            .get_bookmark(id, owner_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Bookmark {} not found", id)))?;
        let tags = self.db.get_tags_for_bookmark(&bookmark.id).await?;

        Ok(BookmarkResponse::from_parts(bookmark, tags))
    }
}
