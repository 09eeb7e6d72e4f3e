use sqlx::Row;

use super::Database;
use crate::{api::middleware::error::ApiResult, models::Bookmark};

// Bookmark operations
impl Database {
    /// Insert a bookmark together with its tag attachments.
    pub async fn create_bookmark(&self, bookmark: &Bookmark, tag_ids: &[String]) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO bookmarks (id, url, title, description, favicon, is_favorite,
                                    ml_category, ml_confidence, owner_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&bookmark.id)
        .bind(&bookmark.url)
        .bind(&bookmark.title)
        .bind(&bookmark.description)
        .bind(&bookmark.favicon)
        .bind(if bookmark.is_favorite { 1 } else { 0 })
        .bind(&bookmark.ml_category)
        .bind(bookmark.ml_confidence)
        .bind(&bookmark.owner_id)
        .bind(&bookmark.created_at)
        .bind(&bookmark.updated_at)
        .execute(&mut *tx)
        .await?;

        for tag_id in tag_ids {
            sqlx::query("INSERT INTO bookmark_tags (bookmark_id, tag_id) VALUES (?, ?)")
                .bind(&bookmark.id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Fetch a bookmark scoped to its owner. A wrong owner yields None, the
    /// same as a missing row.
    pub async fn get_bookmark(&self, id: &str, owner_id: &str) -> ApiResult<Option<Bookmark>> {
        let row = sqlx::query(
            "SELECT id, url, title, description, favicon, is_favorite,
                    ml_category, ml_confidence, owner_id, created_at, updated_at
             FROM bookmarks
             WHERE id = ? AND owner_id = ?",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            let is_favorite_int: i32 = row.try_get("is_favorite")?;

            Ok(Some(Bookmark {
                id: row.try_get("id")?,
                url: row.try_get("url")?,
                title: row.try_get("title")?,
                description: row.try_get("description").ok(),
                favicon: row.try_get("favicon").ok(),
                is_favorite: is_favorite_int != 0,
                ml_category: row.try_get("ml_category").ok(),
                ml_confidence: row.try_get::<f64, _>("ml_confidence").ok(),
                owner_id: row.try_get("owner_id")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    /// List one owner's bookmarks, newest first, with optional filters.
    /// All filters combine with AND; `tag` expects the canonical name.
    pub async fn list_bookmarks(
        &self,
        owner_id: &str,
        limit: i64,
        offset: i64,
        category: Option<String>,
        tag: Option<String>,
        is_favorite: Option<bool>,
        search: Option<String>,
    ) -> ApiResult<Vec<Bookmark>> {
        let mut query = String::from(
            "SELECT id, url, title, description, favicon, is_favorite,
                    ml_category, ml_confidence, owner_id, created_at, updated_at
             FROM bookmarks
             WHERE owner_id = ?",
        );

        // Add filters
        if category.is_some() {
            query.push_str(" AND ml_category = ?");
        }
        if tag.is_some() {
            query.push_str(
                " AND EXISTS (SELECT 1 FROM bookmark_tags bt
                              JOIN tags t ON t.id = bt.tag_id
                              WHERE bt.bookmark_id = bookmarks.id AND t.name = ?)",
            );
        }
        if is_favorite.is_some() {
            query.push_str(" AND is_favorite = ?");
        }
        if search.is_some() {
            query.push_str(
                " AND (LOWER(title) LIKE ? OR LOWER(COALESCE(description, '')) LIKE ?)",
            );
        }

        query.push_str(" ORDER BY created_at DESC LIMIT ? OFFSET ?");

        let mut sql_query = sqlx::query(&query).bind(owner_id);

        // Bind filter parameters
        if let Some(c) = category {
            sql_query = sql_query.bind(c);
        }
        if let Some(t) = tag {
            sql_query = sql_query.bind(t);
        }
        if let Some(fav) = is_favorite {
            sql_query = sql_query.bind(if fav { 1 } else { 0 });
        }
        if let Some(s) = search {
            let pattern = format!("%{}%", s.to_lowercase());
            sql_query = sql_query.bind(pattern.clone()).bind(pattern);
        }

        // Bind pagination parameters
        sql_query = sql_query.bind(limit).bind(offset);

        let rows = sql_query.fetch_all(&self.pool).await?;

        let mut bookmarks = Vec::new();
        for row in rows {
            let is_favorite_int: i32 = row.try_get("is_favorite")?;

            bookmarks.push(Bookmark {
                id: row.try_get("id")?,
                url: row.try_get("url")?,
                title: row.try_get("title")?,
                description: row.try_get("description").ok(),
                favicon: row.try_get("favicon").ok(),
                is_favorite: is_favorite_int != 0,
                ml_category: row.try_get("ml_category").ok(),
                ml_confidence: row.try_get::<f64, _>("ml_confidence").ok(),
                owner_id: row.try_get("owner_id")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            });
        }

        Ok(bookmarks)
    }

    /// Count matches for the same filters as `list_bookmarks`, ignoring the
    /// page window.
    pub async fn count_bookmarks(
        &self,
        owner_id: &str,
        category: Option<String>,
        tag: Option<String>,
        is_favorite: Option<bool>,
        search: Option<String>,
    ) -> ApiResult<i64> {
        let mut query =
            String::from("SELECT COUNT(*) as count FROM bookmarks WHERE owner_id = ?");

        if category.is_some() {
            query.push_str(" AND ml_category = ?");
        }
        if tag.is_some() {
            query.push_str(
                " AND EXISTS (SELECT 1 FROM bookmark_tags bt
                              JOIN tags t ON t.id = bt.tag_id
                              WHERE bt.bookmark_id = bookmarks.id AND t.name = ?)",
            );
        }
        if is_favorite.is_some() {
            query.push_str(" AND is_favorite = ?");
        }
        if search.is_some() {
            query.push_str(
                " AND (LOWER(title) LIKE ? OR LOWER(COALESCE(description, '')) LIKE ?)",
            );
        }

        let mut sql_query = sqlx::query(&query).bind(owner_id);

        if let Some(c) = category {
            sql_query = sql_query.bind(c);
        }
        if let Some(t) = tag {
            sql_query = sql_query.bind(t);
        }
        if let Some(fav) = is_favorite {
            sql_query = sql_query.bind(if fav { 1 } else { 0 });
        }
        if let Some(s) = search {
            let pattern = format!("%{}%", s.to_lowercase());
            sql_query = sql_query.bind(pattern.clone()).bind(pattern);
        }

        let row = sql_query.fetch_one(&self.pool).await?;
        let count: i64 = row.try_get("count")?;

        Ok(count)
    }

    pub async fn update_bookmark(&self, bookmark: &Bookmark) -> ApiResult<()> {
        sqlx::query(
            "UPDATE bookmarks
             SET url = ?, title = ?, description = ?, favicon = ?, is_favorite = ?,
                 ml_category = ?, ml_confidence = ?, updated_at = ?
             WHERE id = ? AND owner_id = ?",
        )
        .bind(&bookmark.url)
        .bind(&bookmark.title)
        .bind(&bookmark.description)
        .bind(&bookmark.favicon)
        .bind(if bookmark.is_favorite { 1 } else { 0 })
        .bind(&bookmark.ml_category)
        .bind(bookmark.ml_confidence)
        .bind(&bookmark.updated_at)
        .bind(&bookmark.id)
        .bind(&bookmark.owner_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a bookmark and its tag attachments.
    pub async fn delete_bookmark(&self, id: &str) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM bookmark_tags WHERE bookmark_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM bookmarks WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Replace a bookmark's whole tag set.
    pub async fn replace_bookmark_tags(
        &self,
        bookmark_id: &str,
        tag_ids: &[String],
    ) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM bookmark_tags WHERE bookmark_id = ?")
            .bind(bookmark_id)
            .execute(&mut *tx)
            .await?;

        for tag_id in tag_ids {
            sqlx::query("INSERT INTO bookmark_tags (bookmark_id, tag_id) VALUES (?, ?)")
                .bind(bookmark_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn add_bookmark_tag(&self, bookmark_id: &str, tag_id: &str) -> ApiResult<()> {
        sqlx::query("INSERT INTO bookmark_tags (bookmark_id, tag_id) VALUES (?, ?)")
            .bind(bookmark_id)
            .bind(tag_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn remove_bookmark_tag(&self, bookmark_id: &str, tag_id: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM bookmark_tags WHERE bookmark_id = ? AND tag_id = ?")
            .bind(bookmark_id)
            .bind(tag_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
