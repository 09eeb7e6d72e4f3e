use sqlx::Row;

use super::Database;
use crate::{
    api::middleware::error::ApiResult,
    models::{Bookmark, Tag},
};

// Tag operations
impl Database {
    pub async fn create_tag(&self, tag: &Tag) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO tags (id, name, color, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&tag.id)
        .bind(&tag.name)
        .bind(&tag.color)
        .bind(&tag.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_tag_by_id(&self, id: &str) -> ApiResult<Option<Tag>> {
        let row = sqlx::query(
            "SELECT id, name, color, created_at
             FROM tags
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Tag {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                color: row.try_get("color")?,
                created_at: row.try_get("created_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    /// Look up a tag by its canonical (lowercased) name.
    pub async fn get_tag_by_name(&self, name: &str) -> ApiResult<Option<Tag>> {
        let row = sqlx::query(
            "SELECT id, name, color, created_at
             FROM tags
             WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Tag {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                color: row.try_get("color")?,
                created_at: row.try_get("created_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    /// Batch lookup by canonical names. Returns only the tags that exist.
    pub async fn get_tags_by_names(&self, names: &[String]) -> ApiResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; names.len()].join(", ");
        let query = format!(
            "SELECT id, name, color, created_at
             FROM tags
             WHERE name IN ({})
             ORDER BY name ASC",
            placeholders
        );

        let mut sql_query = sqlx::query(&query);
        for name in names {
            sql_query = sql_query.bind(name);
        }

        let rows = sql_query.fetch_all(&self.pool).await?;

        let mut tags = Vec::new();
        for row in rows {
            tags.push(Tag {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                color: row.try_get("color")?,
                created_at: row.try_get("created_at")?,
            });
        }

        Ok(tags)
    }

    pub async fn list_tags(&self) -> ApiResult<Vec<Tag>> {
        let rows = sqlx::query(
            "SELECT id, name, color, created_at
             FROM tags
             ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut tags = Vec::new();
        for row in rows {
            tags.push(Tag {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                color: row.try_get("color")?,
                created_at: row.try_get("created_at")?,
            });
        }

        Ok(tags)
    }

    pub async fn update_tag(&self, tag: &Tag) -> ApiResult<()> {
        sqlx::query(
            "UPDATE tags
             SET name = ?, color = ?
             WHERE id = ?",
        )
        .bind(&tag.name)
        .bind(&tag.color)
        .bind(&tag.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a tag and detach it from every bookmark.
    pub async fn delete_tag(&self, id: &str) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM bookmark_tags WHERE tag_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn get_tags_for_bookmark(&self, bookmark_id: &str) -> ApiResult<Vec<Tag>> {
        let rows = sqlx::query(
            "SELECT t.id, t.name, t.color, t.created_at
             FROM tags t
             JOIN bookmark_tags bt ON bt.tag_id = t.id
             WHERE bt.bookmark_id = ?
             ORDER BY t.name ASC",
        )
        .bind(bookmark_id)
        .fetch_all(&self.pool)
        .await?;

        let mut tags = Vec::new();
        for row in rows {
            tags.push(Tag {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                color: row.try_get("color")?,
                created_at: row.try_get("created_at")?,
            });
        }

        Ok(tags)
    }

    /// All bookmarks carrying a tag, regardless of owner. Used by the tag
    /// detail view.
    pub async fn get_bookmarks_for_tag(&self, tag_id: &str) -> ApiResult<Vec<Bookmark>> {
        let rows = sqlx::query(
            "SELECT b.id, b.url, b.title, b.description, b.favicon, b.is_favorite,
                    b.ml_category, b.ml_confidence, b.owner_id, b.created_at, b.updated_at
             FROM bookmarks b
             JOIN bookmark_tags bt ON bt.bookmark_id = b.id
             WHERE bt.tag_id = ?
             ORDER BY b.created_at DESC",
        )
        .bind(tag_id)
        .fetch_all(&self.pool)
        .await?;

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
}
