// Integration tests for the bookmark listing: owner scoping, filters,
// search, ordering, and pagination.
mod helpers;

use helpers::*;

#[tokio::test]
async fn test_list_is_owner_scoped() {
    let db = setup_test_db().await;
    let service = build_bookmark_service(&db);

    create_test_bookmark(&db, "https://a.example.com", "A", "user-1").await;
    create_test_bookmark(&db, "https://b.example.com", "B", "user-1").await;
    create_test_bookmark(&db, "https://c.example.com", "C", "user-2").await;

    let listing = service
        .list_bookmarks("user-1", 1, 10, None, None, None, None)
        .await
        .expect("Failed to list bookmarks");

    assert_eq!(listing.total, 2);
    assert_eq!(listing.data.len(), 2);
    assert!(listing.data.iter().all(|b| b.bookmark.owner_id == "user-1"));

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_filter_by_category() {
    let db = setup_test_db().await;
    let service = build_bookmark_service(&db);

    let mut news = test_bookmark("https://news.example.com", "News site", "user-1");
    news.ml_category = Some("news".to_string());
    db.create_bookmark(&news, &[])
        .await
        .expect("Failed to create bookmark");

    create_test_bookmark(&db, "https://dev.example.com", "Dev site", "user-1").await;

    let listing = service
        .list_bookmarks("user-1", 1, 10, Some("news".to_string()), None, None, None)
        .await
        .expect("Failed to list bookmarks");

    assert_eq!(listing.total, 1);
    assert_eq!(listing.data[0].bookmark.id, news.id);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_filter_by_tag_uses_canonical_name() {
    let db = setup_test_db().await;
    let service = build_bookmark_service(&db);

    let tagged = create_test_bookmark(&db, "https://a.example.com", "A", "user-1").await;
    create_test_bookmark(&db, "https://b.example.com", "B", "user-1").await;

    let tag = create_test_tag(&db, "rust", None).await;
    db.add_bookmark_tag(&tagged.id, &tag.id)
        .await
        .expect("Failed to attach tag");

    // Mixed-case filter resolves to the canonical tag name
    let listing = service
        .list_bookmarks("user-1", 1, 10, None, Some("Rust".to_string()), None, None)
        .await
        .expect("Failed to list bookmarks");

    assert_eq!(listing.total, 1);
    assert_eq!(listing.data[0].bookmark.id, tagged.id);
    assert_eq!(listing.data[0].tags[0].name, "rust");

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_filter_by_favorite() {
    let db = setup_test_db().await;
    let service = build_bookmark_service(&db);

    let mut starred = test_bookmark("https://a.example.com", "A", "user-1");
    starred.is_favorite = true;
    db.create_bookmark(&starred, &[])
        .await
        .expect("Failed to create bookmark");

    create_test_bookmark(&db, "https://b.example.com", "B", "user-1").await;

    let favorites = service
        .list_bookmarks("user-1", 1, 10, None, None, Some(true), None)
        .await
        .expect("Failed to list bookmarks");
    assert_eq!(favorites.total, 1);
    assert_eq!(favorites.data[0].bookmark.id, starred.id);

    let rest = service
        .list_bookmarks("user-1", 1, 10, None, None, Some(false), None)
        .await
        .expect("Failed to list bookmarks");
    assert_eq!(rest.total, 1);
    assert!(!rest.data[0].bookmark.is_favorite);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_search_matches_title_or_description() {
    let db = setup_test_db().await;
    let service = build_bookmark_service(&db);

    create_test_bookmark(&db, "https://a.example.com", "Rust Async Book", "user-1").await;

    let mut described = test_bookmark("https://b.example.com", "Runtime notes", "user-1");
    described.description = Some("All about the TOKIO scheduler".to_string());
    db.create_bookmark(&described, &[])
        .await
        .expect("Failed to create bookmark");

    create_test_bookmark(&db, "https://c.example.com", "Unrelated", "user-1").await;

    // Case-insensitive match on title
    let by_title = service
        .list_bookmarks("user-1", 1, 10, None, None, None, Some("RUST".to_string()))
        .await
        .expect("Failed to search");
    assert_eq!(by_title.total, 1);
    assert_eq!(by_title.data[0].bookmark.title, "Rust Async Book");

    // Case-insensitive match on description
    let by_description = service
        .list_bookmarks("user-1", 1, 10, None, None, None, Some("tokio".to_string()))
        .await
        .expect("Failed to search");
    assert_eq!(by_description.total, 1);
    assert_eq!(by_description.data[0].bookmark.id, described.id);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_filters_combine_with_and_semantics() {
    let db = setup_test_db().await;
    let service = build_bookmark_service(&db);

    let mut both = test_bookmark("https://a.example.com", "A", "user-1");
    both.ml_category = Some("dev".to_string());
    both.is_favorite = true;
    db.create_bookmark(&both, &[])
        .await
        .expect("Failed to create bookmark");

    let mut category_only = test_bookmark("https://b.example.com", "B", "user-1");
    category_only.ml_category = Some("dev".to_string());
    db.create_bookmark(&category_only, &[])
        .await
        .expect("Failed to create bookmark");

    let mut favorite_only = test_bookmark("https://c.example.com", "C", "user-1");
    favorite_only.is_favorite = true;
    db.create_bookmark(&favorite_only, &[])
        .await
        .expect("Failed to create bookmark");

    let listing = service
        .list_bookmarks(
            "user-1",
            1,
            10,
            Some("dev".to_string()),
            None,
            Some(true),
            None,
        )
        .await
        .expect("Failed to list bookmarks");

    assert_eq!(listing.total, 1);
    assert_eq!(listing.data[0].bookmark.id, both.id);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let db = setup_test_db().await;
    let service = build_bookmark_service(&db);

    let mut oldest = test_bookmark("https://a.example.com", "Oldest", "user-1");
    oldest.created_at = "2024-01-01T00:00:00+00:00".to_string();
    db.create_bookmark(&oldest, &[])
        .await
        .expect("Failed to create bookmark");

    let mut newest = test_bookmark("https://b.example.com", "Newest", "user-1");
    newest.created_at = "2024-03-01T00:00:00+00:00".to_string();
    db.create_bookmark(&newest, &[])
        .await
        .expect("Failed to create bookmark");

    let mut middle = test_bookmark("https://c.example.com", "Middle", "user-1");
    middle.created_at = "2024-02-01T00:00:00+00:00".to_string();
    db.create_bookmark(&middle, &[])
        .await
        .expect("Failed to create bookmark");

    let listing = service
        .list_bookmarks("user-1", 1, 10, None, None, None, None)
        .await
        .expect("Failed to list bookmarks");

    let titles: Vec<&str> = listing
        .data
        .iter()
        .map(|b| b.bookmark.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_pagination_windows_but_total_does_not() {
    let db = setup_test_db().await;
    let service = build_bookmark_service(&db);

    for i in 1..=5 {
        let mut bookmark = test_bookmark(
            &format!("https://{}.example.com", i),
            &format!("Bookmark {}", i),
            "user-1",
        );
        bookmark.created_at = format!("2024-01-0{}T00:00:00+00:00", i);
        db.create_bookmark(&bookmark, &[])
            .await
            .expect("Failed to create bookmark");
    }

    let first = service
        .list_bookmarks("user-1", 1, 2, None, None, None, None)
        .await
        .expect("Failed to list bookmarks");
    assert_eq!(first.data.len(), 2);
    assert_eq!(first.total, 5);
    assert_eq!(first.data[0].bookmark.title, "Bookmark 5");

    let last = service
        .list_bookmarks("user-1", 3, 2, None, None, None, None)
        .await
        .expect("Failed to list bookmarks");
    assert_eq!(last.data.len(), 1);
    assert_eq!(last.total, 5);
    assert_eq!(last.data[0].bookmark.title, "Bookmark 1");

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_second_page_holds_the_remainder() {
    let db = setup_test_db().await;
    let service = build_bookmark_service(&db);

    for i in 1..=25 {
        let mut bookmark = test_bookmark(
            &format!("https://{}.example.com", i),
            &format!("Bookmark {}", i),
            "user-1",
        );
        bookmark.created_at = format!("2024-01-{:02}T00:00:00+00:00", i);
        db.create_bookmark(&bookmark, &[])
            .await
            .expect("Failed to create bookmark");
    }

    let listing = service
        .list_bookmarks("user-1", 2, 20, None, None, None, None)
        .await
        .expect("Failed to list bookmarks");

    assert_eq!(listing.data.len(), 5);
    assert_eq!(listing.total, 25);
    // Newest-first ordering puts the oldest five on the second page
    assert_eq!(listing.data[4].bookmark.title, "Bookmark 1");

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_page_and_limit_are_sanitized() {
    let db = setup_test_db().await;
    let service = build_bookmark_service(&db);

    create_test_bookmark(&db, "https://a.example.com", "A", "user-1").await;
    create_test_bookmark(&db, "https://b.example.com", "B", "user-1").await;

    // Out-of-range values are pulled back to the smallest window
    let listing = service
        .list_bookmarks("user-1", 0, 0, None, None, None, None)
        .await
        .expect("Failed to list bookmarks");

    assert_eq!(listing.page, 1);
    assert_eq!(listing.limit, 1);
    assert_eq!(listing.data.len(), 1);
    assert_eq!(listing.total, 2);

    teardown_test_db(db).await;
}
