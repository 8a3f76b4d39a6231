//! Integration tests for the MySQL target repository.
//!
//! These tests require a real MySQL server and use SQLx test macros to create
//! an isolated database per test.
//!
//! Run with: `DATABASE_URL=mysql://... cargo test --test mysql_target -- --ignored`

use chrono::NaiveDate;
use pmd_importer_repository::mysql::FORCE_RESET_META_KEY;
use pmd_importer_repository::{MySqlTargetRepository, TargetRepository};
use pmd_importer_shared::types::{PlaceDetail, Post, Term, TermTaxonomy, User};
use sqlx::Row;

fn make_post(id: u64) -> Post {
    let created = NaiveDate::from_ymd_opt(2015, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    Post {
        id,
        author: 1,
        title: "Joe's Diner".to_string(),
        slug: "joes-diner".to_string(),
        excerpt: "Great place".to_string(),
        content: "Breakfast all day.".to_string(),
        created_at: Some(created),
        updated_at: Some(created),
        status: "publish".to_string(),
        parent_id: 0,
        guid: "https://example.com/places/joes-diner".to_string(),
        post_type: "place".to_string(),
        comment_status: "open".to_string(),
        ping_status: "closed".to_string(),
        comment_count: 0,
        menu_order: 0,
    }
}

fn make_detail(post_id: u64, email: Option<&str>) -> PlaceDetail {
    PlaceDetail {
        post_id,
        post_title: "Joe's Diner".to_string(),
        post_status: "publish".to_string(),
        post_category: ",5,".to_string(),
        default_category: 5,
        featured: true,
        claimed: false,
        expire_date: NaiveDate::from_ymd_opt(2030, 1, 1),
        submit_ip: "127.0.0.1".to_string(),
        overall_rating: 4.5,
        rating_count: 0,
        street: "1 Main St".to_string(),
        street2: String::new(),
        city: "Springfield".to_string(),
        region: "IL".to_string(),
        zip: "62701".to_string(),
        latitude: "39.78".to_string(),
        longitude: "-89.65".to_string(),
        phone: "555-0100".to_string(),
        twitter: "https://twitter.com/joesdiner".to_string(),
        facebook: String::new(),
        business_hours: "Mo-Fr 07:00-15:00".to_string(),
        email: email.map(str::to_string),
        website: None,
        mapview: None,
        mapzoom: None,
    }
}

fn make_user(id: u64, email: &str) -> User {
    User {
        id,
        login: "joe".to_string(),
        nicename: "joe".to_string(),
        password_hash: "5f4dcc3b5aa765d61d8327deb882cf99".to_string(),
        email: email.to_string(),
        registered_at: NaiveDate::from_ymd_opt(2010, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5),
        display_name: "Joe Smith".to_string(),
        force_password_reset: true,
    }
}

// ============================================================================
// Listings
// ============================================================================

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL server at DATABASE_URL"]
async fn test_insert_listing_writes_post_and_detail(pool: sqlx::MySqlPool) {
    let repository = MySqlTargetRepository::new(pool.clone(), "wp_").unwrap();

    assert!(!repository.post_exists(42).await.unwrap());
    repository
        .insert_listing(&make_post(42), &make_detail(42, Some("joe@example.com")))
        .await
        .unwrap();
    assert!(repository.post_exists(42).await.unwrap());

    let post = sqlx::query("SELECT post_type, post_status, guid FROM wp_posts WHERE ID = 42")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(post.get::<String, _>("post_type"), "place");
    assert_eq!(post.get::<String, _>("post_status"), "publish");
    assert_eq!(
        post.get::<String, _>("guid"),
        "https://example.com/places/joes-diner"
    );

    let detail = sqlx::query(
        "SELECT post_category, email, website FROM wp_geodir_gd_place_detail WHERE post_id = 42",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(detail.get::<String, _>("post_category"), ",5,");
    assert_eq!(
        detail.get::<Option<String>, _>("email"),
        Some("joe@example.com".to_string())
    );
    assert_eq!(detail.get::<Option<String>, _>("website"), None);
}

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL server at DATABASE_URL"]
async fn test_insert_duplicate_listing_fails(pool: sqlx::MySqlPool) {
    let repository = MySqlTargetRepository::new(pool.clone(), "wp_").unwrap();
    repository
        .insert_listing(&make_post(7), &make_detail(7, None))
        .await
        .unwrap();

    let result = repository
        .insert_listing(&make_post(7), &make_detail(7, None))
        .await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL server at DATABASE_URL"]
async fn test_zero_id_listings_get_their_own_keys(pool: sqlx::MySqlPool) {
    let repository = MySqlTargetRepository::new(pool.clone(), "wp_").unwrap();

    repository
        .insert_listing(&make_post(0), &make_detail(0, None))
        .await
        .unwrap();
    repository
        .insert_listing(&make_post(0), &make_detail(0, None))
        .await
        .unwrap();

    let orphans: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM wp_geodir_gd_place_detail d \
         LEFT JOIN wp_posts p ON p.ID = d.post_id WHERE p.ID IS NULL",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(orphans, 0);

    let details: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM wp_geodir_gd_place_detail")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(details, 2);
}

// ============================================================================
// Categories
// ============================================================================

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL server at DATABASE_URL"]
async fn test_insert_category(pool: sqlx::MySqlPool) {
    let repository = MySqlTargetRepository::new(pool.clone(), "wp_").unwrap();
    let term = Term {
        term_id: 5,
        name: "Cafes".to_string(),
        slug: "cafes".to_string(),
        term_group: 0,
    };
    let taxonomy = TermTaxonomy {
        term_id: 5,
        taxonomy: "place-category".to_string(),
        description: String::new(),
        parent: 0,
        count: 12,
    };

    repository.insert_category(&term, &taxonomy).await.unwrap();
    assert!(repository.term_exists(5).await.unwrap());

    let row = sqlx::query("SELECT taxonomy, count FROM wp_term_taxonomy WHERE term_id = 5")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(row.get::<String, _>("taxonomy"), "place-category");
    assert_eq!(row.get::<i64, _>("count"), 12);
}

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL server at DATABASE_URL"]
async fn test_zero_id_category_taxonomy_points_at_its_term(pool: sqlx::MySqlPool) {
    let repository = MySqlTargetRepository::new(pool.clone(), "wp_").unwrap();
    let term = Term {
        term_id: 0,
        name: "Bars".to_string(),
        slug: "bars".to_string(),
        term_group: 0,
    };
    let taxonomy = TermTaxonomy {
        term_id: 0,
        taxonomy: "place-category".to_string(),
        description: String::new(),
        parent: 0,
        count: 0,
    };

    repository.insert_category(&term, &taxonomy).await.unwrap();

    let row = sqlx::query(
        "SELECT t.term_id, tt.term_id AS taxonomy_term_id FROM wp_terms t \
         JOIN wp_term_taxonomy tt ON tt.term_id = t.term_id WHERE t.slug = 'bars'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let term_id: u64 = row.get("term_id");
    assert_ne!(term_id, 0);
    assert_eq!(row.get::<u64, _>("taxonomy_term_id"), term_id);
}

// ============================================================================
// Users
// ============================================================================

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL server at DATABASE_URL"]
async fn test_insert_user_flags_password_reset(pool: sqlx::MySqlPool) {
    let repository = MySqlTargetRepository::new(pool.clone(), "wp_").unwrap();

    assert!(!repository.user_email_exists("a@b.com").await.unwrap());
    repository.insert_user(&make_user(3, "a@b.com")).await.unwrap();
    assert!(repository.user_email_exists("a@b.com").await.unwrap());

    let meta = sqlx::query("SELECT meta_value FROM wp_usermeta WHERE user_id = 3 AND meta_key = ?")
        .bind(FORCE_RESET_META_KEY)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(meta.get::<String, _>("meta_value"), "1");

    let user = sqlx::query("SELECT user_pass, display_name FROM wp_users WHERE ID = 3")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(
        user.get::<String, _>("user_pass"),
        "5f4dcc3b5aa765d61d8327deb882cf99"
    );
    assert_eq!(user.get::<String, _>("display_name"), "Joe Smith");
}

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL server at DATABASE_URL"]
async fn test_zero_id_user_keeps_password_reset_flag(pool: sqlx::MySqlPool) {
    let repository = MySqlTargetRepository::new(pool.clone(), "wp_").unwrap();

    repository.insert_user(&make_user(0, "zero@b.com")).await.unwrap();

    let user_id: u64 = sqlx::query_scalar("SELECT ID FROM wp_users WHERE user_email = 'zero@b.com'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(user_id, 0);

    let flagged: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM wp_usermeta WHERE user_id = ? AND meta_key = ? AND meta_value = '1'",
    )
    .bind(user_id)
    .bind(FORCE_RESET_META_KEY)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(flagged, 1);
}

#[tokio::test]
async fn test_rejects_unsafe_table_prefix() {
    let options = sqlx::mysql::MySqlConnectOptions::new();
    let pool = sqlx::mysql::MySqlPoolOptions::new().connect_lazy_with(options);
    assert!(MySqlTargetRepository::new(pool, "wp`; --").is_err());
}
