//! MySQL implementation of the WordPress target repository.
//!
//! Writes the WordPress core tables and GeoDirectory's place detail table.
//! Each listing, category and user is written in its own transaction, so its
//! rows land together; nothing spans a whole table's import.
use async_trait::async_trait;
use chrono::NaiveDateTime;
use pmd_importer_shared::types::{PlaceDetail, Post, Term, TermTaxonomy, User};
use sqlx::mysql::MySqlQueryResult;
use sqlx::{MySql, MySqlPool, QueryBuilder, Transaction};
use tracing::debug;

use crate::config::TablePrefix;
use crate::errors::TargetRepositoryError;
use crate::interfaces::TargetRepository;

/// WordPress' placeholder for "no date".
const ZERO_DATETIME: &str = "0000-00-00 00:00:00";

/// GeoDirectory's detail table for the `gd_place` post type, without prefix.
const PLACE_DETAIL_TABLE: &str = "geodir_gd_place_detail";

/// usermeta key read by the login flow to force a reset before first login.
pub const FORCE_RESET_META_KEY: &str = "pmd_force_password_reset";

/// usermeta key that makes WordPress nag the user to change their password.
const PASSWORD_NAG_META_KEY: &str = "default_password_nag";

/// Legacy id 0 means "no id": the key is bound as `NULL` and MySQL assigns
/// the next `AUTO_INCREMENT` value.
fn explicit_id(id: u64) -> Option<u64> {
    (id != 0).then_some(id)
}

/// The key the row was actually stored under.
fn stored_id(requested: u64, result: &MySqlQueryResult) -> u64 {
    explicit_id(requested).unwrap_or_else(|| result.last_insert_id())
}

fn format_datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ZERO_DATETIME.to_string())
}

/// MySQL-backed writer for the WordPress tables.
pub struct MySqlTargetRepository {
    /// Pool connected to the WordPress database
    pool: MySqlPool,
    prefix: TablePrefix,
}

impl MySqlTargetRepository {
    /// Creates a new target repository.
    ///
    /// # Arguments
    ///
    /// * `pool` - Pool connected to the WordPress database
    /// * `table_prefix` - WordPress table prefix, usually `wp_`
    pub fn new(pool: MySqlPool, table_prefix: &str) -> Result<Self, TargetRepositoryError> {
        let prefix = TablePrefix::new(table_prefix)?;
        Ok(Self { pool, prefix })
    }

    async fn count_where(
        &self,
        table: &str,
        column: &str,
        key: CountKey<'_>,
    ) -> Result<i64, TargetRepositoryError> {
        let sql = format!(
            "SELECT COUNT(*) FROM `{}` WHERE `{}` = ?",
            self.prefix.table(table),
            column
        );
        let query = sqlx::query_scalar::<_, i64>(&sql);
        let count = match key {
            CountKey::Id(id) => query.bind(id).fetch_one(&self.pool).await?,
            CountKey::Text(text) => query.bind(text).fetch_one(&self.pool).await?,
        };
        Ok(count)
    }

    async fn insert_post_tx(
        &self,
        post: &Post,
        tx: &mut Transaction<'_, MySql>,
    ) -> Result<u64, TargetRepositoryError> {
        let created = format_datetime(post.created_at);
        let modified = format_datetime(post.updated_at);
        let sql = format!(
            "INSERT INTO `{}` (ID, post_author, post_date, post_date_gmt, post_content, post_title, \
             post_excerpt, post_status, comment_status, ping_status, post_name, to_ping, pinged, \
             post_modified, post_modified_gmt, post_content_filtered, post_parent, guid, \
             menu_order, post_type, comment_count) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, '', '', ?, ?, '', ?, ?, ?, ?, ?)",
            self.prefix.table("posts")
        );
        let result = sqlx::query(&sql)
            .bind(explicit_id(post.id))
            .bind(post.author)
            .bind(&created)
            .bind(&created)
            .bind(&post.content)
            .bind(&post.title)
            .bind(&post.excerpt)
            .bind(&post.status)
            .bind(&post.comment_status)
            .bind(&post.ping_status)
            .bind(&post.slug)
            .bind(&modified)
            .bind(&modified)
            .bind(post.parent_id)
            .bind(&post.guid)
            .bind(post.menu_order)
            .bind(&post.post_type)
            .bind(post.comment_count)
            .execute(&mut **tx)
            .await?;
        Ok(stored_id(post.id, &result))
    }

    async fn insert_place_detail_tx(
        &self,
        post_id: u64,
        detail: &PlaceDetail,
        tx: &mut Transaction<'_, MySql>,
    ) -> Result<(), TargetRepositoryError> {
        let optional: Vec<(&str, String)> = [
            ("email", &detail.email),
            ("website", &detail.website),
            ("mapview", &detail.mapview),
            ("mapzoom", &detail.mapzoom),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.clone().map(|value| (column, value)))
        .collect();

        let mut builder = QueryBuilder::<MySql>::new(format!(
            "INSERT INTO `{}` (post_id, post_title, post_status, post_category, \
             default_category, featured, claimed, expire_date, submit_ip, overall_rating, \
             rating_count, street, street2, city, region, zip, latitude, longitude, phone, \
             twitter, facebook, business_hours",
            self.prefix.table(PLACE_DETAIL_TABLE)
        ));
        for (column, _) in &optional {
            builder.push(", ").push(*column);
        }
        builder.push(") VALUES (");

        let mut values = builder.separated(", ");
        values
            .push_bind(post_id)
            .push_bind(detail.post_title.clone())
            .push_bind(detail.post_status.clone())
            .push_bind(detail.post_category.clone())
            .push_bind(detail.default_category)
            .push_bind(detail.featured)
            .push_bind(detail.claimed)
            .push_bind(detail.expire_date)
            .push_bind(detail.submit_ip.clone())
            .push_bind(detail.overall_rating)
            .push_bind(detail.rating_count)
            .push_bind(detail.street.clone())
            .push_bind(detail.street2.clone())
            .push_bind(detail.city.clone())
            .push_bind(detail.region.clone())
            .push_bind(detail.zip.clone())
            .push_bind(detail.latitude.clone())
            .push_bind(detail.longitude.clone())
            .push_bind(detail.phone.clone())
            .push_bind(detail.twitter.clone())
            .push_bind(detail.facebook.clone())
            .push_bind(detail.business_hours.clone());
        for (_, value) in optional {
            values.push_bind(value);
        }
        values.push_unseparated(")");

        builder.build().execute(&mut **tx).await?;
        Ok(())
    }

    async fn insert_user_meta_tx(
        &self,
        user_id: u64,
        key: &str,
        value: &str,
        tx: &mut Transaction<'_, MySql>,
    ) -> Result<(), TargetRepositoryError> {
        let sql = format!(
            "INSERT INTO `{}` (user_id, meta_key, meta_value) VALUES (?, ?, ?)",
            self.prefix.table("usermeta")
        );
        sqlx::query(&sql)
            .bind(user_id)
            .bind(key)
            .bind(value)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}

/// Key of an existence check: numeric ids or text such as emails.
enum CountKey<'a> {
    Id(u64),
    Text(&'a str),
}

#[async_trait]
impl TargetRepository for MySqlTargetRepository {
    async fn post_exists(&self, id: u64) -> Result<bool, TargetRepositoryError> {
        Ok(self.count_where("posts", "ID", CountKey::Id(id)).await? > 0)
    }

    async fn term_exists(&self, term_id: u64) -> Result<bool, TargetRepositoryError> {
        Ok(self.count_where("terms", "term_id", CountKey::Id(term_id)).await? > 0)
    }

    async fn user_email_exists(&self, email: &str) -> Result<bool, TargetRepositoryError> {
        Ok(self.count_where("users", "user_email", CountKey::Text(email)).await? > 0)
    }

    async fn insert_listing(
        &self,
        post: &Post,
        detail: &PlaceDetail,
    ) -> Result<(), TargetRepositoryError> {
        let mut tx = self.pool.begin().await?;
        let post_id = self.insert_post_tx(post, &mut tx).await?;
        self.insert_place_detail_tx(post_id, detail, &mut tx).await?;
        tx.commit().await?;
        debug!(post_id, slug = %post.slug, "Inserted place");
        Ok(())
    }

    async fn insert_category(
        &self,
        term: &Term,
        taxonomy: &TermTaxonomy,
    ) -> Result<(), TargetRepositoryError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "INSERT INTO `{}` (term_id, name, slug, term_group) VALUES (?, ?, ?, ?)",
            self.prefix.table("terms")
        );
        let result = sqlx::query(&sql)
            .bind(explicit_id(term.term_id))
            .bind(&term.name)
            .bind(&term.slug)
            .bind(term.term_group)
            .execute(&mut *tx)
            .await?;
        let term_id = stored_id(term.term_id, &result);

        let sql = format!(
            "INSERT INTO `{}` (term_id, taxonomy, description, parent, count) VALUES (?, ?, ?, ?, ?)",
            self.prefix.table("term_taxonomy")
        );
        sqlx::query(&sql)
            .bind(term_id)
            .bind(&taxonomy.taxonomy)
            .bind(&taxonomy.description)
            .bind(taxonomy.parent)
            .bind(taxonomy.count)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(term_id, slug = %term.slug, "Inserted category");
        Ok(())
    }

    async fn insert_user(&self, user: &User) -> Result<(), TargetRepositoryError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "INSERT INTO `{}` (ID, user_login, user_pass, user_nicename, user_email, user_url, \
             user_registered, user_activation_key, user_status, display_name) \
             VALUES (?, ?, ?, ?, ?, '', ?, '', 0, ?)",
            self.prefix.table("users")
        );
        let result = sqlx::query(&sql)
            .bind(explicit_id(user.id))
            .bind(&user.login)
            .bind(&user.password_hash)
            .bind(&user.nicename)
            .bind(&user.email)
            .bind(format_datetime(user.registered_at))
            .bind(&user.display_name)
            .execute(&mut *tx)
            .await?;
        let user_id = stored_id(user.id, &result);

        if user.force_password_reset {
            self.insert_user_meta_tx(user_id, FORCE_RESET_META_KEY, "1", &mut tx)
                .await?;
            self.insert_user_meta_tx(user_id, PASSWORD_NAG_META_KEY, "1", &mut tx)
                .await?;
        }

        tx.commit().await?;
        debug!(user_id, login = %user.login, "Inserted user");
        Ok(())
    }
}
