use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{Executor, MySqlPool};

/// Session SQL mode used for every connection.
///
/// WordPress schemas default dates to `0000-00-00 00:00:00`, which the strict
/// modes of MySQL 5.7+ reject, so sessions run without them as WordPress does.
const SESSION_SQL_MODE: &str = "SET SESSION sql_mode = 'NO_ENGINE_SUBSTITUTION'";

/// Connects a MySQL pool with the WordPress-compatible session SQL mode.
pub async fn connect_pool(
    options: MySqlConnectOptions,
    max_connections: u32,
) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute(SESSION_SQL_MODE).await?;
                Ok(())
            })
        })
        .connect_with(options)
        .await
}
