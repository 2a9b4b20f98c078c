use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

/// Tables of the item catalog, created if missing
const SCHEMA: &[(&str, &str)] = &[
    (
        "a003_seller",
        r#"
        CREATE TABLE IF NOT EXISTS a003_seller (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            image_url TEXT NOT NULL DEFAULT '',
            number_of_products INTEGER NOT NULL DEFAULT 0,
            number_of_sales INTEGER NOT NULL DEFAULT 0,
            number_of_followers INTEGER NOT NULL DEFAULT 0,
            general_rating REAL NOT NULL DEFAULT 0,
            attention_description TEXT NOT NULL DEFAULT '',
            puntuality_description TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "a002_product",
        r#"
        CREATE TABLE IF NOT EXISTS a002_product (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            model_name TEXT NOT NULL DEFAULT '',
            family_name TEXT NOT NULL DEFAULT '',
            main_spec TEXT NOT NULL DEFAULT '[]',
            secondary_spec TEXT NOT NULL DEFAULT '[]',
            rating_value REAL NOT NULL DEFAULT 0,
            rating_count INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a002_payment_method",
        r#"
        CREATE TABLE IF NOT EXISTS a002_payment_method (
            id TEXT PRIMARY KEY NOT NULL,
            product_id TEXT NOT NULL,
            position INTEGER NOT NULL DEFAULT 0,
            method_type TEXT NOT NULL,
            installments INTEGER NOT NULL DEFAULT 0,
            interest_rate_percentage REAL NOT NULL DEFAULT 0,
            image_url TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "a001_item",
        r#"
        CREATE TABLE IF NOT EXISTS a001_item (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            product_status TEXT NOT NULL DEFAULT '',
            price INTEGER NOT NULL DEFAULT 0,
            available_quantity INTEGER NOT NULL DEFAULT 0,
            sold_count INTEGER NOT NULL DEFAULT 0,
            product_id TEXT NOT NULL,
            seller_id TEXT NOT NULL
        );
        "#,
    ),
    (
        "a001_item_image",
        r#"
        CREATE TABLE IF NOT EXISTS a001_item_image (
            id TEXT PRIMARY KEY NOT NULL,
            item_id TEXT NOT NULL,
            position INTEGER NOT NULL DEFAULT 0,
            alt TEXT NOT NULL DEFAULT '',
            url_small_version TEXT NOT NULL,
            url_medium_version TEXT NOT NULL
        );
        "#,
    ),
    (
        "a001_item_review",
        r#"
        CREATE TABLE IF NOT EXISTS a001_item_review (
            id TEXT PRIMARY KEY NOT NULL,
            item_id TEXT NOT NULL,
            rating INTEGER NOT NULL,
            content TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );
        "#,
    ),
    (
        "a001_item_question",
        r#"
        CREATE TABLE IF NOT EXISTS a001_item_question (
            id TEXT PRIMARY KEY NOT NULL,
            item_id TEXT NOT NULL,
            question TEXT NOT NULL,
            answer TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );
        "#,
    ),
];

/// Open the SQLite file (creating it and its directory if needed) and bootstrap the schema
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database: {}", db_url);
    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

/// Private in-memory database with the full schema.
///
/// Pinned to one pooled connection: every SQLite `:memory:` connection is a
/// separate database.
#[cfg(test)]
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, ddl) in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await
        .map_err(|e| anyhow::anyhow!("failed to create table {}: {}", table, e))?;
        tracing::debug!("Table {} ready", table);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let conn = connect_in_memory().await.unwrap();
        bootstrap_schema(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name LIKE 'a00%';"
                    .to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(rows.len(), SCHEMA.len());
    }
}
