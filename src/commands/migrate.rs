//! Migrate command - Database migration management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::infra::Database;
use common::AppResult;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config.database).await?;
    run(&db, args.action).await
}

/// Apply one migration action to an open database
pub async fn run(db: &Database, action: MigrateAction) -> AppResult<()> {
    match action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            db.run_migrations().await?;
            tracing::info!("Migrations completed successfully");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration...");
            db.rollback_migration().await?;
            tracing::info!("Rollback completed successfully");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let status = if applied { "applied" } else { "pending" };
                println!("{}: {}", name, status);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            tracing::info!("Fresh migrations completed successfully");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::DatabaseConfig;

    async fn empty_db() -> Database {
        Database::connect_without_migrations(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_up_then_down() {
        let db = empty_db().await;

        run(&db, MigrateAction::Up).await.unwrap();
        assert!(db.migration_status().await.unwrap().iter().all(|(_, a)| *a));

        run(&db, MigrateAction::Down).await.unwrap();
        let pending = db
            .migration_status()
            .await
            .unwrap()
            .iter()
            .filter(|(_, applied)| !applied)
            .count();
        assert_eq!(pending, 1);
    }

    #[tokio::test]
    async fn test_fresh_and_status() {
        let db = empty_db().await;

        run(&db, MigrateAction::Fresh).await.unwrap();
        run(&db, MigrateAction::Status).await.unwrap();
        db.ping().await.unwrap();
        assert!(db.migration_status().await.unwrap().iter().all(|(_, a)| *a));
    }

    #[tokio::test]
    async fn test_fresh_rebuilds_migrated_schema() {
        let db = empty_db().await;
        run(&db, MigrateAction::Up).await.unwrap();
        run(&db, MigrateAction::Down).await.unwrap();

        run(&db, MigrateAction::Fresh).await.unwrap();

        let status = db.migration_status().await.unwrap();
        assert_eq!(status.len(), 2);
        assert!(status.iter().all(|(_, applied)| *applied));
    }
}
