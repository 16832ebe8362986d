use diesel::QueryableByName;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use rocket::fairing::AdHoc;
use rocket_sync_db_pools::database;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[database("sqlite_db")]
pub struct DbConn(diesel::SqliteConnection);

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = Integer)]
    last_insert_rowid: i32,
}

/// Id of the row most recently inserted on this connection.
pub(crate) fn last_insert_rowid(conn: &mut SqliteConnection) -> QueryResult<i32> {
    diesel::sql_query("SELECT last_insert_rowid() as last_insert_rowid")
        .get_result::<LastInsertRowId>(conn)
        .map(|row| row.last_insert_rowid)
}

/// Enables foreign key support on a standalone SQLite connection.
///
/// Pooled [`DbConn`] connections already get this pragma (along with WAL
/// mode and a busy timeout) from `rocket_sync_db_pools` on every acquire.
pub fn set_foreign_keys(conn: &mut diesel::SqliteConnection) -> QueryResult<()> {
    conn.batch_execute("PRAGMA foreign_keys = ON")
}

/// Runs all pending database migrations on the provided connection.
///
/// On a fresh database file this creates the `businesses`,
/// `disposal_requests` and `timeslots` tables.
pub fn run_pending_migrations(
    conn: &mut diesel::SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Creates a Rocket fairing that runs database migrations on ignition.
///
/// Launch is aborted if the schema cannot be brought up to date.
pub fn run_migrations_fairing() -> AdHoc {
    AdHoc::try_on_ignite("Diesel Migrations", |rocket| async {
        let Some(conn) = DbConn::get_one(&rocket).await else {
            error!("Could not get a database connection for migrations");
            return Err(rocket);
        };
        match conn.run(run_pending_migrations).await {
            Ok(()) => {
                info!("Database schema is up to date");
                Ok(rocket)
            }
            Err(e) => {
                error!("Failed to run pending migrations: {}", e);
                Err(rocket)
            }
        }
    })
}
