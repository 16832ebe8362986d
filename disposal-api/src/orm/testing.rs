//! In-memory databases and Rocket instances for tests.

use diesel::sqlite::SqliteConnection;
use rocket::figment::{
    util::map,
    value::{Map, Value},
};
use rocket::{Build, Rocket};

use super::db::{DbConn, run_migrations_fairing, run_pending_migrations, set_foreign_keys};

/// Creates and configures a Rocket instance for testing with an in-memory
/// SQLite database.
///
/// Every call gets its own shared-cache in-memory database, so tests never
/// see each other's rows. The returned instance has the connection pool,
/// migrations, catchers and all routes in place.
pub fn test_rocket() -> Rocket<Build> {
    use uuid::Uuid;

    let unique_db_name = format!("file:test_db_{}?mode=memory&cache=shared", Uuid::new_v4());

    let db_config: Map<_, Value> = map! {
        "url" => unique_db_name.into(),
        "pool_size" => 5.into(),
        "timeout" => 5.into(),
    };

    let figment = rocket::Config::figment().merge(("databases", map!["sqlite_db" => db_config]));

    let rocket = rocket::custom(figment)
        .attach(DbConn::fairing())
        .attach(run_migrations_fairing());

    crate::register_catchers(crate::mount_api_routes(rocket))
}

/// Creates a synchronous in-memory SQLite connection for unit tests.
///
/// Migrations are applied and foreign keys enabled. Each call returns a new,
/// independent database.
pub fn setup_test_db() -> SqliteConnection {
    use diesel::Connection;

    let mut conn = SqliteConnection::establish(":memory:")
        .expect("Failed to create in-memory SQLite database");
    set_foreign_keys(&mut conn).expect("Could not enable foreign keys");
    run_pending_migrations(&mut conn).expect("Migrations failed");
    conn
}
