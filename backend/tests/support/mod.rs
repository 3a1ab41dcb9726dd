//! Helpers shared by the integration suites that need PostgreSQL.
//!
//! Each file under `backend/tests/` compiles as its own crate, so suites pull
//! these in with `mod support;`.

mod cluster_skip;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

pub use cluster_skip::handle_cluster_setup_failure;

/// Render a `postgres` error with its SQLSTATE and server message.
///
/// `postgres::Error`'s `Display` often reduces database errors to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Drop and recreate `name` on `cluster` so each suite starts empty.
///
/// `DROP DATABASE` refuses to run inside a transaction, so each statement is
/// sent on its own.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("DROP DATABASE IF EXISTS \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(())
}
