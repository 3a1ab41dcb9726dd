//! Embedded PostgreSQL bootstrap for integration tests.
//!
//! `pg-embed-setup-unpriv` installs into `/var/tmp` unless `PG_RUNTIME_DIR`
//! and `PG_DATA_DIR` say otherwise. When either is unset, both are pointed at
//! a fresh directory under the build target for the duration of the
//! bootstrap. Bootstraps are serialised because they mutate the environment.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Attempts after the first when the binary download fails transiently.
const MAX_RETRIES: u32 = 3;

/// First retry delay; doubles on each further attempt.
const RETRY_DELAY_MS: u64 = 500;

fn pg_embed_root() -> PathBuf {
    std::env::var_os("CARGO_TARGET_DIR").map_or_else(
        || {
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("target")
                .join("pg-embed")
        },
        |target| PathBuf::from(target).join("pg-embed"),
    )
}

fn fresh_cluster_dirs() -> std::io::Result<(PathBuf, PathBuf)> {
    let base = pg_embed_root().join(format!("blog-{}-{}", std::process::id(), Uuid::new_v4()));
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");
    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    Ok((runtime_dir, data_dir))
}

fn is_transient(message: &str) -> bool {
    let lowered = message.to_lowercase();
    [
        "connection reset",
        "connection refused",
        "timed out",
        "timeout",
        "temporarily unavailable",
        "dns error",
        "error decoding response body",
    ]
    .iter()
    .any(|pattern| lowered.contains(pattern))
}

/// Start a [`TestCluster`], retrying transient download failures.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _bootstrap = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let needs_dirs =
        std::env::var_os("PG_RUNTIME_DIR").is_none() || std::env::var_os("PG_DATA_DIR").is_none();
    let _env = if needs_dirs {
        let (runtime_dir, data_dir) = fresh_cluster_dirs().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            (
                "PG_RUNTIME_DIR",
                Some(runtime_dir.to_string_lossy().into_owned()),
            ),
            ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
        ]))
    } else {
        None
    };

    let mut last_error = String::new();
    for attempt in 0..=MAX_RETRIES {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt == MAX_RETRIES || !is_transient(&last_error) {
                    break;
                }
                let delay = Duration::from_millis(RETRY_DELAY_MS << attempt);
                eprintln!("pg-embed: transient bootstrap failure, retrying in {delay:?}: {last_error}");
                std::thread::sleep(delay);
            }
        }
    }
    Err(last_error)
}
