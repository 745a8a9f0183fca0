//! Environment helpers for `PostgreSQL` test clusters.

use super::BoxError;
use camino::Utf8PathBuf;
use pg_embedded_setup_unpriv::{ExecutionPrivileges, detect_execution_privileges};
use std::ffi::OsString;
use std::net::TcpListener;

const WORKER_ENV: &str = "PG_EMBEDDED_WORKER";
const WORKER_BINARY: &str = "pg_worker";

pub(super) fn env_vars_to_os(
    env_vars: &[(String, Option<String>)],
) -> Vec<(OsString, Option<OsString>)> {
    env_vars
        .iter()
        .map(|(key, value)| (OsString::from(key), value.as_ref().map(OsString::from)))
        .collect()
}

/// Variables the bootstrap needs: a free port and, under root, the worker.
pub(super) fn worker_env_changes() -> Result<Vec<(OsString, Option<OsString>)>, BoxError> {
    let mut changes = Vec::new();
    if let Some(port) = resolve_pg_port()? {
        changes.push((OsString::from("PG_PORT"), Some(port)));
    }

    if matches!(detect_execution_privileges(), ExecutionPrivileges::Root)
        && std::env::var_os(WORKER_ENV).is_none()
    {
        let worker_path = locate_pg_worker_path().ok_or_else(|| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "PG_EMBEDDED_WORKER is not set and pg_worker was not found on PATH",
            )) as BoxError
        })?;
        changes.push((
            OsString::from(WORKER_ENV),
            Some(OsString::from(worker_path.as_str())),
        ));
    }

    Ok(changes)
}

fn locate_pg_worker_path() -> Option<Utf8PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .filter_map(|dir| Utf8PathBuf::try_from(dir).ok())
        .map(|dir| dir.join(WORKER_BINARY))
        .find(|candidate| candidate.is_file())
}

fn resolve_pg_port() -> Result<Option<OsString>, BoxError> {
    if std::env::var_os("PG_PORT").is_some() {
        return Ok(None);
    }

    let listener = TcpListener::bind(("127.0.0.1", 0)).map_err(|err| Box::new(err) as BoxError)?;
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .map_err(|err| Box::new(err) as BoxError)?;
    drop(listener);

    Ok(Some(OsString::from(port.to_string())))
}
