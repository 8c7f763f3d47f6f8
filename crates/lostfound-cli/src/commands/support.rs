use std::io::{self, Write};

use anyhow::Error;
use lostfound_core::LostFoundError;
use lostfound_core::models::ItemId;

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Write the error payload for a failed command to stderr.
pub(crate) fn print_failure(operation: &str, err: &Error) {
    let payload = match err.downcast_ref::<LostFoundError>() {
        Some(core) => {
            let mut payload = core.to_payload(operation);
            payload.message = format!("{err:#}");
            payload
        }
        None => LostFoundError::Internal(format!("{err:#}")).to_payload(operation),
    };
    let mut stderr = io::stderr().lock();
    if serde_json::to_writer_pretty(&mut stderr, &payload).is_err() {
        let _ = writeln!(stderr, "{}: {}", payload.code, payload.message);
        return;
    }
    let _ = writeln!(stderr);
}

pub(super) fn not_found(what: &str, id: ItemId) -> Error {
    LostFoundError::NotFound(format!("{what} {id}")).into()
}

/// `None` for absent or blank input.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Apply an optional edit: absent keeps `current`, blank clears it.
pub(super) fn merge_optional(edit: Option<String>, current: Option<String>) -> Option<String> {
    match edit {
        Some(value) if value.trim().is_empty() => None,
        Some(value) => Some(value),
        None => current,
    }
}
