//! Transfer snapshot builders for tests.

use chrono::Utc;
use skiff_models::{Transfer, TransferId, TransferStatus};

/// One-gigabyte fixture size; large enough for meaningful percentages.
const FIXTURE_SIZE: u64 = 1_073_741_824;

/// Build a snapshot in the given status with plausible byte counters.
#[must_use]
pub fn transfer(id: TransferId, status: TransferStatus) -> Transfer {
    let downloaded = match status {
        TransferStatus::InQueue => 0,
        TransferStatus::Downloading => FIXTURE_SIZE / 2,
        _ => FIXTURE_SIZE,
    };
    Transfer {
        id,
        name: format!("transfer-{id}"),
        status,
        size: FIXTURE_SIZE,
        downloaded,
        percent_done: u8::try_from(downloaded * 100 / FIXTURE_SIZE).unwrap_or(100),
        source: Some("magnet:?xt=urn:btih:fixture".to_string()),
        created_at: Some(Utc::now().naive_utc()),
        finished_at: status
            .is_terminal()
            .then(|| Utc::now().naive_utc()),
        ..Transfer::default()
    }
}

/// Build a downloading snapshot at the given completion percentage.
#[must_use]
pub fn downloading(id: TransferId, percent_done: u8) -> Transfer {
    Transfer {
        downloaded: FIXTURE_SIZE * u64::from(percent_done) / 100,
        percent_done,
        ..transfer(id, TransferStatus::Downloading)
    }
}

/// Build a terminally failed snapshot carrying the given error message.
#[must_use]
pub fn failed(id: TransferId, message: impl Into<String>) -> Transfer {
    Transfer {
        error_message: Some(message.into()),
        downloaded: 0,
        percent_done: 0,
        ..transfer(id, TransferStatus::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skiff_models::StatusKind;

    #[test]
    fn fixtures_carry_consistent_counters() {
        let snapshot = downloading(7, 25);
        assert_eq!(snapshot.percent_done, 25);
        assert_eq!(snapshot.downloaded, FIXTURE_SIZE / 4);
        assert!(snapshot.finished_at.is_none());
    }

    #[test]
    fn failed_fixture_is_terminal_with_message() {
        let snapshot = failed(9, "tracker unreachable");
        assert_eq!(snapshot.status_kind(), StatusKind::Failed);
        assert_eq!(snapshot.error_message.as_deref(), Some("tracker unreachable"));
        assert!(snapshot.finished_at.is_some());
    }
}
