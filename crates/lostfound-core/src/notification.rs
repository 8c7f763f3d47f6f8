use std::io::{self, Write};
use std::sync::Mutex;

use tracing::info;

use crate::error::{LostFoundError, Result};
use crate::export::TIMESTAMP_FORMAT;
use crate::models::{FoundItem, LostItem, Match};

/// Delivery channel for newly recorded matches.
///
/// Called once per recorded match. Callers may invoke it again for the same
/// match, so implementations must tolerate repeats.
pub trait MatchNotifier: Send + Sync {
    fn notify_match(&self, record: &Match, lost: &LostItem, found: &FoundItem) -> Result<()>;
}

/// Writes a human-readable match notice to a terminal stream.
#[derive(Debug)]
pub struct ConsoleNotifier<W> {
    out: Mutex<W>,
}

impl ConsoleNotifier<io::Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|_| LostFoundError::mutex_poisoned("notifier"))
    }
}

const RULE_WIDTH: usize = 70;

fn optional(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn render_notice(
    out: &mut impl Write,
    record: &Match,
    lost: &LostItem,
    found: &FoundItem,
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "MATCH NOTIFICATION")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Match Details:")?;
    writeln!(out, "  Match ID: {}", record.id)?;
    writeln!(out, "  Score: {}/100", record.score)?;
    writeln!(out, "  Status: {}", record.status)?;
    writeln!(out, "  Match Date: {}", record.match_date.format(TIMESTAMP_FORMAT))?;
    writeln!(out)?;
    writeln!(out, "Lost Item:")?;
    writeln!(out, "  ID: {}", lost.id)?;
    writeln!(out, "  Item Name: {}", lost.item_name)?;
    writeln!(out, "  Color: {}", optional(lost.color.as_deref()))?;
    writeln!(out, "  Location: {}", optional(lost.location.as_deref()))?;
    writeln!(out, "  Description: {}", optional(lost.description.as_deref()))?;
    writeln!(out, "  Contact: {}", lost.contact_info)?;
    writeln!(out, "  Reported: {}", lost.reported_at.format(TIMESTAMP_FORMAT))?;
    writeln!(out)?;
    writeln!(out, "Found Item:")?;
    writeln!(out, "  ID: {}", found.id)?;
    writeln!(out, "  Item Name: {}", found.item_name)?;
    writeln!(out, "  Color: {}", optional(found.color.as_deref()))?;
    writeln!(out, "  Location: {}", optional(found.location.as_deref()))?;
    writeln!(out, "  Description: {}", optional(found.description.as_deref()))?;
    writeln!(out, "  Finder: {}", found.finder_info)?;
    writeln!(out, "  Found: {}", found.found_at.format(TIMESTAMP_FORMAT))?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "Use the contact details above to arrange the return of the item."
    )?;
    writeln!(out, "{rule}")?;
    out.flush()
}

impl<W: Write + Send> MatchNotifier for ConsoleNotifier<W> {
    fn notify_match(&self, record: &Match, lost: &LostItem, found: &FoundItem) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| LostFoundError::mutex_poisoned("notifier"))?;
        render_notice(&mut *out, record, lost, found)?;
        drop(out);
        info!(match_id = record.id, "match notification sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::MatchStatus;

    #[test]
    fn console_notice_lists_both_parties() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).single().expect("time");
        let lost = LostItem {
            id: 3,
            item_name: "Wallet".to_string(),
            color: Some("Brown".to_string()),
            location: Some("Library".to_string()),
            description: None,
            contact_info: "owner@example.com".to_string(),
            reported_at: at,
        };
        let found = FoundItem {
            id: 8,
            item_name: "wallet".to_string(),
            color: Some("brown".to_string()),
            location: Some("library".to_string()),
            description: Some("leather".to_string()),
            finder_info: "555-0100".to_string(),
            found_at: at,
        };
        let record = Match {
            id: 21,
            lost_item_id: 3,
            found_item_id: 8,
            score: 90,
            match_date: at,
            status: MatchStatus::Pending,
        };

        let notifier = ConsoleNotifier::new(Vec::<u8>::new());
        notifier
            .notify_match(&record, &lost, &found)
            .expect("notify");
        let text = String::from_utf8(notifier.into_inner().expect("inner")).expect("utf8");

        assert!(text.contains("Match ID: 21"));
        assert!(text.contains("Score: 90/100"));
        assert!(text.contains("Status: PENDING"));
        assert!(text.contains("Match Date: 2025-03-14 09:26:53"));
        assert!(text.contains("Contact: owner@example.com"));
        assert!(text.contains("Finder: 555-0100"));
        assert!(text.contains("Description: -"));
        assert!(text.contains("Use the contact details above"));
        assert!(!text.contains("have been notified"));
    }
}
