use std::fs;
use std::sync::{Arc, Mutex};

use chrono::{Duration, TimeZone, Utc};
use tempfile::{TempDir, tempdir};

use super::LostFound;
use crate::config::{AppConfig, CONFIG_FILE_NAME, MatchThreshold};
use crate::error::{LostFoundError, Result};
use crate::export::{ExportTarget, FOUND_ITEMS_FILE, LOST_ITEMS_FILE, MATCHES_FILE};
use crate::matching::ScoreBreakdown;
use crate::models::{
    FoundItem, ItemId, ItemKind, LostItem, Match, MatchDecision, MatchId, MatchStatus,
    MatchingOutcome, NewFoundItem, NewLostItem,
};
use crate::notification::MatchNotifier;

#[derive(Debug, Clone, Default)]
struct RecordingNotifier {
    deliveries: Arc<Mutex<Vec<(Match, LostItem, FoundItem)>>>,
}

impl RecordingNotifier {
    fn deliveries(&self) -> Vec<(Match, LostItem, FoundItem)> {
        self.deliveries.lock().expect("lock").clone()
    }

    fn seen(&self) -> Vec<(MatchId, ItemId, ItemId)> {
        self.deliveries()
            .into_iter()
            .map(|(record, lost, found)| (record.id, lost.id, found.id))
            .collect()
    }
}

impl MatchNotifier for RecordingNotifier {
    fn notify_match(&self, record: &Match, lost: &LostItem, found: &FoundItem) -> Result<()> {
        self.deliveries
            .lock()
            .expect("lock")
            .push((record.clone(), lost.clone(), found.clone()));
        Ok(())
    }
}

struct FailingNotifier;

impl MatchNotifier for FailingNotifier {
    fn notify_match(&self, _: &Match, _: &LostItem, _: &FoundItem) -> Result<()> {
        Err(LostFoundError::Internal("notifier offline".to_string()))
    }
}

fn open_app(threshold: u8) -> (TempDir, LostFound, RecordingNotifier) {
    let temp = tempdir().expect("tempdir");
    let config = AppConfig {
        threshold: MatchThreshold::new(threshold).expect("threshold"),
        ..AppConfig::default()
    };
    let notifier = RecordingNotifier::default();
    let app = LostFound::with_config(temp.path(), config)
        .expect("open app")
        .with_notifier(notifier.clone());
    (temp, app, notifier)
}

fn lost_phone() -> NewLostItem {
    NewLostItem::new("iPhone 13", "owner@example.com")
        .with_color("Black")
        .with_location("Library")
        .with_description("cracked screen")
}

fn found_phone() -> NewFoundItem {
    NewFoundItem::new("iphone 13", "front desk")
        .with_color("black")
        .with_location("library")
        .with_description("has a cracked screen case")
}

#[test]
fn reporting_a_found_item_records_and_notifies_a_perfect_match() {
    let (_temp, app, notifier) = open_app(70);

    let lost = app.report_lost_item(lost_phone()).expect("report lost");
    assert_eq!(lost.kind, ItemKind::Lost);
    assert!(lost.matching.is_complete());
    assert!(lost.matching.matches().is_empty());

    let found = app.report_found_item(found_phone()).expect("report found");
    assert_eq!(found.kind, ItemKind::Found);
    assert!(found.matching.is_complete());
    let matches = found.matching.matches();
    assert_eq!(matches.len(), 1);
    let recorded = &matches[0];
    assert!(recorded.notified);
    assert_eq!(recorded.record.score, 100);
    assert_eq!(recorded.record.status, MatchStatus::Pending);
    assert_eq!(recorded.record.lost_item_id, lost.item_id);
    assert_eq!(recorded.record.found_item_id, found.item_id);
    assert_eq!(
        recorded.rules,
        ScoreBreakdown {
            name: true,
            color: true,
            location: true,
            keywords: true,
        }
    );

    assert_eq!(
        notifier.seen(),
        vec![(recorded.record.id, lost.item_id, found.item_id)]
    );
    let stored = app
        .get_match(recorded.record.id)
        .expect("get match")
        .expect("stored match");
    assert_eq!(stored, recorded.record);
}

#[test]
fn reporting_a_lost_item_matches_existing_found_items() {
    let (_temp, app, notifier) = open_app(70);
    let found = app
        .report_found_item(found_phone().with_location("Gym"))
        .expect("report found");
    assert!(found.matching.matches().is_empty());

    let lost = app.report_lost_item(lost_phone()).expect("report lost");
    let matches = lost.matching.matches();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].record.score, 80);
    assert_eq!(matches[0].record.found_item_id, found.item_id);
    assert!(!matches[0].rules.location);
    assert_eq!(matches[0].rules.total(), 80);
    assert_eq!(notifier.seen().len(), 1);
}

#[test]
fn threshold_above_the_score_records_nothing() {
    let wallet_lost = || {
        NewLostItem::new("Wallet", "owner")
            .with_color("Brown")
            .with_location("Cafeteria")
    };
    let wallet_found = || {
        NewFoundItem::new("Wallet", "finder")
            .with_color("Black")
            .with_location("Cafeteria")
    };

    let (_temp, app, _) = open_app(70);
    app.report_lost_item(wallet_lost()).expect("report lost");
    let outcome = app.report_found_item(wallet_found()).expect("report found");
    assert_eq!(outcome.matching.matches().len(), 1);
    assert_eq!(outcome.matching.matches()[0].record.score, 70);

    let (_temp, strict, notifier) = open_app(71);
    strict.report_lost_item(wallet_lost()).expect("report lost");
    let outcome = strict.report_found_item(wallet_found()).expect("report found");
    assert!(outcome.matching.is_complete());
    assert!(outcome.matching.matches().is_empty());
    assert!(strict.matches().expect("matches").is_empty());
    assert!(notifier.seen().is_empty());
}

#[test]
fn notifier_failure_keeps_the_recorded_match() {
    let (_temp, app, _) = open_app(70);
    let app = app.with_notifier(FailingNotifier);
    app.report_lost_item(lost_phone()).expect("report lost");

    let outcome = app.report_found_item(found_phone()).expect("report found");
    assert!(outcome.matching.is_complete());
    let recorded = &outcome.matching.matches()[0];
    assert!(!recorded.notified);
    assert!(app.get_match(recorded.record.id).expect("get").is_some());
}

#[test]
fn record_failure_after_storing_the_item_reports_incomplete_matching() {
    let (_temp, app, notifier) = open_app(70);
    let base = Utc
        .with_ymd_and_hms(2025, 5, 1, 8, 0, 0)
        .single()
        .expect("time");
    let older = app
        .report_lost_item(lost_phone().reported_at(base))
        .expect("report older");
    let newer = app
        .report_lost_item(lost_phone().reported_at(base + Duration::hours(1)))
        .expect("report newer");

    let db_path = app.config().db_path(app.root());
    let conn = rusqlite::Connection::open(&db_path).expect("second connection");
    conn.execute_batch(&format!(
        "CREATE TRIGGER reject_older_match BEFORE INSERT ON matches
         WHEN NEW.lost_item_id = {}
         BEGIN SELECT RAISE(ABORT, 'match store offline'); END;",
        older.item_id
    ))
    .expect("install trigger");
    drop(conn);

    let outcome = app.report_found_item(found_phone()).expect("report found");
    let MatchingOutcome::Incomplete { matches, error } = &outcome.matching else {
        panic!("expected incomplete matching, got {:?}", outcome.matching);
    };
    assert!(error.contains("match store offline"), "{error}");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].record.lost_item_id, newer.item_id);
    assert_eq!(notifier.seen().len(), 1);

    assert!(app.found_item(outcome.item_id).expect("get").is_some());
    assert_eq!(app.matches().expect("matches").len(), 1);
}

#[test]
fn blank_names_are_rejected_before_anything_is_stored() {
    let (_temp, app, _) = open_app(70);
    let err = app
        .report_lost_item(NewLostItem::new("   ", "owner"))
        .expect_err("blank name");
    assert!(matches!(err, LostFoundError::Validation(_)));
    let err = app
        .report_found_item(NewFoundItem::new("Keys", " "))
        .expect_err("blank finder");
    assert_eq!(err.code(), "VALIDATION_FAILED");
    assert!(app.lost_items().expect("lost").is_empty());
    assert!(app.found_items().expect("found").is_empty());
}

#[test]
fn only_pending_matches_can_be_decided() {
    let (_temp, app, _) = open_app(70);
    app.report_lost_item(lost_phone()).expect("report lost");
    let outcome = app.report_found_item(found_phone()).expect("report found");
    let id = outcome.matching.matches()[0].record.id;

    assert!(app.decide_match(id, MatchDecision::Confirmed).expect("confirm"));
    assert!(!app.decide_match(id, MatchDecision::Confirmed).expect("again"));
    assert!(!app.decide_match(id, MatchDecision::Rejected).expect("reject"));
    assert!(!app.decide_match(id + 100, MatchDecision::Rejected).expect("missing"));

    let stored = app.get_match(id).expect("get").expect("match");
    assert_eq!(stored.status, MatchStatus::Confirmed);
}

#[test]
fn statistics_report_counts_rate_and_threshold() {
    let (_temp, app, _) = open_app(75);
    let empty = app.statistics().expect("stats");
    assert_eq!(empty.threshold, 75);
    assert_eq!(empty.confirmation_rate, None);

    app.report_found_item(found_phone()).expect("report found");
    app.report_found_item(found_phone().with_location("Gym"))
        .expect("report found");
    let outcome = app.report_lost_item(lost_phone()).expect("report lost");
    let ids = outcome
        .matching
        .matches()
        .iter()
        .map(|recorded| recorded.record.id)
        .collect::<Vec<_>>();
    assert_eq!(ids.len(), 2);
    assert!(app.decide_match(ids[0], MatchDecision::Confirmed).expect("confirm"));

    let stats = app.statistics().expect("stats");
    assert_eq!(stats.lost_items, 1);
    assert_eq!(stats.found_items, 2);
    assert_eq!(stats.matches, 2);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.confirmed, 1);
    assert_eq!(stats.rejected, 0);
    assert_eq!(stats.confirmation_rate, Some(50.0));
}

#[test]
fn matches_for_an_item_are_ordered_by_score() {
    let (_temp, app, _) = open_app(70);
    let gym = app
        .report_found_item(found_phone().with_location("Gym"))
        .expect("gym");
    let library = app.report_found_item(found_phone()).expect("library");
    let lost = app.report_lost_item(lost_phone()).expect("lost");

    let for_lost = app
        .matches_for(lost.item_id, ItemKind::Lost)
        .expect("matches for lost");
    let scores = for_lost
        .iter()
        .map(|record| (record.found_item_id, record.score))
        .collect::<Vec<_>>();
    assert_eq!(scores, vec![(library.item_id, 100), (gym.item_id, 80)]);

    let for_gym = app
        .matches_for(gym.item_id, ItemKind::Found)
        .expect("matches for found");
    assert_eq!(for_gym.len(), 1);
    assert_eq!(for_gym[0].lost_item_id, lost.item_id);
}

#[test]
fn deleting_an_item_removes_its_matches() {
    let (_temp, app, _) = open_app(70);
    let lost = app.report_lost_item(lost_phone()).expect("report lost");
    app.report_found_item(found_phone()).expect("report found");
    assert_eq!(app.matches().expect("matches").len(), 1);

    assert!(app.delete_lost_item(lost.item_id).expect("delete"));
    assert!(!app.delete_lost_item(lost.item_id).expect("delete again"));
    assert!(app.matches().expect("matches").is_empty());
    assert_eq!(app.found_items().expect("found").len(), 1);
}

#[test]
fn updating_an_item_keeps_its_date_and_existing_matches() {
    let (_temp, app, _) = open_app(70);
    let at = Utc
        .with_ymd_and_hms(2025, 2, 3, 4, 5, 6)
        .single()
        .expect("time");
    let lost = app
        .report_lost_item(lost_phone().reported_at(at))
        .expect("report lost");
    app.report_found_item(found_phone()).expect("report found");

    let edit = NewLostItem::new("Laptop", "owner@example.com").with_color("Silver");
    assert!(app.update_lost_item(lost.item_id, &edit).expect("update"));
    assert!(!app.update_lost_item(9_999, &edit).expect("update missing"));

    let stored = app.lost_item(lost.item_id).expect("get").expect("item");
    assert_eq!(stored.item_name, "Laptop");
    assert_eq!(stored.location, None);
    assert_eq!(stored.reported_at, at);
    assert_eq!(app.matches().expect("matches")[0].score, 100);
}

#[test]
fn export_all_writes_three_csv_files() {
    let (temp, app, _) = open_app(70);
    app.report_lost_item(lost_phone().with_description("black, with \"case\""))
        .expect("report lost");
    app.report_found_item(found_phone()).expect("report found");

    let out_dir = temp.path().join("exports");
    let written = app.export(&out_dir, ExportTarget::All).expect("export");
    assert_eq!(
        written,
        vec![
            out_dir.join(LOST_ITEMS_FILE),
            out_dir.join(FOUND_ITEMS_FILE),
            out_dir.join(MATCHES_FILE),
        ]
    );

    let lost_csv = fs::read_to_string(out_dir.join(LOST_ITEMS_FILE)).expect("read lost");
    assert!(lost_csv.starts_with("ID,Item Name,Color,Location,Description,Contact Info"));
    assert!(lost_csv.contains("\"black, with \"\"case\"\"\""));
    let matches_csv = fs::read_to_string(out_dir.join(MATCHES_FILE)).expect("read matches");
    assert_eq!(matches_csv.lines().count(), 2);

    let only_found = app
        .export(&temp.path().join("found_only"), ExportTarget::Found)
        .expect("export found");
    assert_eq!(only_found.len(), 1);
}

#[test]
fn open_reads_threshold_from_the_root_config_file() {
    let temp = tempdir().expect("tempdir");
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        "[match]\nthreshold = 90\n[storage]\ndb_file = \"state/lf.sqlite3\"\n",
    )
    .expect("write config");

    let app = LostFound::open(temp.path()).expect("open");
    assert_eq!(app.finder().threshold().get(), 90);
    assert!(temp.path().join("state/lf.sqlite3").exists());
}

#[test]
fn open_rejects_an_out_of_range_threshold() {
    let temp = tempdir().expect("tempdir");
    fs::write(temp.path().join(CONFIG_FILE_NAME), "[match]\nthreshold = 101\n")
        .expect("write config");
    let err = LostFound::open(temp.path()).expect_err("invalid threshold");
    assert!(matches!(err, LostFoundError::Configuration(_)));
}

#[test]
fn reported_values_equal_what_the_store_reads_back() {
    let (_temp, app, notifier) = open_app(70);
    let lost = app.report_lost_item(lost_phone()).expect("report lost");
    let found = app.report_found_item(found_phone()).expect("report found");
    let recorded = &found.matching.matches()[0].record;

    let stored_match = app
        .get_match(recorded.id)
        .expect("get match")
        .expect("stored match");
    assert_eq!(recorded.match_date, stored_match.match_date);
    assert_eq!(*recorded, stored_match);

    let stored_lost = app.lost_item(lost.item_id).expect("get").expect("lost");
    let stored_found = app.found_item(found.item_id).expect("get").expect("found");
    let deliveries = notifier.deliveries();
    assert_eq!(deliveries.len(), 1);
    let (notified_match, notified_lost, notified_found) = &deliveries[0];
    assert_eq!(notified_match, &stored_match);
    assert_eq!(notified_lost, &stored_lost);
    assert_eq!(notified_found, &stored_found);
}

#[test]
fn explicit_report_dates_are_cut_to_microseconds() {
    let (_temp, app, _) = open_app(70);
    let at = Utc
        .with_ymd_and_hms(2025, 6, 7, 8, 9, 10)
        .single()
        .expect("time")
        + Duration::nanoseconds(123_456_789);
    let lost = app
        .report_lost_item(lost_phone().reported_at(at))
        .expect("report lost");
    let stored = app.lost_item(lost.item_id).expect("get").expect("lost");
    assert_eq!(stored.reported_at.timestamp_subsec_nanos(), 123_456_000);
}
