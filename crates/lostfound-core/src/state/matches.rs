use rusqlite::types::Type;
use rusqlite::{OptionalExtension, Row, params};
use tracing::info;

use crate::error::Result;
use crate::models::{ItemKind, Match, MatchCandidate, MatchId, MatchStatus};
use crate::store::{MatchFilter, MatchOrder, MatchStore};

use super::{SqliteStateStore, format_timestamp, parse_required_rfc3339};

const MATCH_COLUMNS: &str = "match_id, lost_item_id, found_item_id, score, match_date, status";

impl MatchStore for SqliteStateStore {
    fn insert_match(&self, candidate: &MatchCandidate) -> Result<MatchId> {
        let id = self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO matches(lost_item_id, found_item_id, score, match_date, status)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ",
                params![
                    candidate.lost_item_id,
                    candidate.found_item_id,
                    i64::from(candidate.score),
                    format_timestamp(&candidate.match_date),
                    candidate.status.as_str(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        info!(
            match_id = id,
            lost_item_id = candidate.lost_item_id,
            found_item_id = candidate.found_item_id,
            score = candidate.score,
            "match stored"
        );
        Ok(id)
    }

    fn update_match_status(&self, id: MatchId, status: MatchStatus) -> Result<usize> {
        self.with_conn(|conn| {
            let affected = conn.execute(
                "UPDATE matches SET status = ?1 WHERE match_id = ?2 AND status = ?3",
                params![status.as_str(), id, MatchStatus::Pending.as_str()],
            )?;
            Ok(affected)
        })
    }

    fn select_matches(&self, filter: MatchFilter, order: MatchOrder) -> Result<Vec<Match>> {
        let order_by = match order {
            MatchOrder::NewestFirst => "match_date DESC, match_id DESC",
            MatchOrder::ScoreDesc => "score DESC, match_id ASC",
        };
        let (predicate, item_id) = match filter {
            MatchFilter::All => ("1 = 1", None),
            MatchFilter::Item {
                id,
                kind: ItemKind::Lost,
            } => ("lost_item_id = ?1", Some(id)),
            MatchFilter::Item {
                id,
                kind: ItemKind::Found,
            } => ("found_item_id = ?1", Some(id)),
        };
        let sql =
            format!("SELECT {MATCH_COLUMNS} FROM matches WHERE {predicate} ORDER BY {order_by}");

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = match item_id {
                Some(id) => stmt.query_map(params![id], match_from_row)?,
                None => stmt.query_map([], match_from_row)?,
            };

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    fn get_match(&self, id: MatchId) -> Result<Option<Match>> {
        self.with_conn(|conn| {
            let record = conn
                .query_row(
                    &format!("SELECT {MATCH_COLUMNS} FROM matches WHERE match_id = ?1"),
                    params![id],
                    match_from_row,
                )
                .optional()?;
            Ok(record)
        })
    }

    fn delete_match(&self, id: MatchId) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM matches WHERE match_id = ?1", params![id])?;
            Ok(affected > 0)
        })
    }
}

fn match_from_row(row: &Row<'_>) -> rusqlite::Result<Match> {
    let score_raw = row.get::<_, i64>(3)?;
    let score = u8::try_from(score_raw).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(err))
    })?;
    let date_raw = row.get::<_, String>(4)?;
    let status_raw = row.get::<_, String>(5)?;
    let status = status_raw
        .parse::<MatchStatus>()
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, err.into()))?;

    Ok(Match {
        id: row.get(0)?,
        lost_item_id: row.get(1)?,
        found_item_id: row.get(2)?,
        score,
        match_date: parse_required_rfc3339(4, &date_raw)?,
        status,
    })
}
