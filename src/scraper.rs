use std::fmt;

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::America::Argentina::Buenos_Aires;
use chrono_tz::Tz;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::model::record::MatchRecord;
use crate::roster::Roster;

/// One recoverable per-block parse failure, reported on the diagnostic
/// stream. Empty blocks and unrecognized team names are skipped without a
/// diagnostic; only these two cases are surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The teams text had no run of two or more whitespace characters to
    /// split home from away on.
    ColumnSplit { teams_text: String },
    /// Both teams resolved, but reference date + time token did not form a
    /// valid calendar date-time.
    DateTime {
        home: String,
        away: String,
        error: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ColumnSplit { teams_text } => {
                write!(f, "Could not split teams in line: {}", teams_text)
            }
            Diagnostic::DateTime { home, away, error } => {
                write!(
                    f,
                    "Could not parse date/time for match '{} vs {}': {}",
                    home, away, error
                )
            }
        }
    }
}

/// Parses loosely formatted schedule text into match records.
///
/// The expected layout is one match per line: a `HH:MM` kickoff time glued to
/// the home column, two or more spaces, then the away column. Each match line
/// may be followed by venue lines, which are ignored. Kickoff times are
/// interpreted in Argentine civil time.
#[derive(Debug)]
pub struct Scraper {
    roster: Roster,
    // Anchors each match block at its kickoff time.
    time_anchor: Regex,
    // The deliberate column gap; single spaces belong to team names.
    column_gap: Regex,
}

impl Scraper {
    /// Construct a scraper around the given roster of canonical team names.
    pub fn new(roster: Roster) -> Result<Self, String> {
        let time_anchor = Regex::new(r"\d{2}:\d{2}")
            .map_err(|e| format!("Failed to compile time anchor pattern: {}", e))?;
        let column_gap = Regex::new(r"\s{2,}")
            .map_err(|e| format!("Failed to compile column gap pattern: {}", e))?;
        Ok(Self {
            roster,
            time_anchor,
            column_gap,
        })
    }

    /// Parse raw schedule text against a reference date (`YYYY-MM-DD`).
    ///
    /// Returns the successfully built records in input order, plus one
    /// diagnostic per recoverable per-block failure. No failure aborts the
    /// run; text with no kickoff times yields an empty record list.
    #[instrument(level = "info", skip(self, raw_text), fields(bytes = raw_text.len()))]
    pub fn parse(&self, raw_text: &str, date: &str) -> (Vec<MatchRecord>, Vec<Diagnostic>) {
        let mut records = Vec::new();
        let mut diagnostics = Vec::new();

        for block in self.split_blocks(raw_text) {
            match self.parse_block(block, date) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(diag) => {
                    warn!(diagnostic = %diag, "Skipping block");
                    diagnostics.push(diag);
                }
            }
        }

        info!(
            records = records.len(),
            reported_failures = diagnostics.len(),
            "Parsed schedule text"
        );
        (records, diagnostics)
    }

    /// Partition the raw text into blocks, each starting at a `HH:MM` token
    /// and running up to the next token or end of text. Leading text before
    /// the first token is discarded.
    fn split_blocks<'a>(&self, raw_text: &'a str) -> Vec<&'a str> {
        let starts: Vec<usize> = self
            .time_anchor
            .find_iter(raw_text)
            .map(|m| m.start())
            .collect();
        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(raw_text.len());
                &raw_text[start..end]
            })
            .collect()
    }

    /// Parse one block. `Ok(None)` means the block was skipped silently
    /// (empty, or a team was not recognized); `Err` carries a reportable
    /// failure.
    fn parse_block(&self, block: &str, date: &str) -> Result<Option<MatchRecord>, Diagnostic> {
        // First line carries the match data; the rest is venue noise.
        let trimmed = block.trim();
        let Some(data_line) = trimmed.lines().next() else {
            return Ok(None);
        };
        if data_line.len() < 5 {
            return Ok(None);
        }

        let (time_token, rest) = data_line.split_at(5);
        let teams_text = rest.trim();

        let mut parts = self.column_gap.splitn(teams_text, 2);
        let (home_text, away_text) = match (parts.next(), parts.next()) {
            (Some(home), Some(away)) => (home.trim(), away.trim()),
            _ => {
                return Err(Diagnostic::ColumnSplit {
                    teams_text: teams_text.to_string(),
                });
            }
        };

        // Each side is resolved against its own substring only. A side that
        // matches nothing means this block does not describe a known match.
        let (Some(home), Some(away)) = (
            self.roster.resolve(home_text),
            self.roster.resolve(away_text),
        ) else {
            return Ok(None);
        };

        match localize_kickoff(date, time_token) {
            Ok(kickoff) => Ok(Some(MatchRecord {
                home_team: home.to_string(),
                away_team: away.to_string(),
                date_time: kickoff.to_rfc3339(),
            })),
            Err(e) => Err(Diagnostic::DateTime {
                home: home.to_string(),
                away: away.to_string(),
                error: e,
            }),
        }
    }
}

/// Combine a `YYYY-MM-DD` reference date and a `HH:MM` time token into a
/// date-time in Argentine civil time. The named zone is used rather than a
/// literal UTC-3 offset so historical rule changes stay correct.
fn localize_kickoff(date: &str, time: &str) -> Result<DateTime<Tz>, String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| e.to_string())?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").map_err(|e| e.to_string())?;
    match Buenos_Aires.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Ok(dt),
        // A clock rolled back over this local time; take the second,
        // standard-time pass.
        LocalResult::Ambiguous(_, latest) => Ok(latest),
        LocalResult::None => Err(format!(
            "local time {} {} does not exist in America/Argentina/Buenos_Aires",
            date, time
        )),
    }
}
