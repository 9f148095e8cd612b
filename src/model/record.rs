use serde::{Deserialize, Serialize};

/// A fully resolved fixture, ready for JSON emission.
///
/// `date_time` is an ISO-8601 string with UTC offset, localized to Argentine
/// civil time at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub date_time: String,
}
