use fixture_scraper::model::record::MatchRecord;

#[test]
fn serializes_with_camel_case_field_names() {
    let record = MatchRecord {
        home_team: "River Plate".to_string(),
        away_team: "Gimnasia La Plata".to_string(),
        date_time: "2025-11-02T18:00:00-03:00".to_string(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["homeTeam"], "River Plate");
    assert_eq!(json["awayTeam"], "Gimnasia La Plata");
    assert_eq!(json["dateTime"], "2025-11-02T18:00:00-03:00");
}

#[test]
fn round_trips_through_json() {
    let record = MatchRecord {
        home_team: "San Lorenzo".to_string(),
        away_team: "Talleres".to_string(),
        date_time: "2025-11-02T20:00:00-03:00".to_string(),
    };

    let json = serde_json::to_string(&record).unwrap();
    let back: MatchRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
