use claims::{assert_err, assert_none, assert_ok, assert_some};
use insta::assert_debug_snapshot;
use notam_decoder::{Notams, Residual, parse, split_reports};
use serde_json::Value;

fn load_fixtures() -> Vec<Value> {
    let text = std::fs::read_to_string("tests/fixtures/notams.json")
        .expect("Failed to read fixture file");
    let fixtures: Value = serde_json::from_str(&text).expect("Failed to parse fixture file");
    fixtures.as_array().cloned().expect("Fixture must be an array")
}

fn report(fixture: &Value) -> &str {
    fixture["report"].as_str().unwrap()
}

fn is_valid(fixture: &Value) -> bool {
    fixture.get("expected").is_some()
}

#[test]
fn decode_fixtures() {
    for fixture in load_fixtures().iter().filter(|f| is_valid(f)) {
        let name = fixture["name"].as_str().unwrap();
        let expected = &fixture["expected"];
        let (data, _) = assert_ok!(parse(report(fixture)), "{name}");

        assert_eq!(data.station, expected["station"], "{name}");
        assert_eq!(data.number, expected["number"], "{name}");
        assert_eq!(data.notam_type.raw, expected["type"], "{name}");
        assert_eq!(data.replaces.as_deref(), expected["replaces"].as_str(), "{name}");
        assert_eq!(data.body, expected["body"], "{name}");
        assert_eq!(data.is_permanent(), expected["permanent"], "{name}");

        let qualifiers = data.qualifiers.as_ref();
        let subject = qualifiers.and_then(|q| q.subject.as_ref()).map(|c| c.raw.as_str());
        let condition = qualifiers.and_then(|q| q.condition.as_ref()).map(|c| c.raw.as_str());
        assert_eq!(subject, expected["subject"].as_str(), "{name}");
        assert_eq!(condition, expected["condition"].as_str(), "{name}");

        let rfc3339 = |ts: &Option<notam_decoder::Timestamp>| ts.as_ref().map(|t| t.instant.to_rfc3339());
        assert_eq!(rfc3339(&data.start_time).as_deref(), expected["start"].as_str(), "{name}");
        assert_eq!(rfc3339(&data.end_time).as_deref(), expected["end"].as_str(), "{name}");
        assert_eq!(rfc3339(&data.issued).as_deref(), expected["issued"].as_str(), "{name}");
    }
}

#[test]
fn reject_broken_fixtures() {
    for fixture in load_fixtures().iter().filter(|f| !is_valid(f)) {
        let name = fixture["name"].as_str().unwrap();
        let err = assert_err!(parse(report(fixture)), "{name}");
        assert!(err.is_structural(), "{name}");
        assert_eq!(err.to_string(), fixture["error"].as_str().unwrap(), "{name}");
    }
}

#[test]
fn ingest_fixture_batch() {
    let fixtures = load_fixtures();
    let reports: Vec<&str> = fixtures.iter().map(report).collect();
    let valid: Vec<&str> = fixtures
        .iter()
        .filter(|f| is_valid(f))
        .map(|f| f["expected"]["number"].as_str().unwrap())
        .collect();

    let mut notams = Notams::new("KJFK");
    let result = notams.ingest_with_report(&reports);

    assert!(result.is_updated());
    assert_eq!(result.parsed, valid.len());
    assert_eq!(result.failures.len(), reports.len() - valid.len());
    assert_some!(notams.last_updated());

    let numbers: Vec<&str> = notams.data().iter().map(|n| n.number.as_str()).collect();
    assert_eq!(numbers, valid);
}

#[test]
fn ingest_batch_property() {
    let fixtures = load_fixtures();
    let (good, bad): (Vec<&Value>, Vec<&Value>) = fixtures.iter().partition(|f| is_valid(f));

    // Every mix of good and bad reports, interleaved
    for good_count in 0..=good.len() {
        for bad_count in 0..=bad.len() {
            let mut batch = Vec::new();
            let mut expected = Vec::new();
            for i in 0..good_count.max(bad_count) {
                if let Some(fixture) = bad.get(i).filter(|_| i < bad_count) {
                    batch.push(report(fixture));
                }
                if let Some(fixture) = good.get(i).filter(|_| i < good_count) {
                    batch.push(report(fixture));
                    expected.push(fixture["expected"]["number"].as_str().unwrap());
                }
            }

            let mut notams = Notams::new("KJFK");
            let updated = notams.ingest(&batch);

            assert_eq!(updated, good_count > 0);
            assert_eq!(notams.last_updated().is_some(), good_count > 0);
            let numbers: Vec<&str> = notams.data().iter().map(|n| n.number.as_str()).collect();
            assert_eq!(numbers, expected);
        }
    }
}

#[test]
fn split_and_ingest_feed() {
    let fixtures = load_fixtures();
    let feed = fixtures
        .iter()
        .filter(|f| is_valid(f))
        .map(report)
        .collect::<Vec<_>>()
        .join("\r\n\r\n");

    let reports = split_reports(&feed);
    assert_eq!(reports.len(), 5);

    let mut notams = Notams::new("KJFK");
    assert!(notams.ingest(&reports));
    assert_eq!(notams.data().len(), 5);
}

#[test]
fn residuals_of_faa_report() {
    let fixtures = load_fixtures();
    let (_, residuals) = assert_ok!(parse(report(&fixtures[0])));
    assert_debug_snapshot!(residuals, @r#"
    [
        Trailer(
            "SOURCE: KJFK",
        ),
    ]
    "#);
}

#[test]
fn qualifiers_of_gun_firing_report() {
    let fixture = load_fixtures()
        .into_iter()
        .find(|f| f["name"] == "gun_firing_replacement")
        .unwrap();
    let (data, residuals) = assert_ok!(parse(report(&fixture)));
    let qualifiers = assert_some!(data.qualifiers);

    let describe = |codes: &[notam_decoder::Code]| {
        codes.iter().map(|c| c.description).collect::<Vec<_>>()
    };
    assert_eq!(qualifiers.fir, "EGTT");
    assert_eq!(assert_some!(qualifiers.traffic).description, "IFR and VFR");
    assert_eq!(describe(&qualifiers.purpose), ["Briefing", "Flight Operations"]);
    assert_eq!(describe(&qualifiers.scope), ["Aerodrome", "Warning"]);
    assert_eq!(qualifiers.upper.value, 1);
    assert_eq!(assert_some!(qualifiers.radius).spoken, "two");

    let coord = assert_some!(qualifiers.coord);
    assert_eq!(coord.to_compact(), "5125N00028W");

    assert_eq!(assert_some!(data.lower).spoken, "surface");
    assert_eq!(assert_some!(data.upper).value, 100);
    assert_eq!(
        residuals,
        vec![Residual::Field {
            tag: 'D',
            text: "DAILY 0900-1700".to_string()
        }]
    );
}

#[test]
fn cancellation_has_no_qualifiers() {
    let fixture = load_fixtures()
        .into_iter()
        .find(|f| f["name"] == "cancellation_without_qualifiers")
        .unwrap();
    let (data, _) = assert_ok!(parse(report(&fixture)));
    assert_none!(data.qualifiers);
    assert_none!(data.end_time);
}

#[cfg(feature = "serde")]
#[test]
fn serialize_to_json() {
    let (data, _) = assert_ok!(parse(
        "01/113 NOTAMN\nQ) ZNY/QMXLC/IV/NBO/A/000/999/4038N07346W005\nA) KJFK B) 2101081328 C) PERM\nE) TWY A CLSD"
    ));
    let json = serde_json::to_value(&data).unwrap();

    assert_eq!(json["station"], "KJFK");
    assert_eq!(json["notam_type"]["description"], "New");
    assert_eq!(json["qualifiers"]["subject"]["raw"], "MX");
    assert_eq!(json["end_time"]["instant"], "2100-01-01T00:00:00+00:00");
    assert_eq!(json["body"], "TWY A CLSD");
}
