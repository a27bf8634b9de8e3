//! End-to-end chart generation with in-memory resolvers (no network).

use std::io;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use kundli_engine::{BirthRequest, ErrorKind, KundliEngine, KundliError, KundliResponse};
use kundli_geo::{GeoCoordinate, GeoError, GeoResolver, StaticResolver};
use kundli_vedic_base::{
    ayanamsha_deg, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};
use tracing_subscriber::fmt::MakeWriter;

const DEFAULT_GENDER: &str = "Not specified";

fn origin() -> GeoCoordinate {
    GeoCoordinate::new(0.0, 0.0).unwrap()
}

fn engine() -> KundliEngine<StaticResolver> {
    let resolver = StaticResolver::new()
        .with_place("Null Island", origin())
        .with_place("Kozhikode, Kerala", GeoCoordinate::new(10.522, 76.172).unwrap());
    KundliEngine::new(resolver, DEFAULT_GENDER)
}

/// Counts calls and always fails.
#[derive(Default)]
struct CountingFailResolver {
    calls: AtomicUsize,
}

#[async_trait]
impl GeoResolver for CountingFailResolver {
    async fn resolve(&self, place: &str) -> Result<GeoCoordinate, GeoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(GeoError::Timeout {
            place: place.to_string(),
        })
    }
}

#[tokio::test]
async fn j2000_at_null_island() {
    let req = BirthRequest::new("Test Person", "2000-01-01", "12:00", "Null Island");
    let chart = engine().generate(&req).await.unwrap();

    assert_eq!(chart.personal_info.julian_day, 2_451_545.0);
    assert_eq!(chart.ayanamsa, ayanamsha_deg(2_451_545.0));
    assert_eq!(chart.personal_info.gender, DEFAULT_GENDER);
    assert_eq!(chart.personal_info.coordinates, origin());
}

#[tokio::test]
async fn missing_tob_lists_field() {
    let req = BirthRequest {
        tob: None,
        ..BirthRequest::new("Test Person", "2000-01-01", "", "Null Island")
    };
    let resp = engine().respond(&req).await;
    let KundliResponse::Error(err) = resp else {
        panic!("expected error response");
    };
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.required_fields.unwrap().contains_key("tob"));
}

#[tokio::test]
async fn unknown_place_is_geocoding_error() {
    let place = "##nonexistent-place-xyz##";
    let req = BirthRequest::new("Test Person", "2000-01-01", "12:00", place);
    let resp = engine().respond(&req).await;
    assert!(!resp.is_success());

    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["kind"], "geocoding");
    assert!(json["error"].as_str().unwrap().contains(place));
    for field in ["ascendant", "sunPosition", "houses", "ayanamsa"] {
        assert!(json.get(field).is_none(), "unexpected field {field}");
    }
}

#[test]
fn wraparound_lands_in_aries() {
    let lon = normalize_360(359.999_999 + 0.000_002);
    assert!((lon - 0.000_001).abs() < 1e-9);
    let info = rashi_from_longitude(lon);
    assert_eq!(info.rashi_index, 0);
    assert_eq!(info.rashi.western_name(), "Aries");
}

#[test]
fn bharani_lower_edge_inclusive() {
    let info = nakshatra_from_longitude(13.333_333).unwrap();
    assert_eq!(info.nakshatra.name(), "Bharani");
    assert_eq!(info.pada, 1);
}

#[tokio::test]
async fn invalid_input_never_reaches_geocoder() {
    let resolver = Arc::new(CountingFailResolver::default());
    let engine = KundliEngine::new(Arc::clone(&resolver), DEFAULT_GENDER);

    let err = engine
        .generate(&BirthRequest::new("A", "2001-02-29", "10:00", "Somewhere"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);

    let err = engine
        .generate(&BirthRequest::new("A", "2001-02-28", "10:00", "Somewhere"))
        .await
        .unwrap_err();
    assert!(matches!(err, KundliError::Geocoding { ref place, .. } if place == "Somewhere"));
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn kozhikode_chart() {
    let req = BirthRequest::new("Asha", "1991-06-18", "07:10", "kozhikode, kerala")
        .with_gender("Female");
    let chart = engine().generate(&req).await.unwrap();

    assert!((chart.personal_info.julian_day - 2_448_425.798_611).abs() < 1e-5);
    assert_eq!(chart.personal_info.gender, "Female");

    let sidereal = &chart.sun_position.sidereal;
    assert!((sidereal.position.longitude - 62.931_64).abs() < 1e-3);
    assert_eq!(sidereal.position.rashi, "Mithuna");
    assert_eq!(sidereal.nakshatra.name, "Mrigashira");
    assert_eq!(sidereal.nakshatra.pada, 3);

    assert!((chart.ascendant.longitude - 100.221_99).abs() < 1e-3);
    assert_eq!(chart.ascendant.rashi, "Karka");
    assert_eq!(chart.houses[0].rashi, "Karka");
}

#[tokio::test]
async fn success_body_shape() {
    let req = BirthRequest::new("Test Person", "2000-01-01", "12:00", "Null Island");
    let json = serde_json::to_value(engine().respond(&req).await).unwrap();

    let info = &json["personalInfo"];
    assert_eq!(info["fullName"], "Test Person");
    assert_eq!(info["dateOfBirth"], "2000-01-01");
    assert_eq!(info["timeOfBirth"], "12:00");
    assert_eq!(info["placeOfBirth"], "Null Island");
    assert_eq!(info["coordinates"]["lat"], 0.0);

    let sidereal = &json["sunPosition"]["sidereal"];
    for key in ["longitude", "sign", "rashi", "degree", "dms"] {
        assert!(sidereal.get(key).is_some(), "sidereal.{key} missing");
    }
    assert_eq!(sidereal["nakshatra"]["ruler"], "Venus");
    assert_eq!(json["houses"].as_array().unwrap().len(), 12);
    assert_eq!(json["houses"][0]["house"], 1);
    assert!(json["disclaimer"].as_str().unwrap().len() > 20);
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let engine = Arc::new(engine());
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                let tob = format!("{:02}:00", i % 24);
                let req = BirthRequest::new("P", "2000-01-01", &tob, "Null Island");
                (i, engine.generate(&req).await.unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (i, chart) = handle.await.unwrap();
        let req = BirthRequest::new("P", "2000-01-01", &format!("{:02}:00", i % 24), "Null Island");
        let again = engine.generate(&req).await.unwrap();
        assert_eq!(chart, again);
    }
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn logs_leave_out_full_name() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let req = BirthRequest::new("Meenakshi Iyer", "2000-01-01", "12:00", "Null Island");
    engine().generate(&req).await.unwrap();

    let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(text.contains("kundli generated"), "logs: {text}");
    assert!(!text.contains("Meenakshi"), "logs: {text}");
}
