use bed_finder::adapters::rest::HOSPITAL_COLUMNS;
use bed_finder::core::HospitalDirectory;
use bed_finder::{
    build_listing, AvailabilityStatus, BackendConfig, ListingSource, RestHospitalDirectory,
    DEFAULT_SPEED_KMH, REFERENCE_POINT,
};
use httpmock::prelude::*;

fn backend(server: &MockServer) -> BackendConfig {
    BackendConfig {
        retry_delay_millis: Some(0),
        ..BackendConfig::new(server.base_url()).with_api_key("anon-key")
    }
}

fn seed_names(listing: &bed_finder::Listing) -> Vec<&str> {
    listing
        .rows
        .iter()
        .map(|r| r.hospital.name.as_str())
        .collect()
}

#[tokio::test]
async fn test_live_directory_rows_are_listed() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/hospitals")
            .query_param("select", HOSPITAL_COLUMNS)
            .header("apikey", "anon-key")
            .header("authorization", "Bearer anon-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {
                    "id": "9f1c", "name": "Ispat General Hospital", "location": "Sector 19",
                    "latitude": 22.2035, "longitude": 84.8447, "rating": 4.3,
                    "bed_availability": [{"available_beds": 35}]
                },
                {
                    "id": "a2b0", "name": "Jeevan Jyoti Clinic", "location": "Udit Nagar",
                    "latitude": 22.215, "longitude": 84.83, "rating": 3.9,
                    "bed_availability": []
                }
            ]));
    });

    let directory = RestHospitalDirectory::new(backend(&server)).unwrap();
    let listing = build_listing(&directory, REFERENCE_POINT, DEFAULT_SPEED_KMH, None).await;

    api_mock.assert();
    assert_eq!(listing.source, ListingSource::Directory);
    assert_eq!(
        seed_names(&listing),
        ["Ispat General Hospital", "Jeevan Jyoti Clinic"]
    );

    let first = &listing.rows[0];
    assert_eq!(first.status, AvailabilityStatus::Available);
    assert_eq!(first.distance.display_km(), "2.5");
    assert_eq!(first.distance.eta_minutes, 4);

    let second = &listing.rows[1];
    assert_eq!(second.hospital.available_beds, 0);
    assert_eq!(second.status, AvailabilityStatus::Full);
    assert_eq!(second.distance.display_km(), "1.8");
    assert_eq!(second.distance.eta_minutes, 3);
}

#[tokio::test]
async fn test_server_error_is_retried_once_then_falls_back() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/v1/hospitals");
        then.status(500).body("upstream unavailable");
    });

    let directory = RestHospitalDirectory::new(backend(&server)).unwrap();
    let err = directory.fetch_hospitals().await.unwrap_err();
    assert!(err.is_recoverable());
    api_mock.assert_hits(2);

    let listing = build_listing(&directory, REFERENCE_POINT, DEFAULT_SPEED_KMH, None).await;
    assert_eq!(listing.source, ListingSource::Fallback);
    assert_eq!(
        seed_names(&listing),
        ["CWS Hospital", "RGH Government Hospital", "Hi-Tech Medical College"]
    );
    let statuses: Vec<AvailabilityStatus> = listing.rows.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        [
            AvailabilityStatus::Available,
            AvailabilityStatus::Limited,
            AvailabilityStatus::Full
        ]
    );
}

#[tokio::test]
async fn test_retry_disabled_reads_once() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/v1/hospitals");
        then.status(503);
    });

    let config = BackendConfig {
        retry_attempts: Some(0),
        ..backend(&server)
    };
    let directory = RestHospitalDirectory::new(config).unwrap();
    assert!(directory.fetch_hospitals().await.is_err());
    api_mock.assert_hits(1);
}

#[tokio::test]
async fn test_negative_bed_count_falls_back_without_retry() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/v1/hospitals");
        then.status(200).json_body(serde_json::json!([
            {
                "id": "bad", "name": "Miscounted", "location": "Rourkela",
                "latitude": 22.22, "longitude": 84.84, "rating": 4.0,
                "bed_availability": [{"available_beds": -4}]
            }
        ]));
    });

    let directory = RestHospitalDirectory::new(backend(&server)).unwrap();
    let listing = build_listing(&directory, REFERENCE_POINT, DEFAULT_SPEED_KMH, None).await;

    api_mock.assert_hits(1);
    assert_eq!(listing.source, ListingSource::Fallback);
    assert_eq!(listing.rows.len(), 3);
}

#[tokio::test]
async fn test_malformed_body_falls_back() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/v1/hospitals");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{\"message\":\"not a list\"}");
    });

    let directory = RestHospitalDirectory::new(backend(&server)).unwrap();
    let listing = build_listing(&directory, REFERENCE_POINT, DEFAULT_SPEED_KMH, Some(2.0)).await;

    api_mock.assert_hits(2);
    assert_eq!(listing.source, ListingSource::Fallback);
    assert_eq!(
        seed_names(&listing),
        ["RGH Government Hospital", "Hi-Tech Medical College"]
    );
}

#[tokio::test]
async fn test_unreachable_backend_falls_back() {
    // Nothing listens on port 9 in the test environment.
    let config = BackendConfig {
        timeout_seconds: Some(2),
        retry_delay_millis: Some(0),
        ..BackendConfig::new("http://127.0.0.1:9")
    };
    let directory = RestHospitalDirectory::new(config).unwrap();
    let listing = build_listing(&directory, REFERENCE_POINT, DEFAULT_SPEED_KMH, None).await;

    assert_eq!(listing.source, ListingSource::Fallback);
}
