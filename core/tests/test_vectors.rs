//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences. The same files are meant
//! to be replayed by the mobile hosts against the C ABI.

use pokedex_core::{
    normalize_query, ApiError, DetailRecord, HttpMethod, HttpRequest, HttpResponse,
    NamedResource, PokedexClient, SummaryRecord,
};

const BASE_URL: &str = "https://pokeapi.co/api/v2";

fn client() -> PokedexClient {
    PokedexClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated(value: &serde_json::Value) -> HttpResponse {
    HttpResponse {
        status: value["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: value["body"].as_str().unwrap().to_string(),
    }
}

fn assert_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");
    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> = headers
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }
}

fn assert_error(name: &str, err: ApiError, expected: &str) {
    match expected {
        "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound, got {err}"),
        "Http" => assert!(matches!(err, ApiError::Http { .. }), "{name}: expected Http, got {err}"),
        "Deserialization" => assert!(
            matches!(err, ApiError::Deserialization(_)),
            "{name}: expected Deserialization, got {err}"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// List page
// ---------------------------------------------------------------------------

#[test]
fn list_page_test_vectors() {
    let raw = include_str!("../../test-vectors/list_page.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let limit = case["input_limit"].as_u64().unwrap() as u32;

        // Verify build
        let req = c.build_list_page(limit).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        // Verify parse
        let result = c.parse_list_page(simulated(&case["simulated_response"]));
        if let Some(expected_error) = case.get("expected_error") {
            assert_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
            continue;
        }
        let entries = result.unwrap();
        let expected: Vec<NamedResource> = case["expected_entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| NamedResource {
                name: e["name"].as_str().unwrap().to_string(),
                url: e["url"].as_str().unwrap().to_string(),
            })
            .collect();
        assert_eq!(entries, expected, "{name}: entries");

        // Follow every reference, answering positionally.
        let summaries: Vec<SummaryRecord> = entries
            .iter()
            .zip(case["entry_responses"].as_array().unwrap())
            .map(|(entry, response)| {
                let req = c.build_get_by_reference(&entry.url);
                assert_eq!(req.url, entry.url, "{name}: reference url");
                c.parse_summary(simulated(response)).unwrap()
            })
            .collect();
        let expected: Vec<SummaryRecord> =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(summaries, expected, "{name}: summaries");
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn search_test_vectors() {
    let raw = include_str!("../../test-vectors/search.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let key = normalize_query(case["input_term"].as_str().unwrap()).unwrap();

        let req = c.build_get_pokemon(&key).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_search(simulated(&case["simulated_response"]));
        if let Some(expected_error) = case.get("expected_error") {
            assert_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let expected: Vec<SummaryRecord> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[test]
fn detail_test_vectors() {
    let raw = include_str!("../../test-vectors/detail.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_get_pokemon(case["input_name"].as_str().unwrap()).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_detail(simulated(&case["simulated_response"]));
        if let Some(expected_error) = case.get("expected_error") {
            assert_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let detail = result.unwrap();
            let expected: DetailRecord =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(detail, expected, "{name}: parsed result");
            assert_eq!(
                detail.theme_color(),
                case["expected_color"].as_str().unwrap(),
                "{name}: theme color"
            );
        }
    }
}
