use pokedex_rs::catalog::PokeApi;
use pokedex_rs::network::HttpClient;
use pokedex_rs::{filter, Aggregator, LookupError};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

const NAMES: [&str; 6] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
];

/// Builds a PokéAPI-shaped detail document
fn pokemon_json(id: u32, name: &str) -> Value {
    let moves: Vec<Value> = (0..8)
        .map(|i| json!({ "move": { "name": format!("{}-move-{}", name, i), "url": "" } }))
        .collect();
    let kind = if id <= 3 { "grass" } else { "fire" };

    json!({
        "id": id,
        "name": name,
        "order": id,
        "sprites": {
            "front_default": format!("https://img.example/{}.png", id),
            "back_default": format!("https://img.example/back/{}.png", id)
        },
        "types": [
            { "slot": 1, "type": { "name": kind, "url": "" } }
        ],
        "height": 7 * id,
        "weight": 69 * id,
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "overgrow", "url": "" }, "is_hidden": false, "slot": 1 }
        ],
        "moves": moves
    })
}

/// Mounts one detail endpoint per name; earlier ids respond slower
async fn mount_catalog(server: &MockServer) {
    for (index, name) in NAMES.iter().enumerate() {
        let id = index as u32 + 1;
        let delay = Duration::from_millis(10 * (NAMES.len() - index) as u64);
        Mock::given(method("GET"))
            .and(path(format!("/pokemon/{}", id)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(pokemon_json(id, name))
                    .set_delay(delay),
            )
            .mount(server)
            .await;
    }
}

fn aggregator_for(server: &MockServer) -> Aggregator {
    let client = HttpClient::new().unwrap();
    Aggregator::new(Arc::new(PokeApi::new(client, server.uri())))
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_catalog_orders_by_id() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server).await;

    let records = aggregator_for(&mock_server).fetch_catalog(6).await.unwrap();

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["#001", "#002", "#003", "#004", "#005", "#006"]);

    let bulbasaur = &records[0];
    assert_eq!(bulbasaur.name, "Bulbasaur");
    assert_eq!(bulbasaur.height_meters, "0.7");
    assert_eq!(bulbasaur.weight_kilograms, "6.9");
    assert_eq!(bulbasaur.types[0].color, "#7AC74C");
    assert_eq!(bulbasaur.moves.len(), 5);
    assert_eq!(
        bulbasaur.back_image_url.as_deref(),
        Some("https://img.example/back/1.png")
    );

    assert_eq!(records[5].name, "Charizard");
    assert_eq!(records[5].types[0].color, "#EE8130");
}

#[tokio::test]
async fn test_fetch_catalog_with_bounded_concurrency() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server).await;

    let records = aggregator_for(&mock_server)
        .with_max_in_flight(Some(2))
        .fetch_catalog(6)
        .await
        .unwrap();

    assert_eq!(records.len(), 6);
    assert!(records.windows(2).all(|w| w[0].number < w[1].number));
}

#[tokio::test]
async fn test_missing_entry_fails_whole_run() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server).await;

    // ids 7 and 8 have no mock, so wiremock answers 404
    let err = aggregator_for(&mock_server).fetch_catalog(8).await.unwrap_err();

    assert_eq!(err.failing_id, 7);
    assert_eq!(err.cause, LookupError::HttpStatus { status: 404 });
}

#[tokio::test]
async fn test_malformed_entry_fails_whole_run() {
    let mock_server = MockServer::start().await;

    for id in [1, 3] {
        Mock::given(method("GET"))
            .and(path(format!("/pokemon/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_json(id, NAMES[id as usize - 1])))
            .mount(&mock_server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/pokemon/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 2, "name": "ivysaur" })))
        .mount(&mock_server)
        .await;

    let err = aggregator_for(&mock_server).fetch_catalog(3).await.unwrap_err();

    assert_eq!(err.failing_id, 2);
    assert!(matches!(err.cause, LookupError::MalformedPayload(_)));
}

#[tokio::test]
async fn test_unreachable_catalog_is_network_error() {
    let client = HttpClient::new().unwrap();
    let aggregator = Aggregator::new(Arc::new(PokeApi::new(client, "http://127.0.0.1:1")));

    let err = aggregator.fetch_catalog(2).await.unwrap_err();
    assert_eq!(err.failing_id, 1);
    assert!(matches!(err.cause, LookupError::Network(_)));
}

// ============================================================================
// Aggregate-then-search
// ============================================================================

#[tokio::test]
async fn test_search_over_aggregated_catalog() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server).await;

    let records = aggregator_for(&mock_server).fetch_catalog(6).await.unwrap();

    let saurs: Vec<String> = filter(&records, "SAUR").into_iter().map(|r| r.name).collect();
    assert_eq!(saurs, vec!["Bulbasaur", "Ivysaur", "Venusaur"]);

    let by_id = filter(&records, "004");
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].name, "Charmander");

    assert_eq!(filter(&records, ""), records);
    assert!(filter(&records, "999").is_empty());
}
