//! Integration tests for the catalog HTTP adapter against a mock server.

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use heroes_client::api::HeroApi;
use heroes_client::config::ClientConfig;
use heroes_client::error::HeroApiError;
use heroes_core::error::ValidationError;
use heroes_core::hero::PaginationParams;
use heroes_core::ports::{HeroRepository, RepositoryError};
use heroes_core::validator::UNKNOWN_HERO_NAME;

fn api_for(server: &MockServer) -> HeroApi {
    let config = ClientConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    HeroApi::new(&config).expect("client should build")
}

fn page_body(items: serde_json::Value) -> serde_json::Value {
    json!({
        "length": 731,
        "size": 20,
        "page": 2,
        "firstPage": 1,
        "lastPage": 37,
        "startIndex": 20,
        "endIndex": 39,
        "items": items,
    })
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lists_heroes_with_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/heroes"))
        .and(query_param("page", "2"))
        .and(query_param("size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(json!([
            {
                "id": 21,
                "name": " Angel ",
                "slug": "21-angel",
                "biography": {"fullName": "Warren Kenneth Worthington III", "publisher": "Marvel Comics"},
                "images": {"xs": "xs/21.jpg", "sm": "", "md": "md/21.jpg", "lg": "lg/21.jpg"},
            },
            {"id": 22, "name": "Angel Dust", "slug": "22-angel-dust"},
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let page = api_for(&server)
        .fetch_heroes(PaginationParams::new(2, 20))
        .await
        .unwrap();

    assert_eq!(page.length, 731);
    assert_eq!(page.last_page, 37);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "Angel");
    assert_eq!(page.items[0].images.md, "md/21.jpg");
    assert_eq!(page.items[1].images.lg, "");
}

#[tokio::test]
async fn omits_unset_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/heroes"))
        .and(query_param_is_missing("page"))
        .and(query_param_is_missing("size"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let page = api_for(&server)
        .fetch_heroes(PaginationParams::default())
        .await
        .unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn missing_items_become_empty_list() {
    let server = MockServer::start().await;
    let mut body = page_body(json!([]));
    body.as_object_mut().unwrap().remove("items");
    Mock::given(method("GET"))
        .and(path("/heroes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let page = api_for(&server)
        .fetch_heroes(PaginationParams::new(1, 10))
        .await
        .unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn null_items_become_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/heroes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(json!(null))))
        .mount(&server)
        .await;

    let page = api_for(&server)
        .fetch_heroes(PaginationParams::new(1, 10))
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.length, 731);
}

#[tokio::test]
async fn invalid_items_become_placeholders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/heroes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(json!([{"id": "bad"}, {"id": 3, "name": "Abin Sur", "slug": "3-abin-sur"}]))),
        )
        .mount(&server)
        .await;

    let page = api_for(&server)
        .fetch_heroes(PaginationParams::new(2, 20))
        .await
        .unwrap();
    assert_eq!(page.items[0].id, 0);
    assert_eq!(page.items[0].name, UNKNOWN_HERO_NAME);
    assert_eq!(page.items[1].name, "Abin Sur");
}

#[tokio::test]
async fn malformed_envelope_is_a_validation_error() {
    let server = MockServer::start().await;
    let mut body = page_body(json!([]));
    body["size"] = json!(-10);
    Mock::given(method("GET"))
        .and(path("/heroes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .fetch_heroes(PaginationParams::new(1, 10))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        HeroApiError::Validation(ValidationError::PageFieldOutOfRange { field: "size", .. })
    );
}

// ---------------------------------------------------------------------------
// Single hero
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetches_hero_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hero"))
        .and(query_param("id", "70"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 70,
            "name": "Batman",
            "slug": "70-batman",
            "powerstats": {"intelligence": 100, "strength": 26, "speed": 27, "durability": 50, "power": 47, "combat": 100},
            "appearance": {"gender": "Male", "height": ["6'2", "188 cm"], "weight": ["210 lb", "95 kg"]},
            "work": {"occupation": "Businessman", "base": "Batcave, Stately Wayne Manor, Gotham City"},
            "images": {"lg": "lg/70.jpg"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let hero = api_for(&server).fetch_hero(70).await.unwrap();
    assert_eq!(hero.slug, "70-batman");
    assert_eq!(hero.powerstats.unwrap().intelligence, Some(100));
    assert_eq!(hero.appearance.unwrap().height, vec!["6'2", "188 cm"]);
    assert_eq!(hero.biography, None);
    assert_eq!(hero.connections, None);
}

#[tokio::test]
async fn invalid_hero_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hero"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5})))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_hero(5).await.unwrap_err();
    assert_matches!(err, HeroApiError::Validation(ValidationError::MissingText { field: "name" }));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hero"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_hero(1).await.unwrap_err();
    assert_matches!(err, HeroApiError::Decode(_));
}

// ---------------------------------------------------------------------------
// Error mapping through the port
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_error_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hero"))
        .respond_with(ResponseTemplate::new(404).set_body_string("hero not found"))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_hero(9999).await.unwrap_err();
    assert_matches!(
        err,
        HeroApiError::Status { status: 404, ref body } if body == "hero not found"
    );
}

#[tokio::test]
async fn repository_reports_user_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/heroes"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let repository: &dyn HeroRepository = &api_for(&server);
    let err = repository
        .get_heroes(PaginationParams::new(1, 10))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RepositoryError::Unavailable {
            message: "Service temporarily unavailable. Please try again later.".into(),
            status: Some(503),
        }
    );
}

#[tokio::test]
async fn unreachable_server_is_a_connection_error() {
    let server = MockServer::start().await;
    let api = api_for(&server);
    drop(server);

    let err = api.fetch_heroes(PaginationParams::new(1, 10)).await.unwrap_err();
    assert_matches!(err, HeroApiError::Request(_));
    assert_eq!(
        err.user_message(),
        "Could not connect to the server. Check your connection."
    );
}
