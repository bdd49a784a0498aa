use super::{insert_person, insert_planet_with_id, insert_user, send, send_json, test_state};
use crate::routes::ENDPOINTS;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_health_reports_package() {
    let state = test_state().await;
    let (status, json) = send_json(&state, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "status": "ok",
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })
    );
}

#[tokio::test]
async fn test_ready_counts_rows_per_table() {
    let state = test_state().await;
    insert_user(&state.pool, "han", "han@falcon.io").await;
    insert_person(&state.pool, "Chewbacca", "200BBY", "male").await;

    let (status, json) = send_json(&state, Method::GET, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "status": "ok",
            "rows": {"favorites": 0, "people": 1, "planets": 0, "users": 1}
        })
    );
}

// a reachable database without the tables is not ready
#[tokio::test]
async fn test_ready_degraded_when_table_missing() {
    let state = test_state().await;
    sqlx::query("DROP TABLE favorites").execute(&state.pool).await.unwrap();

    let (status, json) = send_json(&state, Method::GET, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json, json!({"status": "degraded", "failed_table": "favorites"}));
}

// the sitemap lists every endpoint and links the parameterless ones
#[tokio::test]
async fn test_sitemap_lists_endpoints() {
    let state = test_state().await;
    let (status, body) = send(&state, Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(body).unwrap();
    for endpoint in ENDPOINTS {
        assert!(html.contains(endpoint.path), "missing {}", endpoint.path);
    }
    assert!(html.contains("<a href='/people'>/people</a>"));
    assert!(!html.contains("<a href='/people/{people_id}'>"));
    assert!(html.contains("POST, DELETE /favorites/user/{user_id}/planet/{planet_id}"));
}

#[tokio::test]
async fn test_trailing_slash_is_ignored() {
    let state = test_state().await;
    let (status, json) = send_json(&state, Method::GET, "/people/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"people": []}));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let state = test_state().await;
    let (status, _) = send(&state, Method::GET, "/starships").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// every sitemap entry must be served by the router, with ids filled in
#[tokio::test]
async fn test_every_sitemap_entry_is_routed() {
    let state = test_state().await;
    insert_user(&state.pool, "luke", "luke@tatooine.net").await;
    insert_person(&state.pool, "Luke Skywalker", "19BBY", "male").await;
    insert_planet_with_id(&state.pool, 1, "Tatooine", "arid", "200000").await;

    for endpoint in ENDPOINTS {
        let uri = fill_ids(endpoint.path);
        for method in endpoint.methods {
            let method = Method::from_bytes(method.as_bytes()).unwrap();
            let (status, _) = send(&state, method.clone(), &uri).await;
            assert_ne!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
            assert_ne!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
        }
    }
}

fn fill_ids(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut in_param = false;
    for c in template.chars() {
        match c {
            '{' => {
                in_param = true;
                out.push('1');
            }
            '}' => in_param = false,
            _ if !in_param => out.push(c),
            _ => {}
        }
    }
    out
}
