//! `GET /`: HTML index of the registered endpoints.

use crate::routes::ENDPOINTS;
use axum::http::{header, HeaderMap};
use axum::response::Html;

pub async fn sitemap(headers: HeaderMap) -> Html<String> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    Html(render_sitemap(host))
}

pub(crate) fn render_sitemap(host: &str) -> String {
    let items: String = ENDPOINTS
        .iter()
        .map(|endpoint| {
            let methods = endpoint.methods.join(", ");
            if endpoint.path.contains('{') {
                format!("<li>{} {}</li>", methods, endpoint.path)
            } else {
                format!(
                    "<li>{} <a href='{}'>{}</a></li>",
                    methods, endpoint.path, endpoint.path
                )
            }
        })
        .collect();
    format!(
        concat!(
            "<div style=\"text-align: center;\">",
            "<h1>Star Wars API</h1>",
            "<p>API HOST: http://{}</p>",
            "<p>Available endpoints:</p>",
            "<ul style=\"text-align: left;\">{}</ul>",
            "</div>"
        ),
        host, items
    )
}
