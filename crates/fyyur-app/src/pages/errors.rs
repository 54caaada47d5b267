use axum::response::{Html, IntoResponse};
use http::{StatusCode, Uri};
use tracing::debug;

use super::{esc, layout, Section};
use crate::notice::Notice;

pub fn error_page(
    status: StatusCode,
    title: &str,
    notices: &[Notice],
    details: &[String],
) -> Html<String> {
    let message = match status {
        StatusCode::NOT_FOUND => "The page you are looking for does not exist.",
        StatusCode::UNPROCESSABLE_ENTITY => "The submitted form is not valid.",
        s if s.is_server_error() => "Something went wrong on our side.",
        _ => "The request could not be completed.",
    };
    let details = if details.is_empty() {
        String::new()
    } else {
        let items: String = details
            .iter()
            .map(|d| format!("<li>{}</li>", esc(d)))
            .collect();
        format!(
            r#"<ul class="error-list">{items}</ul>
<p><a href="javascript:history.back()">Go back and correct the form</a></p>"#
        )
    };
    let content = format!(
        r#"<h1>{} {}</h1>
<p class="subtitle">{message}</p>
{details}
<p><a href="/">Back to the home page</a></p>"#,
        status.as_u16(),
        esc(title)
    );
    layout(title, Section::Home, notices, &content)
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!("No route for {uri}");
    (
        StatusCode::NOT_FOUND,
        error_page(StatusCode::NOT_FOUND, "Not Found", &[], &[]),
    )
}
