//! Server rendered HTML pages.
//!
//! Every page is a complete document built with `format!`. All values coming
//! from records or requests pass through [`esc`] before they are interpolated.

use axum::{extract::FromRequestParts, response::Html};
use http::{request::Parts, StatusCode};

use crate::{
    notice::{Level, Notice, Notices},
    state::AppState,
};

pub mod artist;
pub mod errors;
pub mod filters;
pub mod forms;
pub mod home;
pub mod show;
pub mod venue;

pub const SITE_NAME: &str = "Fyyur";

/// Escapes text for use in HTML content and quoted attributes.
pub fn esc(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// State code with its full name as a tooltip.
fn state_html(code: &str) -> String {
    match fyyur_types::choices::state_name(code) {
        Some(name) => format!(r#"<abbr title="{}">{}</abbr>"#, esc(name), esc(code)),
        None => esc(code),
    }
}

fn genres_html(genres: &[String]) -> String {
    let tags: String = genres
        .iter()
        .map(|g| format!("<span>{}</span>", esc(g)))
        .collect();
    format!(r#"<p class="genres">{tags}</p>"#)
}

fn contact_html(phone: Option<&str>, links: &[(&str, Option<&str>)]) -> String {
    let mut items = Vec::new();
    if let Some(phone) = phone {
        items.push(format!("<li>☎ {}</li>", esc(phone)));
    }
    for (label, link) in links {
        if let Some(link) = link {
            let link = esc(link);
            items.push(format!(r#"<li><a href="{link}" target="_blank">{label}</a></li>"#));
        }
    }
    format!(r#"<ul class="items">{}</ul>"#, items.join(""))
}

fn seeking_html(seeking: bool, what: &str, description: Option<&str>) -> String {
    if seeking {
        format!(
            r#"<div class="seeking"><p><strong>Currently seeking {what}</strong></p><p>{}</p></div>"#,
            esc(description.unwrap_or_default())
        )
    } else {
        format!(r#"<p class="subtitle">Not currently seeking {what}</p>"#)
    }
}

fn image_html(link: Option<&str>, alt: &str) -> String {
    link.map(|l| format!(r#"<img src="{}" alt="{}">"#, esc(l), esc(alt)))
        .unwrap_or_default()
}

fn shows_heading(count: usize, when: &str) -> String {
    let noun = if count == 1 { "Show" } else { "Shows" };
    format!("<h2>{count} {when} {noun}</h2>")
}

fn upcoming_label(count: usize) -> String {
    match count {
        1 => "1 upcoming show".to_string(),
        n => format!("{n} upcoming shows"),
    }
}

/// Part of the site a page belongs to, selects the active menu item and the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Venues,
    Artists,
    Shows,
}

impl Section {
    fn search_action(&self) -> (&'static str, &'static str) {
        match self {
            Section::Venues => ("/venues/search", "Find a venue"),
            _ => ("/artists/search", "Find an artist"),
        }
    }
}

fn notices_html(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|n| {
            let class = match n.level {
                Level::Success => "alert-success",
                Level::Error => "alert-danger",
            };
            format!(
                r#"<div class="alert {class}" role="alert">{}</div>"#,
                esc(&n.message)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn nav_item(label: &str, href: &str, active: bool) -> String {
    let class = if active { "nav-link active" } else { "nav-link" };
    format!(r#"<li><a class="{class}" href="{href}">{label}</a></li>"#)
}

/// Wraps page content into the shared document layout.
pub fn layout(title: &str, section: Section, notices: &[Notice], content: &str) -> Html<String> {
    let (search_action, placeholder) = section.search_action();
    let nav = [
        nav_item("Venues", "/venues", section == Section::Venues),
        nav_item("Artists", "/artists", section == Section::Artists),
        nav_item("Shows", "/shows", section == Section::Shows),
    ]
    .join("\n");
    let notices = notices_html(notices);
    let title = esc(title);

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | {SITE_NAME}</title>
    <style>
        body {{ font-family: 'Helvetica Neue', Arial, sans-serif; margin: 0; color: #222; }}
        header {{ display: flex; align-items: center; gap: 24px; padding: 12px 24px; background: #1d1d1d; }}
        header a {{ color: #ddd; text-decoration: none; }}
        header .brand {{ font-size: 22px; font-weight: bold; color: #fff; }}
        header ul {{ display: flex; gap: 16px; list-style: none; margin: 0; padding: 0; }}
        header .active {{ color: #fff; border-bottom: 2px solid #e94e77; }}
        header form {{ margin-left: auto; }}
        main {{ max-width: 960px; margin: 24px auto; padding: 0 16px; }}
        .alert {{ padding: 10px 16px; margin-bottom: 12px; border-radius: 4px; }}
        .alert-success {{ background: #dff0d8; color: #3c763d; }}
        .alert-danger {{ background: #f2dede; color: #a94442; }}
        .items {{ list-style: none; padding: 0; }}
        .items li {{ padding: 6px 0; border-bottom: 1px solid #eee; }}
        .genres span {{ display: inline-block; padding: 2px 8px; margin: 2px; background: #eee; border-radius: 10px; }}
        .show {{ display: inline-block; width: 220px; margin: 8px; vertical-align: top; }}
        .show img, .profile img {{ max-width: 100%; }}
        .subtitle {{ color: #888; }}
        label {{ display: block; margin-top: 10px; }}
        .error-list li {{ color: #a94442; }}
    </style>
</head>
<body>
<header>
    <a class="brand" href="/">🔥 {SITE_NAME}</a>
    <ul>
{nav}
    </ul>
    <form method="post" action="{search_action}">
        <input type="search" name="search_term" placeholder="{placeholder}" aria-label="Search">
    </form>
</header>
<main>
{notices}
{content}
</main>
</body>
</html>
"#
    ))
}

/// Page being rendered for the current visitor, owns the visitor's pending notices.
pub struct Page {
    notices: Notices,
}

impl FromRequestParts<AppState> for Page {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let notices = Notices::from_request_parts(parts, state).await?;
        Ok(Page { notices })
    }
}

impl Page {
    pub async fn render(self, title: &str, section: Section, content: &str) -> Html<String> {
        let notices = self.notices.take().await;
        layout(title, section, &notices, content)
    }
}
