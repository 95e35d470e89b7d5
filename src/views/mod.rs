//! Server-rendered invitation pages.

mod birthday;
mod wedding;

use chrono::NaiveDate;

use crate::map_embed::embed_url;
use crate::models::invite::{EventType, Invite};

/// Visual variant used for an invitation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Birthday,
    Wedding,
}

impl Theme {
    /// Only an exact `Wedding` gets the wedding theme; every other event type
    /// falls back to the birthday look.
    pub fn for_event(event_type: &EventType) -> Self {
        match event_type {
            EventType::Wedding => Self::Wedding,
            _ => Self::Birthday,
        }
    }

    fn body_class(self) -> &'static str {
        match self {
            Self::Birthday => "theme-birthday",
            Self::Wedding => "theme-wedding",
        }
    }
}

pub fn render_invite(invite: &Invite) -> String {
    let theme = Theme::for_event(&invite.event_type);
    let body = match theme {
        Theme::Birthday => birthday::render(invite),
        Theme::Wedding => wedding::render(invite),
    };
    layout("You are Invited!", theme.body_class(), &body)
}

pub fn render_not_found() -> String {
    layout(
        "Invitation Not Found",
        "theme-missing",
        r#"<div class="not-found">
  <div class="emoji">😕</div>
  <h2>Invitation Not Found</h2>
  <p>This invitation link may be invalid or expired.</p>
</div>"#,
    )
}

fn layout(title: &str, body_class: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="View your special invitation">
<title>{title}</title>
<style>{STYLES}</style>
</head>
<body class="{body_class}">
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

const STYLES: &str = r#"
body { margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; font-family: system-ui, sans-serif; }
.card { max-width: 42rem; width: 100%; margin: 1.5rem; padding: 3rem; border-radius: 1.5rem; text-align: center; }
.details p { margin: 0.25rem 0; }
.map iframe { width: 100%; border: 0; border-radius: 0.75rem; }
.map a { display: block; margin-top: 1rem; padding: 0.75rem 2rem; border-radius: 0.75rem; font-weight: bold; text-decoration: none; }
.theme-birthday { background: linear-gradient(135deg, #2e1065, #831843); color: #f3e8ff; }
.theme-birthday .card { background: rgba(88, 28, 135, 0.9); }
.theme-birthday .map a { background: linear-gradient(90deg, #ec4899, #a855f7); color: #fff; }
.theme-wedding { background: linear-gradient(135deg, #4a0404 0%, #7a1515 25%, #4a0404 50%, #7a1515 75%, #4a0404 100%); color: #fef3c7; font-family: Georgia, serif; }
.theme-wedding .card { background: rgba(69, 10, 10, 0.95); border: 4px solid rgba(234, 179, 8, 0.4); }
.theme-wedding h1 { color: #fde047; text-shadow: 0 0 30px rgba(251, 191, 36, 0.5); }
.theme-wedding .map a { background: linear-gradient(90deg, #ca8a04, #eab308); color: #450a0a; }
.couple { display: flex; justify-content: center; gap: 1.5rem; align-items: center; font-size: 1.75rem; font-weight: bold; }
.theme-missing { background: #1e1b4b; color: #c4b5fd; }
.not-found .emoji { font-size: 4rem; }
"#;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Non-blank value of an optional field. The form submits empty strings for
/// fields the user skipped.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `2030-01-01` becomes `Tuesday, January 1, 2030`; anything else is shown as
/// entered.
fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

fn detail(out: &mut String, icon: &str, label: &str, value: &str) {
    out.push_str(&format!(
        r#"<div class="detail"><span class="icon">{icon}</span><p class="label">{label}</p><p>{}</p></div>"#,
        escape(value)
    ));
}

/// Date, time and venue rows, skipping whichever are blank.
fn details(invite: &Invite, venue_icon: &str) -> String {
    let mut out = String::from(r#"<div class="details">"#);
    if let Some(date) = present(&invite.date) {
        detail(&mut out, "📅", "Date", &format_date(date));
    }
    if let Some(time) = present(&invite.time) {
        detail(&mut out, "⏰", "Time", time);
    }
    if let Some(venue) = present(&invite.venue) {
        detail(&mut out, venue_icon, "Venue", venue);
    }
    out.push_str("</div>");
    out
}

fn map_section(invite: &Invite, heading: &str, link_text: &str, height: u32) -> String {
    let Some(link) = present(&invite.map_link) else {
        return String::new();
    };
    format!(
        r#"<div class="map">
  <h3>{heading}</h3>
  <iframe src="{src}" height="{height}" allowfullscreen loading="lazy" referrerpolicy="no-referrer-when-downgrade"></iframe>
  <a href="{href}" target="_blank" rel="noopener noreferrer">{link_text}</a>
</div>"#,
        src = escape(&embed_url(link)),
        href = escape(link),
    )
}
