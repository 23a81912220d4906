//! Rendering of transcript messages. Kept apart from the state machine
//! so presentation never influences the request lifecycle.
//!
//! HTML goes through Handlebars with escaping on since both the answer
//! text and the citation fields come from an LLM and scraped pages and
//! must be treated as untrusted.
//!
//! `render_html` and `render_loading_html` are the library surface for a
//! browser client; this crate serves no page itself and its terminal
//! client uses `render_text`.

use std::sync::LazyLock;

use anyhow::Result;
use handlebars::Handlebars;
use serde_json::json;

use super::models::{Message, Role};

const MESSAGE_TEMPLATE: &str = "message";
const LOADING_TEMPLATE: &str = "loading";

const MESSAGE_HTML: &str = r#"<div class="message {{class}}">{{text}}{{#if sources}}<div class="citations"><strong>Sources:</strong>{{#each sources}}<a href="{{url}}" target="_blank">{{domain}} ({{type}})</a>{{/each}}</div>{{/if}}</div>"#;

const LOADING_HTML: &str =
    r#"<div class="loading"><div class="dot"></div><div class="dot"></div><div class="dot"></div></div>"#;

static TEMPLATES: LazyLock<Handlebars<'static>> = LazyLock::new(templates);

fn templates() -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(MESSAGE_TEMPLATE, MESSAGE_HTML)
        .expect("Failed to register template");
    registry
        .register_template_string(LOADING_TEMPLATE, LOADING_HTML)
        .expect("Failed to register template");
    registry
}

fn css_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "bot",
    }
}

/// Render one message as an HTML fragment. Citations follow the text in
/// the order received and only appear on assistant messages.
pub fn render_html(msg: &Message) -> Result<String> {
    let sources = match msg.role() {
        Role::Assistant => msg.sources(),
        Role::User => &[],
    };
    let data = json!({
        "class": css_class(msg.role()),
        "text": msg.text(),
        "sources": sources,
    });
    Ok(TEMPLATES.render(MESSAGE_TEMPLATE, &data)?)
}

/// The pending indicator shown while a request is in flight.
pub fn render_loading_html() -> Result<String> {
    Ok(TEMPLATES.render(LOADING_TEMPLATE, &json!({}))?)
}

/// Plain text rendering for terminals.
pub fn render_text(msg: &Message) -> String {
    let mut out = msg.text().to_string();
    if msg.role() == Role::Assistant && !msg.sources().is_empty() {
        out.push_str("\n\nSources:");
        for (i, s) in msg.sources().iter().enumerate() {
            out.push_str(&format!("\n  [{}] {} ({}) {}", i + 1, s.domain, s.r#type, s.url));
        }
    }
    out
}
