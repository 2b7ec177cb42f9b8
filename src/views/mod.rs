//! Server-side renderers for the travel guide UI.
//!
//! Every function here is pure: it takes data and returns an HTML fragment. Text coming
//! from the generation service is escaped before it is embedded.

pub mod details;
pub mod layout;
pub mod search;

use std::fmt::Write;

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn image(src: &str, placeholder: &str, alt: &str) -> String {
    let src = if src.is_empty() { placeholder } else { src };
    format!(
        r#"<img src="{}" alt="{}" onerror="this.src='{}'">"#,
        escape(src),
        escape(alt),
        placeholder
    )
}

fn rating(value: f64) -> String {
    format!(r#"<span class="rating">{}</span>"#, value)
}

fn skeleton_cards(count: usize, class: &str) -> String {
    let mut html = String::new();
    for _ in 0..count {
        let _ = write!(
            html,
            r#"<div class="{} skeleton"><div class="skeleton-image"></div><div class="skeleton-line"></div><div class="skeleton-line short"></div></div>"#,
            class
        );
    }
    html
}

fn empty_state(message: &str) -> String {
    format!(r#"<div class="empty-state"><p>{}</p></div>"#, escape(message))
}
