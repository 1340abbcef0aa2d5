//! Markdown rendering for formatted experience descriptions.

use content::RichText;
use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render Markdown to an HTML fragment.
pub fn markdown_to_html(text: &RichText) -> String {
    let parser = Parser::new_ext(text.as_markdown(), Options::empty());
    let mut html_out = String::new();
    html::push_html(&mut html_out, parser);
    html_out
}

/// A block of rendered rich text.
#[component]
pub fn RichTextBlock(text: RichText) -> Element {
    if text.is_empty() {
        return rsx! {};
    }
    let html = markdown_to_html(&text);

    rsx! {
        div {
            class: "rich-text",
            dangerous_inner_html: "{html}",
        }
    }
}
