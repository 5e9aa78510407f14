// SPDX-License-Identifier: GPL-3.0-only

use askama::Template;
use i18n_embed::LanguageLoader;

use crate::{core::sinks::PageRegions, fl, i18n::LANGUAGE_LOADER};

/// Full search page: the form, the message region and the display region
#[derive(Template)]
#[template(path = "page.html")]
struct SearchPage<'a> {
    lang: String,
    title: String,
    placeholder: String,
    button: String,
    query: &'a str,
    message: String,
    message_class: &'static str,
    /// Card markup, escaped by its own template
    display: String,
}

pub fn render_page(query: &str, regions: &PageRegions) -> askama::Result<String> {
    let (message, message_class) = match regions.message() {
        Some((text, kind)) => (text, kind.css_class()),
        None => (String::new(), ""),
    };

    SearchPage {
        lang: LANGUAGE_LOADER.current_language().language.to_string(),
        title: fl!("app-title"),
        placeholder: fl!("search-placeholder"),
        button: fl!("search-button"),
        query,
        message,
        message_class,
        display: regions.display(),
    }
    .render()
}
