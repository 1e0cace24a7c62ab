use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::config::{ORG_NAME, ORG_SHORT_NAME, RIGHTS_RESERVED};
use crate::error::{Error, Result};
use crate::models::{ExtractedContent, FieldRecord, FormRecord, ImageRecord, LinkRecord};
use crate::spam::{is_spam, is_spam_image_src};

// ── Constants ────────────────────────────────────────────────────────────────

const MIN_PARAGRAPH_LEN: usize = 10;
const MIN_HEADING_LEN: usize = 3;
const DEFAULT_FORM_METHOD: &str = "POST";
const YOUTUBE_MARKERS: &[&str] = &["youtube.com", "youtu.be"];

// ── Lazy static selectors ────────────────────────────────────────────────────

static TITLE_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static BANNER_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("div#banner").unwrap());
static MAIN_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("div#wsite-content").unwrap());
static FOOTER_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("div#footer").unwrap());
static PARAGRAPH_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("div.paragraph").unwrap());
static CONTENT_TITLE_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2.wsite-content-title").unwrap());
static FORM_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("form").unwrap());
static FIELD_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("input, textarea, select").unwrap());
static IMG_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());
static IFRAME_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("iframe").unwrap());
static NAV_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("ul.wsite-menu-default").unwrap());
static NAV_ITEM_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("a.wsite-menu-item").unwrap());

// ── Public API ───────────────────────────────────────────────────────────────

/// Read one page from disk and extract it.
pub fn extract_page(path: &Path, page: &str) -> Result<ExtractedContent> {
    let html = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_from_html(&html, page))
}

pub fn extract_from_html(html: &str, page: &str) -> ExtractedContent {
    let document = Html::parse_document(html);
    extract(&document, page)
}

/// Missing elements leave their field at its default; this never fails.
pub fn extract(document: &Html, page: &str) -> ExtractedContent {
    let index = DocumentOrder::new(document);

    ExtractedContent {
        page: page.to_string(),
        title: extract_title(document),
        banner_text: extract_banner(document),
        content_sections: extract_sections(document),
        footer_text: extract_footer(document),
        forms: extract_forms(document, &index),
        images: extract_images(document),
        links: extract_links(document),
        youtube_embeds: extract_youtube(document),
    }
}

// ── Text fields ──────────────────────────────────────────────────────────────

fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE_SEL)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

fn extract_banner(document: &Html) -> String {
    let Some(banner) = document.select(&BANNER_SEL).next() else {
        return String::new();
    };
    banner
        .select(&CONTENT_TITLE_SEL)
        .map(element_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn extract_sections(document: &Html) -> Vec<String> {
    let Some(main) = document.select(&MAIN_SEL).next() else {
        return Vec::new();
    };

    let mut sections: Vec<String> = Vec::new();

    for paragraph in main.select(&PARAGRAPH_SEL) {
        let text = element_text(paragraph);
        if is_copyright_notice(&text) {
            continue;
        }
        if is_spam(&text) {
            tracing::debug!(text = %text, "dropping spam paragraph");
            continue;
        }
        if text.chars().count() > MIN_PARAGRAPH_LEN {
            sections.push(text);
        }
    }

    for heading in main.select(&CONTENT_TITLE_SEL) {
        let text = element_text(heading);
        if is_spam(&text) {
            tracing::debug!(text = %text, "dropping spam heading");
            continue;
        }
        if text.chars().count() > MIN_HEADING_LEN && !sections.contains(&text) {
            sections.push(text);
        }
    }

    sections
}

fn is_copyright_notice(text: &str) -> bool {
    text.contains(ORG_NAME) && text.contains(RIGHTS_RESERVED)
}

fn extract_footer(document: &Html) -> String {
    document
        .select(&FOOTER_SEL)
        .next()
        .map(element_text)
        .filter(|text| text.contains(ORG_SHORT_NAME))
        .unwrap_or_default()
}

// ── Forms ────────────────────────────────────────────────────────────────────

fn extract_forms(document: &Html, index: &DocumentOrder<'_>) -> Vec<FormRecord> {
    document
        .select(&FORM_SEL)
        .filter_map(|form| {
            let fields: Vec<FieldRecord> = form
                .select(&FIELD_SEL)
                .map(|field| field_record(field, index))
                .collect();
            if fields.is_empty() {
                return None;
            }
            let attrs = form.value();
            Some(FormRecord {
                action: attrs.attr("action").unwrap_or_default().to_string(),
                method: attrs.attr("method").unwrap_or(DEFAULT_FORM_METHOD).to_string(),
                fields,
            })
        })
        .collect()
}

fn field_record(field: ElementRef<'_>, index: &DocumentOrder<'_>) -> FieldRecord {
    let attrs = field.value();
    FieldRecord {
        field_type: attrs.attr("type").unwrap_or(attrs.name()).to_string(),
        name: attrs.attr("name").unwrap_or_default().to_string(),
        label: index
            .preceding_label(field)
            .map(element_text)
            .unwrap_or_default(),
        // Presence decides; required="false" still counts.
        required: attrs.attr("required").is_some(),
    }
}

/// Every element of a document, flattened in document order, with each
/// node's position for backward lookups.
struct DocumentOrder<'a> {
    elements: Vec<ElementRef<'a>>,
    positions: HashMap<NodeId, usize>,
}

impl<'a> DocumentOrder<'a> {
    fn new(document: &'a Html) -> Self {
        let elements: Vec<ElementRef<'a>> = document
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .collect();
        let positions = elements
            .iter()
            .enumerate()
            .map(|(pos, el)| (el.id(), pos))
            .collect();
        Self {
            elements,
            positions,
        }
    }

    /// Closest `<label>` opened before `el`, at any depth. An enclosing
    /// label counts since it opens before its children.
    fn preceding_label(&self, el: ElementRef<'_>) -> Option<ElementRef<'a>> {
        let pos = *self.positions.get(&el.id())?;
        self.elements[..pos]
            .iter()
            .rev()
            .find(|candidate| candidate.value().name() == "label")
            .copied()
    }
}

// ── Media ────────────────────────────────────────────────────────────────────

fn extract_images(document: &Html) -> Vec<ImageRecord> {
    document
        .select(&IMG_SEL)
        .filter_map(|img| {
            let attrs = img.value();
            let src = attrs.attr("src").unwrap_or_default();
            if is_spam_image_src(src) {
                tracing::debug!(src, "dropping spam image");
                return None;
            }
            Some(ImageRecord {
                src: src.to_string(),
                alt: attrs.attr("alt").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

fn extract_youtube(document: &Html) -> Vec<String> {
    document
        .select(&IFRAME_SEL)
        .filter_map(|iframe| iframe.value().attr("src"))
        .filter(|src| YOUTUBE_MARKERS.iter().any(|m| src.contains(m)))
        .map(str::to_string)
        .collect()
}

// ── Navigation ───────────────────────────────────────────────────────────────

fn extract_links(document: &Html) -> Vec<LinkRecord> {
    let Some(nav) = document.select(&NAV_SEL).next() else {
        return Vec::new();
    };
    nav.select(&NAV_ITEM_SEL)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href").unwrap_or_default();
            if href.is_empty() || href.starts_with('#') {
                return None;
            }
            Some(LinkRecord {
                text: element_text(anchor),
                href: href.to_string(),
            })
        })
        .collect()
}

// ── DOM utility helpers ──────────────────────────────────────────────────────

/// Trimmed text content of an element.
fn element_text(el: ElementRef<'_>) -> String {
    collect_text(el).trim().to_string()
}

/// Recursively collect all text from an element and its descendants,
/// leaving out script and style bodies.
fn collect_text(el: ElementRef<'_>) -> String {
    use scraper::node::Node;
    let mut parts = Vec::new();
    for child in el.children() {
        match child.value() {
            Node::Text(text) => parts.push((&*text.text).to_string()),
            Node::Element(element) => {
                if matches!(element.name(), "script" | "style") {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    parts.push(collect_text(child_el));
                }
            }
            _ => {}
        }
    }
    parts.join("")
}
