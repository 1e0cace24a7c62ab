use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::models::{ExtractedContent, PageSummary};

// ── Constants ────────────────────────────────────────────────────────────────

const INDEX_HEADING: &str = "# Golden Compasses Research Lodge - Content Repository";
const INDEX_INTRO: &str = "This directory contains all legitimate content extracted from the \
                           website for recreation on Cloudflare Workers.";

static ALPHA_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Alphabetic}+").unwrap());

// ── Markdown ─────────────────────────────────────────────────────────────────

/// Sections with nothing in them are left out entirely.
pub fn render_markdown(content: &ExtractedContent) -> String {
    let mut md = format!("# {}\n\n", content.title);

    if !content.banner_text.is_empty() {
        md.push_str(&format!("## Banner\n\n{}\n\n", content.banner_text));
    }

    if !content.content_sections.is_empty() {
        md.push_str("## Content\n\n");
        for section in &content.content_sections {
            md.push_str(&format!("{}\n\n", section));
        }
    }

    if !content.forms.is_empty() {
        md.push_str("## Forms\n\n");
        for (i, form) in content.forms.iter().enumerate() {
            md.push_str(&format!("### Form {}\n\n", i + 1));
            md.push_str(&format!("Action: {}\n", form.action));
            md.push_str(&format!("Method: {}\n\n", form.method));
            md.push_str("**Fields:**\n\n");
            for field in &form.fields {
                let req = if field.required { " (required)" } else { "" };
                md.push_str(&format!("- {}: {}{}\n", field.name, field.field_type, req));
                if !field.label.is_empty() {
                    md.push_str(&format!("  Label: {}\n", field.label));
                }
            }
            md.push('\n');
        }
    }

    if !content.images.is_empty() {
        md.push_str("## Images\n\n");
        for img in &content.images {
            md.push_str(&format!("- `{}`", img.src));
            if !img.alt.is_empty() {
                md.push_str(&format!(" - {}", img.alt));
            }
            md.push('\n');
        }
    }

    if !content.youtube_embeds.is_empty() {
        md.push_str("## YouTube Videos\n\n");
        for embed in &content.youtube_embeds {
            md.push_str(&format!("- {}\n", embed));
        }
    }

    if !content.links.is_empty() {
        md.push_str("## Navigation Links\n\n");
        for link in &content.links {
            md.push_str(&format!("- [{}]({})\n", link.text, link.href));
        }
    }

    if !content.footer_text.is_empty() {
        md.push_str(&format!("\n## Footer\n\n{}\n", content.footer_text));
    }

    md
}

// ── JSON ─────────────────────────────────────────────────────────────────────

/// Every field is written, empty ones included.
pub fn render_json(content: &ExtractedContent) -> Result<String> {
    serde_json::to_string_pretty(content).map_err(|source| Error::Serialize {
        page: content.page.clone(),
        source,
    })
}

// ── Index ────────────────────────────────────────────────────────────────────

pub fn render_index(summaries: &[PageSummary]) -> String {
    let mut md = format!("{}\n\n{}\n\n## Extracted Pages\n\n", INDEX_HEADING, INDEX_INTRO);

    for item in summaries {
        md.push_str(&format!("### {}\n\n", display_name(&item.page)));
        md.push_str(&format!("- **Markdown:** `{}`\n", item.markdown_file));
        md.push_str(&format!("- **JSON:** `{}`\n", item.json_file));
        md.push_str(&format!("- **Content Sections:** {}\n", item.content_sections));
        md.push_str(&format!("- **Images:** {}\n", item.images));
        md.push_str(&format!("- **Forms:** {}\n", item.forms));
        md.push_str(&format!("- **YouTube Videos:** {}\n", item.youtube));
        md.push_str(&format!("- **Navigation Links:** {}\n\n", item.links));
    }

    md
}

/// `grand-master` → `Grand Master`.
pub fn display_name(page: &str) -> String {
    title_case(&page.replace('-', " "))
}

fn title_case(text: &str) -> String {
    ALPHA_RUN_RE
        .replace_all(text, |caps: &Captures| {
            let mut chars = caps[0].chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .into_owned()
}
