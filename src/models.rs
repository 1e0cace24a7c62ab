use serde::{Deserialize, Serialize};

/// Everything pulled out of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub page: String,
    pub title: String,
    pub banner_text: String,
    pub content_sections: Vec<String>,
    pub footer_text: String,
    pub forms: Vec<FormRecord>,
    pub images: Vec<ImageRecord>,
    pub links: Vec<LinkRecord>,
    pub youtube_embeds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub action: String,
    pub method: String,
    pub fields: Vec<FieldRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(rename = "type")]
    pub field_type: String,
    pub name: String,
    pub label: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub text: String,
    pub href: String,
}

/// Per-page counts collected for INDEX.md.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub page: String,
    pub markdown_file: String,
    pub json_file: String,
    pub content_sections: usize,
    pub images: usize,
    pub forms: usize,
    pub youtube: usize,
    pub links: usize,
}

impl PageSummary {
    pub fn new(content: &ExtractedContent, markdown_file: String, json_file: String) -> Self {
        Self {
            page: content.page.clone(),
            markdown_file,
            json_file,
            content_sections: content.content_sections.len(),
            images: content.images.len(),
            forms: content.forms.len(),
            youtube: content.youtube_embeds.len(),
            links: content.links.len(),
        }
    }
}
