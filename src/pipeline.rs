use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{file_stem, ExtractorConfig, PageEntry, INDEX_FILE};
use crate::error::{Error, Result};
use crate::extract::extract_page;
use crate::models::PageSummary;
use crate::render::{render_index, render_json, render_markdown};

/// A page that was present but could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub page: String,
    pub file: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub pages: Vec<PageSummary>,
    pub failures: Vec<PageFailure>,
    /// Pages whose input file does not exist.
    pub skipped: Vec<String>,
}

/// Process every configured page in order, then write INDEX.md.
///
/// A page that cannot be read or serialized is logged and left out; the
/// rest of the batch continues. Failing to create or write output is fatal.
pub fn run(config: &ExtractorConfig) -> Result<RunReport> {
    fs::create_dir_all(&config.output_dir).map_err(|source| Error::CreateOutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut report = RunReport::default();

    for entry in &config.pages {
        let input = config.pages_dir.join(entry.file);
        if !input.exists() {
            tracing::debug!(file = entry.file, "input missing, skipping");
            report.skipped.push(entry.name.to_string());
            continue;
        }

        tracing::info!("Extracting content from {}...", entry.file);
        match process_page(entry, &input, &config.output_dir) {
            Ok(summary) => {
                tracing::info!("  Extracted {} content sections", summary.content_sections);
                tracing::info!("  Found {} images", summary.images);
                tracing::info!("  Found {} forms", summary.forms);
                report.pages.push(summary);
            }
            Err(e) if e.is_page_local() => {
                tracing::error!(page = entry.name, "  Error: {}", e);
                report.failures.push(PageFailure {
                    page: entry.name.to_string(),
                    file: entry.file.to_string(),
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    let index_path = config.output_dir.join(INDEX_FILE);
    write_file(&index_path, &render_index(&report.pages))?;

    tracing::info!("Content extraction complete!");
    tracing::info!("Check {} for all extracted content", config.output_dir.display());
    tracing::info!("See {} for summary", index_path.display());

    Ok(report)
}

fn process_page(entry: &PageEntry, input: &Path, output_dir: &Path) -> Result<PageSummary> {
    let content = extract_page(input, entry.name)?;

    let stem = file_stem(entry.name);
    let markdown_file = format!("{stem}.md");
    let json_file = format!("{stem}.json");

    let json = render_json(&content)?;
    write_file(&output_dir.join(&markdown_file), &render_markdown(&content))?;
    write_file(&output_dir.join(&json_file), &json)?;

    Ok(PageSummary::new(&content, markdown_file, json_file))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::WriteOutput {
        path: PathBuf::from(path),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractedContent;
    use tempfile::tempdir;

    const ABOUT_HTML: &str = r#"<!DOCTYPE html>
<html><head><title>About</title></head>
<body>
  <div id="wsite-content">
    <div class="paragraph">Welcome to the Lodge, founded in 1824.</div>
    <div class="paragraph">Best casino bonus!</div>
  </div>
</body></html>"#;

    const GRAND_MASTER_HTML: &str = r#"<html><head><title>Grand Master</title></head>
<body>
  <ul class="wsite-menu-default">
    <li><a class="wsite-menu-item" href="/about.html">About</a></li>
  </ul>
  <div id="wsite-content"><h2 class="wsite-content-title">A Message</h2></div>
  <img src="/uploads/portrait.jpg" alt="Portrait">
</body></html>"#;

    #[test]
    fn end_to_end_run() {
        let pages = tempdir().unwrap();
        let out = tempdir().unwrap();
        fs::write(pages.path().join("about.html"), ABOUT_HTML).unwrap();
        fs::write(pages.path().join("grand-master.html"), GRAND_MASTER_HTML).unwrap();

        let output_dir = out.path().join("content");
        let config = ExtractorConfig::with_dirs(pages.path(), &output_dir);
        let report = run(&config).unwrap();

        let names: Vec<&str> = report.pages.iter().map(|p| p.page.as_str()).collect();
        assert_eq!(names, vec!["about", "grand-master"]);
        assert!(report.failures.is_empty());
        assert_eq!(report.skipped.len(), 7);

        let json = fs::read_to_string(output_dir.join("about.json")).unwrap();
        let about: ExtractedContent = serde_json::from_str(&json).unwrap();
        assert_eq!(about.title, "About");
        assert_eq!(
            about.content_sections,
            vec!["Welcome to the Lodge, founded in 1824.".to_string()]
        );

        let md = fs::read_to_string(output_dir.join("grand_master.md")).unwrap();
        assert!(md.starts_with("# Grand Master\n\n"));
        assert!(md.contains("- [About](/about.html)\n"));
        assert!(output_dir.join("grand_master.json").exists());

        let index = fs::read_to_string(output_dir.join("INDEX.md")).unwrap();
        assert!(index.contains("### About\n"));
        assert!(index.contains("### Grand Master\n"));
        assert!(index.contains("- **Markdown:** `grand_master.md`\n"));
        assert!(!index.contains("### Library"));
        assert!(index.find("### About").unwrap() < index.find("### Grand Master").unwrap());
    }

    #[test]
    fn unreadable_page_does_not_stop_the_batch() {
        let pages = tempdir().unwrap();
        let out = tempdir().unwrap();
        // Not valid UTF-8, so reading it as text fails.
        fs::write(pages.path().join("about.html"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        fs::write(pages.path().join("links.html"), ABOUT_HTML).unwrap();

        let config = ExtractorConfig::with_dirs(pages.path(), out.path());
        let report = run(&config).unwrap();

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].page, "about");
        assert_eq!(report.failures[0].file, "about.html");
        assert_eq!(report.pages.len(), 1);
        assert_eq!(report.pages[0].page, "links");
        assert!(!out.path().join("about.md").exists());

        let index = fs::read_to_string(out.path().join("INDEX.md")).unwrap();
        assert!(!index.contains("### About"));
        assert!(index.contains("### Links"));
    }

    #[test]
    fn empty_input_dir_still_writes_index() {
        let pages = tempdir().unwrap();
        let out = tempdir().unwrap();
        let config = ExtractorConfig::with_dirs(pages.path(), out.path());
        let report = run(&config).unwrap();

        assert!(report.pages.is_empty());
        assert_eq!(report.skipped.len(), 9);
        let index = fs::read_to_string(out.path().join("INDEX.md")).unwrap();
        assert!(index.ends_with("## Extracted Pages\n\n"));
    }

    #[test]
    fn output_dir_creation_failure_is_fatal() {
        let pages = tempdir().unwrap();
        let out = tempdir().unwrap();
        let blocker = out.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let config = ExtractorConfig::with_dirs(pages.path(), blocker.join("content"));
        let err = run(&config).unwrap_err();
        assert!(matches!(err, Error::CreateOutputDir { .. }));
        assert!(!err.is_page_local());
    }
}
