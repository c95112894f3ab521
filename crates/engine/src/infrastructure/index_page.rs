//! Landing page template.
//!
//! The template is plain HTML with `{{title}}` and `{{story_url}}`
//! placeholders. It is read and filled in once at startup; every request to
//! `/` gets the same page.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::use_cases::story::initial_story_url;

const TITLE_PLACEHOLDER: &str = "{{title}}";
const STORY_URL_PLACEHOLDER: &str = "{{story_url}}";

#[derive(Debug, thiserror::Error)]
pub enum IndexPageError {
    #[error("Failed to read index template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Without the story URL the page would never load the first fragment.
    #[error("Index template is missing the story_url placeholder")]
    MissingStoryUrl,
}

/// Rendered landing page
#[derive(Debug, Clone)]
pub struct IndexPage {
    html: Arc<str>,
}

impl IndexPage {
    pub fn load(path: &Path, title: &str) -> Result<Self, IndexPageError> {
        let template = std::fs::read_to_string(path).map_err(|source| IndexPageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_template(&template, title)
    }

    pub fn from_template(template: &str, title: &str) -> Result<Self, IndexPageError> {
        if !template.contains(STORY_URL_PLACEHOLDER) {
            return Err(IndexPageError::MissingStoryUrl);
        }

        let html = template
            .replace(TITLE_PLACEHOLDER, title)
            .replace(STORY_URL_PLACEHOLDER, &initial_story_url());

        Ok(Self { html: html.into() })
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const TEMPLATE: &str =
        r#"<title>{{title}}</title><div id="content" hx-get="{{story_url}}" hx-trigger="load"></div>"#;

    #[test]
    fn fills_placeholders() {
        let page = IndexPage::from_template(TEMPLATE, "Colony").unwrap();
        assert_eq!(
            page.html(),
            r#"<title>Colony</title><div id="content" hx-get="/next?choice=start" hx-trigger="load"></div>"#
        );
    }

    #[test]
    fn requires_story_url() {
        let err = IndexPage::from_template("<title>{{title}}</title>", "Colony").unwrap_err();
        assert!(matches!(err, IndexPageError::MissingStoryUrl));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEMPLATE.as_bytes()).unwrap();

        let page = IndexPage::load(file.path(), "From disk").unwrap();
        assert!(page.html().contains("<title>From disk</title>"));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.html");

        let err = IndexPage::load(&path, "Colony").unwrap_err();
        assert!(matches!(err, IndexPageError::Read { .. }));
        assert!(err.to_string().contains("nope.html"));
    }
}
