//! Read-only view over a page file
//!
//! A page starts with a frontmatter region between two `---` markers,
//! followed by the rendered body.

use super::error::MergeError;

const FRONTMATTER_MARKER: &str = "---";

/// Whether `statement` appears verbatim anywhere in the page
pub fn has_import(text: &str, statement: &str) -> bool {
    text.contains(statement)
}

/// Whether an element opened with `<tag` appears anywhere in the page
///
/// Plain containment: `<CardList` also counts as a usage of `Card`.
pub fn has_usage(text: &str, tag: &str) -> bool {
    text.contains(&format!("<{}", tag))
}

/// A page whose frontmatter markers have been located
#[derive(Debug, Clone, Copy)]
pub struct PageFile<'a> {
    text: &'a str,
    open: usize,
    close: usize,
}

impl<'a> PageFile<'a> {
    /// Finds the first marker and the next marker after it
    pub fn parse(text: &'a str) -> Result<Self, MergeError> {
        let open = text.find(FRONTMATTER_MARKER).ok_or_else(|| {
            MergeError::Malformed(format!("missing frontmatter start marker '{}'", FRONTMATTER_MARKER))
        })?;

        let after_open = open + FRONTMATTER_MARKER.len();
        let close = text[after_open..]
            .find(FRONTMATTER_MARKER)
            .map(|offset| after_open + offset)
            .ok_or_else(|| {
                MergeError::Malformed(format!("missing frontmatter end marker '{}'", FRONTMATTER_MARKER))
            })?;

        Ok(Self { text, open, close })
    }

    /// Text between the markers
    fn frontmatter(&self) -> &'a str {
        &self.text[self.open + FRONTMATTER_MARKER.len()..self.close]
    }

    /// Byte offset of the first frontmatter line, and the line ending used
    /// by the opening marker line
    pub fn first_line(&self) -> Result<(usize, &'static str), MergeError> {
        let newline = self.frontmatter().find('\n').ok_or_else(|| {
            MergeError::Malformed("frontmatter markers share a single line".to_string())
        })?;

        let newline_at = self.open + FRONTMATTER_MARKER.len() + newline;
        let ending = if self.text[..newline_at].ends_with('\r') {
            "\r\n"
        } else {
            "\n"
        };

        Ok((newline_at + 1, ending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "---\nimport Layout from '@layouts/Layout.astro';\n---\n\n<Layout>\n  <h1>Home</h1>\n</Layout>\n";

    #[test]
    fn frontmatter_stops_at_second_marker() {
        let page = PageFile::parse(PAGE).unwrap();
        assert_eq!(page.frontmatter(), "\nimport Layout from '@layouts/Layout.astro';\n");
    }

    #[test]
    fn first_line_follows_opening_marker() {
        let page = PageFile::parse(PAGE).unwrap();
        assert_eq!(page.first_line().unwrap(), (4, "\n"));

        let crlf = "---\r\nconst x = 1;\r\n---\r\n";
        let page = PageFile::parse(crlf).unwrap();
        assert_eq!(page.first_line().unwrap(), (5, "\r\n"));
    }

    #[test]
    fn missing_end_marker_is_malformed() {
        let err = PageFile::parse("---\nconst x = 1;\n<Layout></Layout>\n").unwrap_err();
        assert!(matches!(err, MergeError::Malformed(_)));
    }

    #[test]
    fn missing_start_marker_is_malformed() {
        assert!(PageFile::parse("<Layout></Layout>\n").is_err());
    }

    #[test]
    fn markers_on_one_line_are_malformed() {
        let page = PageFile::parse("------\n<Layout></Layout>").unwrap();
        assert!(page.first_line().is_err());
    }

    #[test]
    fn usage_detection_is_literal() {
        assert!(has_usage("<CardList items={x} />", "Card"));
        assert!(!has_usage("< Card />", "Card"));
        assert!(has_import(PAGE, "import Layout from '@layouts/Layout.astro';"));
        assert!(!has_import(PAGE, "import Layout from \"@layouts/Layout.astro\";"));
    }
}
