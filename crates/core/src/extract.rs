//! Title and body extraction from parsed pages.
//!
//! The extraction rules are deliberately simple: the page `<title>` (falling
//! back to the first `<h1>`) and the text of paragraph nodes, preferring
//! paragraphs inside the first `<article>` container when one exists.

use crate::parse::Document;
use crate::Result;

/// Title and body text pulled from one page.
///
/// `body` holds one whitespace-trimmed, non-empty line per paragraph line,
/// in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    /// Page title, possibly empty when the page carries neither a
    /// `<title>` nor an `<h1>`.
    pub title: String,
    /// Cleaned body lines.
    pub body: Vec<String>,
}

/// Extracts the title and body text from a parsed document.
///
/// Title resolution: `<title>` text, else the first `<h1>`, else empty.
/// Body resolution: all `<p>` descendants of the first `<article>` element
/// if one is present, else every `<p>` in the document, in document order.
/// Paragraph text is split into lines, trimmed, and empty lines dropped.
pub fn extract_article(doc: &Document) -> Result<ExtractedArticle> {
    let title = match doc.title() {
        Some(t) if !t.trim().is_empty() => t.trim().to_string(),
        _ => doc
            .select("h1")?
            .first()
            .map(|h| h.text().trim().to_string())
            .unwrap_or_default(),
    };

    let containers = doc.select("article")?;
    let paragraphs = match containers.first() {
        Some(article) => article.select("p")?,
        None => doc.select("p")?,
    };

    let body = paragraphs
        .iter()
        .flat_map(|p| {
            p.text()
                .lines()
                .map(|line| line.trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|line| !line.is_empty())
        .collect();

    Ok(ExtractedArticle { title, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_title_tag() {
        let html = "<html><head><title> My Article </title></head><body><h1>Other</h1></body></html>";
        let doc = Document::parse(html).unwrap();
        let article = extract_article(&doc).unwrap();
        assert_eq!(article.title, "My Article");
    }

    #[test]
    fn test_title_falls_back_to_h1() {
        let html = "<html><body><h1>Heading Title</h1><p>Body</p></body></html>";
        let doc = Document::parse(html).unwrap();
        let article = extract_article(&doc).unwrap();
        assert_eq!(article.title, "Heading Title");
    }

    #[test]
    fn test_title_empty_when_absent() {
        let html = "<html><body><p>Body only</p></body></html>";
        let doc = Document::parse(html).unwrap();
        let article = extract_article(&doc).unwrap();
        assert_eq!(article.title, "");
    }

    #[test]
    fn test_body_prefers_article_container() {
        let html = r#"
            <html><body>
                <p>Navigation cruft</p>
                <article>
                    <p>First paragraph.</p>
                    <p>Second paragraph.</p>
                </article>
                <p>Footer cruft</p>
            </body></html>
        "#;
        let doc = Document::parse(html).unwrap();
        let article = extract_article(&doc).unwrap();
        assert_eq!(article.body, vec!["First paragraph.", "Second paragraph."]);
    }

    #[test]
    fn test_body_all_paragraphs_without_container() {
        let html = "<html><body><p>One</p><div><p>Two</p></div></body></html>";
        let doc = Document::parse(html).unwrap();
        let article = extract_article(&doc).unwrap();
        assert_eq!(article.body, vec!["One", "Two"]);
    }

    #[test]
    fn test_body_trims_and_drops_empty_lines() {
        let html = "<html><body><p>  spaced  \n\n  second line  </p><p>   </p></body></html>";
        let doc = Document::parse(html).unwrap();
        let article = extract_article(&doc).unwrap();
        assert_eq!(article.body, vec!["spaced", "second line"]);
    }

}
