//! HTML markup for the home route.

use std::fmt::Write;

use crate::page::{Link, LinkStyle, PageStructure};

/// Render a landing page as a standalone HTML5 document.
///
/// All text is escaped. The output contains the header, the feature grid
/// (omitted when there are no cards) and the closing call to action.
#[must_use]
pub fn to_html(page: &PageStructure) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(out, "<html lang=\"{}\">", escape_html(&page.lang));
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&page.document_title));
    if !page.description.is_empty() {
        let _ = writeln!(
            out,
            "<meta name=\"description\" content=\"{}\">",
            escape_html(&page.description)
        );
    }
    out.push_str("</head>\n<body>\n");

    out.push_str("<header class=\"hero hero--primary\">\n");
    let _ = writeln!(
        out,
        "<h1 class=\"hero__title\">{}</h1>",
        escape_html(&page.header.title)
    );
    let _ = writeln!(
        out,
        "<p class=\"hero__subtitle\">{}</p>",
        escape_html(&page.header.tagline)
    );
    write_link(&mut out, &page.header.call_to_action);
    out.push_str("</header>\n<main>\n");

    if !page.features.cards.is_empty() {
        out.push_str("<section class=\"features\">\n");
        let _ = writeln!(out, "<h2>{}</h2>", escape_html(&page.features.heading));
        for card in &page.features.cards {
            let _ = writeln!(
                out,
                "<div class=\"feature\"><h3>{}</h3><p>{}</p></div>",
                escape_html(&card.title),
                escape_html(&card.description)
            );
        }
        out.push_str("</section>\n");
    }

    let cta = &page.call_to_action;
    out.push_str("<section class=\"call-to-action\">\n");
    let _ = writeln!(out, "<h2>{}</h2>", escape_html(&cta.heading));
    write_link(&mut out, &cta.primary);
    write_link(&mut out, &cta.secondary);
    if let Some(recognition) = &cta.recognition {
        write_link(&mut out, recognition);
    }
    out.push_str("</section>\n</main>\n</body>\n</html>\n");

    out
}

fn write_link(out: &mut String, link: &Link) {
    let class = match link.style {
        LinkStyle::Primary => "button button--primary",
        LinkStyle::Secondary => "button button--secondary",
        LinkStyle::Plain => "link",
    };
    let target = if link.external {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    let _ = writeln!(
        out,
        "<a class=\"{class}\" href=\"{}\"{target}>{}</a>",
        escape_html(&link.to),
        escape_html(&link.label)
    );
}

/// Escape the five HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FeatureDescriptor, SiteMetadata, render};

    fn metadata() -> SiteMetadata {
        SiteMetadata {
            title: "Guide".to_owned(),
            tagline: "Web & API".to_owned(),
            description: "Docs".to_owned(),
            lang: "en".to_owned(),
            repository_url: "https://github.com/example/project".to_owned(),
            recognition: Some((
                "Recognized".to_owned(),
                "https://example.com/ecosystem".to_owned(),
            )),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_to_html_sections() {
        let page = render(&metadata(), &[FeatureDescriptor::new("API Testing", "REST <JSON>")]);
        let html = to_html(&page);

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Guide - Web &amp; API</title>"));
        assert!(html.contains("<h2>Key Features</h2>"));
        assert!(html.contains("<h3>API Testing</h3><p>REST &lt;JSON&gt;</p>"));
        assert!(html.contains(
            "<a class=\"button button--primary\" href=\"/getting-started\">Get Started</a>"
        ));
        assert!(html.contains("<h2>Ready to Start Testing?</h2>"));
        assert!(html.contains(
            "<a class=\"link\" href=\"https://example.com/ecosystem\" target=\"_blank\" rel=\"noopener noreferrer\">Recognized</a>"
        ));
    }

    #[test]
    fn test_to_html_omits_empty_grid() {
        let html = to_html(&render(&metadata(), &[]));
        assert!(!html.contains("class=\"features\""));
        assert!(html.contains("Installation Guide"));
    }

    #[test]
    fn test_to_html_keeps_card_order() {
        let features = [
            FeatureDescriptor::new("X", "1"),
            FeatureDescriptor::new("Y", "2"),
        ];
        let html = to_html(&render(&metadata(), &features));
        let x = html.find("<h3>X</h3>").unwrap();
        let y = html.find("<h3>Y</h3>").unwrap();
        assert!(x < y);
    }
}
