// src/core/html.rs
//
// Small helpers over `scraper` element trees.

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Visible text of an element, whitespace-collapsed and trimmed.
pub fn inner_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// `<a>` descendants of `scope` in document order (excluding `scope` itself).
pub fn anchors<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "a")
}

/// `href` of the `n`-th (zero-based) anchor under `scope`.
pub fn nth_anchor_href<'a>(scope: ElementRef<'a>, n: usize) -> Option<&'a str> {
    anchors(scope).nth(n).and_then(|a| a.value().attr("href"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn inner_text_collapses_nested_text() {
        let doc = parse_document("<div id=x>  Cloud <b>Practitioner</b>\n </div>");
        assert_eq!(inner_text(first(&doc, "#x")), "Cloud Practitioner");
    }

    #[test]
    fn nth_anchor_skips_scope_and_counts_in_order() {
        let doc = parse_document(
            r#"<div id=e><a href="/one">1</a><p><a href="/two">2</a></p><a>no href</a></div>"#,
        );
        let e = first(&doc, "#e");
        assert_eq!(nth_anchor_href(e, 0), Some("/one"));
        assert_eq!(nth_anchor_href(e, 1), Some("/two"));
        assert_eq!(nth_anchor_href(e, 2), None);
        assert_eq!(nth_anchor_href(e, 3), None);
    }
}
