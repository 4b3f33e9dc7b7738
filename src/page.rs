//! Parsed-document wrapper used by the extraction layers.
//!
//! A [`Page`] owns a parsed HTML tree and exposes the handful of
//! structural queries the provider layouts need: ordered text and
//! attribute collection for CSS selectors, plus the text-anchored
//! lookups (label/value pairs, link-after-heading) that CSS alone
//! cannot express.

use scraper::{ElementRef, Html, Selector};

/// A fetched page, parsed and ready for structural queries.
///
/// All query methods return results in document order.
pub struct Page {
    document: Html,
}

impl Page {
    /// Parses raw HTML into a queryable page.
    pub fn parse(text: &str) -> Self {
        Self {
            document: Html::parse_document(text),
        }
    }

    /// Returns the trimmed text content of every element matching the
    /// selector, in document order.
    pub fn texts(&self, selector: &Selector) -> Vec<String> {
        self.document
            .select(selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// Returns the given attribute of every element matching the
    /// selector, in document order. Elements without the attribute are
    /// skipped.
    pub fn attrs(&self, selector: &Selector, attr: &str) -> Vec<String> {
        self.document
            .select(selector)
            .filter_map(|el| el.value().attr(attr))
            .map(str::to_string)
            .collect()
    }

    /// Returns the own text of the first element whose *direct* text
    /// nodes (not descendant text) equal `needle` after trimming.
    pub fn find_own_text(&self, needle: &str) -> Option<String> {
        self.all_elements()
            .map(own_text)
            .find(|text| text == needle)
    }

    /// Returns the `href` attribute of the first element whose own text
    /// equals `needle`.
    pub fn href_of_text(&self, needle: &str) -> Option<String> {
        self.all_elements()
            .find(|el| own_text(*el) == needle)
            .and_then(|el| el.value().attr("href"))
            .map(str::to_string)
    }

    /// Looks up a label/value pair: finds the element whose own text
    /// equals `caption`, then returns the text of the first `<span>`
    /// child of its parent.
    pub fn labeled_value(&self, caption: &str) -> Option<String> {
        let label = self.all_elements().find(|el| own_text(*el) == caption)?;
        let parent = label.parent().and_then(ElementRef::wrap)?;
        parent
            .children()
            .filter_map(ElementRef::wrap)
            .find(|child| child.value().name() == "span")
            .map(|span| span.text().collect::<String>().trim().to_string())
    }

    /// Returns the first non-empty link `href` appearing after (in
    /// document order) a heading of tag `heading_tag` whose own text
    /// equals `caption`.
    pub fn first_href_after_heading(&self, heading_tag: &str, caption: &str) -> Option<String> {
        let mut past_heading = false;
        for node in self.document.root_element().descendants() {
            let Some(el) = ElementRef::wrap(node) else {
                continue;
            };
            if !past_heading {
                if el.value().name() == heading_tag && own_text(el) == caption {
                    past_heading = true;
                }
            } else if el.value().name() == "a" {
                if let Some(href) = el.value().attr("href") {
                    if !href.is_empty() {
                        return Some(href.to_string());
                    }
                }
            }
        }
        None
    }

    /// Iterates elements matching the selector. For the layout modules,
    /// which sub-select within repeated page regions.
    pub(crate) fn select<'a>(
        &'a self,
        selector: &'a Selector,
    ) -> impl Iterator<Item = ElementRef<'a>> {
        self.document.select(selector)
    }

    fn all_elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }
}

/// Concatenated direct text nodes of an element, trimmed. Descendant
/// element text is deliberately excluded so label lookups do not match
/// every enclosing container.
fn own_text(el: ElementRef) -> String {
    let mut out = String::new();
    for node in el.children() {
        if let Some(text) = node.value().as_text() {
            out.push_str(text);
        }
    }
    out.trim().to_string()
}
