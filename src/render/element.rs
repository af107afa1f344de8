use std::fmt::Write as _;

use indexmap::IndexMap;

/// Node of an in-memory SVG document.
///
/// Attributes keep insertion order so serialized markup is deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgElement {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<SvgElement>,
    pub text: Option<String>,
}

impl SvgElement {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class.into())
    }

    #[must_use]
    pub fn with_child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl ToString) {
        self.attributes.insert(name.into(), value.to_string());
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Numeric attribute value, if present and parseable.
    #[must_use]
    pub fn attr_f64(&self, name: &str) -> Option<f64> {
        self.attr(name)?.trim().parse().ok()
    }

    /// True when the whitespace-separated `class` list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|item| item == class))
    }

    /// Descendants (self included) carrying `class`, in document order.
    #[must_use]
    pub fn find_all_by_class(&self, class: &str) -> Vec<&SvgElement> {
        let mut found = Vec::new();
        self.collect(&mut found, &|element: &SvgElement| element.has_class(class));
        found
    }

    /// Descendants (self included) with tag `tag`, in document order.
    #[must_use]
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&SvgElement> {
        let mut found = Vec::new();
        self.collect(&mut found, &|element: &SvgElement| element.tag == tag);
        found
    }

    fn collect<'a>(&'a self, found: &mut Vec<&'a SvgElement>, matches: &dyn Fn(&SvgElement) -> bool) {
        if matches(self) {
            found.push(self);
        }
        for child in &self.children {
            child.collect(found, matches);
        }
    }

    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    pub fn write_markup(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape_xml(value));
        }

        if self.children.is_empty() && self.text.is_none() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_xml(text));
        }
        for child in &self.children {
            child.write_markup(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_escapes_and_self_closes() {
        let element = SvgElement::new("g")
            .with_class("tick major")
            .with_child(SvgElement::new("line").with_attr("y2", 6))
            .with_child(SvgElement::new("text").with_text("Q1 & Q2"));

        assert_eq!(
            element.to_markup(),
            "<g class=\"tick major\"><line y2=\"6\"/><text>Q1 &amp; Q2</text></g>"
        );
        assert!(element.has_class("major"));
        assert!(!element.has_class("maj"));
    }

    #[test]
    fn class_search_walks_the_tree() {
        let tree = SvgElement::new("svg").with_child(
            SvgElement::new("g")
                .with_child(SvgElement::new("g").with_class("tick"))
                .with_child(SvgElement::new("g").with_class("tick")),
        );
        assert_eq!(tree.find_all_by_class("tick").len(), 2);
        assert_eq!(tree.find_all_by_tag("g").len(), 3);
    }
}
