//! Minimal element tree for icon markup.
//!
//! Only the structure the icon renderer needs is kept: element names,
//! attributes and nesting. Text content, comments, processing instructions and
//! declarations are skipped. The reader is forgiving: a stray closing tag is
//! ignored, a closing tag for an outer element closes everything inside it,
//! and elements still open at the end of input are closed there.
//!
//! Masking is structural: every element below a `<mask>` is excluded from
//! [`Document::drawable_paths`], however deep it sits.

use log::trace;

/// One markup element with its attributes and children.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Attribute value by (case-insensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    #[inline]
    pub fn is(&self, name: &str) -> bool { self.name == name }
}

/// Parsed markup: a synthetic root holding the top-level elements.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Build the element tree. Never fails; malformed regions are skipped.
    pub fn parse(markup: &str) -> Self {
        let mut stack = vec![Element::named("#root")];
        let mut reader = TagReader::new(markup);

        while let Some(tag) = reader.next_tag() {
            match tag {
                Tag::Open { element, self_closing: true } => {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(element);
                    }
                }
                Tag::Open { element, self_closing: false } => stack.push(element),
                Tag::Close(name) => {
                    let Some(depth) = stack.iter().skip(1).rposition(|e| e.name == name) else {
                        trace!("ignoring unmatched </{name}>");
                        continue;
                    };
                    // `depth` counts from index 1; pop down to and including it.
                    while stack.len() > depth + 1 {
                        close_top(&mut stack);
                    }
                }
            }
        }

        while stack.len() > 1 {
            close_top(&mut stack);
        }

        Self { root: stack.pop().unwrap_or_default() }
    }

    pub fn elements(&self) -> &[Element] { &self.root.children }

    /// `<path>` elements in document order, skipping anything inside a `<mask>`.
    pub fn drawable_paths(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_paths(&self.root, &mut out);
        out
    }
}

fn close_top(stack: &mut Vec<Element>) {
    if let Some(done) = stack.pop()
        && let Some(parent) = stack.last_mut()
    {
        parent.children.push(done);
    }
}

fn collect_paths<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    for child in &element.children {
        if child.is("mask") {
            trace!("skipping masked subtree");
            continue;
        }
        if child.is("path") {
            out.push(child);
        }
        collect_paths(child, out);
    }
}

// =============================================================================
// Tag Reader
// =============================================================================

enum Tag {
    Open { element: Element, self_closing: bool },
    Close(String),
}

struct TagReader<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> TagReader<'a> {
    fn new(src: &'a str) -> Self { Self { src, pos: 0 } }

    fn rest(&self) -> &'a str { &self.src[self.pos..] }

    /// Advance past the next occurrence of `pat`, or to the end.
    fn skip_past(&mut self, pat: &str) {
        self.pos = self.rest().find(pat).map_or(self.src.len(), |i| self.pos + i + pat.len());
    }

    fn next_tag(&mut self) -> Option<Tag> {
        loop {
            let lt = self.rest().find('<')?;
            self.pos += lt;
            let rest = self.rest();

            if rest.starts_with("<!--") {
                self.skip_past("-->");
            } else if rest.starts_with("<?") {
                self.skip_past("?>");
            } else if rest.starts_with("<!") {
                self.skip_past(">");
            } else if let Some(body) = rest.strip_prefix("</") {
                let end = body.find('>').unwrap_or(body.len());
                let name = body[..end].trim().to_ascii_lowercase();
                self.pos += 2 + end + 1;
                self.pos = self.pos.min(self.src.len());
                return Some(Tag::Close(name));
            } else {
                let end = find_tag_end(rest);
                let inner = &rest[1..end];
                self.pos = (self.pos + end + 1).min(self.src.len());

                let (inner, self_closing) = match inner.trim_end().strip_suffix('/') {
                    Some(body) => (body, true),
                    None => (inner, false),
                };
                let Some(element) = parse_open_tag(inner) else { continue };
                return Some(Tag::Open { element, self_closing });
            }
        }
    }
}

/// Index of the `>` ending the tag that starts `rest`, ignoring `>` inside
/// quoted attribute values. Returns `rest.len()` if unterminated.
fn find_tag_end(rest: &str) -> usize {
    let mut quote: Option<char> = None;
    for (i, c) in rest.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), _) if c == q => quote = None,
            (None, '>') => return i,
            _ => {}
        }
    }
    rest.len()
}

fn parse_open_tag(inner: &str) -> Option<Element> {
    let inner = inner.trim_start();
    let name_end = inner.find(|c: char| c.is_whitespace()).unwrap_or(inner.len());
    let name = &inner[..name_end];
    if name.is_empty() {
        return None;
    }

    let mut element = Element::named(name);
    let mut rest = &inner[name_end..];

    loop {
        rest = rest.trim_start();
        let Some(eq) = rest.find('=') else { break };
        let key = rest[..eq].trim();
        let after = rest[eq + 1..].trim_start();

        let (value, remaining) = match after.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let body = &after[1..];
                let close = body.find(q).unwrap_or(body.len());
                (&body[..close], body.get(close + 1..).unwrap_or(""))
            }
            Some(_) => {
                let end = after.find(char::is_whitespace).unwrap_or(after.len());
                (&after[..end], &after[end..])
            }
            None => ("", ""),
        };

        // Bare attributes before `key=` (e.g. `hidden fill="x"`) leave spaces in the key.
        let key = key.rsplit(char::is_whitespace).next().unwrap_or(key);
        if !key.is_empty() {
            element.attrs.push((key.to_string(), value.to_string()));
        }
        rest = remaining;
    }

    Some(element)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_path_attributes() {
        let doc = Document::parse(r#"<path d="M0 0 L1 1" stroke='currentColor' stroke-width=4/>"#);
        let paths = doc.drawable_paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].attr("d"), Some("M0 0 L1 1"));
        assert_eq!(paths[0].attr("STROKE"), Some("currentColor"));
        assert_eq!(paths[0].attr("stroke-width"), Some("4"));
        assert_eq!(paths[0].attr("fill"), None);
    }

    #[test]
    fn test_nesting_and_prolog() {
        let doc = Document::parse(
            r#"<?xml version="1.0"?><!-- icon --><svg viewBox="0 0 128 128"><g><path d="M1 1"/></g></svg>"#,
        );
        assert_eq!(doc.elements().len(), 1);
        assert!(doc.elements()[0].is("svg"));
        assert_eq!(doc.elements()[0].children[0].children.len(), 1);
        assert_eq!(doc.drawable_paths().len(), 1);
    }

    #[test]
    fn test_masked_paths_are_excluded() {
        let doc = Document::parse(
            r#"<svg><defs><mask id="m"><path d="M0 0 L9 9" fill="white"/></mask></defs>
               <path d="M1 1 L2 2" stroke="currentColor"/></svg>"#,
        );
        let paths = doc.drawable_paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].attr("d"), Some("M1 1 L2 2"));
    }

    #[test]
    fn test_deeply_masked_paths_are_excluded() {
        let doc = Document::parse(r#"<mask><g><g><path d="M0 0"/></g></g></mask>"#);
        assert!(doc.drawable_paths().is_empty());
    }

    #[test]
    fn test_quoted_gt_does_not_end_tag() {
        let doc = Document::parse(r#"<path d="M0 0" data-note="a>b" fill="red"/>"#);
        let paths = doc.drawable_paths();
        assert_eq!(paths[0].attr("data-note"), Some("a>b"));
        assert_eq!(paths[0].attr("fill"), Some("red"));
    }

    #[test]
    fn test_open_path_tag_with_closing_tag() {
        let doc = Document::parse(r#"<path d="M0 0 L1 1"></path><path d="M2 2"></path>"#);
        assert_eq!(doc.drawable_paths().len(), 2);
    }

    #[test]
    fn test_unclosed_mask_masks_to_end() {
        let doc = Document::parse(r#"<path d="M0 0"/><mask><path d="M1 1"/>"#);
        assert_eq!(doc.drawable_paths().len(), 1);
    }

    #[test]
    fn test_stray_close_tag_is_ignored() {
        let doc = Document::parse(r#"</mask><path d="M0 0"/>"#);
        assert_eq!(doc.drawable_paths().len(), 1);
    }

    #[test]
    fn test_outer_close_closes_inner() {
        let doc = Document::parse(r#"<mask><g><path d="M0 0"/></mask><path d="M1 1"/>"#);
        let paths = doc.drawable_paths();
        assert_eq!(paths.len(), 1, "Closing </mask> ends the unclosed <g> too");
        assert_eq!(paths[0].attr("d"), Some("M1 1"));
    }

    #[test]
    fn test_garbage_is_tolerated() {
        let doc = Document::parse("not markup at all < > <<< />");
        assert!(doc.drawable_paths().is_empty());
    }
}
