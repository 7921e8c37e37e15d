use log::warn;
use std::ops::Range;
use tl::ParserOptions;

/// Element that receives alert messages when the host page provides one.
pub const ALERT_PLACEHOLDER_ID: &str = "alertPlaceholder";

/// A host HTML document whose elements are addressed by id.
///
/// Every edit re-parses the current source, so offsets never go stale after
/// a previous replacement.
#[derive(Debug, Clone)]
pub struct HostPage {
    source: String,
}

struct Located {
    outer: Range<usize>,
    inner: Option<Range<usize>>,
    name: String,
}

impl HostPage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_html(self) -> String {
        self.source
    }

    pub fn contains(&self, id: &str) -> bool {
        locate(&self.source, id).is_some()
    }

    /// First id of `candidates` that exists in the page.
    pub fn first_present(&self, candidates: &[&'static str]) -> Option<&'static str> {
        candidates.iter().copied().find(|id| self.contains(id))
    }

    /// Replaces everything between the element's opening and closing tags.
    /// Returns `false` when the element does not exist.
    pub fn replace_inner(&mut self, id: &str, html: &str) -> bool {
        let Some(located) = locate(&self.source, id) else {
            return false;
        };

        match located.inner {
            Some(inner) => self.source.replace_range(inner, html),
            None => {
                // self-closing or unterminated: rebuild the element around the new content
                let outer = &self.source[located.outer.clone()];
                let Some(open_end) = opening_tag_end(outer) else {
                    warn!("cannot rewrite element #{id}: malformed opening tag");
                    return false;
                };
                let opening = outer[..open_end].trim_end_matches('>').trim_end_matches('/');
                let rebuilt = format!("{}>{html}</{}>", opening.trim_end(), located.name);
                self.source.replace_range(located.outer, &rebuilt);
            }
        }
        true
    }
}

fn locate(source: &str, id: &str) -> Option<Located> {
    let dom = tl::parse(source, ParserOptions::default().track_ids()).ok()?;
    let parser = dom.parser();
    let tag = dom.get_element_by_id(id)?.get(parser)?.as_tag()?;

    let (start, _) = tag.boundaries(parser);
    let raw = tag.raw().as_utf8_str();
    let outer = start..start + raw.len();
    let outer_text = source.get(outer.clone())?;
    let name = tag.name().as_utf8_str().to_string();

    let inner = opening_tag_end(outer_text).and_then(|open_end| {
        let close_start = outer_text.rfind("</")?;
        let closing = &outer_text[close_start + 2..];
        let closes_self = closing
            .get(..name.len())
            .is_some_and(|n| n.eq_ignore_ascii_case(&name));
        (closes_self && close_start >= open_end)
            .then(|| outer.start + open_end..outer.start + close_start)
    });

    Some(Located { outer, inner, name })
}

/// Byte index just past the `>` ending the first tag, ignoring `>` inside quoted attributes.
fn opening_tag_end(element: &str) -> Option<usize> {
    let mut quote = None;
    for (index, c) in element.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if q == c => quote = None,
            (None, '>') => return Some(index + 1),
            _ => {}
        }
    }
    None
}
