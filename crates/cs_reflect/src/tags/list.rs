// -----------------------------------------------------------------------------
// TagShape

/// The shape of a tag value, decided by [`TagList::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagShape {
    /// Blank text, there are no items.
    Empty,
    /// Text enclosed in `[` and `]`, a comma separated list.
    Bracketed,
    /// Any other text, a single item.
    Literal,
}

// -----------------------------------------------------------------------------
// TagList

/// A scanner over the items of a tag value.
///
/// - Surrounding whitespace is trimmed first, blank text has no items.
/// - Text enclosed in `[` and `]` is split on every `,`. Each item is
///   trimmed, then one leading and one trailing `'` are removed.
///   Quotes do not protect commas, and empty items are kept.
/// - Any other text is one item, as is.
///
/// ```
/// use cs_reflect::tags::{TagList, TagShape};
///
/// let list = TagList::parse(" ['a', b ,'c'] ");
/// assert_eq!(list.shape(), TagShape::Bracketed);
/// assert_eq!(list.collect::<Vec<_>>(), ["a", "b", "c"]);
///
/// assert_eq!(TagList::parse("[]").collect::<Vec<_>>(), [""]);
/// assert_eq!(TagList::parse("one, two").collect::<Vec<_>>(), ["one, two"]);
/// assert_eq!(TagList::parse("   ").count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct TagList<'a> {
    shape: TagShape,
    // `None` once every item was yielded.
    rest: Option<&'a str>,
}

impl<'a> TagList<'a> {
    /// Classifies `text` and prepares the scan.
    pub fn parse(text: &'a str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self {
                shape: TagShape::Empty,
                rest: None,
            };
        }

        match text.strip_prefix('[').and_then(|text| text.strip_suffix(']')) {
            Some(inner) => Self {
                shape: TagShape::Bracketed,
                rest: Some(inner),
            },
            None => Self {
                shape: TagShape::Literal,
                rest: Some(text),
            },
        }
    }

    /// Returns the shape of the scanned text.
    #[inline]
    pub const fn shape(&self) -> TagShape {
        self.shape
    }
}

impl<'a> Iterator for TagList<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match self.shape {
            TagShape::Bracketed => {
                let (item, tail) = match rest.split_once(',') {
                    Some((item, tail)) => (item, Some(tail)),
                    None => (rest, None),
                };
                self.rest = tail;
                Some(strip_quotes(item.trim()))
            }
            TagShape::Literal | TagShape::Empty => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

impl core::iter::FusedIterator for TagList<'_> {}

#[inline]
fn strip_quotes(item: &str) -> &str {
    let item = item.strip_prefix('\'').unwrap_or(item);
    item.strip_suffix('\'').unwrap_or(item)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{TagList, TagShape};

    fn items(text: &str) -> Vec<&str> {
        TagList::parse(text).collect()
    }

    #[test]
    fn shapes() {
        assert_eq!(TagList::parse("").shape(), TagShape::Empty);
        assert_eq!(TagList::parse(" \t").shape(), TagShape::Empty);
        assert_eq!(TagList::parse("[x]").shape(), TagShape::Bracketed);
        assert_eq!(TagList::parse("[x").shape(), TagShape::Literal);
        assert_eq!(TagList::parse("x]").shape(), TagShape::Literal);
        assert_eq!(TagList::parse("[").shape(), TagShape::Literal);
    }

    #[test]
    fn bracketed_items() {
        assert_eq!(items("[foo, bar, baz]"), ["foo", "bar", "baz"]);
        assert_eq!(items("['a','b,c']"), ["a", "b", "c"]);
        assert_eq!(items("[ 'x' ]"), ["x"]);
        assert_eq!(items("[a,,b,]"), ["a", "", "b", ""]);
        assert_eq!(items("[']"), [""]);
        assert_eq!(items("['']"), [""]);
        assert_eq!(items("[''a'']"), ["'a'"]);
    }

    #[test]
    fn literal_items() {
        assert_eq!(items("single"), ["single"]);
        assert_eq!(items("  padded  "), ["padded"]);
        assert_eq!(items("'quoted'"), ["'quoted'"]);
        assert!(items("").is_empty());
    }

    #[test]
    fn fused() {
        let mut list = TagList::parse("[a]");
        assert_eq!(list.next(), Some("a"));
        assert_eq!(list.next(), None);
        assert_eq!(list.next(), None);
    }
}
