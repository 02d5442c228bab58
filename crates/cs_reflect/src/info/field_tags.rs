// -----------------------------------------------------------------------------
// FieldTags

/// Key/value text attached to a struct field.
///
/// Written with `#[reflect(tag(key = "value", ...))]`. Keys keep the order
/// they were written in, and a repeated key resolves to its first entry.
///
/// ```
/// use cs_reflect::info::FieldTags;
///
/// let tags = FieldTags::new(&[("flag", "port"), ("usage", " listen port "), ("flag", "p")]);
///
/// assert_eq!(tags.lookup("flag"), Some("port"));
/// assert_eq!(tags.get("usage"), " listen port ");
/// assert_eq!(tags.get("missing"), "");
/// assert_eq!(tags.len(), 3);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldTags {
    entries: &'static [(&'static str, &'static str)],
}

impl FieldTags {
    /// Tags of an untagged field.
    pub const EMPTY: Self = Self { entries: &[] };

    /// Creates tags from `(key, value)` pairs.
    #[inline]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the value of the first entry named `key`.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|&(_, value)| value)
    }

    /// Returns the value of `key`, or `""` when absent.
    #[inline]
    pub fn get(&self, key: &str) -> &'static str {
        self.lookup(key).unwrap_or_default()
    }

    /// Iterates over `(key, value)` pairs in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &'static str)> {
        self.entries.iter().copied()
    }

    /// Returns the number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there is no entry.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
