use alloc::vec::Vec;

use crate::info::NamedField;
use crate::tags::TagList;

/// Returns the trimmed value of tag `key` on `field`, or `""` when absent.
///
/// ```
/// use cs_reflect::{derive::Reflect, info::Typed, tags};
///
/// #[derive(Reflect)]
/// struct Args {
///     #[reflect(tag(usage = "  print more  "))]
///     pub verbose: bool,
/// }
///
/// let info = Args::type_info();
/// let field = info.as_struct().unwrap().field("verbose").unwrap();
///
/// assert_eq!(tags::get_struct_field_tag(field, "usage"), "print more");
/// assert_eq!(tags::get_struct_field_tag(field, "flag"), "");
/// ```
pub fn get_struct_field_tag(field: &NamedField, key: &str) -> &'static str {
    field.tags().get(key).trim()
}

/// Returns the items of tag `key` on `field`, scanned with [`TagList`].
///
/// An absent or blank tag gives no item.
///
/// ```
/// use cs_reflect::{derive::Reflect, info::Typed, tags};
///
/// #[derive(Reflect)]
/// struct Args {
///     #[reflect(tag(alias = "['v', verbose]", env = "VERBOSE"))]
///     pub verbose: bool,
/// }
///
/// let info = Args::type_info();
/// let field = info.as_struct().unwrap().field("verbose").unwrap();
///
/// assert_eq!(tags::get_struct_field_tag_slice(field, "alias"), ["v", "verbose"]);
/// assert_eq!(tags::get_struct_field_tag_slice(field, "env"), ["VERBOSE"]);
/// assert!(tags::get_struct_field_tag_slice(field, "missing").is_empty());
/// ```
pub fn get_struct_field_tag_slice(field: &NamedField, key: &str) -> Vec<&'static str> {
    TagList::parse(field.tags().get(key)).collect()
}

#[cfg(test)]
mod tests {
    use super::{get_struct_field_tag, get_struct_field_tag_slice};
    use crate::info::{FieldTags, NamedField};

    #[test]
    fn manual_field() {
        let field = NamedField::new::<u8>("level")
            .with_tags(FieldTags::new(&[("flag", " level "), ("alias", "[]")]));

        assert_eq!(get_struct_field_tag(&field, "flag"), "level");
        assert_eq!(get_struct_field_tag_slice(&field, "flag"), ["level"]);
        assert_eq!(get_struct_field_tag_slice(&field, "alias"), [""]);
        assert!(get_struct_field_tag_slice(&field, "usage").is_empty());
    }
}
