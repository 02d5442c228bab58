use alloc::boxed::Box;

use crate::access::{Target, indirect_value_mut};
use crate::info::{NamedField, TypeInfo};
use crate::ops::ReflectMut;
use crate::{AccessError, Reflect};

/// Returns the exported field `field_name` of a struct, ready to be written.
///
/// The target is followed through pointers first, see
/// [`indirect_value_mut`]. Fails with [`AccessError::InvalidField`] when
/// - the target is a shared reference,
/// - a null pointer is met, or the value behind the pointers is not a struct,
/// - the struct has no field of that name, or the field is not exported.
///
/// ```
/// use cs_reflect::{access, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Config {
///     pub name: String,
///     secret: u64,
/// }
///
/// let mut config = Box::new(Config { name: "a".into(), secret: 0 });
///
/// let field = access::get_struct_field(&mut config, "name").unwrap();
/// field.downcast_mut::<String>().unwrap().push('b');
/// assert_eq!(config.name, "ab");
///
/// assert!(access::get_struct_field(&mut config, "secret").is_err());
/// assert!(access::get_struct_field(&mut config, "missing").is_err());
/// assert!(access::get_struct_field(&config, "name").is_err());
/// ```
pub fn get_struct_field<'a>(
    target: impl Into<Target<'a>>,
    field_name: &str,
) -> Result<&'a mut dyn Reflect, AccessError> {
    let target = target.into();
    let ty = target.ty();
    let invalid = || AccessError::invalid_field(ty.name(), field_name);

    let Target::Mut(value) = target else {
        log::debug!("field `{field_name}` of `{ty}` rejected: target is not mutable");
        return Err(invalid());
    };

    let Some(value) = indirect_value_mut(value) else {
        log::debug!("field `{field_name}` of `{ty}` rejected: null pointer");
        return Err(invalid());
    };

    let exported = match value.reflect_type_info() {
        TypeInfo::Struct(info) => info.field(field_name).map(NamedField::is_exported),
        _ => None,
    };
    if exported != Some(true) {
        log::debug!("field `{field_name}` of `{ty}` rejected: missing or not exported");
        return Err(invalid());
    }

    match value.reflect_mut() {
        ReflectMut::Struct(value) => value.field_mut(field_name).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Writes `value` into the exported field `field_name` of a struct.
///
/// Field lookup follows [`get_struct_field`]. The value must have exactly
/// the field type, otherwise [`AccessError::TypeMismatch`] is returned and
/// the field is left untouched.
///
/// ```
/// use cs_reflect::{AccessError, access, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Config {
///     pub port: u16,
/// }
///
/// let mut config = Config { port: 0 };
///
/// access::set_struct_field(&mut config, "port", 8080_u16).unwrap();
/// assert_eq!(config.port, 8080);
///
/// let err = access::set_struct_field(&mut config, "port", 8080_i64).unwrap_err();
/// assert!(matches!(err, AccessError::TypeMismatch { .. }));
/// assert_eq!(config.port, 8080);
/// ```
pub fn set_struct_field<'a, T: Reflect>(
    target: impl Into<Target<'a>>,
    field_name: &str,
    value: T,
) -> Result<(), AccessError> {
    set_struct_field_boxed(target, field_name, Box::new(value))
}

/// Same as [`set_struct_field`], for a value whose type is only known at runtime.
pub fn set_struct_field_boxed<'a>(
    target: impl Into<Target<'a>>,
    field_name: &str,
    value: Box<dyn Reflect>,
) -> Result<(), AccessError> {
    let field = get_struct_field(target, field_name)?;

    if field.ty_id() != (*value).ty_id() {
        return Err(AccessError::TypeMismatch {
            expected: field.reflect_type().name(),
            actual: (*value).reflect_type().name(),
        });
    }

    let expected = field.reflect_type();
    field.set(value).map_err(|value| AccessError::TypeMismatch {
        expected: expected.name(),
        actual: (*value).reflect_type().name(),
    })?;

    log::trace!("set field `{field_name}` ({expected})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{get_struct_field, set_struct_field, set_struct_field_boxed};
    use crate::derive::Reflect;
    use crate::{AccessError, Reflect};

    #[derive(Reflect)]
    struct Inner {
        pub level: u8,
    }

    #[derive(Reflect)]
    struct Options {
        pub name: String,
        pub tags: Vec<String>,
        pub inner: Option<Box<Inner>>,
        count: u32,
        #[reflect(ignore)]
        pub cache: u64,
    }

    fn options() -> Options {
        Options {
            name: String::new(),
            tags: Vec::new(),
            inner: None,
            count: 0,
            cache: 0,
        }
    }

    #[test]
    fn set_exported_fields() {
        let mut opts = options();
        set_struct_field(&mut opts, "name", String::from("x")).unwrap();
        set_struct_field(&mut opts, "tags", vec![String::from("a")]).unwrap();
        set_struct_field(&mut opts, "inner", Some(Box::new(Inner { level: 2 }))).unwrap();

        assert_eq!(opts.name, "x");
        assert_eq!(opts.tags, ["a"]);

        let inner = opts.inner.as_mut().unwrap();
        set_struct_field(inner, "level", 9_u8).unwrap();
        assert_eq!(opts.inner.unwrap().level, 9);
    }

    #[test]
    fn rejects_private_ignored_and_missing() {
        let mut opts = options();
        for name in ["count", "cache", "nope", ""] {
            let err = get_struct_field(&mut opts, name).unwrap_err();
            assert_eq!(
                err,
                AccessError::InvalidField {
                    type_name: "Options".into(),
                    field: name.into(),
                }
            );
        }
    }

    #[test]
    fn rejects_shared_and_null_targets() {
        let opts = options();
        assert!(matches!(
            get_struct_field(&opts, "name"),
            Err(AccessError::InvalidField { .. })
        ));

        let mut none: Option<Box<Inner>> = None;
        assert!(get_struct_field(&mut none, "level").is_err());

        let mut number = 3_u8;
        assert!(get_struct_field(&mut number, "level").is_err());
    }

    #[test]
    fn type_mismatch_leaves_field() {
        let mut opts = options();
        let err = set_struct_field_boxed(&mut opts, "name", 3_i32.into_boxed_reflect()).unwrap_err();
        assert_eq!(
            err,
            AccessError::TypeMismatch {
                expected: "String".into(),
                actual: "i32".into(),
            }
        );
        assert_eq!(opts.name, "");
    }
}
