use alloc::string::String;

use crate::access::Target;
use crate::info::{NamedField, ReflectKind};
use crate::{AccessError, Reflect};

/// Checks that the target was supplied through a mutable reference.
///
/// Binders call this before walking a target, so that a value that can
/// never be written is reported up front.
///
/// ```
/// use cs_reflect::{AccessError, access::{Target, check_value}};
///
/// let mut value = 0_u8;
/// assert!(check_value(&Target::from(&mut value)).is_ok());
///
/// let err = check_value(&Target::from(&value)).unwrap_err();
/// assert_eq!(err, AccessError::PointerRequired { type_name: "u8".into() });
/// ```
pub fn check_value(target: &Target<'_>) -> Result<(), AccessError> {
    match target {
        Target::Mut(_) => Ok(()),
        Target::Ref(value) => Err(AccessError::PointerRequired {
            type_name: type_name(*value),
        }),
    }
}

/// Checks that `value` is a struct.
///
/// Pointers are not followed, see [`indirect_value`](crate::access::indirect_value).
///
/// ```
/// use cs_reflect::{AccessError, access::should_be_struct, derive::Reflect, info::ReflectKind};
///
/// #[derive(Reflect)]
/// struct Empty {}
///
/// assert!(should_be_struct(&Empty {}).is_ok());
/// assert_eq!(
///     should_be_struct(&vec![1_u8]),
///     Err(AccessError::InvalidKind { expected: ReflectKind::Struct, actual: ReflectKind::List }),
/// );
/// ```
pub fn should_be_struct(value: &dyn Reflect) -> Result<(), AccessError> {
    match value.reflect_kind() {
        ReflectKind::Struct => Ok(()),
        actual => Err(AccessError::InvalidKind {
            expected: ReflectKind::Struct,
            actual,
        }),
    }
}

/// Returns `true` if the field belongs to the exported surface of its struct.
#[inline]
pub fn is_struct_field_exported(field: &NamedField) -> bool {
    field.is_exported()
}

/// Returns the short type name of `value`, e.g. `Vec<String>`.
///
/// ```
/// use cs_reflect::access::type_name;
///
/// assert_eq!(type_name(&Some(vec![String::new()])), "Option<Vec<String>>");
/// ```
#[inline]
pub fn type_name(value: &dyn Reflect) -> String {
    value.reflect_type().name()
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::{check_value, is_struct_field_exported, should_be_struct, type_name};
    use crate::access::Target;
    use crate::derive::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::{AccessError, Reflect as _};

    #[derive(Reflect)]
    struct Sample {
        pub shown: bool,
        pub(crate) crate_only: bool,
        #[reflect(export)]
        forced: bool,
        #[reflect(hidden)]
        pub masked: bool,
    }

    #[test]
    fn exported_fields() {
        let info = Sample::type_info();
        let info = info.as_struct().unwrap();

        let exported = |name| is_struct_field_exported(info.field(name).unwrap());
        assert!(exported("shown"));
        assert!(!exported("crate_only"));
        assert!(exported("forced"));
        assert!(!exported("masked"));
    }

    #[test]
    fn pointer_required() {
        let boxed = Box::new(Sample {
            shown: true,
            crate_only: true,
            forced: true,
            masked: true,
        });
        let err = check_value(&Target::from(&boxed)).unwrap_err();
        assert_eq!(
            err,
            AccessError::PointerRequired {
                type_name: "Box<Sample>".into()
            }
        );
        assert_eq!(should_be_struct(&*boxed), Ok(()));
        assert_eq!(
            should_be_struct(boxed.as_reflect()),
            Err(AccessError::InvalidKind {
                expected: ReflectKind::Struct,
                actual: ReflectKind::Pointer,
            })
        );
        assert_eq!(type_name(&*boxed), "Sample");
    }
}
