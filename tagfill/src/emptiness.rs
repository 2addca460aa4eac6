use crate::reflect::{Reflect, ValueMut};
use crate::types::Kind;

/// Returns `true` when `value` still holds its kind's unset value and may be filled.
///
/// Explicit values are never clobbered. Byte vectors count as set once they
/// own storage, even at length zero. Structs, pointers and vectors of structs
/// or pointers are always eligible: their rules only touch what is unset.
pub fn is_empty(value: &mut dyn Reflect) -> bool {
    match value.reflect_mut() {
        ValueMut::Bool(flag) => !*flag,
        ValueMut::Int(slot) => slot.get() == 0,
        ValueMut::Uint(slot) => slot.get() == 0,
        ValueMut::Float(slot) => slot.get() == 0.0,
        ValueMut::String(text) => text.is_empty(),
        ValueMut::Duration(span) => span.is_zero(),
        ValueMut::Slice(seq) => match seq.elem_kind() {
            Kind::Uint8 => !seq.is_allocated(),
            Kind::Struct | Kind::Pointer => true,
            _ => seq.len() == 0,
        },
        ValueMut::Struct(_) | ValueMut::Pointer(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn scalars_are_empty_only_at_zero() {
        assert!(is_empty(&mut false));
        assert!(!is_empty(&mut true));
        assert!(is_empty(&mut 0i16));
        assert!(!is_empty(&mut -3i64));
        assert!(is_empty(&mut 0u8));
        assert!(!is_empty(&mut 9usize));
        assert!(is_empty(&mut 0.0f32));
        assert!(!is_empty(&mut f64::EPSILON));
        assert!(is_empty(&mut String::new()));
        assert!(!is_empty(&mut String::from(" ")));
        assert!(is_empty(&mut Duration::ZERO));
        assert!(!is_empty(&mut Duration::from_nanos(1)));
    }

    #[test]
    fn byte_vectors_are_empty_until_allocated() {
        assert!(is_empty(&mut Vec::<u8>::new()));
        assert!(!is_empty(&mut Vec::<u8>::with_capacity(8)));
        assert!(!is_empty(&mut b"foo".to_vec()));
    }

    #[test]
    fn other_vectors_are_empty_at_length_zero() {
        assert!(is_empty(&mut Vec::<i32>::with_capacity(8)));
        assert!(!is_empty(&mut vec![0i32]));
        assert!(is_empty(&mut Vec::<Vec<String>>::new()));
    }

    #[test]
    fn pointers_are_always_eligible() {
        assert!(is_empty(&mut Some(5i32)));
        assert!(is_empty(&mut None::<i32>));
        assert!(is_empty(&mut vec![Some(1u8)]));
    }
}
