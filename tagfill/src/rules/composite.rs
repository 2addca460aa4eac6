//! Composite rules: they allocate where needed and call back into the engine.

use log::{debug, trace};

use crate::field::Field;
use crate::filler::Filler;
use crate::literal;
use crate::reflect::{Sequence, ValueMut};
use crate::types::{Kind, TypeHash};

/// Re-runs the full fill pass over a nested record.
pub fn structure(filler: &Filler, field: &mut Field<'_>) {
    let mut lineage = field.lineage().to_vec();
    lineage.push(field.type_hash());
    if let ValueMut::Struct(record) = field.value_mut() {
        filler.fill_within(record, &lineage);
    }
}

/// Allocates a nil `Option<T>` and fills the pointee with the same annotation.
///
/// A pointer to a scalar is left alone when it is already set or when the
/// field carries no annotation, so `Option<i32>` without a default stays `None`.
/// A nil pointer to a record that is already being filled further up stays
/// nil, which keeps self-referential types such as linked lists finite.
pub fn pointer(filler: &Filler, field: &mut Field<'_>) {
    let annotation = field.annotation();
    let lineage = field.lineage();
    let pointee = field.type_hash();
    let ValueMut::Pointer(pointer) = field.value_mut() else {
        return;
    };
    if pointer.pointee_kind().is_scalar() && (!pointer.is_nil() || annotation.is_empty()) {
        return;
    }
    if pointer.is_nil() && lineage.contains(&pointee) {
        trace!("`{pointee}` is already being filled, leaving the pointer nil");
        return;
    }
    filler.fill_field(&mut Field::synthetic(annotation, pointer.alloc()).within(lineage));
}

/// Fills a `Vec<T>` according to its element kind.
pub fn slice(filler: &Filler, field: &mut Field<'_>) {
    let annotation = field.annotation();
    let lineage = field.lineage();
    let ValueMut::Slice(seq) = field.value_mut() else {
        return;
    };

    match seq.elem_kind() {
        Kind::Uint8 => {
            if let Some(bytes) = seq.bytes_mut()
                && bytes.capacity() == 0
            {
                *bytes = annotation.as_bytes().to_vec();
            }
        }
        Kind::Struct => for_each_element(seq, lineage, |element| structure(filler, element)),
        Kind::Pointer => for_each_element(seq, lineage, |element| {
            if let ValueMut::Pointer(slot) = element.value_mut() {
                slot.alloc();
            }
            pointer(filler, element);
        }),
        _ if annotation.is_empty() => {}
        _ => {
            let pieces = match literal::split_sequence(annotation) {
                Ok(pieces) => pieces,
                Err(err) => {
                    debug!("{err}, leaving the vector empty");
                    return;
                }
            };
            seq.reset(pieces.len());
            for (index, piece) in pieces.into_iter().enumerate() {
                if let Some(element) = seq.element_mut(index) {
                    filler.dispatch(&mut Field::synthetic(piece, element).within(lineage));
                }
            }
        }
    }
}

/// Wraps each existing element in a synthetic descriptor with no annotation.
fn for_each_element(seq: &mut dyn Sequence, lineage: &[TypeHash], mut apply: impl FnMut(&mut Field<'_>)) {
    for index in 0..seq.len() {
        if let Some(element) = seq.element_mut(index) {
            apply(&mut Field::synthetic("", element).within(lineage));
        }
    }
}
