//! Scalar rules: the annotation literal is parsed and assigned.

use std::time::Duration;

use crate::field::Field;
use crate::filler::Filler;
use crate::literal;
use crate::reflect::ValueMut;
use crate::rules::lenient;
use crate::template::{self, Clock};

pub fn boolean(_: &Filler, field: &mut Field<'_>) {
    let value = lenient(field, literal::parse_bool(field.annotation()));
    if let ValueMut::Bool(slot) = field.value_mut() {
        *slot = value;
    }
}

/// Signed integers of any width; the parsed `i64` wraps to the field width.
pub fn int(_: &Filler, field: &mut Field<'_>) {
    let value = lenient(field, literal::parse_int(field.annotation()));
    if let ValueMut::Int(mut slot) = field.value_mut() {
        slot.set(value);
    }
}

pub fn uint(_: &Filler, field: &mut Field<'_>) {
    let value = lenient(field, literal::parse_uint(field.annotation()));
    if let ValueMut::Uint(mut slot) = field.value_mut() {
        slot.set(value);
    }
}

pub fn float(_: &Filler, field: &mut Field<'_>) {
    let value = lenient(field, literal::parse_float(field.annotation()));
    if let ValueMut::Float(mut slot) = field.value_mut() {
        slot.set(value);
    }
}

/// Assigns the annotation after expanding `{{date:..}}`/`{{time:..}}` macros
/// against `clock`.
pub fn string(field: &mut Field<'_>, clock: &Clock) {
    let value = template::expand(field.annotation(), clock());
    if let ValueMut::String(slot) = field.value_mut() {
        *slot = value;
    }
}

/// Parses a duration literal into a `Duration` or `Option<Duration>` field.
/// A set pointer is left alone; a nil one is allocated first.
pub fn duration(_: &Filler, field: &mut Field<'_>) {
    let value = lenient(field, literal::parse_duration(field.annotation()));
    assign_duration(field, value);
}

pub(crate) fn assign_duration(field: &mut Field<'_>, value: Duration) {
    match field.value_mut() {
        ValueMut::Duration(slot) => *slot = value,
        ValueMut::Pointer(pointer) if pointer.is_nil() => {
            if let ValueMut::Duration(slot) = pointer.alloc().reflect_mut() {
                *slot = value;
            }
        }
        _ => {}
    }
}
