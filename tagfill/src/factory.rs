//! The `factory` rule set: random non-zero values for fixtures.
//!
//! Booleans have a single non-zero value, so they are always set to `true`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::field::Field;
use crate::filler::Filler;
use crate::reflect::ValueMut;
use crate::rules::{composite, scalar};
use crate::types::Kind;

/// Annotation key read by the factory filler.
pub const FACTORY_TAG: &str = "factory";

const MAX_DURATION_SECS: u64 = 3_600;

type SharedRng = Arc<Mutex<StdRng>>;

/// Factory filler seeded from the operating system.
pub fn new_factory_filler() -> Filler {
    new_factory_filler_with_rng(StdRng::from_os_rng())
}

/// Factory filler drawing from `rng`; pass a seeded generator for reproducible numbers.
///
/// Strings are derived from the current instant and stay time dependent.
pub fn new_factory_filler_with_rng(rng: StdRng) -> Filler {
    let rng: SharedRng = Arc::new(Mutex::new(rng));
    let (ints, uints, floats, durations) = (rng.clone(), rng.clone(), rng.clone(), rng);

    Filler::builder(FACTORY_TAG)
        .by_kind(Kind::Bool, |_, field| {
            if let ValueMut::Bool(slot) = field.value_mut() {
                *slot = true;
            }
        })
        .by_kinds(Kind::INTEGERS, move |_, field| {
            if let ValueMut::Int(mut slot) = field.value_mut() {
                let value = lock(&ints).random_range(1..=slot.max());
                slot.set(value);
            }
        })
        .by_kinds(Kind::UNSIGNED, move |_, field| {
            if let ValueMut::Uint(mut slot) = field.value_mut() {
                let value = lock(&uints).random_range(1..=slot.max());
                slot.set(value);
            }
        })
        .by_kinds(Kind::FLOATS, move |_, field| {
            if let ValueMut::Float(mut slot) = field.value_mut() {
                let value = lock(&floats).random_range(f64::from(f32::EPSILON)..1.0);
                slot.set(value);
            }
        })
        .by_kind(Kind::String, |_, field| {
            if let ValueMut::String(slot) = field.value_mut() {
                *slot = random_hex();
            }
        })
        .by_type::<Duration, _>(move |_, field| {
            let secs = lock(&durations).random_range(1..=MAX_DURATION_SECS);
            scalar::assign_duration(field, Duration::from_secs(secs));
        })
        .by_kind(Kind::Slice, bytes_or_slice)
        .by_kind(Kind::Struct, composite::structure)
        .by_kind(Kind::Pointer, composite::pointer)
        .build()
}

/// A 32-character lowercase hex digest of the current UTC instant.
pub fn random_hex() -> String {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);
    format!("{:x}", md5::compute(now.as_bytes()))
}

/// Unallocated byte vectors get a random hex string; every other vector
/// follows the composite slice rule.
fn bytes_or_slice(filler: &Filler, field: &mut Field<'_>) {
    if let ValueMut::Slice(seq) = field.value_mut()
        && let Some(bytes) = seq.bytes_mut()
    {
        if bytes.capacity() == 0 {
            *bytes = random_hex().into_bytes();
        }
        return;
    }
    composite::slice(filler, field);
}

fn lock(rng: &SharedRng) -> MutexGuard<'_, StdRng> {
    rng.lock().unwrap_or_else(PoisonError::into_inner)
}
