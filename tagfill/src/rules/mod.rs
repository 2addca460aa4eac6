//! Fill rules shared by the defaults and factory rule sets.

pub mod composite;
pub mod scalar;

use log::debug;

use crate::errors::LiteralResult;
use crate::field::Field;

/// Unwraps a parse result, logging the failure and falling back to the zero value.
pub(crate) fn lenient<T: Default>(field: &Field<'_>, parsed: LiteralResult<T>) -> T {
    parsed.unwrap_or_else(|err| {
        debug!("`{}`: {err}, using the zero value", field.label());
        T::default()
    })
}
