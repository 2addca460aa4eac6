//! tagfill: fill unset struct fields from `#[fill(...)]` annotations.
//!
//! Derive [`Record`] on a struct, annotate its fields, then call
//! [`apply_defaults`] to assign literal defaults or [`apply_factory`] to
//! assign random non-zero values. Fields that already hold a value are never
//! overwritten.
//!
//! ```
//! use tagfill::{Record, apply_defaults};
//!
//! #[derive(Record, Default)]
//! struct Server {
//!     #[fill(default = "localhost")]
//!     host: String,
//!     #[fill(default = "8080")]
//!     port: u16,
//! }
//!
//! let mut server = Server { port: 9000, ..Default::default() };
//! apply_defaults(&mut server);
//! assert_eq!(server.host, "localhost");
//! assert_eq!(server.port, 9000);
//! ```
//!
//! Custom rule tables are assembled with [`Filler::builder`].

extern crate self as tagfill;

pub mod defaults;
pub mod emptiness;
pub mod errors;
pub mod factory;
pub mod field;
pub mod filler;
pub mod literal;
pub mod record;
pub mod reflect;
pub mod rules;
pub mod template;
pub mod types;

use once_cell::sync::Lazy;

pub use errors::{LiteralError, LiteralResult};
pub use field::Field;
pub use filler::{FillFn, Filler, FillerBuilder, RuleLayer};
pub use record::{FieldSlot, Record};
pub use reflect::{FloatMut, IntMut, Pointer, Reflect, Sequence, UintMut, ValueMut};
pub use tagfill_macros::Record;
pub use template::Clock;
pub use types::{Kind, TypeHash};

static DEFAULTS: Lazy<Filler> = Lazy::new(defaults::new_default_filler);
static FACTORY: Lazy<Filler> = Lazy::new(factory::new_factory_filler);

/// Fills every empty field of `record` from its `default` annotations.
pub fn apply_defaults<R: Record + ?Sized>(record: &mut R) {
    DEFAULTS.fill(record);
}

/// Fills every empty field of `record` with random non-zero values.
pub fn apply_factory<R: Record + ?Sized>(record: &mut R) {
    FACTORY.fill(record);
}
