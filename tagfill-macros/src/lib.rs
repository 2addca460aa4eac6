use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Field, Fields, Generics, Ident, LitStr, Result, Token, parse_macro_input};

mod parsed;

use parsed::ParsedRecord;

/// Derives `tagfill::Record` and `tagfill::Reflect` for a struct with named fields.
///
/// Field attributes:
///
/// * `#[fill(key = "literal")]` stores an annotation under `key`; a filler reads
///   the annotation for its own key (`default`, `factory`, or a custom one).
/// * `#[fill(skip)]` hides the field from every filler.
///
/// Every field type that is not skipped must implement `tagfill::Reflect`.
#[proc_macro_derive(Record, attributes(fill))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedRecord::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
