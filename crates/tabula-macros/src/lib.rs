extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `Record` and `FieldType` for a struct with named fields.
///
/// The struct must have exactly one field of type `Identity`. Fields marked
/// `#[key]`, or whose name starts with `key`, identify a stored row.
#[proc_macro_derive(Record, attributes(key))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match tabula_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
