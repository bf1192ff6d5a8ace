//! This crate provides the derive macro for PlainData.

use proc_macro::TokenStream;

mod plain_data;
use plain_data::plain_data;

mod repr;

#[proc_macro_derive(PlainData)]
pub fn derive_plain_data(input: TokenStream) -> TokenStream {
    plain_data(input)
}
