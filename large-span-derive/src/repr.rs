use proc_macro2::TokenStream;
use syn::{Attribute, token::Paren};

/// The layout-relevant parts of a `#[repr(...)]` attribute list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Repr {
    pub c: bool,
    pub transparent: bool,
}

impl Repr {
    pub fn new(attributes: &[Attribute]) -> Result<Self, syn::Error> {
        let mut repr = Self::default();
        for attr in attributes {
            if !attr.path().is_ident("repr") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("C") {
                    repr.c = true;
                } else if meta.path.is_ident("transparent") {
                    repr.transparent = true;
                } else if meta.input.peek(Paren) {
                    // align(N), packed(N)
                    let args;
                    syn::parenthesized!(args in meta.input);
                    args.parse::<TokenStream>()?;
                }
                Ok(())
            })?;
        }
        Ok(repr)
    }

    /// Whether the field order and offsets are fixed.
    pub fn is_stable(&self) -> bool {
        self.c || self.transparent
    }
}
