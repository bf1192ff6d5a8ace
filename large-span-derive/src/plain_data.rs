use crate::repr::Repr;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::{Data, DeriveInput, parse_macro_input, spanned::Spanned};

pub fn plain_data(input: TokenStream) -> TokenStream {
    let input: DeriveInput = parse_macro_input!(input);
    match plain_data_derive(input) {
        Ok(tokens) => tokens,
        Err(e) => e.into_compile_error(),
    }
    .into()
}

fn plain_data_derive(input: DeriveInput) -> Result<TokenStream2, syn::Error> {
    let DeriveInput {
        ident,
        data,
        attrs,
        generics,
        ..
    } = input;

    let strukt = match data {
        Data::Struct(strukt) => strukt,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "PlainData only applies to structs",
            ));
        }
    };

    if !generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            generics,
            "PlainData cannot be derived for generic structs",
        ));
    }

    if !Repr::new(&attrs)?.is_stable() {
        return Err(syn::Error::new_spanned(
            ident,
            "PlainData requires #[repr(C)] or #[repr(transparent)]",
        ));
    }

    let ty_all: Vec<_> = strukt.fields.iter().map(|field| &field.ty).collect();
    let field_checks = ty_all.iter().map(|ty| {
        quote_spanned! {ty.span()=>
            assert_plain_data::<#ty>();
        }
    });

    Ok(quote! {
        #[allow(dead_code)]
        const _: () = {
            fn assert_plain_data<T: ::large_span::PlainData>() {}

            fn assert_fields() {
                #(#field_checks)*
            }

            assert!(
                ::std::mem::size_of::<#ident>() == 0 #(+ ::std::mem::size_of::<#ty_all>())*,
                "PlainData types must not contain padding",
            );
        };

        // SAFETY: Every field is plain data, the layout is fixed by the
        // repr attribute, and the size check above rules out padding.
        #[automatically_derived]
        unsafe impl ::large_span::PlainData for #ident {}
    })
}
