//! `#[derive(Error)]` for error enums.
//!
//! Every variant needs a `#[msg = "..."]` attribute. Variants may carry at most one
//! unnamed field:
//! * A plain field is context (usually the offending input). It is appended to the
//!   message as `"<msg>: <field>"` and must implement `Display`.
//! * A field marked `#[from]` is the underlying error. It becomes the `source()` of the
//!   error and a `From` impl is generated for it.

use proc_macro::TokenStream;
use quote::quote;

#[proc_macro_derive(Error, attributes(msg, from))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    let item: syn::ItemEnum = syn::parse(input).expect("Could not parse input as enum");

    let name = item.ident;
    let mut variant_displays = vec![];
    let mut from_impls = vec![];
    let mut variant_sources = vec![];

    for variant in &item.variants {
        let ident = &variant.ident;

        let Some(message) = message_of(&variant.attrs) else {
            panic!("variant {ident} needs a #[msg = \"...\"] attribute");
        };

        match &variant.fields {
            syn::Fields::Unit => {
                variant_displays.push(quote!(Self::#ident => f.write_str(#message)));
            },
            syn::Fields::Unnamed(unnamed_fields) => {
                if unnamed_fields.unnamed.len() != 1 {
                    panic!("variant {ident} needs exactly one field");
                }

                let field = &unnamed_fields.unnamed[0];
                let is_source = field.attrs.iter().any(|attr| attr.path().is_ident("from"));

                if is_source {
                    let ty = &field.ty;

                    from_impls.push(quote!(
                        #[automatically_derived]
                        impl From<#ty> for #name {
                            fn from(value: #ty) -> Self {
                                Self::#ident(value)
                            }
                        }
                    ));
                    variant_displays.push(quote!(Self::#ident(_) => f.write_str(#message)));
                    variant_sources.push(quote!(Self::#ident(value) => Some(value)));
                } else {
                    variant_displays.push(quote!(
                        Self::#ident(context) => write!(f, "{}: {}", #message, context)
                    ));
                }
            },
            syn::Fields::Named(_) => panic!("named fields are not allowed"),
        }
    }

    quote!(
        #[automatically_derived]
        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(
                        #variant_displays,
                    )*
                }
            }
        }

        #(
            #from_impls
        )*

        #[automatically_derived]
        impl ::std::error::Error for #name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                #[allow(unreachable_patterns)]
                match self {
                    #(
                        #variant_sources,
                    )*
                    _ => None,
                }
            }
        }
    )
    .into()
}

/// Finds the value of the `#[msg = ...]` attribute, if any
fn message_of(attributes: &[syn::Attribute]) -> Option<&syn::Expr> {
    attributes
        .iter()
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(name_value) if name_value.path.is_ident("msg") => {
                Some(&name_value.value)
            },
            _ => None,
        })
        .next()
}
