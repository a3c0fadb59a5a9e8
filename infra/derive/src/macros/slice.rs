use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemStruct;

/// Expands `#[rhub_slice]` into an `Inner` state struct plus a shared handle.
///
/// The inner state only derives `Debug`: slices usually own locks or I/O
/// handles, so cloning happens at the `Arc` level.
pub fn expand_slice(input: ItemStruct) -> TokenStream {
    let handle_ident = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let generics = &input.generics;

    if !generics.params.is_empty() {
        return syn::Error::new_spanned(generics, "rhub_slice does not support generic slices")
            .to_compile_error();
    }

    let inner_ident = format_ident!("{handle_ident}Inner");
    let terminator = match fields {
        syn::Fields::Named(_) => quote! {},
        _ => quote! { ; },
    };

    quote! {
        #(#attrs)*
        #[derive(Debug)]
        #vis struct #inner_ident #fields #terminator

        #[derive(Debug, Clone)]
        #vis struct #handle_ident {
            inner: ::std::sync::Arc<#inner_ident>,
        }

        impl #handle_ident {
            #[must_use]
            pub fn new(inner: #inner_ident) -> Self {
                Self { inner: ::std::sync::Arc::new(inner) }
            }
        }

        impl ::std::ops::Deref for #handle_ident {
            type Target = #inner_ident;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::rhub_domain::registry::FeatureSlice for #handle_ident {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    }
}
