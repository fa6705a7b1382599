// notes-client/notes-proc-macros
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

/// Implements `From<&AppDependencies>` for an app service.
///
/// Fields marked with `#[inject]` are cloned from the field of the same name in
/// `crate::app::deps::AppDependencies`. Fields marked with `#[inject(config)]` receive a
/// clone of the shared `AppConfig`. All other fields are initialized with `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_deps(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);

    let Data::Struct(struct_data) = &input.data else {
        panic!("InjectDependencies only supports structs.")
    };

    let Fields::Named(fields) = &struct_data.fields else {
        panic!("InjectDependencies only supports structs with named fields.")
    };

    let field_initialization = fields
        .named
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;

            Some(injection_source(field).map(|injection| match injection {
                Injection::Dependency => quote! { #ident: deps.#ident.clone() },
                Injection::Config => quote! { #ident: deps.config.clone() },
                Injection::None => quote! { #ident: Default::default() },
            }))
        })
        .collect::<syn::Result<Vec<_>>>();

    let field_initialization = match field_initialization {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics From<&crate::app::deps::AppDependencies> for #name #ty_generics #where_clause {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#field_initialization,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

#[derive(Debug, PartialEq)]
enum Injection {
    Dependency,
    Config,
    None,
}

fn injection_source(field: &Field) -> syn::Result<Injection> {
    let Some(attr) = field.attrs.iter().find(|attr| attr.path().is_ident("inject")) else {
        return Ok(Injection::None);
    };

    let mut is_config = false;
    // A bare `#[inject]` has no arguments to parse.
    if matches!(attr.meta, syn::Meta::List(_)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("config") {
                is_config = true;
                Ok(())
            } else {
                Err(meta.error("Unsupported inject argument. Expected `config`."))
            }
        })?;
    }

    Ok(if is_config {
        Injection::Config
    } else {
        Injection::Dependency
    })
}
