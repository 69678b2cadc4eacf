use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr};

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match named_fields(&input) {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let (storage_key, logical_name) = match extract_struct_args(&input) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };

    let id_field = match find_field(&fields, "id") {
        Some(ident) => ident,
        None => {
            return syn::Error::new(
                Span::call_site(),
                "Record derive: no field marked with #[record(id)] and no field named `id`",
            )
            .to_compile_error()
            .into();
        }
    };

    let project_impl = find_field(&fields, "project").map(|project_field| {
        quote! {
            impl clapboard::ProjectScoped for #name {
                fn project_id(&self) -> Option<&str> {
                    clapboard::ProjectRef::project_ref(&self.#project_field)
                }
            }
        }
    });

    let expanded = quote! {
        impl clapboard::Record for #name {
            const NAME: &'static str = #logical_name;
            const STORAGE_KEY: &'static str = #storage_key;

            fn id(&self) -> &str {
                &self.#id_field
            }
        }

        #project_impl
    };

    TokenStream::from(expanded)
}

/// Reads `#[record(key = "...", name = "...")]` off the struct, falling back to
/// a snake_case plural key and the struct name.
fn extract_struct_args(input: &DeriveInput) -> syn::Result<(String, String)> {
    let mut key = None;
    let mut name = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let value: LitStr = meta.value()?.parse()?;
                key = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `key` or `name`"))
            }
        })?;
    }

    let ident = input.ident.to_string();
    let key = key.unwrap_or_else(|| format!("{}s", to_snake_case(&ident)));
    let name = name.unwrap_or(ident);
    Ok((key, name))
}

fn named_fields(input: &DeriveInput) -> syn::Result<Vec<syn::Field>> {
    if let Data::Struct(data_struct) = &input.data {
        if let Fields::Named(fields) = &data_struct.fields {
            return Ok(fields.named.iter().cloned().collect());
        }
    }
    Err(syn::Error::new_spanned(
        &input.ident,
        "Record derive only supports structs with named fields",
    ))
}

/// Finds the field tagged `#[record(<marker>)]`, else the conventional field
/// name for that marker (`id` or `project_id`).
fn find_field(fields: &[syn::Field], marker: &str) -> Option<Ident> {
    for field in fields {
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            let mut tagged = false;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(marker) {
                    tagged = true;
                }
                Ok(())
            });
            if tagged {
                return field.ident.clone();
            }
        }
    }

    let conventional = match marker {
        "project" => "project_id",
        other => other,
    };
    fields
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .find(|ident| *ident == conventional)
        .cloned()
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
