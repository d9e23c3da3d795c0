use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token, Type, TypePath
};

struct AnchoredAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for AnchoredAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(AnchoredAttribute { crate_path: path })
    }
}

/// Derive macro declaring one `Anchor` tag type per `#[anchor(Tag)]` field.
///
/// Each marked field must have type `Link`; the generated tag binds a list
/// family to that field through its byte offset in the record.
#[proc_macro_derive(Anchored, attributes(anchored, anchor))]
pub fn anchored_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let struct_vis = &input.vis;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "Anchored does not support generic records: the link offset must be a single constant",
        )
        .to_compile_error()
        .into();
    }

    // Find absolute crate path
    let mut crate_path = quote! { ::ring_list };

    for attr in &input.attrs {
        if attr.path().is_ident("anchored") {
            match attr.parse_args::<AnchoredAttribute>() {
                Ok(anchored) => {
                    let path = anchored.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let fields = if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        fields
    } else {
        return syn::Error::new_spanned(
            struct_name,
            "Anchored derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let mut anchors = Vec::new();

    for field in fields.named.iter() {
        let Some(field_ident) = &field.ident else {
            continue;
        };

        for attr in &field.attrs {
            if !attr.path().is_ident("anchor") {
                continue;
            }

            let tag: Ident = match attr.parse_args() {
                Ok(tag) => tag,
                Err(e) => return e.to_compile_error().into(),
            };

            let type_ident = if let Type::Path(TypePath { path, .. }) = &field.ty {
                path.segments
                    .last()
                    .expect("Expected at least one segment in the type path")
                    .ident
                    .clone()
            } else {
                return syn::Error::new_spanned(&field.ty, "Field marked #[anchor] must be a Link")
                    .to_compile_error()
                    .into();
            };

            if type_ident != "Link" {
                return syn::Error::new_spanned(
                    &field.ty,
                    "Field marked #[anchor] must have type 'Link'",
                )
                .to_compile_error()
                .into();
            }

            anchors.push((tag, field_ident.clone()));
        }
    }

    if anchors.is_empty() {
        return syn::Error::new_spanned(
            struct_name,
            "Struct must mark at least one Link field with #[anchor(Tag)]",
        )
        .to_compile_error()
        .into();
    }

    // Generate one tag type and `Anchor` impl per marked field
    let impls = anchors.iter().map(|(tag, field)| {
        quote! {
            #struct_vis enum #tag {}

            unsafe impl #crate_path::anchor::Anchor for #tag {
                type Owner = #struct_name;
                const OFFSET: usize = ::core::mem::offset_of!(#struct_name, #field);
            }
        }
    });

    let expanded = quote! {
        #(#impls)*
    };

    TokenStream::from(expanded)
}
