use super::attributes::{ColumnInfo, TableAttrs};
use crate::paths::{core as core_paths, std as std_paths};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::collections::HashSet;
use syn::{Data, DeriveInput, Error, Fields, Result};

pub(crate) fn generate_entity(input: DeriveInput) -> Result<TokenStream> {
    let struct_ident = &input.ident;
    let vis = &input.vis;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Entity cannot be derived for generic structs",
        ));
    }

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    struct_ident,
                    "Entity can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                struct_ident,
                "Entity can only be derived for structs",
            ));
        }
    };

    let table = TableAttrs::parse(struct_ident, &input.attrs)?;

    let mut columns = Vec::new();
    let mut seen = HashSet::new();
    for field in named {
        let Some(info) = ColumnInfo::parse(field)? else {
            continue;
        };
        if !seen.insert(info.column.clone()) {
            return Err(Error::new_spanned(
                field,
                format!("duplicate column name `{}`", info.column),
            ));
        }
        columns.push(info);
    }

    if columns.is_empty() {
        return Err(Error::new_spanned(
            struct_ident,
            "Entity requires at least one mapped column",
        ));
    }

    let fields_ident = format_ident!("{}Fields", struct_ident);
    let fields_struct = generate_fields_struct(vis, struct_ident, &fields_ident, &columns);
    let entity_impl = generate_entity_impl(struct_ident, &fields_ident, &table, &columns);

    Ok(quote! {
        #fields_struct
        #entity_impl
    })
}

fn generate_fields_struct(
    vis: &syn::Visibility,
    struct_ident: &syn::Ident,
    fields_ident: &syn::Ident,
    columns: &[ColumnInfo],
) -> TokenStream {
    let field = core_paths::field();
    let members = columns.iter().map(|c| {
        let ident = &c.ident;
        quote!(pub #ident: #field)
    });
    let doc = format!("Predicate field handles for [`{struct_ident}`].");

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy)]
        #vis struct #fields_ident {
            #(#members,)*
        }
    }
}

fn generate_entity_impl(
    struct_ident: &syn::Ident,
    fields_ident: &syn::Ident,
    table: &TableAttrs,
    columns: &[ColumnInfo],
) -> TokenStream {
    let entity = core_paths::entity();
    let table_ty = core_paths::table();
    let column_ty = core_paths::column();
    let field_ty = core_paths::field();
    let value_ty = core_paths::value();
    let option = std_paths::option();
    let vec = std_paths::vec();
    let once_lock = std_paths::once_lock();
    let clone = std_paths::clone();

    let table_name = &table.name;
    let schema = match &table.schema {
        Some(s) => quote!(#option::Some(#s)),
        None => quote!(#option::None),
    };

    let descriptors = columns.iter().map(|c| column_descriptor(&column_ty, c));

    let handles = columns.iter().map(|c| {
        let ident = &c.ident;
        let property = &c.property;
        quote!(#ident: #field_ty::new(#property))
    });

    let arms = columns.iter().map(|c| {
        let ident = &c.ident;
        let property = &c.property;
        quote!(#property => #option::Some(#value_ty::from(#clone::clone(&self.#ident))))
    });

    quote! {
        impl #entity for #struct_ident {
            type Fields = #fields_ident;

            fn table() -> &'static #table_ty {
                static TABLE: #once_lock<#table_ty> = #once_lock::new();
                TABLE.get_or_init(|| {
                    #table_ty::from_parts(#table_name, #schema, #vec::from([#(#descriptors),*]))
                })
            }

            fn fields() -> Self::Fields {
                #fields_ident {
                    #(#handles,)*
                }
            }

            fn value(&self, property: &str) -> #option<#value_ty> {
                match property {
                    #(#arms,)*
                    _ => #option::None,
                }
            }
        }
    }
}

fn column_descriptor(column_ty: &TokenStream, info: &ColumnInfo) -> TokenStream {
    let name = &info.column;
    let property = &info.property;
    let attrs = &info.attrs;

    let mut chain = quote!(#column_ty::new(#name));
    if info.column != info.property {
        chain = quote!(#chain.property(#property));
    }
    if attrs.key {
        chain = quote!(#chain.key());
    }
    if attrs.identity {
        chain = quote!(#chain.identity());
    }
    if attrs.read_only {
        chain = quote!(#chain.read_only());
    }
    if attrs.no_select {
        chain = quote!(#chain.no_select());
    }
    if attrs.no_insert {
        chain = quote!(#chain.no_insert());
    }
    if attrs.no_update {
        chain = quote!(#chain.no_update());
    }
    if attrs.concurrency {
        chain = quote!(#chain.concurrency_check());
    }
    if let Some(sql) = &attrs.insert_sql {
        chain = quote!(#chain.insert_sql(#sql));
    }
    if let Some(sql) = &attrs.update_sql {
        chain = quote!(#chain.update_sql(#sql));
    }
    chain
}
