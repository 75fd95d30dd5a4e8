//! Centralized path definitions for generated code.
//!
//! Using the `sleet::` prefix (without leading `::`) lets the facade crate
//! and its tests resolve the paths through `extern crate self as sleet`.

use proc_macro2::TokenStream;
use quote::quote;

pub mod std {
    use super::*;

    pub fn option() -> TokenStream {
        quote!(::std::option::Option)
    }

    pub fn vec() -> TokenStream {
        quote!(::std::vec::Vec)
    }

    pub fn once_lock() -> TokenStream {
        quote!(::std::sync::OnceLock)
    }

    pub fn clone() -> TokenStream {
        quote!(::std::clone::Clone)
    }
}

/// Types from sleet::core
pub mod core {
    use super::*;

    pub fn entity() -> TokenStream {
        quote!(sleet::core::Entity)
    }

    pub fn table() -> TokenStream {
        quote!(sleet::core::Table)
    }

    pub fn column() -> TokenStream {
        quote!(sleet::core::Column)
    }

    pub fn field() -> TokenStream {
        quote!(sleet::core::Field)
    }

    pub fn value() -> TokenStream {
        quote!(sleet::core::Value)
    }
}
