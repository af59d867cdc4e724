//! Derive module for `fncli`.
//! See [documentation root](https://docs.rs/fncli/latest/fncli/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::{DeriveCommand, IntermediateAttributes};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Describe a function as a command.
///
/// Leaves the function as is, and adds a sibling `{function}_command() -> fncli::CommandMethod`.
/// The parameters become the command parameters, in order.
/// A parameter may declare its default via `#[default(..)]`; `Option` parameters always default to `None`.
/// The `///` documentation becomes the command documentation (see `fncli::FunctionDocs`).
///
/// Accepts `#[command(name = "..")]` to rename the command.
#[proc_macro_attribute]
pub fn command(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let function = syn::parse_macro_input!(item as syn::ItemFn);

    IntermediateAttributes::try_from(TokenStream2::from(attribute))
        .and_then(|attributes| DeriveCommand::try_from((attributes, function)))
        .map_or_else(syn::Error::into_compile_error, TokenStream2::from)
        .into()
}
