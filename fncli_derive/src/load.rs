mod attribute;
mod command;
mod parameter;

fn unsupported_error(tokens: impl quote::ToTokens, message: impl std::fmt::Display) -> syn::Error {
    syn::Error::new_spanned(tokens, format!("Invalid - {message}."))
}

// The rendered type, without the token spacing (ex: `Vec<u8>`).
fn type_name(ty: &syn::Type) -> String {
    quote::ToTokens::to_token_stream(ty)
        .to_string()
        .replace(' ', "")
}
