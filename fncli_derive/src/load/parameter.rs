use crate::load::{type_name, unsupported_error};
use crate::model::{DeriveParameter, DeriveValue, ParameterType};
use quote::{quote, ToTokens};
use syn::ext::IdentExt;

pub(super) const DEFAULT_ATTRIBUTE: &str = "default";

impl TryFrom<(usize, &syn::FnArg)> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: (usize, &syn::FnArg)) -> Result<Self, Self::Error> {
        let (index, argument) = value;
        let pat_type = match argument {
            syn::FnArg::Typed(pat_type) => pat_type,
            syn::FnArg::Receiver(receiver) => {
                return Err(unsupported_error(receiver, "commands cannot take `self`"));
            }
        };
        let name = match pat_type.pat.as_ref() {
            syn::Pat::Ident(pat_ident) if pat_ident.subpat.is_none() => {
                pat_ident.ident.unraw().to_string()
            }
            other => {
                return Err(unsupported_error(
                    other,
                    "command parameters must be plain identifiers",
                ));
            }
        };

        let mut explicit_default = None;

        for attribute in &pat_type.attrs {
            if attribute.path().is_ident(DEFAULT_ATTRIBUTE) {
                let expression: syn::Expr = attribute.parse_args()?;
                explicit_default.replace(default_tokens(&expression));
            }
        }

        let ty = pat_type.ty.as_ref();
        let (parameter_type, extract_type, borrowed, optional) = if is_str_reference(ty) {
            (ParameterType::Str, quote! { ::std::string::String }, true, false)
        } else if let Some(inner) = option_inner(ty) {
            match scalar_type(inner) {
                Some(parameter_type) => (parameter_type, ty.to_token_stream(), false, true),
                None => return Err(unsupported_type(inner)),
            }
        } else {
            match scalar_type(ty) {
                Some(parameter_type) => (parameter_type, ty.to_token_stream(), false, false),
                None => return Err(unsupported_type(ty)),
            }
        };

        let default_value = match explicit_default {
            Some(tokens) => Some(tokens),
            // An `Option` may always be omitted.
            None if optional => Some(quote! { ::fncli::Value::None }),
            None => None,
        };

        Ok(DeriveParameter {
            name,
            index,
            parameter_type,
            extract_type: DeriveValue {
                tokens: extract_type,
            },
            borrowed,
            default_value: default_value.map(|tokens| DeriveValue { tokens }),
        })
    }
}

fn default_tokens(expression: &syn::Expr) -> proc_macro2::TokenStream {
    match expression {
        syn::Expr::Path(path) if path.path.is_ident("None") => quote! { ::fncli::Value::None },
        _ => quote! { ::fncli::Value::from(#expression) },
    }
}

fn unsupported_type(ty: &syn::Type) -> syn::Error {
    unsupported_error(
        ty,
        format!(
            "unsupported parameter type `{}` (expected a string, integer, float, bool or an `Option` of these)",
            type_name(ty)
        ),
    )
}

fn last_segment(ty: &syn::Type) -> Option<&syn::PathSegment> {
    match ty {
        syn::Type::Path(type_path) if type_path.qself.is_none() => type_path.path.segments.last(),
        _ => None,
    }
}

fn scalar_type(ty: &syn::Type) -> Option<ParameterType> {
    let segment = last_segment(ty)?;

    if !segment.arguments.is_empty() {
        return None;
    }

    match segment.ident.to_string().as_str() {
        "String" => Some(ParameterType::Str),
        "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize" => {
            Some(ParameterType::Int)
        }
        "f32" | "f64" => Some(ParameterType::Float),
        "bool" => Some(ParameterType::Bool),
        _ => None,
    }
}

pub(super) fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    generic_arguments(ty, "Option").and_then(|arguments| match arguments.as_slice() {
        [inner] => Some(*inner),
        _ => None,
    })
}

pub(super) fn generic_arguments<'a>(ty: &'a syn::Type, name: &str) -> Option<Vec<&'a syn::Type>> {
    let segment = last_segment(ty)?;

    if segment.ident != name {
        return None;
    }

    match &segment.arguments {
        syn::PathArguments::AngleBracketed(arguments) => Some(
            arguments
                .args
                .iter()
                .filter_map(|argument| match argument {
                    syn::GenericArgument::Type(inner) => Some(inner),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}

fn is_str_reference(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Reference(reference) if reference.mutability.is_none() => {
            last_segment(&reference.elem).map_or(false, |segment| {
                segment.ident == "str" && segment.arguments.is_empty()
            })
        }
        _ => false,
    }
}
