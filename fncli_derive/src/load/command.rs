use crate::load::parameter::{generic_arguments, DEFAULT_ATTRIBUTE};
use crate::load::{type_name, unsupported_error};
use crate::model::{
    DeriveCommand, DeriveParameter, DeriveReturn, DeriveValue, IntermediateAttributes, ReturnKind,
};
use proc_macro2::Literal;
use quote::ToTokens;
use syn::ext::IdentExt;

const NAME_KEY: &str = "name";

impl TryFrom<(IntermediateAttributes, syn::ItemFn)> for DeriveCommand {
    type Error = syn::Error;

    fn try_from(value: (IntermediateAttributes, syn::ItemFn)) -> Result<Self, Self::Error> {
        let (attributes, mut function) = value;

        if let Some(key) = attributes.pairs.keys().find(|key| key.as_str() != NAME_KEY) {
            return Err(unsupported_error(
                &function.sig.ident,
                format!("unknown command attribute `{key}`"),
            ));
        }

        let signature = &function.sig;

        if let Some(asyncness) = &signature.asyncness {
            return Err(unsupported_error(asyncness, "commands cannot be `async`"));
        }

        if !signature.generics.params.is_empty() {
            return Err(unsupported_error(
                &signature.generics,
                "commands cannot be generic",
            ));
        }

        if let Some(variadic) = &signature.variadic {
            return Err(unsupported_error(variadic, "commands cannot be variadic"));
        }

        let parameters = signature
            .inputs
            .iter()
            .enumerate()
            .map(DeriveParameter::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let returns = DeriveReturn::from(&signature.output);
        let function_name = signature.ident.clone();
        let command_name = match attributes.last(NAME_KEY) {
            Some(DeriveValue { tokens }) => tokens.clone(),
            None => Literal::string(&function_name.unraw().to_string()).into_token_stream(),
        };
        let documentation = read_documentation(&function.attrs);

        for argument in function.sig.inputs.iter_mut() {
            if let syn::FnArg::Typed(pat_type) = argument {
                pat_type
                    .attrs
                    .retain(|attribute| !attribute.path().is_ident(DEFAULT_ATTRIBUTE));
            }
        }

        Ok(DeriveCommand {
            visibility: DeriveValue {
                tokens: function.vis.to_token_stream(),
            },
            function: DeriveValue {
                tokens: function.into_token_stream(),
            },
            function_name,
            command_name: DeriveValue {
                tokens: command_name,
            },
            documentation,
            parameters,
            returns,
        })
    }
}

impl From<&syn::ReturnType> for DeriveReturn {
    fn from(value: &syn::ReturnType) -> Self {
        let ty = match value {
            syn::ReturnType::Default => {
                return DeriveReturn {
                    kind: ReturnKind::Unit,
                    type_name: None,
                };
            }
            syn::ReturnType::Type(_, ty) => ty.as_ref(),
        };

        if is_unit(ty) {
            return DeriveReturn {
                kind: ReturnKind::Unit,
                type_name: None,
            };
        }

        match generic_arguments(ty, "Result").as_deref() {
            Some([ok, ..]) => {
                let unit = is_unit(ok);
                DeriveReturn {
                    kind: ReturnKind::Result { unit },
                    type_name: if unit { None } else { Some(type_name(ok)) },
                }
            }
            _ => DeriveReturn {
                kind: ReturnKind::Display,
                type_name: Some(type_name(ty)),
            },
        }
    }
}

fn is_unit(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Tuple(tuple) if tuple.elems.is_empty())
}

// The `///` comments of the function, one line each.
fn read_documentation(attributes: &[syn::Attribute]) -> Option<String> {
    let lines: Vec<String> = attributes
        .iter()
        .filter(|attribute| attribute.path().is_ident("doc"))
        .filter_map(|attribute| match &attribute.meta {
            syn::Meta::NameValue(syn::MetaNameValue {
                value:
                    syn::Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Str(text),
                        ..
                    }),
                ..
            }) => Some(text.value()),
            _ => None,
        })
        .collect();

    if lines.iter().all(|line| line.trim().is_empty()) {
        None
    } else {
        Some(lines.join("\n"))
    }
}
