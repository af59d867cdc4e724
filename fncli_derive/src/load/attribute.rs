use crate::load::unsupported_error;
use crate::model::{DeriveValue, IntermediateAttributes};
use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;
use syn::parse::Parser;

impl TryFrom<TokenStream2> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: TokenStream2) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let mut attributes = IntermediateAttributes::default();

        for expression in attributes_parser.parse2(value)? {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream().to_string();
                    attributes
                        .pairs
                        .entry(left)
                        .or_default()
                        .push(DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        });
                }
                other => {
                    return Err(unsupported_error(
                        &other,
                        "command attributes must be `key = value` pairs",
                    ));
                }
            };
        }

        Ok(attributes)
    }
}

impl IntermediateAttributes {
    /// The last value given for `key`, if any.
    pub fn last(&self, key: &str) -> Option<&DeriveValue> {
        self.pairs.get(key).and_then(|values| values.last())
    }
}
