use proc_macro2::TokenStream as TokenStream2;
use std::collections::HashMap;

#[derive(Debug)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The `name = value` pairs of a `#[command(..)]` attribute.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    Str,
    Int,
    Float,
    Bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParameter {
    pub name: String,
    pub index: usize,
    pub parameter_type: ParameterType,
    // The type extracted from the arguments (ex: `String` for a `&str` parameter).
    pub extract_type: DeriveValue,
    pub borrowed: bool,
    // An expression producing a `fncli::Value`.
    pub default_value: Option<DeriveValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    Unit,
    Display,
    Result { unit: bool },
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveReturn {
    pub kind: ReturnKind,
    pub type_name: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveCommand {
    // The annotated function, with the parameter attributes removed.
    pub function: DeriveValue,
    pub function_name: syn::Ident,
    pub visibility: DeriveValue,
    pub command_name: DeriveValue,
    pub documentation: Option<String>,
    pub parameters: Vec<DeriveParameter>,
    pub returns: DeriveReturn,
}
