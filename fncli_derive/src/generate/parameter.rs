use crate::model::{DeriveParameter, ParameterType};
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

impl DeriveParameter {
    fn local(&self) -> syn::Ident {
        format_ident!("__arg{}", self.index)
    }

    /// Pull this parameter out of the resolved arguments.
    pub(super) fn generate_extract(&self) -> TokenStream2 {
        let local = self.local();
        let name = &self.name;
        let extract_type = &self.extract_type.tokens;

        quote! {
            let #local: #extract_type = __arguments.require(#name)?;
        }
    }

    /// Pass this parameter on to the annotated function.
    pub(super) fn generate_argument(&self) -> TokenStream2 {
        let local = self.local();

        if self.borrowed {
            quote! { &#local }
        } else {
            quote! { #local }
        }
    }

    /// Describe this parameter to the command.
    pub(super) fn generate_param(&self) -> TokenStream2 {
        let DeriveParameter {
            name,
            index,
            parameter_type,
            default_value,
            ..
        } = self;
        let annotation = match parameter_type {
            ParameterType::Str => quote! { ::fncli::Annotation::Str },
            ParameterType::Int => quote! { ::fncli::Annotation::Int },
            ParameterType::Float => quote! { ::fncli::Annotation::Float },
            ParameterType::Bool => quote! { ::fncli::Annotation::Bool },
        };
        let param = quote! {
            ::fncli::CommandParam::new(#name, #index)
                .expect("Invalid CommandParam configuration")
                .with_annotation(#annotation)
        };

        match default_value {
            Some(default_value) => {
                let default_value = &default_value.tokens;
                quote! { #param.with_default(#default_value) }
            }
            None => param,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveValue;

    fn parameter(
        index: usize,
        parameter_type: ParameterType,
        extract_type: TokenStream2,
        borrowed: bool,
        default_value: Option<TokenStream2>,
    ) -> DeriveParameter {
        DeriveParameter {
            name: "my_param".to_string(),
            index,
            parameter_type,
            extract_type: DeriveValue {
                tokens: extract_type,
            },
            borrowed,
            default_value: default_value.map(|tokens| DeriveValue { tokens }),
        }
    }

    #[test]
    fn render_extract() {
        // Setup
        let parameter = parameter(2, ParameterType::Int, quote! { i32 }, false, None);

        // Execute
        let token_stream = parameter.generate_extract();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            "let __arg2 : i32 = __arguments . require (\"my_param\") ? ;"
        );
    }

    #[test]
    fn render_argument() {
        let owned = parameter(0, ParameterType::Int, quote! { i32 }, false, None);
        let borrowed = parameter(1, ParameterType::Str, quote! { String }, true, None);

        assert_eq!(owned.generate_argument().to_string(), "__arg0");
        assert_eq!(borrowed.generate_argument().to_string(), "& __arg1");
    }

    #[test]
    fn render_param() {
        // Setup
        let parameter = parameter(0, ParameterType::Float, quote! { f64 }, false, None);

        // Execute
        let token_stream = parameter.generate_param();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            ":: fncli :: CommandParam :: new (\"my_param\" , 0usize) . expect (\"Invalid CommandParam configuration\") . with_annotation (:: fncli :: Annotation :: Float)"
        );
    }

    #[test]
    fn render_param_default() {
        // Setup
        let parameter = parameter(
            1,
            ParameterType::Bool,
            quote! { bool },
            false,
            Some(quote! { ::fncli::Value::from(true) }),
        );

        // Execute
        let token_stream = parameter.generate_param();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            ":: fncli :: CommandParam :: new (\"my_param\" , 1usize) . expect (\"Invalid CommandParam configuration\") . with_annotation (:: fncli :: Annotation :: Bool) . with_default (:: fncli :: Value :: from (true))"
        );
    }
}
