use crate::model::{DeriveCommand, DeriveParameter, ReturnKind};
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;

impl From<DeriveCommand> for TokenStream2 {
    fn from(value: DeriveCommand) -> Self {
        let DeriveCommand {
            function,
            function_name,
            visibility,
            command_name,
            documentation,
            parameters,
            returns,
        } = value;
        let function = function.tokens;
        let visibility = visibility.tokens;
        let command_name = command_name.tokens;
        let builder_name = format_ident!("{}_command", function_name);
        let builder_documentation = format!(
            "The command line description of `{}`.",
            function_name.unraw()
        );

        let arguments_name = if parameters.is_empty() {
            quote! { _ }
        } else {
            quote! { __arguments }
        };
        let extracts = parameters.iter().map(DeriveParameter::generate_extract);
        let arguments = parameters.iter().map(DeriveParameter::generate_argument);
        let params = parameters.iter().map(DeriveParameter::generate_param);
        let call = quote! { #function_name(#( #arguments ),*) };
        let into_error = quote! {
            |error| ::fncli::CommandError::new(::std::string::ToString::to_string(&error))
        };

        let body = match returns.kind {
            ReturnKind::Unit => quote! {
                #call;
                ::std::result::Result::Ok(::std::option::Option::None)
            },
            ReturnKind::Display => quote! {
                let __value = #call;
                ::std::result::Result::Ok(::std::option::Option::Some(::std::string::ToString::to_string(&__value)))
            },
            ReturnKind::Result { unit: true } => quote! {
                #call.map_err(#into_error)?;
                ::std::result::Result::Ok(::std::option::Option::None)
            },
            ReturnKind::Result { unit: false } => quote! {
                let __value = #call.map_err(#into_error)?;
                ::std::result::Result::Ok(::std::option::Option::Some(::std::string::ToString::to_string(&__value)))
            },
        };

        let docstring = documentation.map(|documentation| {
            quote! { .with_docstring(#documentation) }
        });
        let return_value = returns.type_name.map(|type_name| {
            quote! { .with_returns(::fncli::CommandReturn::new().with_type_name(#type_name)) }
        });

        quote! {
            #function

            #[doc = #builder_documentation]
            #visibility fn #builder_name() -> ::fncli::CommandMethod {
                ::fncli::CommandMethod::new(
                    #command_name,
                    |#arguments_name: &::fncli::Arguments| -> ::std::result::Result<::std::option::Option<::std::string::String>, ::fncli::CommandError> {
                        #( #extracts )*
                        #body
                    },
                )
                #docstring
                #( .with_param(#params) )*
                #return_value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::simple_format;
    use crate::model::{DeriveReturn, DeriveValue, ParameterType};
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    #[test]
    fn render_command_empty() {
        // Setup
        let command = DeriveCommand {
            function: value(quote! { fn ping() {} }),
            function_name: ident("ping"),
            visibility: value(TokenStream2::new()),
            command_name: value(Literal::string("ping").into_token_stream()),
            documentation: None,
            parameters: vec![],
            returns: DeriveReturn {
                kind: ReturnKind::Unit,
                type_name: None,
            },
        };

        // Execute
        let token_stream = TokenStream2::from(command);

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            simple_format(
                quote! {
                    fn ping() {}

                    #[doc = "The command line description of `ping`."]
                    fn ping_command() -> ::fncli::CommandMethod {
                        ::fncli::CommandMethod::new(
                            "ping",
                            |_: &::fncli::Arguments| -> ::std::result::Result<::std::option::Option<::std::string::String>, ::fncli::CommandError> {
                                ping();
                                ::std::result::Result::Ok(::std::option::Option::None)
                            },
                        )
                    }
                }
                .to_string()
            ),
        );
    }

    #[test]
    fn render_command() {
        // Setup
        let command = DeriveCommand {
            function: value(quote! { pub fn greet(name: &str, times: Option<u8>) -> String { todo!() } }),
            function_name: ident("greet"),
            visibility: value(quote! { pub }),
            command_name: value(Literal::string("hello").into_token_stream()),
            documentation: Some("Greet someone.".to_string()),
            parameters: vec![
                DeriveParameter {
                    name: "name".to_string(),
                    index: 0,
                    parameter_type: ParameterType::Str,
                    extract_type: value(quote! { ::std::string::String }),
                    borrowed: true,
                    default_value: None,
                },
                DeriveParameter {
                    name: "times".to_string(),
                    index: 1,
                    parameter_type: ParameterType::Int,
                    extract_type: value(quote! { Option<u8> }),
                    borrowed: false,
                    default_value: Some(value(quote! { ::fncli::Value::None })),
                },
            ],
            returns: DeriveReturn {
                kind: ReturnKind::Display,
                type_name: Some("String".to_string()),
            },
        };

        // Execute
        let token_stream = TokenStream2::from(command);

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            simple_format(
                quote! {
                    pub fn greet(name: &str, times: Option<u8>) -> String { todo!() }

                    #[doc = "The command line description of `greet`."]
                    pub fn greet_command() -> ::fncli::CommandMethod {
                        ::fncli::CommandMethod::new(
                            "hello",
                            |__arguments: &::fncli::Arguments| -> ::std::result::Result<::std::option::Option<::std::string::String>, ::fncli::CommandError> {
                                let __arg0: ::std::string::String = __arguments.require("name")?;
                                let __arg1: Option<u8> = __arguments.require("times")?;
                                let __value = greet(&__arg0, __arg1);
                                ::std::result::Result::Ok(::std::option::Option::Some(::std::string::ToString::to_string(&__value)))
                            },
                        )
                        .with_docstring("Greet someone.")
                        .with_param(::fncli::CommandParam::new("name", 0usize)
                            .expect("Invalid CommandParam configuration")
                            .with_annotation(::fncli::Annotation::Str))
                        .with_param(::fncli::CommandParam::new("times", 1usize)
                            .expect("Invalid CommandParam configuration")
                            .with_annotation(::fncli::Annotation::Int)
                            .with_default(::fncli::Value::None))
                        .with_returns(::fncli::CommandReturn::new().with_type_name("String"))
                    }
                }
                .to_string()
            ),
        );
    }

    #[test]
    fn render_command_result() {
        // Setup
        let command = DeriveCommand {
            function: value(quote! { fn check() -> Result<(), String> { Ok(()) } }),
            function_name: ident("check"),
            visibility: value(TokenStream2::new()),
            command_name: value(Literal::string("check").into_token_stream()),
            documentation: None,
            parameters: vec![],
            returns: DeriveReturn {
                kind: ReturnKind::Result { unit: true },
                type_name: None,
            },
        };

        // Execute
        let token_stream = TokenStream2::from(command);

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            simple_format(
                quote! {
                    fn check() -> Result<(), String> { Ok(()) }

                    #[doc = "The command line description of `check`."]
                    fn check_command() -> ::fncli::CommandMethod {
                        ::fncli::CommandMethod::new(
                            "check",
                            |_: &::fncli::Arguments| -> ::std::result::Result<::std::option::Option<::std::string::String>, ::fncli::CommandError> {
                                check().map_err(|error| ::fncli::CommandError::new(::std::string::ToString::to_string(&error)))?;
                                ::std::result::Result::Ok(::std::option::Option::None)
                            },
                        )
                    }
                }
                .to_string()
            ),
        );
    }

    #[test]
    fn render_command_result_value() {
        // Setup
        let command = DeriveCommand {
            function: value(quote! { fn half(n: i64) -> Result<f64, String> { todo!() } }),
            function_name: ident("half"),
            visibility: value(TokenStream2::new()),
            command_name: value(Literal::string("half").into_token_stream()),
            documentation: None,
            parameters: vec![DeriveParameter {
                name: "n".to_string(),
                index: 0,
                parameter_type: ParameterType::Int,
                extract_type: value(quote! { i64 }),
                borrowed: false,
                default_value: None,
            }],
            returns: DeriveReturn {
                kind: ReturnKind::Result { unit: false },
                type_name: Some("f64".to_string()),
            },
        };

        // Execute
        let token_stream = TokenStream2::from(command).to_string();

        // Verify
        assert!(token_stream.contains(
            &quote! {
                let __value = half(__arg0).map_err(|error| ::fncli::CommandError::new(::std::string::ToString::to_string(&error)))?;
            }
            .to_string()
        ));
        assert!(token_stream.contains(
            &quote! { .with_returns(::fncli::CommandReturn::new().with_type_name("f64")) }.to_string()
        ));
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn value(tokens: TokenStream2) -> DeriveValue {
        DeriveValue { tokens }
    }
}
