//! Attribute macro turning a plain `fn` into a callwrap operation.
//!
//! ```ignore
//! /// Attribute a line to a speaker.
//! #[callwrap::operation]
//! fn say(name: String, line: String) -> String {
//!     format!("{name}: {line}")
//! }
//!
//! // `say` is still an ordinary function; `Say` is the operation.
//! let op = Say.wrap_with(Trace::new());
//! op.call(("Jane".into(), "Hello, World".into()))?;
//! assert_eq!(Say.metadata().description(), "Attribute a line to a speaker.");
//! ```
//!
//! The generated unit struct is named after the function in PascalCase and
//! implements `Describe` and `Operation<(T0, T1, ..)>`. Its metadata carries
//! the function name, its doc comment and its parameter names.
//!
//! With `#[operation(fallible)]` the function must return a `Result` whose
//! error converts into `callwrap::BoxError`; the error becomes a
//! `CallError::Operation` attributed to the function.
//!
//! Methods, generic functions, `impl Trait` in argument or return position,
//! `unsafe fn` and `async fn` are rejected with a compile error.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenTree};
use quote::{format_ident, quote, ToTokens};
use syn::ext::IdentExt;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{
    parse_macro_input, Expr, ExprLit, FnArg, Ident, ItemFn, Lit, Meta, Pat, ReturnType, Token,
};

#[proc_macro_attribute]
pub fn operation(attr: TokenStream, item: TokenStream) -> TokenStream {
    let flags = match Punctuated::<Ident, Token![,]>::parse_terminated.parse(attr) {
        Ok(flags) => flags,
        Err(e) => return e.to_compile_error().into(),
    };

    let mut fallible = false;
    for flag in &flags {
        if flag == "fallible" {
            fallible = true;
        } else {
            return syn::Error::new(flag.span(), "unknown option, expected `fallible`")
                .to_compile_error()
                .into();
        }
    }

    let func = parse_macro_input!(item as ItemFn);
    match expand(&func, fallible) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(func: &ItemFn, fallible: bool) -> syn::Result<proc_macro2::TokenStream> {
    let sig = &func.sig;

    if sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(
            sig.asyncness,
            "#[operation] does not support async fn",
        ));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "#[operation] does not support generic functions",
        ));
    }
    if sig.unsafety.is_some() {
        return Err(syn::Error::new_spanned(
            sig.unsafety,
            "#[operation] does not support unsafe fn",
        ));
    }

    let mut bindings = Vec::new();
    let mut types = Vec::new();
    let mut parameters = Vec::new();
    for (i, input) in sig.inputs.iter().enumerate() {
        let typed = match input {
            FnArg::Typed(typed) => typed,
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new_spanned(
                    receiver,
                    "#[operation] applies to free functions, not methods",
                ));
            }
        };
        if mentions_impl_trait(typed.ty.to_token_stream()) {
            return Err(syn::Error::new_spanned(
                &typed.ty,
                "#[operation] does not support `impl Trait` arguments; name a concrete type",
            ));
        }
        let name = match typed.pat.as_ref() {
            Pat::Ident(pat) => pat.ident.to_string(),
            _ => format!("arg{i}"),
        };
        bindings.push(format_ident!("__arg{}", i));
        types.push(typed.ty.as_ref().clone());
        parameters.push(name);
    }

    let fn_ident = &sig.ident;
    let fn_name = fn_ident.unraw().to_string();
    let vis = &func.vis;
    let struct_ident = Ident::new(&pascal_case(&fn_name), Span::call_site());
    let description = doc_comment(func);
    let struct_doc = format!("Operation for [`{fn_name}`].");

    let return_type = match &sig.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, ty) if mentions_impl_trait(ty.to_token_stream()) => {
            return Err(syn::Error::new_spanned(
                ty,
                "#[operation] does not support `impl Trait` return types; name a concrete type",
            ));
        }
        ReturnType::Type(_, ty) => quote! { #ty },
    };

    let (output, body) = if fallible {
        (
            quote! { <#return_type as ::callwrap::operation::Fallible>::Ok },
            quote! {
                ::callwrap::operation::Fallible::into_call_result(
                    #fn_ident(#(#bindings),*),
                    #fn_name,
                )
            },
        )
    } else {
        (
            return_type.clone(),
            quote! { ::core::result::Result::Ok(#fn_ident(#(#bindings),*)) },
        )
    };

    Ok(quote! {
        #func

        #[doc = #struct_doc]
        #[derive(Debug, Clone, Copy, Default)]
        #vis struct #struct_ident;

        impl ::callwrap::Describe for #struct_ident {
            fn metadata(&self) -> &::callwrap::Metadata {
                static METADATA: ::std::sync::OnceLock<::callwrap::Metadata> =
                    ::std::sync::OnceLock::new();
                METADATA.get_or_init(|| {
                    ::callwrap::Metadata::new(#fn_name)
                        .with_description(#description)
                        .with_parameters({
                            let parameters: &[&str] = &[#(#parameters),*];
                            parameters.iter().copied()
                        })
                })
            }
        }

        impl ::callwrap::Operation<(#(#types,)*)> for #struct_ident {
            type Output = #output;

            fn call(&self, (#(#bindings,)*): (#(#types,)*)) -> ::callwrap::Result<Self::Output> {
                #body
            }
        }
    })
}

/// Whether a type mentions `impl Trait` anywhere, e.g. `&impl Display`.
fn mentions_impl_trait(tokens: proc_macro2::TokenStream) -> bool {
    tokens.into_iter().any(|token| match token {
        TokenTree::Ident(ident) => ident == "impl",
        TokenTree::Group(group) => mentions_impl_trait(group.stream()),
        _ => false,
    })
}

/// Joined `///` lines of the function, each trimmed.
fn doc_comment(func: &ItemFn) -> String {
    func.attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn pascal_case(name: &str) -> String {
    name.trim_start_matches("r#")
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
