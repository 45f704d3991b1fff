//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! Each variant gets a prism whose three functions (preview, review,
//! matching) are written out as closures. Only unit and single-field
//! variants are accepted, since a prism must be able to lend out its payload.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_prisms(name, generics, &data_enum.variants.iter().collect::<Vec<_>>())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates prism methods for an enum's variants.
fn generate_enum_prisms(name: &Ident, generics: &Generics, variants: &[&Variant]) -> TokenStream2 {
    let prism_methods: Vec<TokenStream2> = variants
        .iter()
        .map(|variant| generate_variant_prism(variant))
        .collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// Generates a prism method for a single enum variant.
fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));

    match &variant.fields {
        Fields::Unit => generate_unit_variant_prism(variant_name, &method_name),

        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            let pattern = quote! { Self::#variant_name(value) };
            let construct = quote! { Self::#variant_name(value) };
            generate_single_field_prism(variant_name, &method_name, field_type, &pattern, &construct)
        }

        Fields::Named(fields) if fields.named.len() == 1 => {
            let field = &fields.named[0];
            let Some(field_name) = field.ident.as_ref() else {
                return syn::Error::new_spanned(variant, "Named field must have an identifier.")
                    .to_compile_error();
            };
            let pattern = quote! { Self::#variant_name { #field_name: value } };
            let construct = quote! { Self::#variant_name { #field_name: value } };
            generate_single_field_prism(variant_name, &method_name, &field.ty, &pattern, &construct)
        }

        Fields::Unnamed(_) | Fields::Named(_) => syn::Error::new_spanned(
            variant,
            "Prisms can only be derived for unit variants and variants with exactly one field. \
             Gather the fields into a struct and hold it in a single-field variant.",
        )
        .to_compile_error(),
    }
}

/// Generates a prism for a unit variant.
fn generate_unit_variant_prism(variant_name: &Ident, method_name: &Ident) -> TokenStream2 {
    let doc = format!(" Returns a prism focusing on the `{variant_name}` variant.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optica::optics::Prism<Self, ()> + Clone {
            ::optica::optics::FunctionPrism::new(
                |source: &Self| match source {
                    Self::#variant_name => Some(&()),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |_: ()| Self::#variant_name,
                |source: Self| match source {
                    Self::#variant_name => ::optica::optics::Match::Matched(()),
                    #[allow(unreachable_patterns)]
                    other => ::optica::optics::Match::Unmatched(other),
                },
            )
        }
    }
}

/// Generates a prism for a variant holding exactly one value.
///
/// `pattern` binds the payload to `value`; `construct` builds the variant
/// from `value`.
fn generate_single_field_prism(
    variant_name: &Ident,
    method_name: &Ident,
    field_type: &Type,
    pattern: &TokenStream2,
    construct: &TokenStream2,
) -> TokenStream2 {
    let doc = format!(" Returns a prism focusing on the `{variant_name}` variant.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optica::optics::Prism<Self, #field_type> + Clone {
            ::optica::optics::FunctionPrism::new(
                |source: &Self| match source {
                    #pattern => Some(value),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |value: #field_type| #construct,
                |source: Self| match source {
                    #pattern => ::optica::optics::Match::Matched(value),
                    #[allow(unreachable_patterns)]
                    other => ::optica::optics::Match::Unmatched(other),
                },
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase() || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    #[case("Circle", "circle")]
    #[case("KeyPress", "key_press")]
    #[case("none", "none")]
    #[case("HTTPRequest", "http_request")]
    #[case("XMLParser", "xml_parser")]
    #[case("Point2D", "point2d")]
    #[case("X", "x")]
    fn test_to_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[test]
    fn test_multi_field_variant_is_rejected() {
        let variant: Variant = parse_quote!(Rectangle(f64, f64));
        let generated = generate_variant_prism(&variant).to_string();
        assert!(generated.contains("compile_error"));
    }

    #[test]
    fn test_named_single_field_variant_is_accepted() {
        let variant: Variant = parse_quote!(Labelled { text: String });
        let generated = generate_variant_prism(&variant).to_string();
        assert!(generated.contains("labelled_prism"));
        assert!(!generated.contains("compile_error"));
    }
}
