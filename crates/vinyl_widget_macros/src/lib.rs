use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Ident, Type, parse_macro_input, spanned::Spanned};

/// Generates `resolve(&self, palette: &ThemePalette) -> &T` for a token enum.
///
/// The enum names the palette field type with `#[field(T)]` and every variant
/// names its palette field with `#[palette(field_name)]`.
#[proc_macro_derive(IntoPaletteField, attributes(palette, field))]
pub fn into_palette_field_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(
            name.span(),
            "IntoPaletteField can only be derived for enums",
        ));
    };

    let field_type: Type = required_attr(&input.attrs, "field", name.span())?.parse_args()?;

    let arms = data
        .variants
        .iter()
        .map(|variant| {
            let ident = &variant.ident;
            let field: Ident =
                required_attr(&variant.attrs, "palette", variant.span())?.parse_args()?;

            Ok(quote! { #name::#ident => &palette.#field, })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #name {
            pub fn resolve<'a>(
                &self,
                palette: &'a vinyl_widget_theme::ThemePalette,
            ) -> &'a #field_type {
                match self {
                    #(#arms)*
                }
            }
        }
    })
}

fn required_attr<'a>(
    attrs: &'a [Attribute],
    name: &str,
    span: proc_macro2::Span,
) -> syn::Result<&'a Attribute> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident(name))
        .ok_or_else(|| syn::Error::new(span, format!("missing #[{name}(...)] attribute")))
}
