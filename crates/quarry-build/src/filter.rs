use crate::prepare::{FieldKind, ResolvedField, ResolvedModel};
use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the filter type: one named expression builder per field, constructed
/// with the field's resolved column name.
pub fn emit(model: &ResolvedModel) -> TokenStream {
    let filter_ident = format_ident!("{}Filter", model.type_name);
    let builders = model.fields.iter().map(builder);

    let doc = format!(
        "Generated filter type for `{}`: one expression builder per field.",
        model.type_name
    );

    // Builder fns keep the declared field names, which may not be snake_case.
    let non_snake = model
        .fields
        .iter()
        .any(|f| f.name != f.name.to_case(Case::Snake));
    let allow = if non_snake {
        quote!(#[allow(non_snake_case)])
    } else {
        quote!()
    };

    quote! {
        #[doc = #doc]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct #filter_ident;

        #allow
        impl #filter_ident {
            #(#builders)*
        }
    }
}

fn builder(field: &ResolvedField) -> TokenStream {
    let ident = &field.ident;
    let column = field.column.as_str();
    let ty = builder_ty(field.kind);
    let doc = format!("Expression builder for column `{column}`.");

    quote! {
        #[doc = #doc]
        #[must_use]
        pub fn #ident() -> #ty {
            <#ty>::new(#column)
        }
    }
}

fn builder_ty(kind: FieldKind) -> TokenStream {
    match kind {
        FieldKind::Bool => quote!(::quarry::core::filter::BoolExpr),
        FieldKind::DateTime => quote!(::quarry::core::filter::DateTimeExpr),
        FieldKind::Double => quote!(::quarry::core::filter::NumericExpr<f64>),
        FieldKind::Int => quote!(::quarry::core::filter::NumericExpr<i64>),
        FieldKind::Text => quote!(::quarry::core::filter::TextExpr),
    }
}
