use crate::prepare::{FieldKind, ResolvedField, ResolvedModel};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the query type: table constant, ordered field enumeration, and the
/// positional row decoder, plus a `QuerySource` impl delegating to them.
pub fn emit(model: &ResolvedModel) -> TokenStream {
    let query_ident = format_ident!("{}Query", model.type_name);
    let target = &model.target;
    let table = model.table.as_str();
    let names = model.fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
    let trait_names = names.clone();
    let decoders = model.fields.iter().enumerate().map(|(i, f)| decoder(i, f));

    let doc = format!(
        "Generated query type for `{}` over table `{table}`.",
        model.type_name
    );

    quote! {
        #[doc = #doc]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct #query_ident;

        impl #query_ident {
            pub const TABLE: &'static str = #table;
            pub const FIELDS: &'static [&'static str] = &[#(#names),*];

            /// Decode one positional row, casting each cell to the declared
            /// field type in declaration order.
            pub fn decode_row(
                row: &[::quarry::core::value::Value],
            ) -> ::core::result::Result<#target, ::quarry::core::row::DecodeError> {
                if row.len() != Self::FIELDS.len() {
                    return Err(::quarry::core::row::DecodeError::ColumnCount {
                        expected: Self::FIELDS.len(),
                        found: row.len(),
                    });
                }

                Ok(#target {
                    #(#decoders),*
                })
            }
        }

        impl ::quarry::core::traits::QuerySource for #query_ident {
            type Model = #target;

            const TABLE: &'static str = #table;
            const FIELDS: &'static [&'static str] = &[#(#trait_names),*];

            fn decode_row(
                row: &[::quarry::core::value::Value],
            ) -> ::core::result::Result<#target, ::quarry::core::row::DecodeError> {
                #query_ident::decode_row(row)
            }
        }
    }
}

fn decoder(index: usize, field: &ResolvedField) -> TokenStream {
    let ident = &field.ident;
    let name = field.name.as_str();

    let (accessor, expected) = match field.kind {
        FieldKind::Bool => (quote!(as_bool()), quote!(Bool)),
        FieldKind::DateTime => (quote!(as_date_time()), quote!(DateTime)),
        FieldKind::Double => (quote!(as_double()), quote!(Double)),
        FieldKind::Int => (quote!(as_int()), quote!(Int)),
        FieldKind::Text => (quote!(as_text().map(str::to_owned)), quote!(Text)),
    };

    quote! {
        #ident: row[#index].#accessor.ok_or(
            ::quarry::core::row::DecodeError::TypeMismatch {
                column: #index,
                field: #name,
                expected: ::quarry::core::value::ValueKind::#expected,
                found: row[#index].kind(),
            },
        )?
    }
}
