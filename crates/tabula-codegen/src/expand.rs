use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn record(record: &Record) -> TokenStream {
    let tabula = quote!(_tabula::codegen_support);
    let ident = &record.ident;
    let name = ident.to_string();
    let identity = &record.identity;

    let schema_fields = record.fields.iter().map(|field| {
        let name = &field.name;
        let ty = &field.ty;
        let key = field.key.is_some();

        quote! {
            .field(
                #tabula::Field::new(#name, <#ty as #tabula::FieldType>::field_ty())
                    .key(#key)
                    .nullable(<#ty as #tabula::FieldType>::nullable())
            )
        }
    });

    let field_values = record.fields.iter().map(|field| {
        let field_ident = &field.ident;
        quote!(#tabula::FieldType::field_value(&self.#field_ident))
    });

    wrap_in_const(quote! {
        impl #tabula::Record for #ident {
            fn schema() -> &'static #tabula::RecordType {
                static SCHEMA: std::sync::OnceLock<#tabula::RecordType> = std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    #tabula::RecordType::builder(#name) #( #schema_fields )* .finish()
                })
            }

            fn record_type(&self) -> &'static #tabula::RecordType {
                <Self as #tabula::Record>::schema()
            }

            fn identity(&self) -> &#tabula::Identity {
                &self.#identity
            }

            fn fields(&self) -> Vec<#tabula::FieldValue<'_>> {
                vec![ #( #field_values ),* ]
            }
        }

        impl #tabula::FieldType for #ident {
            fn field_ty() -> #tabula::FieldTy {
                #tabula::FieldTy::Record(#tabula::RecordTypeRef::new(
                    <#ident as #tabula::Record>::schema,
                ))
            }

            fn field_value(&self) -> #tabula::FieldValue<'_> {
                #tabula::FieldValue::Record(Some(self))
            }
        }
    })
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use tabula as _tabula;
            #code
        };
    }
}
