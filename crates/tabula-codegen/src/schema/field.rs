use super::ErrorSet;

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust identifier of the field
    pub(crate) ident: syn::Ident,

    /// Field name as seen by the database
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut key = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("key") {
                continue;
            }

            if let Err(err) = attr.meta.require_path_only() {
                errs.push(err);
            } else if key.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
            } else {
                key = Some(attr.clone());
            }
        }

        let name = ident.unraw().to_string();

        if name == "id" {
            errs.push(syn::Error::new_spanned(
                ident,
                "`id` is reserved for the generated primary key column",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
            key,
        })
    }

    /// Returns `true` if the field holds the record's identity cache.
    pub(crate) fn is_identity(&self) -> bool {
        let syn::Type::Path(path) = &self.ty else {
            return false;
        };

        path.qself.is_none()
            && path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == "Identity" && segment.arguments.is_empty())
    }
}
