use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Mapped fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// The field holding the identity cache
    pub(crate) identity: syn::Ident,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record types cannot be generic",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut fields = vec![];
        let mut identity: Option<syn::Ident> = None;

        for node in &node.named {
            let field = match Field::from_ast(node) {
                Ok(field) => field,
                Err(err) => {
                    errs.push(err);
                    continue;
                }
            };

            if !field.is_identity() {
                fields.push(field);
                continue;
            }

            if let Some(attr) = &field.key {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "the identity field cannot be a key field",
                ));
            }

            if identity.is_some() {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    "record types must have exactly one `Identity` field",
                ));
            } else {
                identity = Some(field.ident);
            }
        }

        let Some(identity) = identity else {
            let missing = syn::Error::new_spanned(
                &ast.ident,
                "record types must have exactly one `Identity` field",
            );

            return Err(match errs.collect() {
                Some(mut err) => {
                    err.combine(missing);
                    err
                }
                None => missing,
            });
        };

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
            identity,
        })
    }
}
