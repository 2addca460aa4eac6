use super::*;

pub(crate) struct ParsedRecord {
    name: Ident,
    generics: Generics,
    fields: Vec<ParsedField>,
}

impl ParsedRecord {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => {
                    let mut parsed = Vec::new();
                    for field in &named.named {
                        parsed.push(ParsedField::from_field(field)?);
                    }
                    parsed
                }
                Fields::Unnamed(_) => {
                    return Err(Error::new(input.ident.span(), "Record cannot be derived for tuple structs"));
                }
                Fields::Unit => Vec::new(),
            },
            _ => return Err(Error::new(input.ident.span(), "Record can only be derived for structs")),
        };

        Ok(Self {
            name: input.ident.clone(),
            generics: input.generics.clone(),
            fields,
        })
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let name = &self.name;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let slots = self.fields.iter().filter(|field| !field.skip).map(ParsedField::emit_slot);

        quote! {
            impl #impl_generics ::tagfill::Record for #name #ty_generics #where_clause {
                fn fields(&mut self) -> ::std::vec::Vec<::tagfill::FieldSlot<'_>> {
                    ::std::vec![#(#slots),*]
                }
            }

            impl #impl_generics ::tagfill::Reflect for #name #ty_generics #where_clause {
                fn kind(&self) -> ::tagfill::Kind {
                    ::tagfill::Kind::Struct
                }

                fn type_hash(&self) -> ::tagfill::TypeHash {
                    ::tagfill::TypeHash::of::<Self>()
                }

                fn reflect_mut(&mut self) -> ::tagfill::ValueMut<'_> {
                    ::tagfill::ValueMut::Struct(self)
                }

                fn type_kind() -> ::tagfill::Kind {
                    ::tagfill::Kind::Struct
                }
            }
        }
    }
}
