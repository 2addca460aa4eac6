use super::*;

pub(crate) struct ParsedField {
    ident: Ident,
    tags: Vec<(String, LitStr)>,
    pub(crate) skip: bool,
}

impl ParsedField {
    pub(crate) fn from_field(field: &Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new_spanned(field, "Record requires named fields"))?;

        let mut tags = Vec::new();
        let mut skip = false;
        for attr in &field.attrs {
            if attr.path().is_ident("fill") {
                Self::parse_fill_attr(attr, &mut tags, &mut skip)?;
            }
        }

        Ok(Self { ident, tags, skip })
    }

    /// `#[fill(default = "8080", factory = "", skip)]`
    fn parse_fill_attr(attr: &Attribute, tags: &mut Vec<(String, LitStr)>, skip: &mut bool) -> Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                if meta.input.peek(Token![=]) {
                    return Err(meta.error("`skip` takes no value"));
                }
                *skip = true;
                return Ok(());
            }

            let key = meta
                .path
                .get_ident()
                .ok_or_else(|| meta.error("expected `key = \"literal\"` or `skip`"))?
                .to_string();
            if tags.iter().any(|(existing, _)| *existing == key) {
                return Err(meta.error(format!("duplicate `{key}` annotation")));
            }
            let literal: LitStr = meta.value()?.parse()?;
            tags.push((key, literal));
            Ok(())
        })
    }

    pub(crate) fn emit_slot(&self) -> TokenStream2 {
        let ident = &self.ident;
        let name = ident.to_string();
        let tags = self.tags.iter().map(|(key, literal)| quote! { (#key, #literal) });

        quote! {
            ::tagfill::FieldSlot::new(#name, &[#(#tags),*], &mut self.#ident)
        }
    }
}
