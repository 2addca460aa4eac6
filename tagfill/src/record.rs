use crate::reflect::Reflect;

/// A struct whose fields the engine can enumerate.
///
/// This trait is automatically implemented by `#[derive(Record)]`, together
/// with [`Reflect`] so the struct can itself be nested inside other records,
/// vectors and options.
pub trait Record {
    /// Settable fields in declaration order. Fields marked `#[fill(skip)]` are omitted.
    fn fields(&mut self) -> Vec<FieldSlot<'_>>;
}

/// One field as emitted by the derive macro: its name, its raw `#[fill(...)]`
/// annotations and a mutable handle to its storage.
pub struct FieldSlot<'a> {
    pub name: &'static str,
    pub tags: &'static [(&'static str, &'static str)],
    pub value: &'a mut dyn Reflect,
}

impl<'a> FieldSlot<'a> {
    pub fn new(name: &'static str, tags: &'static [(&'static str, &'static str)], value: &'a mut dyn Reflect) -> Self {
        Self { name, tags, value }
    }

    /// Annotation stored under `key`, if the field carries one.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find_map(|(candidate, value)| (*candidate == key).then_some(*value))
    }
}

impl std::fmt::Debug for FieldSlot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSlot")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .field("kind", &self.value.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_lookup_is_by_exact_key() {
        let mut value = 0i32;
        let slot = FieldSlot::new("port", &[("default", "8080"), ("factory", "")], &mut value);
        assert_eq!(slot.tag("default"), Some("8080"));
        assert_eq!(slot.tag("factory"), Some(""));
        assert_eq!(slot.tag("Default"), None);
    }
}
