use std::fmt;

use crate::reflect::{Reflect, ValueMut};
use crate::types::{Kind, TypeHash};

/// Transient descriptor for one field during a single fill pass.
///
/// The borrow `'a` ties the descriptor to the enclosing record: it cannot
/// outlive the traversal frame that produced it. Synthetic descriptors, built
/// for pointees and vector elements, carry no name and so never match a
/// by-name rule.
///
/// The lineage lists the records being filled on the current recursion path,
/// outermost first. Composite rules consult it so a nil pointer to a record
/// already in progress is never allocated.
pub struct Field<'a> {
    name: Option<&'static str>,
    annotation: &'a str,
    lineage: &'a [TypeHash],
    value: &'a mut dyn Reflect,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, annotation: &'a str, value: &'a mut dyn Reflect) -> Self {
        Self {
            name: Some(name),
            annotation,
            lineage: &[],
            value,
        }
    }

    pub fn synthetic(annotation: &'a str, value: &'a mut dyn Reflect) -> Self {
        Self {
            name: None,
            annotation,
            lineage: &[],
            value,
        }
    }

    /// Places the descriptor under `lineage`.
    pub fn within(mut self, lineage: &'a [TypeHash]) -> Self {
        self.lineage = lineage;
        self
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Annotation text for the filler's tag key; empty when absent.
    pub fn annotation(&self) -> &'a str {
        self.annotation
    }

    pub fn lineage(&self) -> &'a [TypeHash] {
        self.lineage
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn type_hash(&self) -> TypeHash {
        self.value.type_hash()
    }

    pub fn value(&mut self) -> &mut dyn Reflect {
        self.value
    }

    pub fn value_mut(&mut self) -> ValueMut<'_> {
        self.value.reflect_mut()
    }

    pub(crate) fn label(&self) -> &'static str {
        self.name.unwrap_or("<element>")
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("annotation", &self.annotation)
            .field("kind", &self.kind())
            .finish()
    }
}
