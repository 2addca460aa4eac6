//! The filler engine: field enumeration, the emptiness gate and the
//! name → type → kind rule resolution.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::emptiness;
use crate::field::Field;
use crate::record::Record;
use crate::reflect::{Reflect, ValueMut};
use crate::types::{Kind, TypeHash};

/// A fill function. It receives the engine so composite rules can recurse.
pub type FillFn = Arc<dyn Fn(&Filler, &mut Field<'_>) + Send + Sync>;

/// Which lookup layer produced a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleLayer {
    Name,
    Type,
    Kind,
}

/// A rule table plus the annotation key it reads.
///
/// Built once through [`FillerBuilder`] and immutable afterwards, so one filler
/// can serve any number of fill passes, including concurrent passes over
/// different records.
#[derive(Clone)]
pub struct Filler {
    tag: Cow<'static, str>,
    by_name: HashMap<String, FillFn>,
    by_type: HashMap<TypeHash, FillFn>,
    by_kind: HashMap<Kind, FillFn>,
}

impl Filler {
    /// Starts an empty rule table reading annotations under `tag`.
    pub fn builder(tag: impl Into<Cow<'static, str>>) -> FillerBuilder {
        FillerBuilder {
            filler: Filler {
                tag: tag.into(),
                by_name: HashMap::new(),
                by_type: HashMap::new(),
                by_kind: HashMap::new(),
            },
        }
    }

    /// The annotation key, e.g. `default` for `#[fill(default = "...")]`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Fills every empty field of `record`, recursing through composites.
    pub fn fill<R: Record + ?Sized>(&self, record: &mut R) {
        self.fill_within(record, &[TypeHash::of::<R>()]);
    }

    /// Fills `record` as a nested record. `lineage` names the records in
    /// progress on the recursion path, `record` itself included.
    pub fn fill_within<R: Record + ?Sized>(&self, record: &mut R, lineage: &[TypeHash]) {
        let fields = self
            .fields_of(record)
            .into_iter()
            .map(|field| field.within(lineage))
            .collect();
        self.fill_fields(fields);
    }

    /// Dynamic entry point.
    ///
    /// # Panics
    ///
    /// Panics when `value` is not a struct. Filling anything else is a
    /// contract violation, not a data problem.
    pub fn fill_value(&self, value: &mut dyn Reflect) {
        let kind = value.kind();
        let type_hash = value.type_hash();
        match value.reflect_mut() {
            ValueMut::Struct(record) => self.fill_within(record, &[type_hash]),
            _ => panic!("tagfill: the fill target must be a struct deriving Record, got a {kind} value"),
        }
    }

    /// Descriptors for the settable fields of `record`, in declaration order,
    /// with annotations resolved for this filler's tag.
    pub fn fields_of<'a, R: Record + ?Sized>(&self, record: &'a mut R) -> Vec<Field<'a>> {
        record
            .fields()
            .into_iter()
            .map(|slot| {
                let annotation = slot.tag(&self.tag).unwrap_or("");
                Field::new(slot.name, annotation, slot.value)
            })
            .collect()
    }

    pub fn fill_fields(&self, fields: Vec<Field<'_>>) {
        for mut field in fields {
            self.fill_field(&mut field);
        }
    }

    /// Gates `field` on emptiness, then dispatches it.
    pub fn fill_field(&self, field: &mut Field<'_>) {
        if emptiness::is_empty(field.value()) {
            self.dispatch(field);
        } else {
            trace!("`{}` already set, leaving it", field.label());
        }
    }

    /// Runs the resolved rule for `field` without the emptiness gate.
    /// Returns `false` when no layer has a rule.
    pub fn dispatch(&self, field: &mut Field<'_>) -> bool {
        match self.resolve(field) {
            Some((layer, rule)) => {
                trace!("filling `{}` ({}) via {:?} rule", field.label(), field.kind(), layer);
                rule(self, field);
                true
            }
            None => false,
        }
    }

    /// First matching rule by field name, then type identity, then kind.
    pub fn resolve(&self, field: &Field<'_>) -> Option<(RuleLayer, &FillFn)> {
        if let Some(rule) = field.name().and_then(|name| self.by_name.get(name)) {
            return Some((RuleLayer::Name, rule));
        }
        if let Some(rule) = self.by_type.get(&field.type_hash()) {
            return Some((RuleLayer::Type, rule));
        }
        self.by_kind.get(&field.kind()).map(|rule| (RuleLayer::Kind, rule))
    }
}

impl fmt::Debug for Filler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.by_kind.keys().map(|kind| kind.as_str()).collect();
        kinds.sort_unstable();
        f.debug_struct("Filler")
            .field("tag", &self.tag)
            .field("by_name", &self.by_name.keys().collect::<Vec<_>>())
            .field("by_type", &self.by_type.keys().collect::<Vec<_>>())
            .field("by_kind", &kinds)
            .finish()
    }
}

/// Registers rules for a [`Filler`]. Later registrations for the same key replace earlier ones.
pub struct FillerBuilder {
    filler: Filler,
}

impl FillerBuilder {
    pub fn by_name<F>(mut self, name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&Filler, &mut Field<'_>) + Send + Sync + 'static,
    {
        self.filler.by_name.insert(name.into(), Arc::new(rule));
        self
    }

    /// Registers `rule` for `T`, which also covers `Option<T>` and `Box<T>` fields.
    pub fn by_type<T, F>(self, rule: F) -> Self
    where
        T: Reflect,
        F: Fn(&Filler, &mut Field<'_>) + Send + Sync + 'static,
    {
        self.by_type_hash(T::type_name(), rule)
    }

    pub fn by_type_hash<F>(mut self, hash: TypeHash, rule: F) -> Self
    where
        F: Fn(&Filler, &mut Field<'_>) + Send + Sync + 'static,
    {
        self.filler.by_type.insert(hash, Arc::new(rule));
        self
    }

    pub fn by_kind<F>(self, kind: Kind, rule: F) -> Self
    where
        F: Fn(&Filler, &mut Field<'_>) + Send + Sync + 'static,
    {
        self.by_kinds([kind], rule)
    }

    /// Registers one shared rule for a whole kind family.
    pub fn by_kinds<F>(mut self, kinds: impl IntoIterator<Item = Kind>, rule: F) -> Self
    where
        F: Fn(&Filler, &mut Field<'_>) + Send + Sync + 'static,
    {
        let rule: FillFn = Arc::new(rule);
        for kind in kinds {
            self.filler.by_kind.insert(kind, Arc::clone(&rule));
        }
        self
    }

    pub fn build(self) -> Filler {
        self.filler
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use super::*;
    use crate::reflect::IntMut;

    #[derive(crate::Record, Default)]
    struct Single {
        foo: i32,
    }

    #[derive(crate::Record, Default)]
    struct Tagged {
        #[fill(foo = "qux")]
        foo: i32,
    }

    #[derive(crate::Record, Default)]
    struct Listener {
        port: u16,
    }

    #[test]
    fn name_rule_wins_over_kind_rule() {
        let by_name = Arc::new(AtomicBool::new(false));
        let by_kind = Arc::new(AtomicBool::new(false));
        let (name_flag, kind_flag) = (Arc::clone(&by_name), Arc::clone(&by_kind));
        let filler = Filler::builder("default")
            .by_name("foo", move |_, _| name_flag.store(true, Ordering::SeqCst))
            .by_kind(Kind::Int32, move |_, _| kind_flag.store(true, Ordering::SeqCst))
            .build();

        filler.fill(&mut Single::default());
        assert!(by_name.load(Ordering::SeqCst));
        assert!(!by_kind.load(Ordering::SeqCst));
    }

    #[test]
    fn kind_rule_is_skipped_for_set_fields() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let filler = Filler::builder("default")
            .by_kind(Kind::Int32, move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        filler.fill(&mut Single { foo: 42 });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        filler.fill(&mut Single::default());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rules_see_the_annotation_for_the_filler_tag() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let filler = Filler::builder("foo")
            .by_kind(Kind::Int32, move |_, field| {
                sink.lock().unwrap().push(field.annotation().to_string());
            })
            .build();
        filler.fill(&mut Tagged::default());

        let other = Filler::builder("bar").by_kind(Kind::Int32, |_, field| {
            assert_eq!(field.annotation(), "");
        });
        other.build().fill(&mut Tagged::default());

        assert_eq!(*seen.lock().unwrap(), vec!["qux".to_string()]);
    }

    #[test]
    fn missing_rules_are_a_no_op() {
        let filler = Filler::builder("default").build();
        let mut record = Single::default();
        filler.fill(&mut record);
        assert_eq!(record.foo, 0);
    }

    #[test]
    fn resolve_reports_the_layer() {
        let filler = Filler::builder("default")
            .by_type::<i32, _>(|_, field| {
                if let ValueMut::Int(IntMut::I32(slot)) = field.value_mut() {
                    *slot = 7;
                }
            })
            .by_kind(Kind::Int32, |_, _| {})
            .build();

        let mut value = 0i32;
        let field = Field::new("foo", "", &mut value);
        assert!(matches!(filler.resolve(&field), Some((RuleLayer::Type, _))));

        let mut record = Single::default();
        filler.fill(&mut record);
        assert_eq!(record.foo, 7);
    }

    #[test]
    fn synthetic_fields_never_match_by_name() {
        let filler = Filler::builder("default").by_name("foo", |_, _| {}).build();
        let mut value = 0i32;
        let field = Field::synthetic("", &mut value);
        assert!(filler.resolve(&field).is_none());
    }

    #[test]
    #[should_panic(expected = "must be a struct")]
    fn filling_a_non_struct_panics() {
        let filler = Filler::builder("default").build();
        filler.fill_value(&mut 5i32);
    }

    #[test]
    fn fill_value_accepts_records() {
        let filler = Filler::builder("default")
            .by_kind(Kind::Uint16, |_, field| {
                if let ValueMut::Uint(mut slot) = field.value_mut() {
                    slot.set(8080);
                }
            })
            .build();
        let mut listener = Listener::default();
        filler.fill_value(&mut listener);
        assert_eq!(listener.port, 8080);
    }
}
