use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tagfill::{Field, Filler, Kind, Record, ValueMut};

#[derive(Record, Default, Debug)]
struct Target {
    #[fill(custom = "9")]
    count: u32,
    other: u32,
}

#[derive(Default)]
struct Calls {
    name: AtomicUsize,
    ty: AtomicUsize,
    kind: AtomicUsize,
}

fn counting_filler(calls: &Arc<Calls>) -> Filler {
    let (by_name, by_type, by_kind) = (Arc::clone(calls), Arc::clone(calls), Arc::clone(calls));
    Filler::builder("custom")
        .by_name("count", move |_, _| {
            by_name.name.fetch_add(1, Ordering::SeqCst);
        })
        .by_type::<u32, _>(move |_, _| {
            by_type.ty.fetch_add(1, Ordering::SeqCst);
        })
        .by_kind(Kind::Uint32, move |_, _| {
            by_kind.kind.fetch_add(1, Ordering::SeqCst);
        })
        .build()
}

#[test]
fn name_beats_type_beats_kind() {
    let calls = Arc::new(Calls::default());
    counting_filler(&calls).fill(&mut Target::default());

    assert_eq!(calls.name.load(Ordering::SeqCst), 1);
    assert_eq!(calls.ty.load(Ordering::SeqCst), 1);
    assert_eq!(calls.kind.load(Ordering::SeqCst), 0);
}

#[test]
fn custom_tags_reach_the_rule() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let filler = Filler::builder("custom")
        .by_kind(Kind::Uint32, move |_, field: &mut Field<'_>| {
            sink.lock().unwrap().push((field.name(), field.annotation().to_string()));
            if let ValueMut::Uint(mut slot) = field.value_mut() {
                slot.set(1);
            }
        })
        .build();

    let mut target = Target::default();
    filler.fill(&mut target);

    assert_eq!(target.count, 1);
    assert_eq!(target.other, 1);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(Some("count"), "9".to_string()), (Some("other"), String::new())]
    );
}

#[test]
fn fields_are_enumerated_in_declaration_order() {
    let filler = Filler::builder("custom").build();
    let mut target = Target::default();
    let names: Vec<_> = filler.fields_of(&mut target).iter().map(|field| field.name()).collect();
    assert_eq!(names, vec![Some("count"), Some("other")]);
}

#[test]
fn fillers_are_shareable_across_threads() {
    let filler = Arc::new(
        Filler::builder("custom")
            .by_kind(Kind::Uint32, |_, field| {
                if let ValueMut::Uint(mut slot) = field.value_mut() {
                    slot.set(3);
                }
            })
            .build(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let filler = Arc::clone(&filler);
            std::thread::spawn(move || {
                let mut target = Target::default();
                filler.fill(&mut target);
                target.count + target.other
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 6);
    }
}
