use tagfill::{Record, apply_defaults};

#[derive(Record, Default)]
struct Marker;

#[derive(Record, Default)]
struct Outer {
    marker: Marker,
    #[fill(default = "true")]
    ready: bool,
}

fn main() {
    let mut outer = Outer::default();
    apply_defaults(&mut outer);
    assert!(outer.ready);
}
