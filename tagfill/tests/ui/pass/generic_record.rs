use tagfill::{Reflect, Record, apply_defaults};

#[derive(Record, Default)]
struct Wrapper<T: Reflect + Default + 'static> {
    #[fill(default = "[1,2]")]
    items: Vec<T>,
    #[fill(default = "5")]
    limit: u8,
}

fn main() {
    let mut wrapper = Wrapper::<i32>::default();
    apply_defaults(&mut wrapper);
    assert_eq!(wrapper.items, vec![1, 2]);
    assert_eq!(wrapper.limit, 5);
}
