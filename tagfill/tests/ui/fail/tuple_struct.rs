use tagfill::Record;

#[derive(Record)]
struct Meters(u32);

fn main() {
    let meters = Meters(3);
    let _ = meters.0;
}
