use tagfill::Record;

#[derive(Record)]
enum Shape {
    Circle,
}

fn main() {
    let _ = Shape::Circle;
}
