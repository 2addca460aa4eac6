use tagfill::Record;

#[derive(Record)]
struct Cache {
    #[fill(skip = true)]
    entries: Vec<String>,
}

fn main() {
    let cache = Cache { entries: Vec::new() };
    let _ = cache.entries;
}
