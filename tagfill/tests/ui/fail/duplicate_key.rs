use tagfill::Record;

#[derive(Record)]
struct Listener {
    #[fill(default = "80", default = "8080")]
    port: u16,
}

fn main() {
    let listener = Listener { port: 0 };
    let _ = listener.port;
}
