use std::collections::HashMap;

use tagfill::{Record, apply_defaults, apply_factory};

#[derive(Record, Default)]
struct Account {
    #[fill(default = "guest", factory = "")]
    login: String,
    #[fill(skip)]
    cache: HashMap<String, String>,
    #[fill(default = "3")]
    retries: u8,
}

fn main() {
    let mut account = Account::default();
    apply_defaults(&mut account);
    assert_eq!(account.login, "guest");
    assert_eq!(account.retries, 3);
    assert!(account.cache.is_empty());

    let mut random = Account::default();
    apply_factory(&mut random);
    assert_eq!(random.login.len(), 32);
}
