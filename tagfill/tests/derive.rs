//! Derive macro checks: supported shapes compile, misuse is rejected with a
//! clear diagnostic.

#[test]
fn derive_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
    t.compile_fail("tests/ui/fail/*.rs");
}
