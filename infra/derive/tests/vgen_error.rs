#[test]
fn vgen_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/vgen_error_pass.rs");
}
