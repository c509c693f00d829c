use super::*;

#[test]
fn invalid_default_directive_is_rejected() {
    // An explicit RUST_LOG takes precedence over the default directive
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    assert!(matches!(init("relay_core=loud"), Err(LoggingError::Filter(_))));
}
