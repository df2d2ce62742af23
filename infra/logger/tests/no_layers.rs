use vgen_logger::{Logger, LoggerError};

#[test]
fn disabling_every_layer_is_rejected() {
    let err = Logger::builder().name("vgen-silent").console(false).init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
