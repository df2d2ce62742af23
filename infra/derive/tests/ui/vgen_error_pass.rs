use std::borrow::Cow;
use vgen_derive::vgen_error;

#[vgen_error]
pub enum DemoError {
    #[error("Descriptor missing{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk")).context("reading us_adapter.json")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading us_adapter.json): disk");

    let err: DemoError = "boom".into();
    assert!(matches!(err, DemoError::Internal { .. }));

    let err = Err::<(), _>(DemoError::Missing { message: "us".into(), context: None })
        .context("registry scan")
        .unwrap_err();
    assert_eq!(err.to_string(), "Descriptor missing (registry scan): us");
}
