use ark_derive::ark_error;
use std::borrow::Cow;

#[ark_error]
#[derive(Debug)]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[cfg(unix)]
    #[error("Platform error{}", format_context(.context))]
    Platform { context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = DemoError::from("unreachable");
    assert_eq!(err.kind(), "internal");
}
