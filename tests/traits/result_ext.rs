use std::error::Error;

use error_tag::{wrap, ErrorChainExt, ResultTagExt, TaggedError};

use crate::common::*;

#[test]
fn ok_passes_through() {
    let result: Result<i32, &str> = Ok(42);
    assert_eq!(result.tag::<errTooHot>().ok(), Some(42));

    let result: Result<i32, &str> = Ok(7);
    let mut called = false;
    let tagged = result.tag_with::<errTooHot, _, _>(|| {
        called = true;
        "never built"
    });
    assert_eq!(tagged.ok(), Some(7));
    assert!(!called);
}

#[test]
fn tag_wraps_the_error() {
    let result: Result<(), BaseError> = Err(BaseError("too small"));
    let err = result.tag::<errTooSmall>().unwrap_err();

    assert_eq!(err.to_string(), "chairErrs::errTooSmall: too small");
    assert!(err.source().and_then(|s| s.downcast_ref::<BaseError>()).is_some());
}

#[test]
fn tags_stack_across_layers() {
    fn porridge() -> Result<(), TaggedError> {
        Err(wrap::<errTooHot>("scalding"))
    }

    fn chair() -> Result<(), TaggedError> {
        porridge().tag::<errTooBig>()
    }

    let err = chair().unwrap_err();
    assert_eq!(err.to_string(), "chairErrs::errTooBig: porridgeErrs::errTooHot: scalding");
    assert!(err.has_tag::<errTooHot>());
}

#[test]
fn tag_with_keeps_the_cause_but_renders_the_message() {
    let result: Result<(), TaggedError> = Err(wrap::<errTooSoft>("floof"));
    let err = result.tag_with::<errTooHard, _, _>(|| format!("bed {} rejected", 3)).unwrap_err();

    assert_eq!(err.to_string(), "bedErrs::errTooHard: bed 3 rejected");
    assert!(err.has_tag::<errTooSoft>());
}

#[test]
fn io_errors_are_accepted() {
    let result: Result<(), std::io::Error> =
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
    let err = result.tag::<errTooCold>().unwrap_err();
    assert_eq!(err.to_string(), "porridgeErrs::errTooCold: missing");
}
