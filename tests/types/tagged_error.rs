use std::error::Error;

use error_tag::{formatted, tagged, wrap, TagId, TaggedError};

use crate::common::*;

#[test]
fn renders_namespace_name_and_inner() {
    let err = tagged!(errTooHot, "ouch my tongue");
    assert_eq!(err.to_string(), "porridgeErrs::errTooHot: ouch my tongue");

    let err = tagged!(errTooSmall, "cannot fit");
    assert_eq!(err.to_string(), "chairErrs::errTooSmall: cannot fit");

    let err = formatted::<errTooSoft>(format_args!("{}", "floof"));
    assert_eq!(err.to_string(), "bedErrs::errTooSoft: floof");
}

#[test]
fn bare_renders_without_trailing_separator() {
    let err = TaggedError::bare::<errTooCold>();
    assert_eq!(err.to_string(), "porridgeErrs::errTooCold");
    assert!(err.source().is_none());
}

#[test]
fn nested_wraps_concatenate() {
    let err = wrap::<errTooHard>(wrap::<errTooBig>(wrap::<errTooHot>(BaseError("not for me"))));
    assert_eq!(
        err.to_string(),
        "bedErrs::errTooHard: chairErrs::errTooBig: porridgeErrs::errTooHot: not for me"
    );
}

#[test]
fn wrap_preserves_original_cause() {
    let err = wrap::<errTooHot>(BaseError("scalding"));
    let inner = err.inner().and_then(|inner| inner.downcast_ref::<BaseError>());
    assert_eq!(inner.map(|base| base.0), Some("scalding"));

    let source = err.source().and_then(|source| source.downcast_ref::<BaseError>());
    assert!(source.is_some());

    let owned = err.into_inner().expect("inner cause");
    assert_eq!(owned.to_string(), "scalding");
}

#[test]
fn accessors_reflect_declared_identity() {
    let err = wrap::<errTooBig>("oof");
    assert_eq!(err.namespace(), "chairErrs");
    assert_eq!(err.name(), "errTooBig");
    assert_eq!(err.tag(), TagId::of::<errTooBig>());
    assert_eq!(err.tag().to_string(), "chairErrs::errTooBig");
    assert!(err.is::<errTooBig>());
    assert!(!err.is::<errTooSmall>());
    assert!(err.belongs_to::<chairErrs>());
    assert!(!err.belongs_to::<bedErrs>());
}

#[test]
fn is_only_looks_at_its_own_link() {
    let err = wrap::<errTooHard>(wrap::<errTooHot>("layered"));
    assert!(err.is::<errTooHard>());
    assert!(!err.is::<errTooHot>());
}

#[test]
fn derivation_is_deterministic_across_calls() {
    let first = wrap::<errTooSoft>("a").tag();
    let second = TaggedError::bare::<errTooSoft>().tag();
    let third = TagId::of::<errTooSoft>();
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn debug_shows_tag_and_inner() {
    let err = wrap::<errTooCold>("brr");
    let debug = format!("{:?}", err);
    assert!(debug.starts_with("TaggedError"));
    assert!(debug.contains("porridgeErrs::errTooCold"));
    assert!(debug.contains("brr"));
}

#[test]
fn boxes_into_dyn_error() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(wrap::<errTooBig>("huge"));
    assert_eq!(boxed.to_string(), "chairErrs::errTooBig: huge");
    assert!(boxed.downcast_ref::<TaggedError>().is_some());
}
