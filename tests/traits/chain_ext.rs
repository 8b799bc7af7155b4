use error_tag::{by_namespace, by_tag, wrap, ErrorChainExt, TagId};

use crate::common::*;

#[test]
fn methods_mirror_free_functions() {
    let err = wrap::<errTooBig>(wrap::<errTooHot>(BaseError("not for me")));

    assert!(err.is_tagged_with(&by_tag::<errTooHot>()));
    assert!(err.is_tagged_with(&by_namespace::<chairErrs>()));
    assert!(err.has_tag::<errTooBig>());
    assert!(err.in_namespace::<porridgeErrs>());
    assert!(!err.in_namespace::<bedErrs>());
    assert_eq!(err.links().count(), 3);
    assert_eq!(err.tags().as_slice(), &[TagId::of::<errTooBig>(), TagId::of::<errTooHot>()]);
}

#[test]
fn find_in_borrows_from_the_chain() {
    let err = wrap::<errTooHard>(wrap::<errTooCold>("brr"));
    let found = err.find_in::<porridgeErrs>().expect("porridge link");

    assert_eq!(found.tag().to_string(), "porridgeErrs::errTooCold");
    assert!(err.find_in::<chairErrs>().is_none());
}

#[test]
fn works_on_untagged_errors() {
    let err = BaseError("plain");
    assert!(!err.has_tag::<errTooHot>());
    assert!(err.find_in::<porridgeErrs>().is_none());
    assert!(err.tags().is_empty());
}
