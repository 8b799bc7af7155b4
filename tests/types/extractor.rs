use error_tag::{by_tag, wrap, ErrorChainExt, Extractor};

use crate::common::*;

#[test]
fn starts_empty() {
    let slot = Extractor::<porridgeErrs>::new();
    assert!(slot.is_empty());
    assert!(slot.get().is_none());
    assert!(slot.tag().is_none());

    let slot: Extractor<'_, bedErrs> = Extractor::default();
    assert!(slot.is_empty());
}

#[test]
fn fills_with_head_most_link_in_namespace() {
    let err = wrap::<errTooHard>(wrap::<errTooCold>(wrap::<errTooHot>("layered")));

    let mut slot = Extractor::<porridgeErrs>::new();
    assert!(slot.fill_from(&err));
    assert!(!slot.is_empty());

    let found = slot.get().expect("filled");
    assert!(found.is::<errTooCold>());
    assert_eq!(found.to_string(), "porridgeErrs::errTooCold: porridgeErrs::errTooHot: layered");
}

#[test]
fn extracted_link_keeps_its_own_tag() {
    let err = wrap::<errTooHard>(wrap::<errTooBig>(wrap::<errTooHot>(BaseError("not for me"))));

    let mut slot = Extractor::<porridgeErrs>::new();
    assert!(slot.fill_from(&err));
    let found = slot.get().expect("filled");

    assert!(found.has_tag::<errTooHot>());
    assert!(!found.has_tag::<errTooCold>());
    assert!(!found.has_tag::<errTooHard>());
    assert!(by_tag::<errTooHot>().matches(found));
}

#[test]
fn miss_leaves_slot_empty() {
    let err = wrap::<errTooHard>(BaseError("lumpy"));

    let mut slot = Extractor::<chairErrs>::new();
    assert!(!slot.fill_from(&err));
    assert!(slot.is_empty());

    let plain = BaseError("nothing tagged");
    assert!(!slot.fill_from(&plain));
}

#[test]
fn take_empties_the_slot() {
    let err = wrap::<errTooSmall>("tiny");
    let mut slot = Extractor::<chairErrs>::new();
    slot.fill_from(&err);

    assert!(slot.take().is_some());
    assert!(slot.is_empty());
    assert!(slot.take().is_none());
}
