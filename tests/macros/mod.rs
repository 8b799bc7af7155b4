use error_tag::traits::{Namespace, Tag};
use error_tag::{namespace, tag, tagged, wrap, ErrorChainExt, TagId};

use crate::common::*;

mod local {
    use error_tag::{namespace, tag};

    namespace!(pub(crate) Inventory);
    tag! {
        /// Nothing left on the shelf.
        pub(crate) OutOfStock in Inventory;
        pub(crate) Discontinued in Inventory;
    }
}

namespace!(Shelf;);
tag!(Empty in Shelf;);

#[test]
fn namespace_name_is_the_declared_identifier() {
    assert_eq!(porridgeErrs::NAME, "porridgeErrs");
    assert_eq!(local::Inventory::NAME, "Inventory");
    assert_eq!(Shelf::NAME, "Shelf");
}

#[test]
fn tag_name_ignores_the_declaring_module() {
    assert_eq!(<local::OutOfStock as Tag>::NAME, "OutOfStock");
    assert_eq!(TagId::of::<local::OutOfStock>().to_string(), "Inventory::OutOfStock");
    assert_eq!(TagId::of::<Empty>().to_string(), "Shelf::Empty");
}

#[test]
fn declared_tags_point_at_their_namespace() {
    assert_eq!(<<errTooHot as Tag>::Namespace as Namespace>::NAME, "porridgeErrs");
    assert_eq!(<<local::Discontinued as Tag>::Namespace as Namespace>::NAME, "Inventory");
}

#[test]
fn tagged_formats_like_format() {
    let err = tagged!(local::OutOfStock, "{} units of {:?}", 0, "porridge");
    assert_eq!(err.to_string(), "Inventory::OutOfStock: 0 units of \"porridge\"");
}

#[test]
fn tagged_with_source_keeps_the_chain() {
    let cause = wrap::<errTooSmall>("cannot fit");
    let err = tagged!(local::Discontinued, source = cause, "wrapped: {}", cause);

    assert_eq!(err.to_string(), "Inventory::Discontinued: wrapped: chairErrs::errTooSmall: cannot fit");
    assert!(err.has_tag::<errTooSmall>());
    assert!(err.in_namespace::<chairErrs>());
}

#[test]
fn markers_are_plain_unit_values() {
    let marker = local::OutOfStock;
    assert_eq!(marker, local::OutOfStock::default());
    assert_eq!(format!("{:?}", Shelf), "Shelf");
}
