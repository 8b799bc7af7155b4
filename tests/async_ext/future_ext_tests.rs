use error_tag::prelude_async::*;

use crate::common::*;

async fn scald(fail: bool) -> Result<u32, &'static str> {
    if fail {
        Err("ouch my tongue")
    } else {
        Ok(37)
    }
}

#[tokio::test]
async fn success_is_untouched() {
    let result = scald(false).tag::<errTooHot>().await;
    assert_eq!(result.ok(), Some(37));
}

#[tokio::test]
async fn error_is_tagged_on_resolution() {
    let err = scald(true).tag::<errTooHot>().await.unwrap_err();
    assert_eq!(err.to_string(), "porridgeErrs::errTooHot: ouch my tongue");
    assert!(err.is::<errTooHot>());
}

#[tokio::test]
async fn tagged_futures_compose() {
    let err = async { scald(true).tag::<errTooHot>().await }
        .tag::<errTooHard>()
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "bedErrs::errTooHard: porridgeErrs::errTooHot: ouch my tongue");
    assert!(err.has_tag::<errTooHot>());
    assert!(err.find_in::<porridgeErrs>().is_some());
}

#[tokio::test]
async fn tagged_results_cross_tasks() {
    let handle = tokio::spawn(async { scald(true).tag::<errTooCold>().await });
    let err = handle.await.expect("task panicked").unwrap_err();
    assert!(err.in_namespace::<porridgeErrs>());
}
