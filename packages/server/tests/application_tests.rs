//! Integration tests for housing application submission and listing.

mod common;

use common::{create_test_profile, unique_email, TestHarness};
use server_core::common::ApiError;
use server_core::domains::applications::actions::{submit_application, SubmitApplicationInput};
use server_core::domains::applications::models::HousingApplication;
use test_context::test_context;

fn input_for(email: &str) -> SubmitApplicationInput {
    SubmitApplicationInput {
        full_name: "Ahmed Hassan".to_string(),
        email: email.to_string(),
        phone: Some("+20 100 000 0000".to_string()),
        governorate: "New Cairo".to_string(),
        housing_type: "2-Bedroom".to_string(),
        family_size: Some(4),
        employment_status: Some("Employed".to_string()),
        message: Some("Looking for a family apartment.".to_string()),
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn submission_stores_pending_row(ctx: &TestHarness) {
    let deps = ctx.deps();
    let email = unique_email("applicant");
    let profile = create_test_profile(&deps.db_pool, &email, "hunter2hunter2", false)
        .await
        .unwrap();

    let application = submit_application(profile.id, input_for(&email), &deps)
        .await
        .unwrap();

    assert_eq!(application.status, "pending");
    assert_eq!(application.profile_id, profile.id);
    assert_eq!(application.governorate, "New Cairo");
    assert_eq!(application.family_size, Some(4));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn blank_optional_fields_are_stored_as_null(ctx: &TestHarness) {
    let deps = ctx.deps();
    let email = unique_email("sparse");
    let profile = create_test_profile(&deps.db_pool, &email, "hunter2hunter2", false)
        .await
        .unwrap();

    let mut input = input_for(&email);
    input.phone = Some("  ".to_string());
    input.employment_status = None;
    input.message = Some(String::new());
    input.family_size = None;

    let application = submit_application(profile.id, input, &deps).await.unwrap();

    assert_eq!(application.phone, None);
    assert_eq!(application.employment_status, None);
    assert_eq!(application.message, None);
    assert_eq!(application.family_size, None);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn invalid_fields_are_rejected(ctx: &TestHarness) {
    let deps = ctx.deps();
    let email = unique_email("invalid");
    let profile = create_test_profile(&deps.db_pool, &email, "hunter2hunter2", false)
        .await
        .unwrap();

    let mut input = input_for(&email);
    input.message = Some("m".repeat(1001));
    let err = submit_application(profile.id, input, &deps).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "message", .. }));

    let mut input = input_for(&email);
    input.family_size = Some(0);
    let err = submit_application(profile.id, input, &deps).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "familySize", .. }));

    let mut input = input_for(&email);
    input.governorate = "   ".to_string();
    let err = submit_application(profile.id, input, &deps).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "governorate", .. }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn listing_orders_newest_first(ctx: &TestHarness) {
    let deps = ctx.deps();
    let email = unique_email("order");
    let profile = create_test_profile(&deps.db_pool, &email, "hunter2hunter2", false)
        .await
        .unwrap();

    let first = submit_application(profile.id, input_for(&email), &deps)
        .await
        .unwrap();
    let second = submit_application(profile.id, input_for(&email), &deps)
        .await
        .unwrap();

    // The shared database holds rows from other tests; compare positions.
    let all = HousingApplication::list_all(&deps.db_pool).await.unwrap();
    let pos_first = all.iter().position(|a| a.id == first.id).unwrap();
    let pos_second = all.iter().position(|a| a.id == second.id).unwrap();
    assert!(pos_second < pos_first, "newer application must come first");
}
