use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::json;

use disposal_api::models::{Business, BusinessInput};
use disposal_api::orm::testing::test_rocket;

/// Helper to register a business via the API and return the created Business
async fn create_business_by_api(client: &Client, input: &BusinessInput) -> Business {
    let response = client.post("/businesses/").json(input).dispatch().await;

    assert_eq!(response.status(), Status::Created);

    response.into_json::<Business>().await.expect("valid Business JSON response")
}

fn business_input(name: &str, phone_number: i64, email: &str) -> BusinessInput {
    BusinessInput {
        name: name.to_string(),
        phone_number,
        email: email.to_string(),
    }
}

#[rocket::async_test]
async fn test_create_business() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let returned = create_business_by_api(&client, &business_input("Corner Cafe", 555, "a@x.com")).await;

    assert_eq!(returned.id, 1);
    assert_eq!(returned.name, "Corner Cafe");
    assert_eq!(returned.phone_number, 555);
    assert_eq!(returned.email, "a@x.com");
}

#[rocket::async_test]
async fn test_create_business_sets_location_header() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client
        .post("/businesses/")
        .json(&business_input("Corner Cafe", 555, "a@x.com"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Created);
    assert_eq!(response.headers().get_one("Location"), Some("/businesses/1"));
}

#[rocket::async_test]
async fn test_create_businesses_get_distinct_ids() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let first = create_business_by_api(&client, &business_input("One", 1, "one@x.com")).await;
    let second = create_business_by_api(&client, &business_input("Two", 2, "two@x.com")).await;

    assert!(first.id > 0);
    assert!(second.id > first.id);
}

#[rocket::async_test]
async fn test_duplicate_phone_number_conflicts() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    create_business_by_api(&client, &business_input("Original", 555, "a@x.com")).await;

    let response = client
        .post("/businesses/")
        .json(&business_input("Copycat", 555, "b@x.com"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Conflict);
    let body: serde_json::Value = response.into_json().await.expect("valid error JSON");
    assert!(body["error"].as_str().unwrap().contains("phone_number"));

    // The failed insert must not have consumed the next free slot
    let next = create_business_by_api(&client, &business_input("Next", 556, "c@x.com")).await;
    assert_eq!(next.id, 2);
}

#[rocket::async_test]
async fn test_duplicate_email_conflicts() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    create_business_by_api(&client, &business_input("Original", 555, "a@x.com")).await;

    let response = client
        .post("/businesses/")
        .json(&business_input("Copycat", 777, "a@x.com"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Conflict);
    let body: serde_json::Value = response.into_json().await.expect("valid error JSON");
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[rocket::async_test]
async fn test_create_business_missing_field() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client
        .post("/businesses/")
        .header(ContentType::JSON)
        .body(json!({ "name": "No Contact" }).to_string())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::UnprocessableEntity);
}
