//! Integration tests for course lifecycle, enrollment, and scoped listings.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_course_creation_is_staff_only() {
    let app = helpers::TestApp::new();
    let staff = app
        .signup_and_login("Staff", "staff@example.com", "STAFF")
        .await;
    let student = app
        .signup_and_login("Student", "student@example.com", "STUDENT")
        .await;

    let created = app
        .request(
            "POST",
            "/api/courses",
            Some(serde_json::json!({ "course_name": "Algorithms" })),
            Some(&staff),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["course_name"], "Algorithms");

    let denied = app
        .request(
            "POST",
            "/api/courses",
            Some(serde_json::json!({ "course_name": "Forbidden" })),
            Some(&student),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let empty = app
        .request(
            "POST",
            "/api/courses",
            Some(serde_json::json!({ "course_name": "" })),
            Some(&staff),
        )
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listings_are_scoped_per_role() {
    let app = helpers::TestApp::new();
    let staff_a = app
        .signup_and_login("Alice", "alice@example.com", "STAFF")
        .await;
    let staff_b = app.signup_and_login("Bob", "bob@example.com", "STAFF").await;
    let student = app
        .signup_and_login("Carol", "carol@example.com", "STUDENT")
        .await;

    let course_a = app.create_course(&staff_a, "Course A").await;
    let course_b = app.create_course(&staff_b, "Course B").await;

    let enroll = app
        .request(
            "POST",
            &format!("/api/courses/{course_b}/enroll"),
            None,
            Some(&student),
        )
        .await;
    assert_eq!(enroll.status, StatusCode::OK);

    // Staff see only their own courses.
    let a_view = app.request("GET", "/api/courses", None, Some(&staff_a)).await;
    let a_ids: Vec<&str> = a_view.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(a_ids, vec![course_a.as_str()]);

    // Students see only the courses they are enrolled in.
    let s_view = app.request("GET", "/api/courses", None, Some(&student)).await;
    let s_ids: Vec<&str> = s_view.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(s_ids, vec![course_b.as_str()]);
}

#[tokio::test]
async fn test_catalog_is_student_only_and_unscoped() {
    let app = helpers::TestApp::new();
    let staff = app
        .signup_and_login("Staff", "staff@example.com", "STAFF")
        .await;
    let student = app
        .signup_and_login("Student", "student@example.com", "STUDENT")
        .await;

    app.create_course(&staff, "One").await;
    app.create_course(&staff, "Two").await;

    let catalog = app
        .request("GET", "/api/courses/all", None, Some(&student))
        .await;
    assert_eq!(catalog.status, StatusCode::OK);
    assert_eq!(catalog.body["data"].as_array().unwrap().len(), 2);

    let denied = app
        .request("GET", "/api/courses/all", None, Some(&staff))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_rename_is_owner_only() {
    let app = helpers::TestApp::new();
    let owner = app
        .signup_and_login("Owner", "owner@example.com", "STAFF")
        .await;
    let other = app
        .signup_and_login("Other", "other@example.com", "STAFF")
        .await;

    let course = app.create_course(&owner, "Before").await;

    let denied = app
        .request(
            "PUT",
            &format!("/api/courses/{course}"),
            Some(serde_json::json!({ "course_name": "Hijacked" })),
            Some(&other),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let renamed = app
        .request(
            "PUT",
            &format!("/api/courses/{course}"),
            Some(serde_json::json!({ "course_name": "After" })),
            Some(&owner),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["data"]["course_name"], "After");

    let missing = app
        .request(
            "PUT",
            &format!("/api/courses/{}", uuid::Uuid::new_v4()),
            Some(serde_json::json!({ "course_name": "Ghost" })),
            Some(&owner),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_is_owner_only() {
    let app = helpers::TestApp::new();
    let owner = app
        .signup_and_login("Owner", "owner@example.com", "STAFF")
        .await;
    let other = app
        .signup_and_login("Other", "other@example.com", "STAFF")
        .await;

    let course = app.create_course(&owner, "Doomed").await;

    let denied = app
        .request(
            "DELETE",
            &format!("/api/courses/{course}"),
            None,
            Some(&other),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/courses/{course}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    // Deleting again: the course is gone.
    let again = app
        .request(
            "DELETE",
            &format!("/api/courses/{course}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invite_flow() {
    let app = helpers::TestApp::new();
    let owner = app
        .signup_and_login("Owner", "owner@example.com", "STAFF")
        .await;
    let other = app
        .signup_and_login("Other", "other@example.com", "STAFF")
        .await;
    app.signup("Student", "student@example.com", "STUDENT").await;

    let course = app.create_course(&owner, "Invitable").await;
    let invite_path = format!("/api/courses/{course}/invite");

    // Non-owners may not invite.
    let denied = app
        .request(
            "POST",
            &invite_path,
            Some(serde_json::json!({ "email": "student@example.com" })),
            Some(&other),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    // Unknown addresses and staff addresses both read as missing students.
    let unknown = app
        .request(
            "POST",
            &invite_path,
            Some(serde_json::json!({ "email": "nobody@example.com" })),
            Some(&owner),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let staff_target = app
        .request(
            "POST",
            &invite_path,
            Some(serde_json::json!({ "email": "other@example.com" })),
            Some(&owner),
        )
        .await;
    assert_eq!(staff_target.status, StatusCode::NOT_FOUND);

    let invited = app
        .request(
            "POST",
            &invite_path,
            Some(serde_json::json!({ "email": "student@example.com" })),
            Some(&owner),
        )
        .await;
    assert_eq!(invited.status, StatusCode::OK);
    assert_eq!(invited.body["data"]["enrolled"].as_array().unwrap().len(), 1);

    // Inviting the same student twice is a conflict.
    let duplicate = app
        .request(
            "POST",
            &invite_path,
            Some(serde_json::json!({ "email": "student@example.com" })),
            Some(&owner),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.error_code(), "ALREADY_ENROLLED");
}

#[tokio::test]
async fn test_enroll_flow() {
    let app = helpers::TestApp::new();
    let staff = app
        .signup_and_login("Staff", "staff@example.com", "STAFF")
        .await;
    let student = app
        .signup_and_login("Student", "student@example.com", "STUDENT")
        .await;

    let course = app.create_course(&staff, "Open").await;
    let enroll_path = format!("/api/courses/{course}/enroll");

    // Staff cannot self-enroll.
    let denied = app.request("POST", &enroll_path, None, Some(&staff)).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let enrolled = app.request("POST", &enroll_path, None, Some(&student)).await;
    assert_eq!(enrolled.status, StatusCode::OK);

    // Enrolling twice is a conflict and the enrollment list stays unique.
    let duplicate = app.request("POST", &enroll_path, None, Some(&student)).await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.error_code(), "ALREADY_ENROLLED");

    let listing = app.request("GET", "/api/courses", None, Some(&staff)).await;
    assert_eq!(
        listing.body["data"][0]["enrolled"].as_array().unwrap().len(),
        1
    );

    // A missing course is a not-found, before any policy check.
    let missing = app
        .request(
            "POST",
            &format!("/api/courses/{}/enroll", uuid::Uuid::new_v4()),
            None,
            Some(&student),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
