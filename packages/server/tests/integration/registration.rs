use serde_json::json;

use crate::common::{TestApp, registration_body, routes};

mod create {
    use super::*;

    #[tokio::test]
    async fn valid_submission_is_created_as_pending() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::REGISTRATIONS,
                &json!({
                    "studentName": "Asha Rao",
                    "grade": "10",
                    "division": "A",
                    "email": "asha@example.com",
                    "committee": "unsc",
                    "suggestions": "More crisis committees please",
                }),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert!(res.body["id"].is_number());
        assert_eq!(res.body["studentName"], "Asha Rao");
        assert_eq!(res.body["grade"], "10");
        assert_eq!(res.body["division"], "A");
        assert_eq!(res.body["email"], "asha@example.com");
        assert_eq!(res.body["committee"], "unsc");
        assert_eq!(res.body["status"], "pending");
        assert!(res.body["createdAt"].is_string());
    }

    #[tokio::test]
    async fn blank_optional_fields_are_stored_as_null() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::REGISTRATIONS,
                &json!({
                    "studentName": "Asha Rao",
                    "grade": "10",
                    "division": "A",
                    "email": "",
                    "committee": "unsc",
                }),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert!(res.body["email"].is_null());
        assert!(res.body["suggestions"].is_null());
    }

    #[tokio::test]
    async fn client_cannot_choose_status_or_id() {
        let app = TestApp::spawn().await;
        let mut body = registration_body("Asha Rao", "10", "A");
        body["status"] = json!("confirmed");
        body["id"] = json!(999);

        let res = app.post(routes::REGISTRATIONS, &body).await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["status"], "pending");
        assert_ne!(res.body["id"], 999);
    }

    #[tokio::test]
    async fn invalid_fields_are_reported_individually() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::REGISTRATIONS,
                &json!({
                    "studentName": "",
                    "grade": "7",
                    "division": "A",
                    "email": "not-an-email",
                    "committee": "unsc",
                }),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["message"], "Validation failed");
        let fields: Vec<&str> = res.body["errors"]
            .as_array()
            .expect("errors should be an array")
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["studentName", "grade", "email"]);
    }

    #[tokio::test]
    async fn missing_committee_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::REGISTRATIONS,
                &json!({"studentName": "Asha Rao", "grade": "10", "division": "A"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["errors"][0]["field"], "committee");
        assert_eq!(res.body["errors"][0]["message"], "Committee selection is required");
    }

    #[tokio::test]
    async fn malformed_json_body_returns_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .client
            .post(app.url(routes::REGISTRATIONS))
            .header("Content-Type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();

        assert_eq!(res.status().as_u16(), 400);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

mod duplicates {
    use super::*;

    #[tokio::test]
    async fn same_student_cannot_register_twice() {
        let app = TestApp::spawn().await;
        app.register(&registration_body("Asha Rao", "10", "A")).await;

        let mut again = registration_body("asha rao", "10", "A");
        again["committee"] = json!("who");
        let res = app.post(routes::REGISTRATIONS, &again).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "DUPLICATE_REGISTRATION");
        assert!(
            res.body["message"]
                .as_str()
                .unwrap()
                .contains("Each student can only register once")
        );

        let list = app.get(routes::REGISTRATIONS).await;
        assert_eq!(list.body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_name_in_another_division_is_a_different_student() {
        let app = TestApp::spawn().await;
        app.register(&registration_body("Asha Rao", "10", "A")).await;

        let res = app
            .post(routes::REGISTRATIONS, &registration_body("Asha Rao", "10", "B"))
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
    }
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn registrations_are_listed_newest_first() {
        let app = TestApp::spawn().await;
        let first = app.register(&registration_body("A", "8", "A")).await;
        let second = app.register(&registration_body("B", "9", "B")).await;
        let third = app.register(&registration_body("C", "11", "C")).await;

        let res = app.get(routes::REGISTRATIONS).await;

        assert_eq!(res.status, 200);
        let items = res.body.as_array().unwrap();
        let ids: Vec<i64> = items.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![third, second, first]);

        let timestamps: Vec<chrono::DateTime<chrono::Utc>> = items
            .iter()
            .map(|r| r["createdAt"].as_str().unwrap().parse().unwrap())
            .collect();
        assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::REGISTRATIONS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }

    #[tokio::test]
    async fn single_registration_can_be_fetched() {
        let app = TestApp::spawn().await;
        let id = app.register(&registration_body("Asha Rao", "10", "A")).await;

        let res = app.get(&routes::registration(id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["studentName"], "Asha Rao");

        let missing = app.get(&routes::registration(id + 100)).await;
        assert_eq!(missing.status, 404);
        assert_eq!(missing.body["code"], "NOT_FOUND");
    }
}

mod status {
    use super::*;

    #[tokio::test]
    async fn status_can_move_between_any_values() {
        let app = TestApp::spawn().await;
        let id = app.register(&registration_body("Asha Rao", "10", "A")).await;

        for status in ["confirmed", "rejected", "pending", "confirmed"] {
            let res = app
                .patch(&routes::registration_status(id), &json!({"status": status}))
                .await;
            assert_eq!(res.status, 200, "{}", res.text);
            assert_eq!(res.body["status"], status);
            assert_eq!(res.body["studentName"], "Asha Rao");
        }
    }

    #[tokio::test]
    async fn repeating_an_update_is_idempotent() {
        let app = TestApp::spawn().await;
        let id = app.register(&registration_body("Asha Rao", "10", "A")).await;
        let body = json!({"status": "confirmed"});

        let first = app.patch(&routes::registration_status(id), &body).await;
        let second = app.patch(&routes::registration_status(id), &body).await;

        assert_eq!(first.status, 200);
        assert_eq!(first.body, second.body);
    }

    #[tokio::test]
    async fn unknown_status_is_rejected() {
        let app = TestApp::spawn().await;
        let id = app.register(&registration_body("Asha Rao", "10", "A")).await;

        let res = app
            .patch(&routes::registration_status(id), &json!({"status": "approved"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        let unchanged = app.get(&routes::registration(id)).await;
        assert_eq!(unchanged.body["status"], "pending");
    }

    #[tokio::test]
    async fn updating_a_missing_registration_returns_404() {
        let app = TestApp::spawn().await;

        let res = app
            .patch(&routes::registration_status(42), &json!({"status": "confirmed"}))
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn non_numeric_id_returns_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .patch(
                "/api/registrations/abc/status",
                &json!({"status": "confirmed"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn deleted_registration_is_gone_and_second_delete_is_404() {
        let app = TestApp::spawn().await;
        let id = app.register(&registration_body("Asha Rao", "10", "A")).await;

        let res = app.delete(&routes::registration(id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({"success": true}));

        let again = app.delete(&routes::registration(id)).await;
        assert_eq!(again.status, 404);
        assert_eq!(again.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let app = TestApp::spawn().await;
        let first = app.register(&registration_body("A", "8", "A")).await;
        app.delete(&routes::registration(first)).await;

        let second = app.register(&registration_body("B", "8", "A")).await;
        assert!(second > first);
    }
}

mod stats {
    use super::*;

    #[tokio::test]
    async fn stats_follow_every_mutation() {
        let app = TestApp::spawn().await;
        assert_eq!(
            app.get(routes::STATS).await.body,
            json!({"total": 0, "confirmed": 0, "pending": 0, "rejected": 0})
        );

        let a = app.register(&registration_body("A", "8", "A")).await;
        let b = app.register(&registration_body("B", "9", "B")).await;
        let c = app.register(&registration_body("C", "10", "C")).await;
        app.patch(&routes::registration_status(a), &json!({"status": "confirmed"}))
            .await;
        app.patch(&routes::registration_status(b), &json!({"status": "rejected"}))
            .await;

        let res = app.get(routes::STATS).await;
        assert_eq!(res.status, 200);
        assert_eq!(
            res.body,
            json!({"total": 3, "confirmed": 1, "pending": 1, "rejected": 1})
        );

        app.delete(&routes::registration(c)).await;
        assert_eq!(
            app.get(routes::STATS).await.body,
            json!({"total": 2, "confirmed": 1, "pending": 0, "rejected": 1})
        );
    }
}

/// The end-to-end admin workflow: submit, reject a duplicate, confirm, delete.
async fn run_lifecycle(app: &TestApp) {
    let body = json!({
        "studentName": "Asha Rao",
        "grade": "10",
        "division": "A",
        "committee": "unsc",
    });

    let created = app.post(routes::REGISTRATIONS, &body).await;
    assert_eq!(created.status, 201, "{}", created.text);
    assert_eq!(created.body["status"], "pending");
    let id = created.id();

    let duplicate = app.post(routes::REGISTRATIONS, &body).await;
    assert_eq!(duplicate.status, 400);
    assert_eq!(
        app.get(routes::REGISTRATIONS).await.body.as_array().unwrap().len(),
        1
    );

    let confirmed = app
        .patch(&routes::registration_status(id), &json!({"status": "confirmed"}))
        .await;
    assert_eq!(confirmed.status, 200);
    assert_eq!(
        app.get(routes::STATS).await.body,
        json!({"total": 1, "confirmed": 1, "pending": 0, "rejected": 0})
    );

    let deleted = app.delete(&routes::registration(id)).await;
    assert_eq!(deleted.status, 200);
    assert_eq!(deleted.body, json!({"success": true}));
    assert_eq!(app.delete(&routes::registration(id)).await.status, 404);
}

#[tokio::test]
async fn registration_lifecycle_over_memory_store() {
    run_lifecycle(&TestApp::spawn().await).await;
}

#[tokio::test]
async fn registration_lifecycle_over_database_store() {
    run_lifecycle(&TestApp::spawn_with_database().await).await;
}
