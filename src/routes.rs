use crate::api::{self, attendance, employee};
use actix_cors::Cors;
use actix_web::web;

/// Any origin, method and header, credentials allowed. Demo posture for the bundled frontend.
pub fn cors() -> Cors {
    Cors::permissive()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(api::json_config())
        .app_data(api::path_config())
        .service(
            web::scope("/employees")
                // /employees
                .service(
                    web::resource("")
                        .route(web::get().to(employee::list_employees))
                        .route(web::post().to(employee::create_employee)),
                )
                // /employees/{id}
                .service(
                    web::resource("/{id}").route(web::delete().to(employee::delete_employee)),
                )
                // /employees/{id}/attendance
                .service(
                    web::resource("/{id}/attendance")
                        .route(web::get().to(attendance::list_attendance))
                        .route(web::post().to(attendance::mark_attendance)),
                ),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;
    use crate::store::{RecordStore, SqliteStore};
    use actix_web::{
        App,
        http::{StatusCode, header},
        middleware::NormalizePath,
        test,
        web::Data,
    };
    use serde_json::{Value, json};
    use std::sync::Arc;

    macro_rules! app {
        () => {{
            let store: Arc<dyn RecordStore> = Arc::new(SqliteStore::new(memory_pool().await));
            test::init_service(
                App::new()
                    .wrap(cors())
                    .wrap(NormalizePath::trim())
                    .app_data(Data::from(store))
                    .configure(configure),
            )
            .await
        }};
    }

    fn ann() -> Value {
        json!({
            "employee_id": "E1",
            "full_name": "Ann",
            "email": "ann@x.com",
            "department": "Eng"
        })
    }

    #[actix_web::test]
    async fn example_scenario() {
        let app = app!();

        let req = test::TestRequest::post().uri("/employees").set_json(ann()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let id = created["id"].as_i64().unwrap();
        assert_eq!(
            created,
            json!({
                "id": id,
                "employee_id": "E1",
                "full_name": "Ann",
                "email": "ann@x.com",
                "department": "Eng"
            })
        );

        let uri = format!("/employees/{id}/attendance");
        let req = test::TestRequest::post()
            .uri(&uri)
            .set_json(json!({ "date": "2024-01-01", "status": "Present" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let marked: Value = test::read_body_json(resp).await;
        assert_eq!(marked["date"], "2024-01-01");
        assert_eq!(marked["status"], "Present");
        assert_eq!(marked.as_object().unwrap().len(), 3);

        let req = test::TestRequest::get().uri(&uri).to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, json!([marked]));

        let req = test::TestRequest::delete()
            .uri(&format!("/employees/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "detail": "Employee not found" }));
    }

    #[actix_web::test]
    async fn list_employees_starts_empty() {
        let app = app!();

        let req = test::TestRequest::get().uri("/employees").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn duplicate_employee_id_and_email_are_400() {
        let app = app!();
        let req = test::TestRequest::post().uri("/employees").set_json(ann()).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let same_id = json!({
            "employee_id": "E1",
            "full_name": "Someone Else",
            "email": "else@x.com",
            "department": "Ops"
        });
        let req = test::TestRequest::post().uri("/employees").set_json(same_id).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Employee ID already exists");

        let same_email = json!({
            "employee_id": "E2",
            "full_name": "Ann Again",
            "email": "ann@x.com",
            "department": "Eng"
        });
        let req = test::TestRequest::post().uri("/employees").set_json(same_email).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Email already exists");

        let req = test::TestRequest::get().uri("/employees").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn malformed_employee_payloads_are_422() {
        let app = app!();

        let bad_email = json!({
            "employee_id": "E1",
            "full_name": "Ann",
            "email": "not-an-email",
            "department": "Eng"
        });
        let req = test::TestRequest::post().uri("/employees").set_json(bad_email).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "value is not a valid email address");

        let missing_field = json!({ "employee_id": "E1", "full_name": "Ann" });
        let req = test::TestRequest::post().uri("/employees").set_json(missing_field).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].as_str().unwrap().contains("email"));
    }

    #[actix_web::test]
    async fn delete_unknown_employee_is_404() {
        let app = app!();

        let req = test::TestRequest::delete().uri("/employees/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/employees/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn attendance_status_and_owner_checks() {
        let app = app!();
        let req = test::TestRequest::post().uri("/employees").set_json(ann()).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/employees/{}/attendance", created["id"]);

        let req = test::TestRequest::post()
            .uri(&uri)
            .set_json(json!({ "date": "2024-01-02", "status": "Late" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Status must be Present or Absent");

        let req = test::TestRequest::post()
            .uri(&uri)
            .set_json(json!({ "date": "2024-01-02", "status": "Absent" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/employees/999/attendance")
            .set_json(json!({ "date": "2024-01-02", "status": "Late" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri(&uri)
            .set_json(json!({ "date": "02/01/2024", "status": "Present" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let req = test::TestRequest::get().uri(&uri).to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["status"], "Absent");
    }

    #[actix_web::test]
    async fn list_attendance_is_empty_for_new_employee() {
        let app = app!();
        let req = test::TestRequest::post().uri("/employees").set_json(ann()).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/employees/{}/attendance/", created["id"]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn cross_origin_requests_are_allowed() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/employees")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }
}
