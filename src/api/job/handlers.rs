use actix_web::{
    HttpResponse, get, post,
    web::{Data, ServiceConfig, scope},
};
use actix_web_validator::Json;

use super::dto::CreateJobRequest;
use super::service::{JobService, ServiceError};

/// List every job
#[get("/")]
async fn list_jobs(service: Data<JobService>) -> Result<HttpResponse, ServiceError> {
    let jobs = service.list_jobs().await?;
    Ok(HttpResponse::Ok().json(jobs))
}

/// Create a job; responds with the stored record
#[post("/")]
async fn create_job(
    service: Data<JobService>,
    job: Json<CreateJobRequest>,
) -> Result<HttpResponse, ServiceError> {
    let job = service.create_job(job.into_inner()).await?;
    Ok(HttpResponse::Created().json(job))
}

pub fn job_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api/job")
            .service(list_jobs)
            .service(create_job),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::job::models::{Job, JobStatus};
    use crate::api::validation;
    use crate::db::MemoryJobRepository;
    use actix_web::{App, http::StatusCode, test};
    use std::sync::Arc;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(Data::new(JobService::new(Arc::new(MemoryJobRepository::new()))))
                    .app_data(validation::json_config(1024 * 1024))
                    .configure(job_config),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn list_is_empty_initially() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/job/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let jobs: Vec<Job> = test::read_body_json(resp).await;
        assert!(jobs.is_empty());
    }

    #[actix_web::test]
    async fn create_without_status_returns_unassigned() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/job/")
            .set_json(serde_json::json!({"name": "Deploy", "message": "Deploy service X"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({
                "id": 1,
                "status": "unassigned",
                "name": "Deploy",
                "message": "Deploy service X"
            })
        );
    }

    #[actix_web::test]
    async fn created_jobs_are_listed_in_order() {
        let app = app!();

        for (name, status) in [("A", "open"), ("B", "completed"), ("C", "unassigned")] {
            let req = test::TestRequest::post()
                .uri("/api/job/")
                .set_json(serde_json::json!({"name": name, "message": "m", "status": status}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/job/").to_request();
        let jobs: Vec<Job> = test::call_and_read_body_json(&app, req).await;

        let summary: Vec<_> = jobs.iter().map(|j| (j.id, j.name.as_str(), j.status)).collect();
        assert_eq!(
            summary,
            [
                (1, "A", JobStatus::Open),
                (2, "B", JobStatus::Completed),
                (3, "C", JobStatus::Unassigned),
            ]
        );
    }

    #[actix_web::test]
    async fn invalid_status_is_rejected() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/job/")
            .set_json(serde_json::json!({"name": "A", "message": "m", "status": "archived"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["fields"].get("status").is_some());

        let req = test::TestRequest::get().uri("/api/job/").to_request();
        let jobs: Vec<Job> = test::call_and_read_body_json(&app, req).await;
        assert!(jobs.is_empty());
    }

    #[actix_web::test]
    async fn non_string_status_is_reported_under_status() {
        let app = app!();

        for status in [serde_json::json!(5), serde_json::json!(true)] {
            let req = test::TestRequest::post()
                .uri("/api/job/")
                .set_json(serde_json::json!({"name": "A", "message": "m", "status": status}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert!(body["fields"]["status"]["errors"].is_array(), "{}", body);
        }
    }

    #[actix_web::test]
    async fn length_violations_are_reported_per_field() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/job/")
            .set_json(serde_json::json!({"name": "", "message": "m".repeat(256)}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation failed");
        assert!(body["fields"]["name"]["errors"].is_array());
        assert!(body["fields"]["message"]["errors"].is_array());
    }

    #[actix_web::test]
    async fn missing_field_is_rejected() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/job/")
            .set_json(serde_json::json!({"message": "no name"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["fields"]["name"]["errors"].is_array());
    }
}
