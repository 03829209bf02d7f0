use actix_cors::Cors;
use actix_web::http::{Method, header};

/// CORS policy for browser clients served from another origin
///
/// `*` in `allowed_origins` allows any origin. Only the methods the API
/// exposes are allowed.
pub fn cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods([Method::GET, Method::POST])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::job::{JobService, handlers::job_config};
    use crate::db::MemoryJobRepository;
    use actix_web::{App, http::StatusCode, test, web::Data};
    use std::sync::Arc;

    const CLIENT_ORIGIN: &str = "http://localhost:3000";

    macro_rules! app {
        ($origins:expr) => {
            test::init_service(
                App::new()
                    .wrap(cors(&$origins))
                    .app_data(Data::new(JobService::new(Arc::new(MemoryJobRepository::new()))))
                    .configure(job_config),
            )
            .await
        };
    }

    fn allow_origin<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<String> {
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[actix_web::test]
    async fn preflight_from_allowed_origin_succeeds() {
        let app = app!([CLIENT_ORIGIN.to_string()]);

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/job/")
            .insert_header((header::ORIGIN, CLIENT_ORIGIN))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(allow_origin(&resp).as_deref(), Some(CLIENT_ORIGIN));
    }

    #[actix_web::test]
    async fn list_response_carries_allow_origin() {
        let app = app!([CLIENT_ORIGIN.to_string()]);

        let req = test::TestRequest::get()
            .uri("/api/job/")
            .insert_header((header::ORIGIN, CLIENT_ORIGIN))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(allow_origin(&resp).as_deref(), Some(CLIENT_ORIGIN));
    }

    #[actix_web::test]
    async fn wildcard_allows_any_origin() {
        let app = app!(["*".to_string()]);

        let req = test::TestRequest::get()
            .uri("/api/job/")
            .insert_header((header::ORIGIN, "https://elsewhere.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(allow_origin(&resp).is_some());
    }
}
