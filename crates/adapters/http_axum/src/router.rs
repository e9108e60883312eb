//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use hoodbase_app::ports::NeighborhoodRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts API routes under `/api/v1` next to a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: NeighborhoodRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use hoodbase_app::services::neighborhood_service::NeighborhoodService;
    use hoodbase_domain::error::HoodbaseError;
    use hoodbase_domain::id::NeighborhoodId;
    use hoodbase_domain::neighborhood::Neighborhood;
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct InMemoryRepo {
        store: Mutex<Vec<Neighborhood>>,
    }

    impl NeighborhoodRepository for InMemoryRepo {
        async fn read_all(&self) -> Result<Vec<Neighborhood>, HoodbaseError> {
            Ok(self.store.lock().unwrap().clone())
        }
        async fn read_page(
            &self,
            offset: usize,
            limit: usize,
        ) -> Result<Vec<Neighborhood>, HoodbaseError> {
            let store = self.store.lock().unwrap();
            Ok(store.iter().skip(offset).take(limit).cloned().collect())
        }
        async fn find_by_id(
            &self,
            id: NeighborhoodId,
        ) -> Result<Option<Neighborhood>, HoodbaseError> {
            Ok(self.store.lock().unwrap().iter().find(|n| n.id == id).cloned())
        }
        async fn add(&self, neighborhood: Neighborhood) -> Result<Neighborhood, HoodbaseError> {
            self.store.lock().unwrap().push(neighborhood.clone());
            Ok(neighborhood)
        }
        async fn delete(&self, neighborhood: Neighborhood) -> Result<(), HoodbaseError> {
            self.store
                .lock()
                .unwrap()
                .retain(|n| n.id != neighborhood.id);
            Ok(())
        }
    }

    struct FailingRepo;

    impl NeighborhoodRepository for FailingRepo {
        async fn read_all(&self) -> Result<Vec<Neighborhood>, HoodbaseError> {
            Err(HoodbaseError::Storage("disk on fire".into()))
        }
        async fn read_page(
            &self,
            _offset: usize,
            _limit: usize,
        ) -> Result<Vec<Neighborhood>, HoodbaseError> {
            Err(HoodbaseError::Storage("disk on fire".into()))
        }
        async fn find_by_id(
            &self,
            _id: NeighborhoodId,
        ) -> Result<Option<Neighborhood>, HoodbaseError> {
            Err(HoodbaseError::Storage("disk on fire".into()))
        }
        async fn add(&self, _neighborhood: Neighborhood) -> Result<Neighborhood, HoodbaseError> {
            Err(HoodbaseError::Storage("disk on fire".into()))
        }
        async fn delete(&self, _neighborhood: Neighborhood) -> Result<(), HoodbaseError> {
            Err(HoodbaseError::Storage("disk on fire".into()))
        }
    }

    fn seeded(names: &[&str]) -> (Router, Vec<NeighborhoodId>) {
        let repo = InMemoryRepo::default();
        let mut ids = Vec::new();
        for name in names {
            let hood = Neighborhood {
                id: NeighborhoodId::new(),
                name_district: (*name).to_string(),
                value_district_m2: Decimal::from(1000),
            };
            ids.push(hood.id);
            repo.store.lock().unwrap().push(hood);
        }
        let app = build(AppState::new(NeighborhoodService::new(repo)));
        (app, ids)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (app, _) = seeded(&[]);
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_with_default_page_and_size() {
        let (app, _) = seeded(&["A", "B", "C"]);

        let (status, body) = send(app, get("/api/v1/neighborhood/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], 1);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["neighborhoods"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_list_without_trailing_slash() {
        let (app, _) = seeded(&["A"]);
        let (status, _) = send(app, get("/api/v1/neighborhood")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_fall_back_to_defaults_on_invalid_params() {
        let (app, _) = seeded(&["A", "B"]);

        let (status, body) = send(app, get("/api/v1/neighborhood/?page=abc&size=null")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], 1);
        assert_eq!(body["totalPages"], 1);
    }

    #[tokio::test]
    async fn should_return_requested_page() {
        let (app, _) = seeded(&["A", "B", "C", "D", "E"]);

        let (status, body) = send(app, get("/api/v1/neighborhood/?page=2&size=2")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], 2);
        assert_eq!(body["totalPages"], 3);
        let names: Vec<_> = body["neighborhoods"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["nameDistrict"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["C", "D"]);
    }

    #[tokio::test]
    async fn should_get_neighborhood_by_id() {
        let (app, ids) = seeded(&["São Paulo"]);

        let (status, body) = send(app, get(&format!("/api/v1/neighborhood/{}", ids[0]))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], ids[0].to_string());
        assert_eq!(body["nameDistrict"], "São Paulo");
        assert_eq!(body["valueDistrictM2"].as_f64(), Some(1000.0));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let (app, _) = seeded(&[]);

        let (status, body) = send(
            app,
            get(&format!("/api/v1/neighborhood/{}", NeighborhoodId::new())),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Bairro não encontrado");
    }

    #[tokio::test]
    async fn should_return_bad_request_for_malformed_id() {
        let (app, _) = seeded(&[]);
        let (status, _) = send(app, get("/api/v1/neighborhood/not-a-uuid")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_create_neighborhood() {
        let (app, _) = seeded(&[]);

        let (status, body) = send(
            app,
            post_json(
                "/api/v1/neighborhood/",
                &json!({"nameDistrict": "Vila Olímpia", "valueDistrictM2": 45000}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["nameDistrict"], "Vila Olímpia");
        assert!(body["id"].as_str().unwrap().parse::<NeighborhoodId>().is_ok());
    }

    #[tokio::test]
    async fn should_return_bad_request_with_message_on_validation_error() {
        let (app, _) = seeded(&[]);

        let (status, body) = send(
            app,
            post_json(
                "/api/v1/neighborhood/",
                &json!({"nameDistrict": "Bairro Fake", "valueDistrictM2": null}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "O valor do metro quadrado do bairro não pode ficar vazio!"
        );
    }

    #[tokio::test]
    async fn should_treat_null_name_as_empty() {
        let (app, _) = seeded(&[]);

        let (status, body) = send(
            app,
            post_json(
                "/api/v1/neighborhood/",
                &json!({"nameDistrict": null, "valueDistrictM2": 100}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "O bairro não pode ficar vazio!");
    }

    #[tokio::test]
    async fn should_report_price_beyond_decimal_range_as_too_long() {
        let (app, _) = seeded(&[]);

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/neighborhood/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"nameDistrict":"X","valueDistrictM2":1e30}"#))
            .unwrap();
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "O valor do metro quadrado não pode exceder 13 digitos!"
        );
    }

    #[tokio::test]
    async fn should_answer_json_bad_request_when_body_has_wrong_shape() {
        let (app, _) = seeded(&[]);

        let (status, body) = send(
            app.clone(),
            post_json(
                "/api/v1/neighborhood/",
                &json!({"nameDistrict": "X", "valueDistrictM2": true}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/neighborhood/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (_, body) = send(app, get("/api/v1/neighborhood/")).await;
        assert!(body["neighborhoods"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_conflict_on_duplicate_name() {
        let (app, _) = seeded(&["O Clone"]);

        let (status, body) = send(
            app,
            post_json(
                "/api/v1/neighborhood/",
                &json!({"nameDistrict": "O Clone", "valueDistrictM2": 20000.0}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "O Clone já está cadastrado na base de dados");
    }

    #[tokio::test]
    async fn should_delete_neighborhood() {
        let (app, ids) = seeded(&["São Paulo"]);
        let uri = format!("/api/v1/neighborhood/{}", ids[0]);

        let (status, _) = send(app.clone(), delete(&uri)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(app, get(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_unknown_id() {
        let (app, _) = seeded(&["São Paulo"]);

        let (status, _) = send(
            app.clone(),
            delete(&format!("/api/v1/neighborhood/{}", NeighborhoodId::new())),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(app, get("/api/v1/neighborhood/")).await;
        assert_eq!(body["neighborhoods"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_hide_storage_error_details() {
        let app = build(AppState::new(NeighborhoodService::new(FailingRepo)));

        let (status, body) = send(app, get("/api/v1/neighborhood/")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
    }
}
