//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{delete, get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{MemberService, TestimonyService};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{
    ErrorData, FieldErrorDto, InternalErrorResponse, ValidationErrorResponse,
};
use crate::interfaces::http::modules::{
    health, members, request_id::request_id_middleware, testimonials,
};

/// Router-wide state. Each handler extracts its own slice via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub members: members::MemberHandlerState,
    pub testimonials: testimonials::TestimonyHandlerState,
    pub health: health::HealthState,
}

impl FromRef<ApiState> for members::MemberHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        s.members.clone()
    }
}

impl FromRef<ApiState> for testimonials::TestimonyHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        s.testimonials.clone()
    }
}

impl FromRef<ApiState> for health::HealthState {
    fn from_ref(s: &ApiState) -> Self {
        s.health.clone()
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        members::list_members,
        members::delete_member,
        testimonials::create_testimony,
    ),
    components(
        schemas(
            health::HealthResponse,
            health::ComponentHealth,
            members::MemberDto,
            members::MemberPageResponse,
            members::NoMembersResponse,
            members::DeleteMemberResponse,
            testimonials::CreateTestimonyRequest,
            testimonials::CreateTestimonyResponse,
            testimonials::TestimonyDto,
            ErrorData,
            InternalErrorResponse,
            FieldErrorDto,
            ValidationErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Members", description = "Paginated member listing and deletion"),
        (name = "Testimonials", description = "Public testimony submission"),
    ),
    info(
        title = "ONG Service API",
        version = "1.0.0",
        description = "REST API for members and testimonials of the organization",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    page_size: u32,
) -> Router {
    let state = ApiState {
        members: members::MemberHandlerState {
            member_service: Arc::new(MemberService::new(repos.clone(), page_size)),
        },
        testimonials: testimonials::TestimonyHandlerState {
            testimony_service: Arc::new(TestimonyService::new(repos)),
        },
        health: health::HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        },
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .route("/members", get(members::list_members))
        .route("/members/{id}", delete(members::delete_member))
        .route("/testimonials", post(testimonials::create_testimony))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};
    use sea_orm::EntityTrait;
    use serde_json::{json, Value};
    use tower::Service;

    use crate::infrastructure::database::entities::testimony;
    use crate::infrastructure::database::repositories::member_repository::tests::seed_members;
    use crate::infrastructure::database::test_database;
    use crate::infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;

    fn app_for(db: DatabaseConnection, page_size: u32) -> Router {
        let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        create_api_router(repos, db, page_size)
    }

    async fn app_with_members(count: usize, page_size: u32) -> (Router, DatabaseConnection) {
        let db = test_database().await;
        seed_members(&db, count).await;
        (app_for(db.clone(), page_size), db)
    }

    async fn send(app: Router, req: Request<Body>) -> Response<Body> {
        let mut svc = app.into_service();
        svc.call(req).await.unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn delete_req(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(resp: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn empty_members_table_returns_204() {
        let (app, _db) = app_with_members(0, 10).await;
        let resp = send(app, get_req("/members")).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn second_page_carries_links() {
        let (app, _db) = app_with_members(12, 5).await;
        let resp = send(app, get_req("/members?page=2")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        let ids: Vec<i64> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10]);
        assert_eq!(body["prev"], "/members?page=1");
        assert_eq!(body["next"], "/members?page=3");
    }

    #[tokio::test]
    async fn links_use_host_header_when_present() {
        let (app, _db) = app_with_members(12, 5).await;
        let req = Request::builder()
            .uri("/members?page=3")
            .header("host", "ong.example.org")
            .body(Body::empty())
            .unwrap();

        let body = json_body(send(app, req).await).await;
        assert_eq!(body["prev"], "http://ong.example.org/members?page=2");
        assert_eq!(body["next"], Value::Null);
        assert_eq!(body["results"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalid_page_falls_back_to_first() {
        let (app, _db) = app_with_members(3, 2).await;
        let body = json_body(send(app, get_req("/members?page=abc")).await).await;

        assert_eq!(body["prev"], Value::Null);
        assert_eq!(body["next"], "/members?page=2");
    }

    #[tokio::test]
    async fn page_past_the_end_returns_204() {
        let (app, _db) = app_with_members(3, 2).await;
        let resp = send(app, get_req("/members?page=9")).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn delete_existing_member() {
        let (app, _db) = app_with_members(10, 10).await;
        let resp = send(app.clone(), delete_req("/members/7")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        assert_eq!(body["del"], true);
        assert_eq!(body["message"], "member with id 7, was deleted successfully");

        let resp = send(app, get_req("/members")).await;
        let body = json_body(resp).await;
        assert_eq!(body["results"].as_array().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn delete_missing_member_returns_404() {
        let (app, _db) = app_with_members(10, 10).await;
        let resp = send(app, delete_req("/members/99")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = json_body(resp).await;
        assert_eq!(body["del"], false);
        assert_eq!(body["message"], "the id 99 does not correspond to any member");
    }

    #[tokio::test]
    async fn delete_non_numeric_id_returns_404() {
        let (app, _db) = app_with_members(1, 10).await;
        let resp = send(app, delete_req("/members/abc")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = json_body(resp).await;
        assert_eq!(body["message"], "the id abc does not correspond to any member");
    }

    #[tokio::test]
    async fn storage_failure_hides_details() {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        let app = app_for(db, 10);

        let resp = send(app.clone(), get_req("/members")).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(resp).await;
        assert_eq!(body["message"], "internal server error");
        assert_eq!(body["data"]["code"], "database_error");

        let resp = send(app, delete_req("/members/1")).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(resp).await;
        assert_eq!(body["del"], false);
        assert_eq!(body["data"]["code"], "database_error");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn short_name_is_rejected_and_not_stored() {
        let db = test_database().await;
        let app = app_for(db.clone(), 10);

        let resp = send(
            app,
            post_json("/testimonials", json!({"name": "Bob", "content": "hi"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_body(resp).await;
        assert_eq!(body["ok"], false);
        assert_eq!(
            body["errors"],
            json!([{"field": "name", "message": "String must be more than 4 characters"}])
        );

        let stored = testimony::Entity::find().all(&db).await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn valid_testimony_is_created() {
        let db = test_database().await;
        let app = app_for(db.clone(), 10);

        let resp = send(
            app,
            post_json(
                "/testimonials",
                json!({"name": "Roberto", "content": "Great service"}),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = json_body(resp).await;
        assert_eq!(body["ok"], true);
        assert_eq!(body["msg"], "testimony created");
        assert_eq!(body["data"]["name"], "Roberto");
        assert_eq!(body["data"]["content"], "Great service");

        let stored = testimony::Entity::find().all(&db).await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn malformed_testimony_json_returns_400() {
        let db = test_database().await;
        let req = Request::builder()
            .method("POST")
            .uri("/testimonials")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let resp = send(app_for(db, 10), req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(body["errors"][0]["field"], "body");
    }

    #[tokio::test]
    async fn missing_fields_are_reported_in_rule_order() {
        let db = test_database().await;
        let resp = send(app_for(db, 10), post_json("/testimonials", json!({}))).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_body(resp).await;
        assert_eq!(
            body["errors"],
            json!([
                {"field": "name", "message": "Input required"},
                {"field": "content", "message": "Input required"}
            ])
        );
    }

    #[tokio::test]
    async fn testimony_storage_failure_returns_500() {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        let resp = send(
            app_for(db, 10),
            post_json(
                "/testimonials",
                json!({"name": "Roberto", "content": "Great service"}),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(resp).await;
        assert_eq!(
            body,
            json!({"message": "internal server error", "data": {"code": "database_error"}})
        );
    }

    #[tokio::test]
    async fn health_degrades_when_database_is_closed() {
        let db = test_database().await;
        let app = app_for(db.clone(), 10);
        db.close().await.unwrap();

        let resp = send(app, get_req("/health")).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = json_body(resp).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["database"]["status"], "error");
        assert_eq!(body["database"]["latency_ms"], Value::Null);
    }

    #[tokio::test]
    async fn health_reports_database() {
        let db = test_database().await;
        let resp = send(app_for(db, 10), get_req("/health")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn openapi_document_lists_routes() {
        let db = test_database().await;
        let resp = send(app_for(db, 10), get_req("/api-doc/openapi.json")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        assert!(body["paths"]["/members"].is_object());
        assert!(body["paths"]["/members/{id}"].is_object());
        assert!(body["paths"]["/testimonials"].is_object());
    }
}
