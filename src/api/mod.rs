// API layer - HTTP endpoints
pub mod auth;
pub mod health;
pub mod trails;
pub mod users;

use std::sync::Arc;

use poem::middleware::Tracing;
use poem::{Endpoint, EndpointExt, Request, Route};
use poem_openapi::auth::Bearer;
use poem_openapi::error::{AuthorizationError, ParseRequestPayloadError};
use poem_openapi::{OpenApiService, SecurityScheme};

pub use auth::AuthApi;
pub use health::HealthApi;
pub use trails::TrailApi;
pub use users::UserApi;

use crate::app_data::AppData;
use crate::errors::{InternalError, RequestError};
use crate::providers::TokenProvider;
use crate::types::internal::context::RequestContext;

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// Shared behaviour for endpoint groups that accept a bearer token
pub trait Api {
    fn token_provider(&self) -> &TokenProvider;

    /// Validate the bearer token and build the caller's context
    fn authenticate(&self, req: &Request, auth: &BearerAuth) -> Result<RequestContext, InternalError> {
        RequestContext::authenticate(req, &auth.0.token, self.token_provider())
    }
}

/// Compose the full application: the OpenAPI service under `/api` and
/// Swagger UI under `/swagger`
///
/// Missing bearer tokens and unparsable bodies are answered with the same
/// JSON error body the handlers use.
pub fn build_app(app_data: Arc<AppData>, server_url: &str) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (
            HealthApi::new(app_data.db.clone()),
            AuthApi::new(app_data.clone()),
            UserApi::new(app_data.clone()),
            TrailApi::new(app_data),
        ),
        "Trail Catalog API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .catch_error(|err: AuthorizationError| async move {
            RequestError::from_authorization_error(err)
        })
        .catch_error(|err: ParseRequestPayloadError| async move {
            RequestError::from_payload_error(err)
        })
        .with(Tracing)
}
