use std::net::IpAddr;

use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::providers::TokenProvider;
use crate::types::internal::auth::Claims;
use poem::Request;

use super::request_id::RequestId;

/// Request context that flows through all layers
///
/// Contains contextual information about the current request that is needed
/// for logging and authorization across API, coordinator, and store layers.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<IpAddr>,

    /// Unique identifier for this request (for tracing across layers)
    pub request_id: RequestId,

    /// Whether the request is authenticated (JWT validated successfully)
    pub authenticated: bool,

    /// Full JWT claims if authenticated
    pub claims: Option<Claims>,

    /// Caller identity (user id once authenticated)
    pub actor_id: String,
}

impl RequestContext {
    /// Create an unauthenticated context with a fresh request id
    pub fn new() -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::new(),
            authenticated: false,
            claims: None,
            actor_id: "unknown".to_owned(),
        }
    }

    /// Create an unauthenticated context for a public endpoint
    pub fn from_request(req: &Request) -> Self {
        let ctx = Self::new();
        match Self::extract_ip_address(req) {
            Some(ip) => ctx.with_ip_address(ip),
            None => ctx,
        }
    }

    /// Resolve a bearer token into an authenticated context
    ///
    /// This is the guard every private endpoint calls before touching a
    /// coordinator. The token subject becomes the caller identity.
    ///
    /// # Errors
    /// * `CredentialError::InvalidToken` - malformed token or bad signature
    /// * `CredentialError::ExpiredToken` - signature valid but token expired
    pub fn authenticate(
        req: &Request,
        token: &str,
        token_provider: &TokenProvider,
    ) -> Result<Self, InternalError> {
        let ctx = Self::from_request(req);

        let claims = token_provider.validate_jwt(token).inspect_err(|err| {
            tracing::debug!(request_id = %ctx.request_id, "Rejected bearer token: {}", err);
        })?;

        let actor_id = claims.sub.clone();
        let ctx = ctx.with_auth(claims).with_actor_id(actor_id);

        tracing::trace!("Request context created: {:?}", ctx);

        Ok(ctx)
    }

    /// The authenticated caller's user id
    pub fn caller_id(&self) -> Result<&str, InternalError> {
        match (&self.claims, self.authenticated) {
            (Some(claims), true) => Ok(claims.sub.as_str()),
            _ => Err(CredentialError::invalid_token("request is not authenticated").into()),
        }
    }

    /// Extract IP address from request headers
    ///
    /// Checks X-Forwarded-For, X-Real-IP, and falls back to remote address.
    fn extract_ip_address(req: &Request) -> Option<IpAddr> {
        // Check X-Forwarded-For header (proxy/load balancer)
        if let Some(forwarded) = req.header("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                return ip.trim().parse().ok();
            }
        }

        // Check X-Real-IP header (nginx)
        if let Some(real_ip) = req.header("X-Real-IP") {
            return real_ip.parse().ok();
        }

        req.remote_addr().as_socket_addr().map(|addr| addr.ip())
    }

    /// Set the ip_address
    pub fn with_ip_address(mut self, ip_address: IpAddr) -> Self {
        self.ip_address = Some(ip_address);
        self
    }

    /// Set authentication state with claims
    pub fn with_auth(mut self, claims: Claims) -> Self {
        self.authenticated = true;
        self.claims = Some(claims);
        self
    }

    /// Set the actor_id
    pub fn with_actor_id(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = actor_id.into();
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
