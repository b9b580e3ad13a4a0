//! Access control middleware for the admin gateway.
//!
//! Wrap this around the protected scope. Every request through it must carry a valid access token
//! in the `X-Access-Token` header, and the token's role must be `admin`. Requests that pass have
//! their [`JwtClaims`] stored in the request extensions, where handlers can extract them.

use std::{pin::Pin, rc::Rc};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
    HttpMessage,
};
use futures::{
    future::{ok, Ready},
    Future,
};
use jwt_compact::alg::Hs256Key;
use log::debug;

use crate::{
    auth::{validate_access_token, ACCESS_TOKEN_HEADER},
    config::AuthConfig,
    errors::{AuthError, ServerError},
};

pub struct AclMiddlewareFactory {
    key: Rc<Hs256Key>,
}

impl AclMiddlewareFactory {
    pub fn new(config: &AuthConfig) -> Self {
        let key = Hs256Key::new(config.jwt_secret.reveal().as_bytes());
        AclMiddlewareFactory { key: Rc::new(key) }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AclMiddlewareFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<B>;
    type Transform = AclMiddlewareService<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AclMiddlewareService { key: Rc::clone(&self.key), service: Rc::new(service) })
    }
}

pub struct AclMiddlewareService<S> {
    key: Rc<Hs256Key>,
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AclMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    type Response = ServiceResponse<B>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let key = Rc::clone(&self.key);
        Box::pin(async move {
            let token = req
                .headers()
                .get(ACCESS_TOKEN_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .unwrap_or_default();
            if token.is_empty() {
                return Err(ServerError::from(AuthError::EmptyToken).into());
            }
            let claims = validate_access_token(token, &key).map_err(ServerError::from)?;
            if !claims.is_admin() {
                debug!("🔐️ {} presented a valid token without the admin role", claims.email);
                return Err(ServerError::from(AuthError::InsufficientPermissions).into());
            }
            req.extensions_mut().insert(claims);
            service.call(req).await
        })
    }
}
