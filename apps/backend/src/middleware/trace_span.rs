//! Wraps each request in a `request` span so handler logs carry the trace
//! id, method, and matched route. The response status is recorded on the
//! span when the handler finishes.
//!
//! Needs the `TraceId` extension, so it must sit inside `RequestTrace`
//! (registered with `.wrap` before it).

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use tracing::{field, info_span, Instrument};

use crate::trace_ctx::TraceId;

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // `/api/cities/{id}` rather than the concrete id keeps span cardinality low.
        let route = req
            .match_pattern()
            .unwrap_or_else(|| req.path().to_string());
        let span = info_span!(
            "request",
            trace_id = %TraceId::of(&req),
            method = %req.method(),
            route = %route,
            status = field::Empty,
        );

        let fut = self.service.call(req).instrument(span.clone());
        Box::pin(async move {
            let result = fut.await;
            if let Ok(res) = &result {
                span.record("status", res.status().as_u16());
            }
            result
        })
    }
}
