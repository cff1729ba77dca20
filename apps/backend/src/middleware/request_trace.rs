//! Per-request trace id.
//!
//! A fresh UUID v4 is minted for every request. Handlers and error
//! rendering read it through [`trace_ctx`]; `TraceSpan` reads the
//! [`TraceId`] extension. The id goes back to the caller as
//! `x-request-id` on every response, success or failure.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;
use uuid::Uuid;

use crate::trace_ctx::{self, TraceId};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn mint() -> String {
    Uuid::new_v4().to_string()
}

fn stamp_request_id(headers: &mut HeaderMap, trace_id: &str) {
    match HeaderValue::from_str(trace_id) {
        Ok(value) => {
            headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
        Err(_) => warn!(trace_id, "trace id is not a valid header value"),
    }
}

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = mint();
        req.extensions_mut().insert(TraceId(trace_id.clone()));

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = trace_ctx::with_trace_id(trace_id.clone(), fut).await?;
            stamp_request_id(res.headers_mut(), &trace_id);
            Ok(res)
        })
    }
}
