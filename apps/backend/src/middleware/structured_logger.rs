use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::trace_ctx::TraceId;

/// One `request_completed` event per request, leveled by status class.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// What gets logged once the response status is known.
struct Completed {
    method: String,
    path: String,
    query: String,
    trace_id: String,
    started: Instant,
}

impl Completed {
    fn from_request(req: &ServiceRequest) -> Self {
        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
            query: req.query_string().to_string(),
            trace_id: TraceId::of(req),
            started: Instant::now(),
        }
    }

    fn emit(&self, status: StatusCode) {
        let Completed {
            method,
            path,
            query,
            trace_id,
            started,
        } = self;
        let code = status.as_u16();
        let duration_ms = started.elapsed().as_millis() as u64;

        match status_class(status) {
            Level::Error => error!(http.method = %method, url.path = %path, url.query = %query, http.status_code = code, duration_ms, trace_id = %trace_id, "request_completed"),
            Level::Warn => warn!(http.method = %method, url.path = %path, url.query = %query, http.status_code = code, duration_ms, trace_id = %trace_id, "request_completed"),
            Level::Info => info!(http.method = %method, url.path = %path, url.query = %query, http.status_code = code, duration_ms, trace_id = %trace_id, "request_completed"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

fn status_class(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::Error
    } else if status.is_client_error() {
        Level::Warn
    } else {
        Level::Info
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let completed = Completed::from_request(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            completed.emit(status);
            result
        })
    }
}
