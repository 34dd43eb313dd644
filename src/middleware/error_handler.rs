use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use super::request_id::request_id;

/// Middleware that logs errors returned by handlers
///
/// Client errors are logged at warn level, server errors at error level.
/// The response body is left as rendered by the error's `ResponseError` impl.
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
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
        let service = self.service.clone();

        Box::pin(async move {
            let result = service.call(req).await;

            match &result {
                Ok(res) => {
                    if let Some(err) = res.response().error() {
                        let request = res.request();
                        log_error(
                            res.status().as_u16(),
                            request.path(),
                            request_id(request).as_deref(),
                            err,
                        );
                    }
                }
                Err(err) => {
                    tracing::error!("Request error: {:?}", err);
                }
            }

            result
        })
    }
}

/// Log a handler error with a level matching its status class
pub fn log_error(status: u16, path: &str, request_id: Option<&str>, err: &Error) {
    let request_id = request_id.unwrap_or("-");

    if status >= 500 {
        tracing::error!(
            status,
            path = %path,
            request_id = %request_id,
            error = %err,
            "Handler failed"
        );
    } else {
        tracing::warn!(
            status,
            path = %path,
            request_id = %request_id,
            error = %err,
            "Handler rejected request"
        );
    }
}
