use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use spingolf_backend::db::txn::SharedTxn;
use spingolf_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use spingolf_backend::routes;
use spingolf_backend::state::app_state::AppState;
use spingolf_backend::AppError;

use super::test_middleware::TestTxnInjector;

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    state: AppState,
    shared_txn: Option<SharedTxn>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            shared_txn: None,
        }
    }

    /// Route every request's `with_txn` through this transaction.
    pub fn with_shared_txn(mut self, shared: SharedTxn) -> Self {
        self.shared_txn = Some(shared);
        self
    }

    /// Build the test service with the production routes and middleware order.
    pub async fn build(
        self,
    ) -> Result<impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>, AppError>
    {
        let data = web::Data::new(self.state);

        let service = test::init_service(
            App::new()
                .wrap(TestTxnInjector::new(self.shared_txn))
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(routes::configure),
        )
        .await;

        Ok(service)
    }
}

/// Create a new test app builder with the given AppState
pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
