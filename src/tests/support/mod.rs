pub mod app_state_builder;
pub mod auth_helper;
pub mod fixtures;
pub mod stubs;

/// Initialises a test service with `state`, a test `SessionVerifier` and the
/// listed handlers.
macro_rules! admin_test_app {
    ($state:expr, $($handler:expr),+ $(,)?) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state)
                .app_data(actix_web::web::Data::new(
                    $crate::tests::support::auth_helper::session_verifier(),
                ))
                $(.service($handler))+,
        )
    };
}

pub(crate) use admin_test_app;
