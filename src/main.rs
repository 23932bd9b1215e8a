pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{
    about, auth, contact, dashboard, hero, media, newsletter, project, recognition, resume,
    social_link, solution, stats, technology, testimonial,
};

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::about::{
    adapter::outgoing::AboutRepositoryPostgres,
    application::{ports::incoming::use_cases::AboutUseCase, services::AboutService},
};
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2Verifier;
use crate::auth::adapter::outgoing::session_revocation_redis::RedisSessionRevocationRepository;
use crate::auth::application::ports::outgoing::{SessionRevocationRepository, TokenProvider};
use crate::auth::application::services::SessionVerifier;
use crate::auth::application::use_cases::{
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    logout_admin::{ILogoutAdminUseCase, LogoutAdminUseCase},
};
use crate::contact::{
    adapter::outgoing::ContactRepositoryPostgres,
    application::{ports::incoming::use_cases::ContactUseCase, services::ContactService},
};
use crate::dashboard::{
    adapter::outgoing::OverviewQueryPostgres,
    application::{ports::incoming::use_cases::DashboardUseCase, services::DashboardService},
};
use crate::hero::{
    adapter::outgoing::HeroRepositoryPostgres,
    application::{ports::incoming::use_cases::HeroUseCase, services::HeroService},
};
use crate::media::{
    adapter::outgoing::cloudinary::CloudinaryStorage,
    application::{
        domain::policies::UploadPolicy, ports::incoming::use_cases::UploadMediaUseCase,
        services::UploadMediaService,
    },
};
use crate::newsletter::{
    adapter::outgoing::SubscriberRepositoryPostgres,
    application::{ports::incoming::use_cases::NewsletterUseCase, services::NewsletterService},
};
use crate::project::{
    adapter::outgoing::ProjectRepositoryPostgres,
    application::{ports::incoming::use_cases::ProjectUseCase, services::ProjectService},
};
use crate::recognition::{
    adapter::outgoing::RecognitionRepositoryPostgres,
    application::{ports::incoming::use_cases::RecognitionUseCase, services::RecognitionService},
};
use crate::resume::{
    adapter::outgoing::ResumeRepositoryPostgres,
    application::{ports::incoming::use_cases::ResumeUseCase, services::ResumeService},
};
use crate::social_link::{
    adapter::outgoing::SocialLinkRepositoryPostgres,
    application::{ports::incoming::use_cases::SocialLinkUseCase, services::SocialLinkService},
};
use crate::solution::{
    adapter::outgoing::SolutionRepositoryPostgres,
    application::{ports::incoming::use_cases::SolutionUseCase, services::SolutionService},
};
use crate::stats::{
    adapter::outgoing::StatsRepositoryPostgres,
    application::{ports::incoming::use_cases::StatsUseCase, services::StatsService},
};
use crate::technology::{
    adapter::outgoing::TechnologyRepositoryPostgres,
    application::{ports::incoming::use_cases::TechnologyUseCase, services::TechnologyService},
};
use crate::testimonial::{
    adapter::outgoing::TestimonialRepositoryPostgres,
    application::{ports::incoming::use_cases::TestimonialUseCase, services::TestimonialService},
};

use actix_web::{middleware::Logger, web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    // Content collections
    pub project_use_case: Arc<dyn ProjectUseCase + Send + Sync>,
    pub testimonial_use_case: Arc<dyn TestimonialUseCase + Send + Sync>,
    pub technology_use_case: Arc<dyn TechnologyUseCase + Send + Sync>,
    pub solution_use_case: Arc<dyn SolutionUseCase + Send + Sync>,
    pub recognition_use_case: Arc<dyn RecognitionUseCase + Send + Sync>,
    pub social_link_use_case: Arc<dyn SocialLinkUseCase + Send + Sync>,
    // Singleton documents
    pub hero_use_case: Arc<dyn HeroUseCase + Send + Sync>,
    pub about_use_case: Arc<dyn AboutUseCase + Send + Sync>,
    pub stats_use_case: Arc<dyn StatsUseCase + Send + Sync>,
    // Inbox and files
    pub contact_use_case: Arc<dyn ContactUseCase + Send + Sync>,
    pub newsletter_use_case: Arc<dyn NewsletterUseCase + Send + Sync>,
    pub resume_use_case: Arc<dyn ResumeUseCase + Send + Sync>,
    pub upload_media_use_case: Arc<dyn UploadMediaUseCase + Send + Sync>,
    pub upload_policy: UploadPolicy,
    pub dashboard_use_case: Arc<dyn DashboardUseCase + Send + Sync>,
    // Admin session
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub logout_admin_use_case: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    config::load_env_files();
    let app_config = config::AppConfig::from_env().context("Invalid configuration")?;

    #[cfg(feature = "test-helpers")]
    {
        if app_config.is_production() {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!(
            environment = %app_config.environment,
            "Test helper routes are ENABLED"
        );
    }

    // rediss:// needs a process-wide crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let server_url = app_config.server_url();
    info!(server_url = %server_url, environment = %app_config.environment, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(app_config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&app_config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    // Media host
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .context("Failed to build HTTP client")?;
    let media_storage = CloudinaryStorage::new(http_client, app_config.cloudinary.clone());
    let upload_policy = UploadPolicy::default();

    // Auth
    let token_provider: Arc<dyn TokenProvider> =
        Arc::new(JwtTokenService::new(app_config.jwt.clone()));
    let revocations: Arc<dyn SessionRevocationRepository> =
        Arc::new(RedisSessionRevocationRepository::new(Arc::clone(&redis_arc)));
    let session_verifier = SessionVerifier::new(Arc::clone(&token_provider), Arc::clone(&revocations));

    let login_admin_use_case = LoginAdminUseCase::new(
        app_config.admin.clone(),
        Arc::new(Argon2Verifier::new()),
        Arc::clone(&token_provider),
    );
    let logout_admin_use_case = LogoutAdminUseCase::new(revocations, token_provider);

    let state = AppState {
        project_use_case: Arc::new(ProjectService::new(ProjectRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        testimonial_use_case: Arc::new(TestimonialService::new(
            TestimonialRepositoryPostgres::new(Arc::clone(&db_arc)),
        )),
        technology_use_case: Arc::new(TechnologyService::new(TechnologyRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        solution_use_case: Arc::new(SolutionService::new(SolutionRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        recognition_use_case: Arc::new(RecognitionService::new(
            RecognitionRepositoryPostgres::new(Arc::clone(&db_arc)),
        )),
        social_link_use_case: Arc::new(SocialLinkService::new(SocialLinkRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        hero_use_case: Arc::new(HeroService::new(HeroRepositoryPostgres::new(Arc::clone(
            &db_arc,
        )))),
        about_use_case: Arc::new(AboutService::new(AboutRepositoryPostgres::new(Arc::clone(
            &db_arc,
        )))),
        stats_use_case: Arc::new(StatsService::new(StatsRepositoryPostgres::new(Arc::clone(
            &db_arc,
        )))),
        contact_use_case: Arc::new(ContactService::new(ContactRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        newsletter_use_case: Arc::new(NewsletterService::new(SubscriberRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        resume_use_case: Arc::new(ResumeService::new(
            ResumeRepositoryPostgres::new(Arc::clone(&db_arc)),
            media_storage.clone(),
        )),
        upload_media_use_case: Arc::new(UploadMediaService::new(media_storage)),
        upload_policy: upload_policy.clone(),
        dashboard_use_case: Arc::new(DashboardService::new(OverviewQueryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        login_admin_use_case: Arc::new(login_admin_use_case),
        logout_admin_use_case: Arc::new(logout_admin_use_case),
    };

    let max_body_bytes = upload_policy.max_body_bytes();
    let db_for_server = Arc::clone(&db_arc);

    info!(server_url = %server_url, "Server listening");

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(session_verifier.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(crate::shared::api::custom_json_config())
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_session_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_admin_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Testimonials
    cfg.service(crate::testimonial::adapter::incoming::web::routes::get_testimonials_handler);
    cfg.service(crate::testimonial::adapter::incoming::web::routes::get_admin_testimonials_handler);
    cfg.service(crate::testimonial::adapter::incoming::web::routes::create_testimonial_handler);
    cfg.service(crate::testimonial::adapter::incoming::web::routes::update_testimonial_handler);
    cfg.service(crate::testimonial::adapter::incoming::web::routes::delete_testimonial_handler);
    // Technologies
    cfg.service(crate::technology::adapter::incoming::web::routes::get_tech_stack_handler);
    cfg.service(crate::technology::adapter::incoming::web::routes::get_admin_technologies_handler);
    cfg.service(crate::technology::adapter::incoming::web::routes::create_technology_handler);
    cfg.service(crate::technology::adapter::incoming::web::routes::update_technology_handler);
    cfg.service(crate::technology::adapter::incoming::web::routes::delete_technology_handler);
    // Solutions
    cfg.service(crate::solution::adapter::incoming::web::routes::get_solutions_handler);
    cfg.service(crate::solution::adapter::incoming::web::routes::get_admin_solutions_handler);
    cfg.service(crate::solution::adapter::incoming::web::routes::create_solution_handler);
    cfg.service(crate::solution::adapter::incoming::web::routes::update_solution_handler);
    cfg.service(crate::solution::adapter::incoming::web::routes::delete_solution_handler);
    // Recognitions
    cfg.service(crate::recognition::adapter::incoming::web::routes::get_recognitions_handler);
    cfg.service(crate::recognition::adapter::incoming::web::routes::get_admin_recognitions_handler);
    cfg.service(crate::recognition::adapter::incoming::web::routes::create_recognition_handler);
    cfg.service(crate::recognition::adapter::incoming::web::routes::update_recognition_handler);
    cfg.service(crate::recognition::adapter::incoming::web::routes::delete_recognition_handler);
    // Social links
    cfg.service(crate::social_link::adapter::incoming::web::routes::get_social_links_handler);
    cfg.service(crate::social_link::adapter::incoming::web::routes::get_admin_social_links_handler);
    cfg.service(crate::social_link::adapter::incoming::web::routes::create_social_link_handler);
    cfg.service(crate::social_link::adapter::incoming::web::routes::update_social_link_handler);
    cfg.service(crate::social_link::adapter::incoming::web::routes::delete_social_link_handler);
    // Singletons
    cfg.service(crate::hero::adapter::incoming::web::routes::get_hero_handler);
    cfg.service(crate::hero::adapter::incoming::web::routes::get_admin_hero_handler);
    cfg.service(crate::hero::adapter::incoming::web::routes::update_hero_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::get_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::get_admin_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::update_about_handler);
    cfg.service(crate::stats::adapter::incoming::web::routes::get_stats_handler);
    cfg.service(crate::stats::adapter::incoming::web::routes::get_admin_stats_handler);
    cfg.service(crate::stats::adapter::incoming::web::routes::update_stats_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::get_contact_messages_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::update_contact_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::delete_contact_message_handler);
    // Newsletter
    cfg.service(crate::newsletter::adapter::incoming::web::routes::subscribe_handler);
    cfg.service(crate::newsletter::adapter::incoming::web::routes::get_subscribers_handler);
    cfg.service(crate::newsletter::adapter::incoming::web::routes::delete_subscriber_handler);
    // Files
    cfg.service(crate::media::adapter::incoming::web::routes::upload_media_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::get_resume_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::get_admin_resume_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::upload_resume_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::delete_resume_handler);
    // Dashboard
    cfg.service(crate::dashboard::adapter::incoming::web::routes::get_overview_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
