use actix_web::web;
use std::sync::Arc;

use crate::about::application::ports::incoming::use_cases::AboutUseCase;
use crate::auth::application::use_cases::{
    login_admin::ILoginAdminUseCase, logout_admin::ILogoutAdminUseCase,
};
use crate::contact::application::ports::incoming::use_cases::ContactUseCase;
use crate::dashboard::application::ports::incoming::use_cases::DashboardUseCase;
use crate::hero::application::ports::incoming::use_cases::HeroUseCase;
use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::ports::incoming::use_cases::UploadMediaUseCase;
use crate::newsletter::application::ports::incoming::use_cases::NewsletterUseCase;
use crate::project::application::ports::incoming::use_cases::ProjectUseCase;
use crate::recognition::application::ports::incoming::use_cases::RecognitionUseCase;
use crate::resume::application::ports::incoming::use_cases::ResumeUseCase;
use crate::social_link::application::ports::incoming::use_cases::SocialLinkUseCase;
use crate::solution::application::ports::incoming::use_cases::SolutionUseCase;
use crate::stats::application::ports::incoming::use_cases::StatsUseCase;
use crate::technology::application::ports::incoming::use_cases::TechnologyUseCase;
use crate::testimonial::application::ports::incoming::use_cases::TestimonialUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is an empty in-memory stub
/// unless replaced with one of the `with_*` methods.
pub struct TestAppStateBuilder {
    project: Arc<dyn ProjectUseCase + Send + Sync>,
    testimonial: Arc<dyn TestimonialUseCase + Send + Sync>,
    technology: Arc<dyn TechnologyUseCase + Send + Sync>,
    solution: Arc<dyn SolutionUseCase + Send + Sync>,
    recognition: Arc<dyn RecognitionUseCase + Send + Sync>,
    social_link: Arc<dyn SocialLinkUseCase + Send + Sync>,
    hero: Arc<dyn HeroUseCase + Send + Sync>,
    about: Arc<dyn AboutUseCase + Send + Sync>,
    stats: Arc<dyn StatsUseCase + Send + Sync>,
    contact: Arc<dyn ContactUseCase + Send + Sync>,
    newsletter: Arc<dyn NewsletterUseCase + Send + Sync>,
    resume: Arc<dyn ResumeUseCase + Send + Sync>,
    upload_media: Arc<dyn UploadMediaUseCase + Send + Sync>,
    upload_policy: UploadPolicy,
    dashboard: Arc<dyn DashboardUseCase + Send + Sync>,
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    logout_admin: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: Arc::new(StubProjectUseCase::default()),
            testimonial: Arc::new(StubTestimonialUseCase::default()),
            technology: Arc::new(StubTechnologyUseCase::default()),
            solution: Arc::new(StubSolutionUseCase::default()),
            recognition: Arc::new(StubRecognitionUseCase::default()),
            social_link: Arc::new(StubSocialLinkUseCase::default()),
            hero: Arc::new(StubHeroUseCase::default()),
            about: Arc::new(StubAboutUseCase::default()),
            stats: Arc::new(StubStatsUseCase::default()),
            contact: Arc::new(StubContactUseCase::default()),
            newsletter: Arc::new(StubNewsletterUseCase::default()),
            resume: Arc::new(StubResumeUseCase::default()),
            upload_media: Arc::new(StubUploadMediaUseCase::default()),
            upload_policy: UploadPolicy::default(),
            dashboard: Arc::new(StubDashboardUseCase::default()),
            login_admin: Arc::new(StubLoginAdminUseCase),
            logout_admin: Arc::new(StubLogoutAdminUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_project(mut self, uc: impl ProjectUseCase + 'static) -> Self {
        self.project = Arc::new(uc);
        self
    }
    pub fn with_testimonial(mut self, uc: impl TestimonialUseCase + 'static) -> Self {
        self.testimonial = Arc::new(uc);
        self
    }
    pub fn with_technology(mut self, uc: impl TechnologyUseCase + 'static) -> Self {
        self.technology = Arc::new(uc);
        self
    }
    pub fn with_solution(mut self, uc: impl SolutionUseCase + 'static) -> Self {
        self.solution = Arc::new(uc);
        self
    }
    pub fn with_recognition(mut self, uc: impl RecognitionUseCase + 'static) -> Self {
        self.recognition = Arc::new(uc);
        self
    }
    pub fn with_social_link(mut self, uc: impl SocialLinkUseCase + 'static) -> Self {
        self.social_link = Arc::new(uc);
        self
    }
    pub fn with_hero(mut self, uc: impl HeroUseCase + 'static) -> Self {
        self.hero = Arc::new(uc);
        self
    }
    pub fn with_about(mut self, uc: impl AboutUseCase + 'static) -> Self {
        self.about = Arc::new(uc);
        self
    }
    pub fn with_stats(mut self, uc: impl StatsUseCase + 'static) -> Self {
        self.stats = Arc::new(uc);
        self
    }
    pub fn with_contact(mut self, uc: impl ContactUseCase + 'static) -> Self {
        self.contact = Arc::new(uc);
        self
    }
    pub fn with_newsletter(mut self, uc: impl NewsletterUseCase + 'static) -> Self {
        self.newsletter = Arc::new(uc);
        self
    }
    pub fn with_resume(mut self, uc: impl ResumeUseCase + 'static) -> Self {
        self.resume = Arc::new(uc);
        self
    }
    pub fn with_upload_media(mut self, uc: impl UploadMediaUseCase + 'static) -> Self {
        self.upload_media = Arc::new(uc);
        self
    }
    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }
    pub fn with_dashboard(mut self, uc: impl DashboardUseCase + 'static) -> Self {
        self.dashboard = Arc::new(uc);
        self
    }
    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }
    pub fn with_logout_admin(mut self, uc: impl ILogoutAdminUseCase + 'static) -> Self {
        self.logout_admin = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project_use_case: self.project,
            testimonial_use_case: self.testimonial,
            technology_use_case: self.technology,
            solution_use_case: self.solution,
            recognition_use_case: self.recognition,
            social_link_use_case: self.social_link,
            hero_use_case: self.hero,
            about_use_case: self.about,
            stats_use_case: self.stats,
            contact_use_case: self.contact,
            newsletter_use_case: self.newsletter,
            resume_use_case: self.resume,
            upload_media_use_case: self.upload_media,
            upload_policy: self.upload_policy,
            dashboard_use_case: self.dashboard,
            login_admin_use_case: self.login_admin,
            logout_admin_use_case: self.logout_admin,
        })
    }
}
