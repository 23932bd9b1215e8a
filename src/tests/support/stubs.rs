//! In-memory use cases for route tests. Each stub keeps its rows behind an
//! `Arc` so a clone handed to the app state shares state with the test.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::about::application::{
    domain::entities::{About, AboutContent, AboutView},
    ports::incoming::use_cases::{AboutError, AboutUseCase, UpdateAboutCommand},
};
use crate::auth::application::use_cases::{
    login_admin::{ILoginAdminUseCase, LoginError, LoginRequest, LoginResponse},
    logout_admin::{ILogoutAdminUseCase, LogoutError},
};
use crate::contact::application::{
    domain::entities::{ContactFilter, ContactInbox, ContactMessage, ContactStatus},
    ports::incoming::use_cases::{
        ContactError, ContactUseCase, SubmitContactCommand, UpdateContactStatusCommand,
    },
};
use crate::dashboard::application::{
    domain::entities::Overview,
    ports::incoming::use_cases::{DashboardError, DashboardUseCase},
};
use crate::hero::application::{
    domain::entities::{Hero, HeroContent},
    ports::incoming::use_cases::{HeroError, HeroUseCase, UpdateHeroCommand},
};
use crate::media::application::{
    domain::entities::StoredMedia,
    ports::incoming::use_cases::{MediaError, UploadMediaCommand, UploadMediaUseCase},
};
use crate::newsletter::application::{
    domain::entities::{Subscriber, SubscriberList},
    ports::incoming::use_cases::{NewsletterError, NewsletterUseCase, SubscribeCommand},
};
use crate::project::application::{
    domain::entities::Project,
    ports::{
        incoming::use_cases::{ProjectCommand, ProjectError, ProjectUseCase},
        outgoing::ProjectData,
    },
};
use crate::recognition::application::{
    domain::entities::Recognition,
    ports::{
        incoming::use_cases::{RecognitionCommand, RecognitionError, RecognitionUseCase},
        outgoing::RecognitionData,
    },
};
use crate::resume::application::{
    domain::entities::Resume,
    ports::incoming::use_cases::{ResumeError, ResumeUseCase, UploadResumeCommand, RESUME_FOLDER},
};
use crate::social_link::application::{
    domain::entities::SocialLink,
    ports::{
        incoming::use_cases::{SocialLinkCommand, SocialLinkError, SocialLinkUseCase},
        outgoing::SocialLinkData,
    },
};
use crate::solution::application::{
    domain::entities::Solution,
    ports::{
        incoming::use_cases::{SolutionCommand, SolutionError, SolutionUseCase},
        outgoing::SolutionData,
    },
};
use crate::stats::application::{
    domain::entities::{Stats, StatsCounters, StatsView},
    ports::incoming::use_cases::{StatsError, StatsUseCase, UpdateStatsCommand},
};
use crate::technology::application::{
    domain::entities::Technology,
    ports::{
        incoming::use_cases::{TechnologyCommand, TechnologyError, TechnologyUseCase},
        outgoing::TechnologyData,
    },
};
use crate::testimonial::application::{
    domain::entities::Testimonial,
    ports::{
        incoming::use_cases::{TestimonialCommand, TestimonialError, TestimonialUseCase},
        outgoing::TestimonialData,
    },
};

/// Shared row store.
struct Table<T>(Arc<Mutex<Vec<T>>>);

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }
}

impl<T: Clone> Table<T> {
    fn with(rows: Vec<T>) -> Self {
        Self(Arc::new(Mutex::new(rows)))
    }

    fn all(&self) -> Vec<T> {
        self.0.lock().unwrap().clone()
    }

    fn filtered(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.0.lock().unwrap().iter().filter(|r| keep(r)).cloned().collect()
    }

    fn insert(&self, row: T) -> T {
        self.0.lock().unwrap().push(row.clone());
        row
    }

    fn modify(&self, matches: impl Fn(&T) -> bool, change: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.0.lock().unwrap();
        let row = rows.iter_mut().find(|r| matches(r))?;
        change(row);
        Some(row.clone())
    }

    fn remove(&self, matches: impl Fn(&T) -> bool) -> bool {
        let mut rows = self.0.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !matches(r));
        rows.len() != before
    }
}

// ============================== Projects ===================================

fn project_from(id: Uuid, data: ProjectData) -> Project {
    let now = Utc::now();
    Project {
        id,
        title: data.title,
        description: data.description,
        image: data.image,
        tech_stack: data.tech_stack,
        url: data.url,
        github_url: data.github_url,
        featured: data.featured,
        status: data.status,
        order: data.order,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct StubProjectUseCase {
    rows: Table<Project>,
    failure: Option<ProjectError>,
}

impl StubProjectUseCase {
    pub fn with(projects: Vec<Project>) -> Self {
        Self {
            rows: Table::with(projects),
            failure: None,
        }
    }

    pub fn failing(err: ProjectError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ProjectError> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl ProjectUseCase for StubProjectUseCase {
    async fn list(&self) -> Result<Vec<Project>, ProjectError> {
        self.check()?;
        Ok(self.rows.all())
    }

    async fn create(&self, command: ProjectCommand) -> Result<Project, ProjectError> {
        self.check()?;
        Ok(self.rows.insert(project_from(Uuid::new_v4(), command.into_data())))
    }

    async fn update(&self, id: Uuid, command: ProjectCommand) -> Result<Project, ProjectError> {
        self.check()?;
        let updated = project_from(id, command.into_data());
        self.rows
            .modify(|p| p.id == id, |p| *p = updated)
            .ok_or(ProjectError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectError> {
        self.check()?;
        self.rows
            .remove(|p| p.id == id)
            .then_some(())
            .ok_or(ProjectError::NotFound)
    }
}

// ============================ Testimonials =================================

fn testimonial_from(id: Uuid, data: TestimonialData) -> Testimonial {
    let now = Utc::now();
    Testimonial {
        id,
        name: data.name,
        city: data.city,
        rating: data.rating,
        comment: data.comment,
        avatar: data.avatar,
        date: data.date,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct StubTestimonialUseCase {
    rows: Table<Testimonial>,
}

impl StubTestimonialUseCase {
    pub fn with(testimonials: Vec<Testimonial>) -> Self {
        Self {
            rows: Table::with(testimonials),
        }
    }
}

#[async_trait]
impl TestimonialUseCase for StubTestimonialUseCase {
    async fn list(&self) -> Result<Vec<Testimonial>, TestimonialError> {
        Ok(self.rows.all())
    }

    async fn create(&self, command: TestimonialCommand) -> Result<Testimonial, TestimonialError> {
        Ok(self
            .rows
            .insert(testimonial_from(Uuid::new_v4(), command.into_data())))
    }

    async fn update(
        &self,
        id: Uuid,
        command: TestimonialCommand,
    ) -> Result<Testimonial, TestimonialError> {
        let updated = testimonial_from(id, command.into_data());
        self.rows
            .modify(|t| t.id == id, |t| *t = updated)
            .ok_or(TestimonialError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialError> {
        self.rows
            .remove(|t| t.id == id)
            .then_some(())
            .ok_or(TestimonialError::NotFound)
    }
}

// ============================ Technologies =================================

fn technology_from(id: Uuid, data: TechnologyData) -> Technology {
    let now = Utc::now();
    Technology {
        id,
        name: data.name,
        category: data.category,
        proficiency: data.proficiency,
        logo: data.logo,
        work_as: data.work_as,
        color: data.color,
        is_active: data.is_active,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct StubTechnologyUseCase {
    rows: Table<Technology>,
}

impl StubTechnologyUseCase {
    pub fn with(technologies: Vec<Technology>) -> Self {
        Self {
            rows: Table::with(technologies),
        }
    }
}

#[async_trait]
impl TechnologyUseCase for StubTechnologyUseCase {
    async fn list_active(&self) -> Result<Vec<Technology>, TechnologyError> {
        Ok(self.rows.filtered(|t| t.is_active))
    }

    async fn list_all(&self) -> Result<Vec<Technology>, TechnologyError> {
        Ok(self.rows.all())
    }

    async fn create(&self, command: TechnologyCommand) -> Result<Technology, TechnologyError> {
        let mut data = command.into_data();
        data.is_active = true;
        Ok(self.rows.insert(technology_from(Uuid::new_v4(), data)))
    }

    async fn update(
        &self,
        id: Uuid,
        command: TechnologyCommand,
    ) -> Result<Technology, TechnologyError> {
        let updated = technology_from(id, command.into_data());
        self.rows
            .modify(|t| t.id == id, |t| *t = updated)
            .ok_or(TechnologyError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TechnologyError> {
        self.rows
            .remove(|t| t.id == id)
            .then_some(())
            .ok_or(TechnologyError::NotFound)
    }
}

// ============================== Solutions ==================================

fn solution_from(id: Uuid, data: SolutionData) -> Solution {
    let now = Utc::now();
    Solution {
        id,
        name: data.name,
        is_active: data.is_active,
        order: data.order,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct StubSolutionUseCase {
    rows: Table<Solution>,
}

#[async_trait]
impl SolutionUseCase for StubSolutionUseCase {
    async fn list_active(&self) -> Result<Vec<Solution>, SolutionError> {
        Ok(self.rows.filtered(|s| s.is_active))
    }

    async fn list(&self) -> Result<Vec<Solution>, SolutionError> {
        Ok(self.rows.all())
    }

    async fn create(&self, command: SolutionCommand) -> Result<Solution, SolutionError> {
        Ok(self
            .rows
            .insert(solution_from(Uuid::new_v4(), command.into_data())))
    }

    async fn update(&self, id: Uuid, command: SolutionCommand) -> Result<Solution, SolutionError> {
        let updated = solution_from(id, command.into_data());
        self.rows
            .modify(|s| s.id == id, |s| *s = updated)
            .ok_or(SolutionError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), SolutionError> {
        self.rows
            .remove(|s| s.id == id)
            .then_some(())
            .ok_or(SolutionError::NotFound)
    }
}

// ============================= Recognitions ================================

fn recognition_from(id: Uuid, data: RecognitionData) -> Recognition {
    let now = Utc::now();
    Recognition {
        id,
        title: data.title,
        description: data.description,
        icon: data.icon,
        color: data.color,
        date: data.date,
        issuer: data.issuer,
        credential_url: data.credential_url,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct StubRecognitionUseCase {
    rows: Table<Recognition>,
}

#[async_trait]
impl RecognitionUseCase for StubRecognitionUseCase {
    async fn list(&self) -> Result<Vec<Recognition>, RecognitionError> {
        Ok(self.rows.all())
    }

    async fn create(&self, command: RecognitionCommand) -> Result<Recognition, RecognitionError> {
        Ok(self
            .rows
            .insert(recognition_from(Uuid::new_v4(), command.into_data())))
    }

    async fn update(
        &self,
        id: Uuid,
        command: RecognitionCommand,
    ) -> Result<Recognition, RecognitionError> {
        let updated = recognition_from(id, command.into_data());
        self.rows
            .modify(|r| r.id == id, |r| *r = updated)
            .ok_or(RecognitionError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RecognitionError> {
        self.rows
            .remove(|r| r.id == id)
            .then_some(())
            .ok_or(RecognitionError::NotFound)
    }
}

// ============================= Social links ================================

fn social_link_from(id: Uuid, data: SocialLinkData) -> SocialLink {
    let now = Utc::now();
    SocialLink {
        id,
        platform: data.platform,
        username: data.username,
        url: data.url,
        is_active: data.is_active,
        order: data.order,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct StubSocialLinkUseCase {
    rows: Table<SocialLink>,
}

#[async_trait]
impl SocialLinkUseCase for StubSocialLinkUseCase {
    async fn list_active(&self) -> Result<Vec<SocialLink>, SocialLinkError> {
        Ok(self.rows.filtered(|l| l.is_active))
    }

    async fn list(&self) -> Result<Vec<SocialLink>, SocialLinkError> {
        Ok(self.rows.all())
    }

    async fn create(&self, command: SocialLinkCommand) -> Result<SocialLink, SocialLinkError> {
        Ok(self
            .rows
            .insert(social_link_from(Uuid::new_v4(), command.into_data())))
    }

    async fn update(
        &self,
        id: Uuid,
        command: SocialLinkCommand,
    ) -> Result<SocialLink, SocialLinkError> {
        let updated = social_link_from(id, command.into_data());
        self.rows
            .modify(|l| l.id == id, |l| *l = updated)
            .ok_or(SocialLinkError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), SocialLinkError> {
        self.rows
            .remove(|l| l.id == id)
            .then_some(())
            .ok_or(SocialLinkError::NotFound)
    }
}

// =============================== Singletons ================================

#[derive(Clone, Default)]
pub struct StubHeroUseCase {
    stored: Arc<Mutex<Option<Hero>>>,
    fail: bool,
}

impl StubHeroUseCase {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn store(&self, content: HeroContent) -> Hero {
        let mut stored = self.stored.lock().unwrap();
        let now = Utc::now();
        let hero = Hero {
            id: stored.as_ref().map_or_else(Uuid::new_v4, |h| h.id),
            content,
            created_at: stored.as_ref().map_or(now, |h| h.created_at),
            updated_at: now,
        };
        *stored = Some(hero.clone());
        hero
    }
}

#[async_trait]
impl HeroUseCase for StubHeroUseCase {
    async fn get(&self) -> Result<Hero, HeroError> {
        if self.fail {
            return Err(HeroError::RepositoryError("stub failure".into()));
        }
        let existing = self.stored.lock().unwrap().clone();
        Ok(existing.unwrap_or_else(|| self.store(HeroContent::default())))
    }

    async fn upsert(&self, command: UpdateHeroCommand) -> Result<Hero, HeroError> {
        if self.fail {
            return Err(HeroError::RepositoryError("stub failure".into()));
        }
        Ok(self.store(command.into_content()))
    }
}

#[derive(Clone, Default)]
pub struct StubAboutUseCase {
    stored: Arc<Mutex<Option<About>>>,
}

impl StubAboutUseCase {
    fn store(&self, content: AboutContent) -> About {
        let mut stored = self.stored.lock().unwrap();
        let now = Utc::now();
        let about = About {
            id: stored.as_ref().map_or_else(Uuid::new_v4, |a| a.id),
            content,
            created_at: stored.as_ref().map_or(now, |a| a.created_at),
            updated_at: now,
        };
        *stored = Some(about.clone());
        about
    }
}

#[async_trait]
impl AboutUseCase for StubAboutUseCase {
    async fn get_public(&self) -> Result<AboutView, AboutError> {
        Ok(match self.stored.lock().unwrap().clone() {
            Some(about) => AboutView::Stored(about),
            None => AboutView::Default(AboutContent::default()),
        })
    }

    async fn get_or_create(&self) -> Result<About, AboutError> {
        let existing = self.stored.lock().unwrap().clone();
        Ok(existing.unwrap_or_else(|| self.store(AboutContent::default())))
    }

    async fn upsert(&self, command: UpdateAboutCommand) -> Result<About, AboutError> {
        Ok(self.store(command.into_content()))
    }
}

#[derive(Clone, Default)]
pub struct StubStatsUseCase {
    stored: Arc<Mutex<Option<Stats>>>,
    fail: bool,
}

impl StubStatsUseCase {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), StatsError> {
        if self.fail {
            return Err(StatsError::RepositoryError("stub failure".into()));
        }
        Ok(())
    }

    fn store(&self, counters: StatsCounters) -> Stats {
        let mut stored = self.stored.lock().unwrap();
        let now = Utc::now();
        let stats = Stats {
            id: (*stored).map_or_else(Uuid::new_v4, |s| s.id),
            counters,
            created_at: (*stored).map_or(now, |s| s.created_at),
            updated_at: now,
        };
        *stored = Some(stats);
        stats
    }
}

#[async_trait]
impl StatsUseCase for StubStatsUseCase {
    async fn get_public(&self) -> Result<StatsView, StatsError> {
        self.check()?;
        Ok(match *self.stored.lock().unwrap() {
            Some(stats) => StatsView::Stored(stats),
            None => StatsView::Default(StatsCounters::default()),
        })
    }

    async fn get_or_create(&self) -> Result<Stats, StatsError> {
        self.check()?;
        let existing = *self.stored.lock().unwrap();
        Ok(existing.unwrap_or_else(|| self.store(StatsCounters::default())))
    }

    async fn upsert(&self, command: UpdateStatsCommand) -> Result<Stats, StatsError> {
        self.check()?;
        Ok(self.store(command.into_counters()))
    }
}

// =============================== Contact ===================================

#[derive(Clone, Default)]
pub struct StubContactUseCase {
    rows: Table<ContactMessage>,
}

impl StubContactUseCase {
    pub fn with(messages: Vec<ContactMessage>) -> Self {
        Self {
            rows: Table::with(messages),
        }
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.rows.all()
    }
}

fn contact_matches(message: &ContactMessage, filter: &ContactFilter) -> bool {
    if filter.status.is_some_and(|s| s != message.status) {
        return false;
    }
    let Some(term) = filter.search.as_deref().map(str::to_lowercase) else {
        return true;
    };
    [
        &message.name,
        &message.email,
        &message.subject,
        &message.message,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

#[async_trait]
impl ContactUseCase for StubContactUseCase {
    async fn submit(&self, command: SubmitContactCommand) -> Result<Uuid, ContactError> {
        let new = command.into_message();
        let now = Utc::now();
        let stored = self.rows.insert(ContactMessage {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            subject: new.subject,
            message: new.message,
            status: ContactStatus::New,
            is_read: false,
            created_at: now,
            updated_at: now,
        });
        Ok(stored.id)
    }

    async fn list(&self, filter: ContactFilter) -> Result<ContactInbox, ContactError> {
        Ok(ContactInbox::new(
            self.rows.filtered(|m| contact_matches(m, &filter)),
        ))
    }

    async fn update_status(
        &self,
        id: Uuid,
        command: UpdateContactStatusCommand,
    ) -> Result<ContactMessage, ContactError> {
        let change = command.change();
        self.rows
            .modify(
                |m| m.id == id,
                |m| {
                    if let Some(status) = change.status {
                        m.status = status;
                    }
                    if let Some(is_read) = change.is_read {
                        m.is_read = is_read;
                    }
                    m.updated_at = Utc::now();
                },
            )
            .ok_or(ContactError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactError> {
        self.rows
            .remove(|m| m.id == id)
            .then_some(())
            .ok_or(ContactError::NotFound)
    }
}

// ============================== Newsletter =================================

#[derive(Clone, Default)]
pub struct StubNewsletterUseCase {
    rows: Table<Subscriber>,
}

#[async_trait]
impl NewsletterUseCase for StubNewsletterUseCase {
    async fn subscribe(&self, command: SubscribeCommand) -> Result<Subscriber, NewsletterError> {
        if !self.rows.filtered(|s| s.email == command.email()).is_empty() {
            return Err(NewsletterError::AlreadySubscribed);
        }
        let now = Utc::now();
        Ok(self.rows.insert(Subscriber {
            id: Uuid::new_v4(),
            email: command.email().to_string(),
            is_active: true,
            subscribed_at: now,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn list(&self, search: Option<String>) -> Result<SubscriberList, NewsletterError> {
        let term = search.map(|s| s.trim().to_lowercase()).unwrap_or_default();
        let mut subscribers = self.rows.filtered(|s| s.email.contains(&term));
        subscribers.reverse();
        Ok(subscribers.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), NewsletterError> {
        self.rows
            .remove(|s| s.id == id)
            .then_some(())
            .ok_or(NewsletterError::NotFound)
    }
}

// ================================ Media ====================================

#[derive(Clone, Default)]
pub struct StubUploadMediaUseCase {
    fail: bool,
}

impl StubUploadMediaUseCase {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl UploadMediaUseCase for StubUploadMediaUseCase {
    async fn upload(&self, command: UploadMediaCommand) -> Result<StoredMedia, MediaError> {
        if self.fail {
            return Err(MediaError::UploadFailed("media host unreachable".into()));
        }
        let (file, folder) = command.into_parts();
        Ok(StoredMedia {
            url: format!("https://cdn.test/{folder}/{}", file.file_name),
            public_id: format!("{folder}/{}", file.file_name),
        })
    }
}

#[derive(Clone, Default)]
pub struct StubResumeUseCase {
    rows: Table<Resume>,
}

#[async_trait]
impl ResumeUseCase for StubResumeUseCase {
    async fn get_active(&self) -> Result<Option<Resume>, ResumeError> {
        Ok(self.rows.filtered(|r| r.is_active).pop())
    }

    async fn upload(&self, command: UploadResumeCommand) -> Result<Resume, ResumeError> {
        let (file, uploaded_by) = command.into_parts();
        for resume in self.rows.0.lock().unwrap().iter_mut() {
            resume.is_active = false;
        }
        let now = Utc::now();
        Ok(self.rows.insert(Resume {
            id: Uuid::new_v4(),
            file_url: format!("https://cdn.test/{RESUME_FOLDER}/{}", file.file_name),
            public_id: format!("{RESUME_FOLDER}/{}", file.file_name),
            file_name: file.file_name,
            is_active: true,
            uploaded_by,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResumeError> {
        self.rows
            .remove(|r| r.id == id)
            .then_some(())
            .ok_or(ResumeError::NotFound)
    }
}

// =============================== Dashboard =================================

#[derive(Clone, Default)]
pub struct StubDashboardUseCase {
    counts: Overview,
}

impl StubDashboardUseCase {
    pub fn with(counts: Overview) -> Self {
        Self { counts }
    }
}

#[async_trait]
impl DashboardUseCase for StubDashboardUseCase {
    async fn overview(&self) -> Result<Overview, DashboardError> {
        Ok(self.counts)
    }
}

// ================================= Auth ====================================

/// Rejects every login.
#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutAdminUseCase;

#[async_trait]
impl ILogoutAdminUseCase for StubLogoutAdminUseCase {
    async fn execute(&self, _token: Option<String>) -> Result<(), LogoutError> {
        Ok(())
    }
}
