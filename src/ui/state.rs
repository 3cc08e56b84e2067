use crate::config::AppConfig;
use crate::domain::{AppointmentRequest, Doctor, PatientPanel};
use crate::error::Result;
use crate::event::{AppEvent, EventSender, MountId};
use crate::sources::{seed_patients, spawn_status_feed, FeedHandle, RandomStatusFeed, StatusFeed, ViewContext};
use crate::ui::views::{AppointmentForm, DoctorList, ServiceListState};
use log::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    MedicalTeam,
    Contact,
    Panel,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::MedicalTeam, Page::Contact, Page::Panel];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::MedicalTeam => "Medical Team",
            Page::Contact => "Book Appointment",
            Page::Panel => "Panel",
        }
    }
}

/// Builds a fresh status feed each time the patient panel is mounted.
pub type FeedFactory = Box<dyn Fn() -> Box<dyn StatusFeed> + Send>;

/// A patient panel that is currently on screen, with its running feed.
pub struct MountedPanel {
    pub panel: PatientPanel,
    feed: FeedHandle,
}

impl MountedPanel {
    pub fn mount(&self) -> MountId {
        self.feed.mount()
    }
}

pub struct AppState {
    page: Page,
    pub doctor_list: DoctorList,
    pub form: AppointmentForm,
    pub services: ServiceListState,
    panel: Option<MountedPanel>,
    next_mount: MountId,
    config: AppConfig,
    events: EventSender,
    feed_factory: FeedFactory,
    notice: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(ctx: &ViewContext, config: AppConfig, events: EventSender) -> Result<Self> {
        let probability = config.update_probability;
        let seed = config.seed;
        let feed_factory: FeedFactory =
            Box::new(move || -> Box<dyn StatusFeed> { Box::new(RandomStatusFeed::new(probability, seed)) });

        Ok(Self {
            page: Page::Home,
            doctor_list: DoctorList::new(ctx)?,
            form: AppointmentForm::new(ctx)?,
            services: ServiceListState::new(),
            panel: None,
            next_mount: 1,
            config,
            events,
            feed_factory,
            notice: None,
            should_quit: false,
        })
    }

    /// Swap the status feed used by future panel mounts.
    pub fn with_feed_factory(mut self, feed_factory: FeedFactory) -> Self {
        self.feed_factory = feed_factory;
        self
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn panel(&self) -> Option<&MountedPanel> {
        self.panel.as_ref()
    }

    /// Last write wins. Leaving the panel tears it down; entering it mounts
    /// a fresh one from seed data.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        debug!("Navigating {:?} -> {:?}", self.page, page);

        if self.page == Page::Panel {
            self.unmount_panel();
        }
        self.page = page;
        self.notice = None;
        if page == Page::Panel {
            self.mount_panel();
        }
    }

    /// Attach `doctor` to the form and show the contact page in one step.
    pub fn select_doctor(&mut self, doctor: Doctor) {
        info!("Selected {}", doctor.name);
        self.form.attach(doctor);
        self.navigate(Page::Contact);
    }

    pub fn select_highlighted_doctor(&mut self) {
        if let Some(doctor) = self.doctor_list.selected_doctor() {
            self.select_doctor(doctor);
        }
    }

    /// Submit the form and run the submission handler on the request.
    pub fn submit_appointment(&mut self) -> Option<AppointmentRequest> {
        match self.form.submit() {
            Ok(request) => {
                self.on_appointment(&request);
                Some(request)
            }
            Err(e) => {
                warn!("Appointment rejected: {}", e);
                self.notice = Some(format!("Cannot book appointment: {}", e));
                None
            }
        }
    }

    fn on_appointment(&mut self, request: &AppointmentRequest) {
        info!(
            "Appointment request: name={} email={} phone={} date={} doctor={}",
            request.name, request.email, request.phone, request.date, request.doctor.name
        );
        self.notice = Some(format!(
            "Appointment booked with {} on {}",
            request.doctor.name, request.date
        ));
        self.form.clear_doctor();
    }

    pub fn cycle_panel_filter(&mut self) {
        if let Some(mounted) = self.panel.as_mut() {
            let next = mounted.panel.filter().next();
            mounted.panel.set_filter(next);
        }
    }

    /// Apply an event produced by a background activity.
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ServicesLoaded(result) => self.services.finish(result),
            AppEvent::PatientUpdates { mount, changes } => match self.panel.as_mut() {
                Some(mounted) if mounted.mount() == mount => {
                    let applied = mounted.panel.apply(&changes);
                    debug!("Panel mount {}: applied {} changes", mount, applied);
                }
                _ => debug!("Dropping {} changes for stale panel mount {}", changes.len(), mount),
            },
            // Input is dispatched by the terminal layer
            AppEvent::Key(_) | AppEvent::Resize => {}
        }
    }

    fn mount_panel(&mut self) {
        let panel = PatientPanel::new(seed_patients());
        let mount = self.next_mount;
        self.next_mount += 1;

        let feed = spawn_status_feed(
            (self.feed_factory)(),
            panel.patient_ids(),
            self.config.panel_interval,
            mount,
            self.events.clone(),
        );
        debug!("Mounted patient panel {}", mount);
        self.panel = Some(MountedPanel { panel, feed });
    }

    fn unmount_panel(&mut self) {
        if let Some(mounted) = self.panel.take() {
            debug!("Unmounting patient panel {}", mounted.mount());
        }
    }

    /// Stop every running activity owned by the views.
    pub fn teardown(&mut self) {
        self.unmount_panel();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
