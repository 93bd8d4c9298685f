//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`AppMessage`] - Messages for async communication
//! - [`Notice`] - Transient status banners

mod actions;
mod handlers;
pub mod messages;
pub mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{
    LoginField, LoginForm, Notice, NoticeKind, ProfileField, ProfileForm, RegisterField,
    RegisterForm, Screen, TextField,
};

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::models::{Document, Identity, Report, ReportSummary, UploadEntry};
use crate::polling::PollHandle;
use crate::session::SessionStore;
use crate::traits::{CredentialsProvider, HttpClient};

/// How long a notice stays on screen before it is dismissed.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Main application state.
pub struct App<C, P>
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    /// Session flows and API access
    pub session: Arc<SessionStore<C, P>>,
    /// Signed-in identity; `None` means logged out
    pub identity: Option<Identity>,
    /// A session/auth operation is in flight
    pub loading: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Transient banner
    pub notice: Option<Notice>,

    /// Login form state
    pub login_form: LoginForm,
    /// Registration form state
    pub register_form: RegisterForm,
    /// Profile form state
    pub profile_form: ProfileForm,

    /// Cached document list
    pub documents: Vec<Document>,
    /// Selected row in the document list
    pub documents_index: usize,
    /// Document IDs ticked for report generation
    pub selected_documents: HashSet<String>,
    /// Currently open document detail
    pub document_detail: Option<Document>,

    /// Cached report list
    pub reports: Vec<ReportSummary>,
    /// Selected row in the report list
    pub reports_index: usize,
    /// Currently open report detail
    pub report_detail: Option<Report>,
    /// Active report poll, if any; dropping it stops the poll
    pub poll: Option<PollHandle>,
    /// Interval between report polls
    pub poll_interval: Duration,

    /// Upload batch state, one entry per file
    pub uploads: Vec<UploadEntry>,
    /// An upload batch is in flight
    pub uploading: bool,
    /// Path input on the upload screen
    pub upload_input: TextField,
    /// Paths staged on the upload screen, uploaded on start
    pub pending_upload_paths: Vec<std::path::PathBuf>,

    /// Sender handed to async tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl<C, P> App<C, P>
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    /// Create a new App with the given session store and message channel.
    pub fn new(
        session: Arc<SessionStore<C, P>>,
        poll_interval: Duration,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            session,
            identity: None,
            loading: true,
            screen: Screen::Login,
            should_quit: false,
            notice: None,
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            profile_form: ProfileForm::default(),
            documents: Vec::new(),
            documents_index: 0,
            selected_documents: HashSet::new(),
            document_detail: None,
            reports: Vec::new(),
            reports_index: 0,
            report_detail: None,
            poll: None,
            poll_interval,
            uploads: Vec::new(),
            uploading: false,
            upload_input: TextField::new(),
            pending_upload_paths: Vec::new(),
            message_tx,
        }
    }

    /// Whether an identity is present.
    pub fn signed_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Navigate to a screen, subject to the auth gate.
    ///
    /// Leaving the report detail drops any active poll.
    pub fn navigate(&mut self, requested: Screen) {
        let resolved = navigation::resolve_screen(requested, self.signed_in());

        if resolved != Screen::ReportDetail {
            self.poll = None;
            self.report_detail = None;
        }
        if resolved != Screen::DocumentDetail {
            self.document_detail = None;
        }

        match resolved {
            Screen::Documents => self.load_documents(),
            Screen::Reports => self.load_reports(),
            Screen::Profile => {
                if let Some(identity) = &self.identity {
                    self.profile_form = ProfileForm::from_identity(identity);
                }
            }
            Screen::Upload => {
                if !self.uploading {
                    self.uploads.clear();
                    self.upload_input.clear();
                    self.pending_upload_paths.clear();
                }
            }
            _ => {}
        }

        self.screen = resolved;
    }

    /// Raise a transient notice, replacing any current one.
    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Dismiss the notice once its time is up. Called on tick.
    pub fn expire_notice(&mut self) {
        if let Some(notice) = &self.notice {
            if notice.raised_at.elapsed() >= NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
