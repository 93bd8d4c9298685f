//! Message and key event handlers for the App.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::messages::AppMessage;
use super::types::{Notice, Screen};
use super::App;
use crate::models::ReportStatus;
use crate::polling::start_report_polling;
use crate::traits::{CredentialsProvider, HttpClient};

impl<C, P> App<C, P>
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    /// Apply a message from an async task to the app state.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SessionRestored(identity) => {
                self.loading = false;
                if let Some(identity) = identity {
                    self.identity = Some(identity);
                    self.navigate(Screen::Dashboard);
                }
            }
            AppMessage::SessionRestoreFailed(error) => {
                // Unreachable server at startup is a silent logged-out start.
                tracing::warn!("session restore failed: {}", error);
                self.loading = false;
            }
            AppMessage::LoginSucceeded(identity) => {
                self.login_form = Default::default();
                self.identity = Some(identity);
                self.navigate(Screen::Dashboard);
            }
            AppMessage::LoginFailed(error) => {
                self.login_form.submitting = false;
                self.login_form.error = Some(error);
            }
            AppMessage::RegisterSucceeded(identity) => {
                self.register_form = Default::default();
                self.identity = Some(identity);
                self.navigate(Screen::Dashboard);
                self.notify(Notice::success("Account created"));
            }
            AppMessage::RegisterFailed(error) => {
                self.register_form.submitting = false;
                self.register_form.error = Some(error);
            }
            AppMessage::LoggedOut => {
                self.identity = None;
                self.documents.clear();
                self.selected_documents.clear();
                self.reports.clear();
                self.report_detail = None;
                self.document_detail = None;
                self.poll = None;
                self.login_form = Default::default();
                self.register_form = Default::default();
                self.navigate(Screen::Login);
            }

            AppMessage::DocumentsLoaded(documents) => {
                self.documents = documents;
                if self.documents_index >= self.documents.len() {
                    self.documents_index = self.documents.len().saturating_sub(1);
                }
            }
            AppMessage::DocumentsLoadFailed(error) => {
                self.notify(Notice::error(format!("Could not load documents: {}", error)));
            }
            AppMessage::DocumentLoaded(document) => {
                if self.screen == Screen::DocumentDetail {
                    self.document_detail = Some(document);
                }
            }
            AppMessage::DocumentLoadFailed { id, error } => {
                tracing::warn!("document {} load failed: {}", id, error);
                self.notify(Notice::error(format!("Could not load document: {}", error)));
            }
            AppMessage::UploadFinished { index, result } => {
                if let Some(entry) = self.uploads.get_mut(index) {
                    match result {
                        Ok(response) => entry.succeed(response.id),
                        Err(error) => entry.fail(error),
                    }
                }
            }
            AppMessage::UploadBatchDone => {
                self.uploading = false;
                let succeeded = self.uploads.iter().filter(|e| e.is_success()).count();
                self.notify(Notice::success(format!(
                    "Uploaded {} of {} file(s)",
                    succeeded,
                    self.uploads.len()
                )));
            }

            AppMessage::ReportsLoaded(reports) => {
                self.reports = reports;
                if self.reports_index >= self.reports.len() {
                    self.reports_index = self.reports.len().saturating_sub(1);
                }
            }
            AppMessage::ReportsLoadFailed(error) => {
                self.notify(Notice::error(format!("Could not load reports: {}", error)));
            }
            AppMessage::ReportLoaded(report) => self.apply_report(report),
            AppMessage::ReportLoadFailed { id, error } => {
                if self.poll.as_ref().is_some_and(|p| p.report_id() == id) {
                    self.poll = None;
                }
                self.notify(Notice::error(format!("Could not load report: {}", error)));
            }
            AppMessage::ReportGenerated { id } => {
                self.notify(Notice::success("Report generation started"));
                self.open_report(id);
            }
            AppMessage::ReportGenerateFailed(error) => {
                self.notify(Notice::error(format!("Could not generate report: {}", error)));
            }

            AppMessage::ProfileUpdated(identity) => {
                self.profile_form.submitting = false;
                self.identity = Some(identity);
                self.notify(Notice::success("Profile updated"));
            }
            AppMessage::ProfileUpdateFailed(error) => {
                self.profile_form.submitting = false;
                self.profile_form.error = Some(error);
            }
        }
    }

    /// Apply a fetched report: update the detail view and list row, and
    /// start or stop polling based on its status.
    fn apply_report(&mut self, report: crate::models::Report) {
        if let Some(row) = self.reports.iter_mut().find(|r| r.id == report.id) {
            row.status = report.status;
        }

        if self.screen != Screen::ReportDetail {
            // A stale poll result after leaving the view; the poll handle
            // is already gone.
            return;
        }

        let id = report.id.clone();
        let status = report.status;
        self.report_detail = Some(report);

        match status {
            ReportStatus::Processing => {
                let already_polling = self.poll.as_ref().is_some_and(|p| p.report_id() == id);
                if !already_polling {
                    self.poll = Some(start_report_polling(
                        self.session.api().clone(),
                        id,
                        self.poll_interval,
                        self.message_tx.clone(),
                    ));
                }
            }
            _ => {
                self.poll = None;
            }
        }
    }

    /// Apply a key press to the app state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from anywhere.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Register => self.handle_register_key(key),
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::Documents => self.handle_documents_key(key),
            Screen::DocumentDetail => self.handle_document_detail_key(key),
            Screen::Upload => self.handle_upload_key(key),
            Screen::Reports => self.handle_reports_key(key),
            Screen::ReportDetail => self.handle_report_detail_key(key),
            Screen::Profile => self.handle_profile_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.login_form.next_field(),
            KeyCode::Enter => self.submit_login(),
            KeyCode::Esc => self.quit(),
            KeyCode::F(2) => self.navigate(Screen::Register),
            KeyCode::Backspace => self.login_form.focused_field().backspace(),
            KeyCode::Left => self.login_form.focused_field().move_left(),
            KeyCode::Right => self.login_form.focused_field().move_right(),
            KeyCode::Char(c) => self.login_form.focused_field().insert(c),
            _ => {}
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.register_form.next_field(),
            KeyCode::Enter => self.submit_register(),
            KeyCode::Esc => self.navigate(Screen::Login),
            KeyCode::Backspace => self.register_form.focused_field().backspace(),
            KeyCode::Left => self.register_form.focused_field().move_left(),
            KeyCode::Right => self.register_form.focused_field().move_right(),
            KeyCode::Char(c) => self.register_form.focused_field().insert(c),
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('d') => self.navigate(Screen::Documents),
            KeyCode::Char('r') => self.navigate(Screen::Reports),
            KeyCode::Char('u') => self.navigate(Screen::Upload),
            KeyCode::Char('p') => self.navigate(Screen::Profile),
            KeyCode::Char('s') => self.logout(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_documents_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.documents_index = self.documents_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.documents.is_empty() && self.documents_index < self.documents.len() - 1 {
                    self.documents_index += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(doc) = self.documents.get(self.documents_index) {
                    let id = doc.id.clone();
                    self.open_document(id);
                }
            }
            KeyCode::Char(' ') => self.toggle_document_selection(),
            KeyCode::Char('g') => self.generate_report(),
            KeyCode::Char('r') => self.load_documents(),
            KeyCode::Char('u') => self.navigate(Screen::Upload),
            KeyCode::Esc => self.navigate(Screen::Dashboard),
            _ => {}
        }
    }

    fn toggle_document_selection(&mut self) {
        if let Some(doc) = self.documents.get(self.documents_index) {
            let id = doc.id.clone();
            if !self.selected_documents.remove(&id) {
                self.selected_documents.insert(id);
            }
        }
    }

    fn handle_document_detail_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
            self.navigate(Screen::Documents);
        }
    }

    fn handle_upload_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let path = self.upload_input.value().trim().to_string();
                if !path.is_empty() {
                    self.pending_upload_paths.push(PathBuf::from(path));
                    self.upload_input.clear();
                } else if !self.pending_upload_paths.is_empty() {
                    let paths = std::mem::take(&mut self.pending_upload_paths);
                    self.start_upload(paths);
                } else if !self.uploading && self.uploads.iter().any(|e| e.is_success()) {
                    // Done here; the new documents are in the list.
                    self.navigate(Screen::Documents);
                }
            }
            KeyCode::Esc => {
                if self.uploading {
                    self.notify(Notice::info("Upload in progress"));
                } else {
                    self.navigate(Screen::Documents);
                }
            }
            KeyCode::Backspace => self.upload_input.backspace(),
            KeyCode::Left => self.upload_input.move_left(),
            KeyCode::Right => self.upload_input.move_right(),
            KeyCode::Char(c) => self.upload_input.insert(c),
            _ => {}
        }
    }

    fn handle_reports_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.reports_index = self.reports_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.reports.is_empty() && self.reports_index < self.reports.len() - 1 {
                    self.reports_index += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(report) = self.reports.get(self.reports_index) {
                    let id = report.id.clone();
                    self.open_report(id);
                }
            }
            KeyCode::Char('r') => self.load_reports(),
            KeyCode::Esc => self.navigate(Screen::Dashboard),
            _ => {}
        }
    }

    fn handle_report_detail_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
            self.navigate(Screen::Reports);
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.profile_form.next_field(),
            KeyCode::Enter => self.submit_profile(),
            KeyCode::Esc => self.navigate(Screen::Dashboard),
            KeyCode::Backspace => self.profile_form.focused_field().backspace(),
            KeyCode::Left => self.profile_form.focused_field().move_left(),
            KeyCode::Right => self.profile_form.focused_field().move_right(),
            KeyCode::Char(c) => self.profile_form.focused_field().insert(c),
            _ => {}
        }
    }
}
