//! Async actions spawned from user input.
//!
//! Each action validates locally where needed, then spawns a task that
//! performs the API call and reports back through the [`AppMessage`]
//! channel. No action runs in parallel with itself; the `submitting`
//! and `loading` flags gate re-entry from the key handlers.

use std::path::PathBuf;
use std::sync::Arc;

use super::messages::AppMessage;
use super::types::Notice;
use super::App;
use crate::models::{ProfileUpdateRequest, RegisterRequest, UploadEntry};
use crate::traits::{CredentialsProvider, HttpClient};
use crate::upload::{load_file, run_upload_batch};
use crate::validate;

impl<C, P> App<C, P>
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    /// Run the startup session restore.
    pub fn restore_session(&mut self) {
        self.loading = true;
        let session = Arc::clone(&self.session);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match session.restore().await {
                Ok(identity) => {
                    let _ = tx.send(AppMessage::SessionRestored(identity));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::SessionRestoreFailed(e.to_string()));
                }
            }
        });
    }

    /// Submit the login form.
    pub fn submit_login(&mut self) {
        if self.login_form.submitting {
            return;
        }
        let email = self.login_form.email.value().trim().to_string();
        let password = self.login_form.password.value().to_string();

        if let Err(message) = validate::validate_login(&email, &password) {
            self.login_form.error = Some(message);
            return;
        }
        self.login_form.error = None;
        self.login_form.submitting = true;

        let session = Arc::clone(&self.session);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match session.login(&email, &password).await {
                Ok(identity) => {
                    let _ = tx.send(AppMessage::LoginSucceeded(identity));
                }
                Err(e) => {
                    let message = if e.is_unauthorized() {
                        "Invalid credentials".to_string()
                    } else {
                        e.to_string()
                    };
                    let _ = tx.send(AppMessage::LoginFailed(message));
                }
            }
        });
    }

    /// Submit the registration form.
    pub fn submit_register(&mut self) {
        if self.register_form.submitting {
            return;
        }
        let email = self.register_form.email.value().trim().to_string();
        let password = self.register_form.password.value().to_string();
        let full_name = self.register_form.full_name.value().trim().to_string();
        let firm_name = self.register_form.firm_name.value().trim().to_string();

        if let Err(message) =
            validate::validate_register(&email, &password, &full_name, &firm_name)
        {
            self.register_form.error = Some(message);
            return;
        }
        self.register_form.error = None;
        self.register_form.submitting = true;

        let request = RegisterRequest {
            email,
            password,
            full_name,
            firm_name,
        };
        let session = Arc::clone(&self.session);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match session.register(request).await {
                Ok(identity) => {
                    let _ = tx.send(AppMessage::RegisterSucceeded(identity));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::RegisterFailed(e.to_string()));
                }
            }
        });
    }

    /// Submit the profile form.
    pub fn submit_profile(&mut self) {
        if self.profile_form.submitting {
            return;
        }
        let email = self.profile_form.email.value().trim().to_string();
        let full_name = self.profile_form.full_name.value().trim().to_string();
        let firm_name = self.profile_form.firm_name.value().trim().to_string();

        if let Err(message) = validate::validate_profile(&email, &full_name, &firm_name) {
            self.profile_form.error = Some(message);
            return;
        }
        self.profile_form.error = None;
        self.profile_form.submitting = true;

        let request = ProfileUpdateRequest {
            full_name: Some(full_name),
            firm_name: Some(firm_name),
            email: Some(email),
        };
        let session = Arc::clone(&self.session);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match session.api().update_profile(&request).await {
                Ok(response) => {
                    let _ = tx.send(AppMessage::ProfileUpdated(response.user));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::ProfileUpdateFailed(e.to_string()));
                }
            }
        });
    }

    /// Sign out and return to the login screen.
    pub fn logout(&mut self) {
        let session = Arc::clone(&self.session);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            session.logout().await;
            let _ = tx.send(AppMessage::LoggedOut);
        });
    }

    /// Fetch the document list.
    pub fn load_documents(&mut self) {
        let session = Arc::clone(&self.session);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match session.api().list_documents().await {
                Ok(documents) => {
                    let _ = tx.send(AppMessage::DocumentsLoaded(documents));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::DocumentsLoadFailed(e.to_string()));
                }
            }
        });
    }

    /// Open a document's detail view and fetch it.
    pub fn open_document(&mut self, id: String) {
        self.navigate(super::Screen::DocumentDetail);
        let session = Arc::clone(&self.session);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match session.api().get_document(&id).await {
                Ok(document) => {
                    let _ = tx.send(AppMessage::DocumentLoaded(document));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::DocumentLoadFailed {
                        id,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Fetch the report list.
    pub fn load_reports(&mut self) {
        let session = Arc::clone(&self.session);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match session.api().list_reports().await {
                Ok(reports) => {
                    let _ = tx.send(AppMessage::ReportsLoaded(reports));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::ReportsLoadFailed(e.to_string()));
                }
            }
        });
    }

    /// Open a report's detail view and fetch it once. Polling starts from
    /// the message handler if the fetched status is still processing.
    pub fn open_report(&mut self, id: String) {
        self.navigate(super::Screen::ReportDetail);
        let session = Arc::clone(&self.session);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match session.api().get_report(&id).await {
                Ok(report) => {
                    let _ = tx.send(AppMessage::ReportLoaded(report));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::ReportLoadFailed {
                        id,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Request report generation from the ticked documents.
    pub fn generate_report(&mut self) {
        if self.selected_documents.is_empty() {
            self.notify(Notice::error("Select at least one document first"));
            return;
        }
        let document_ids: Vec<String> = self.selected_documents.iter().cloned().collect();
        self.selected_documents.clear();

        let session = Arc::clone(&self.session);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match session.api().generate_report(document_ids).await {
                Ok(response) => {
                    let _ = tx.send(AppMessage::ReportGenerated { id: response.id });
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::ReportGenerateFailed(e.to_string()));
                }
            }
        });
    }

    /// Upload the given files sequentially.
    ///
    /// One [`UploadEntry`] is staged per path before any work starts, so
    /// the list renders immediately. Files that cannot be read are failed
    /// in place; the rest are handed to the sequential batch runner with
    /// their staged indices.
    pub fn start_upload(&mut self, paths: Vec<PathBuf>) {
        if self.uploading || paths.is_empty() {
            return;
        }
        self.uploading = true;
        self.uploads = paths
            .iter()
            .map(|path| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                UploadEntry::new(name, size)
            })
            .collect();

        let session = Arc::clone(&self.session);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let mut files = Vec::new();
            for (index, path) in paths.iter().enumerate() {
                match load_file(path).await {
                    Ok(file) => files.push((index, file)),
                    Err(e) => {
                        let _ = tx.send(AppMessage::UploadFinished {
                            index,
                            result: Err(format!("Could not read file: {}", e)),
                        });
                    }
                }
            }
            let _ = run_upload_batch(session.api().clone(), files, tx.clone()).await;
        });
    }
}
