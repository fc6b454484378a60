use std::sync::Arc;

use flowdeck_catalog::Catalog;
use flowdeck_settings::{
  ClientEnvironment, FieldError, Initializer, ProviderConfig, ProviderRuntime,
};
use flowdeck_workflow::{
  ChannelNotifier, DragOutcome, EditorEvent, ModuleInstance, Toast, WorkflowEditor,
};
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::command::EditorCommand;
use crate::route::{NavLink, Route};

/// Options for creating a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
  pub catalog: Catalog,
  pub environment: ClientEnvironment,
  pub logged_in: bool,
}

impl Default for SessionOptions {
  fn default() -> Self {
    Self {
      catalog: Catalog::standard(),
      environment: ClientEnvironment::default(),
      logged_in: false,
    }
  }
}

/// Result of submitting the settings form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
  /// Required fields are empty. Shown inline, nothing else happens.
  Invalid(Vec<FieldError>),
  /// The provider rejected the configuration.
  Failed,
  /// The provider app is ready; the user is sent to `redirect`.
  Saved { redirect: Route },
}

/// State of one user session.
pub struct Session {
  id: Uuid,
  route: Route,
  menu_open: bool,
  logged_in: bool,
  editor: WorkflowEditor,
  provider: ProviderRuntime,
  events: mpsc::UnboundedReceiver<EditorEvent>,
  toasts: Vec<Toast>,
}

impl Session {
  pub fn new(options: SessionOptions) -> Self {
    let (notifier, events) = ChannelNotifier::channel();
    let id = Uuid::new_v4();
    info!(session_id = %id, "session started");

    Self {
      id,
      route: Route::default(),
      menu_open: false,
      logged_in: options.logged_in,
      editor: WorkflowEditor::with_notifier(options.catalog, Arc::new(notifier)),
      provider: ProviderRuntime::new(options.environment),
      events,
      toasts: Vec::new(),
    }
  }

  pub fn id(&self) -> Uuid {
    self.id
  }

  pub fn route(&self) -> Route {
    self.route
  }

  pub fn editor(&self) -> &WorkflowEditor {
    &self.editor
  }

  pub fn provider(&self) -> &ProviderRuntime {
    &self.provider
  }

  pub fn modules(&self) -> &[ModuleInstance] {
    self.editor.modules()
  }

  // Navigation

  pub fn is_menu_open(&self) -> bool {
    self.menu_open
  }

  pub fn toggle_menu(&mut self) {
    self.menu_open = !self.menu_open;
  }

  /// Go to `route`. Following any link closes the mobile menu.
  pub fn navigate(&mut self, route: Route) {
    self.route = route;
    self.menu_open = false;
  }

  pub fn is_logged_in(&self) -> bool {
    self.logged_in
  }

  pub fn set_logged_in(&mut self, logged_in: bool) {
    self.logged_in = logged_in;
  }

  /// Page links. Builder and Settings only appear once logged in.
  pub fn nav_links(&self) -> Vec<NavLink> {
    let routes: &[Route] = if self.logged_in {
      &[Route::Home, Route::Builder, Route::Settings]
    } else {
      &[Route::Home]
    };
    routes
      .iter()
      .map(|route| NavLink::new(*route, self.route))
      .collect()
  }

  pub fn auth_links(&self) -> Vec<NavLink> {
    let routes: &[Route] = if self.logged_in {
      &[Route::Logout]
    } else {
      &[Route::Login, Route::SignUp]
    };
    routes
      .iter()
      .map(|route| NavLink::new(*route, self.route))
      .collect()
  }

  // Workflow editing

  pub fn add_module(&mut self, kind_id: &str) -> Option<ModuleInstance> {
    let added = self.editor.append_by_id(kind_id).cloned();
    self.collect_events();
    added
  }

  pub fn remove_module(&mut self, id: &str) -> Option<ModuleInstance> {
    let removed = self.editor.remove(id);
    self.collect_events();
    removed
  }

  pub fn drag_end(&mut self, outcome: DragOutcome) -> bool {
    let moved = self.editor.apply_drag(outcome);
    self.collect_events();
    moved
  }

  /// Apply one editor command. Returns true when the workflow changed.
  pub fn run_command(&mut self, command: &EditorCommand) -> bool {
    match command {
      EditorCommand::Add { kind } => self.add_module(kind).is_some(),
      EditorCommand::Remove { id } => self.remove_module(id).is_some(),
      EditorCommand::Move { from, to } => self.drag_end(DragOutcome {
        source: *from,
        destination: *to,
      }),
      EditorCommand::List => false,
      EditorCommand::Clear => {
        let changed = !self.editor.is_empty();
        self.editor.clear();
        self.collect_events();
        changed
      }
    }
  }

  // Settings

  /// Validate and apply the settings form.
  ///
  /// Nothing changes unless initialization succeeds.
  #[instrument(skip_all, fields(session_id = %self.id))]
  pub fn submit_settings(
    &mut self,
    config: &ProviderConfig,
    initializer: &dyn Initializer,
  ) -> SubmitOutcome {
    if let Err(e) = config.validate() {
      info!(error = %e, "settings rejected");
      return SubmitOutcome::Invalid(e.field_errors().to_vec());
    }

    match self.provider.initialize(config, initializer) {
      Ok(_) => {
        self.push_toast(Toast::new(
          "Success",
          "Firebase configuration saved successfully",
        ));
        self.navigate(Route::Builder);
        SubmitOutcome::Saved {
          redirect: Route::Builder,
        }
      }
      Err(e) => {
        warn!(error = %e, "provider initialization failed");
        self.push_toast(Toast::destructive("Error", "Failed to initialize Firebase"));
        SubmitOutcome::Failed
      }
    }
  }

  // Toasts

  /// Take every pending toast, oldest first.
  pub fn drain_toasts(&mut self) -> Vec<Toast> {
    self.collect_events();
    std::mem::take(&mut self.toasts)
  }

  fn push_toast(&mut self, toast: Toast) {
    self.collect_events();
    self.toasts.push(toast);
  }

  fn collect_events(&mut self) {
    while let Ok(event) = self.events.try_recv() {
      self.toasts.extend(Toast::from_event(&event));
    }
  }
}

impl Default for Session {
  fn default() -> Self {
    Self::new(SessionOptions::default())
  }
}

#[cfg(test)]
mod tests {
  use flowdeck_settings::{InitError, ProviderApp, StandardInitializer};
  use flowdeck_workflow::ToastVariant;

  use super::*;

  fn complete_config() -> ProviderConfig {
    ProviderConfig {
      api_key: "key".to_string(),
      auth_domain: "demo.firebaseapp.com".to_string(),
      project_id: "demo".to_string(),
      storage_bucket: "demo.appspot.com".to_string(),
      messaging_sender_id: "123".to_string(),
      app_id: "1:123:web:abc".to_string(),
      database_url: Some(String::new()),
      measurement_id: None,
    }
  }

  struct FailingInitializer;

  impl Initializer for FailingInitializer {
    fn initialize(&self, _config: &ProviderConfig) -> Result<ProviderApp, InitError> {
      Err(InitError::Rejected {
        message: "bad key".to_string(),
      })
    }
  }

  #[test]
  fn test_navigate_closes_menu() {
    let mut session = Session::default();
    session.toggle_menu();
    assert!(session.is_menu_open());

    session.navigate(Route::Login);
    assert!(!session.is_menu_open());
    assert_eq!(session.route(), Route::Login);
  }

  #[test]
  fn test_nav_links_logged_out() {
    let session = Session::default();
    let labels: Vec<&str> = session.nav_links().iter().map(|l| l.label).collect();
    assert_eq!(labels, vec!["Home"]);
    assert!(session.nav_links()[0].active);

    let auth: Vec<&str> = session.auth_links().iter().map(|l| l.label).collect();
    assert_eq!(auth, vec!["Login", "Sign Up"]);
  }

  #[test]
  fn test_nav_links_logged_in() {
    let mut session = Session::new(SessionOptions {
      logged_in: true,
      ..SessionOptions::default()
    });
    session.navigate(Route::Settings);

    let links = session.nav_links();
    let labels: Vec<&str> = links.iter().map(|l| l.label).collect();
    assert_eq!(labels, vec!["Home", "Builder", "Settings"]);
    let active: Vec<&str> = links.iter().filter(|l| l.active).map(|l| l.href).collect();
    assert_eq!(active, vec!["/settings"]);

    let auth: Vec<&str> = session.auth_links().iter().map(|l| l.label).collect();
    assert_eq!(auth, vec!["Logout"]);
  }

  #[test]
  fn test_submit_invalid_settings() {
    let mut session = Session::default();
    let mut config = complete_config();
    config.project_id.clear();

    let outcome = session.submit_settings(&config, &StandardInitializer);

    match outcome {
      SubmitOutcome::Invalid(errors) => {
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Project ID is required");
      }
      other => panic!("expected Invalid, got {other:?}"),
    }
    assert!(session.drain_toasts().is_empty());
    assert!(!session.provider().is_initialized());
    assert_eq!(session.route(), Route::Home);
  }

  #[test]
  fn test_submit_failed_initialization() {
    let mut session = Session::default();
    let outcome = session.submit_settings(&complete_config(), &FailingInitializer);

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(!session.provider().is_initialized());
    assert_eq!(session.route(), Route::Home);
    assert_eq!(
      session.drain_toasts(),
      vec![Toast::destructive("Error", "Failed to initialize Firebase")]
    );
  }

  #[test]
  fn test_submit_saves_and_redirects() {
    let mut session = Session::default();
    session.navigate(Route::Settings);

    let outcome = session.submit_settings(&complete_config(), &StandardInitializer);

    assert_eq!(
      outcome,
      SubmitOutcome::Saved {
        redirect: Route::Builder
      }
    );
    assert_eq!(session.route(), Route::Builder);
    let services = session.provider().services().unwrap();
    assert_eq!(
      services.database_url,
      "https://demo-default-rtdb.firebaseio.com"
    );

    let toasts = session.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Success");
    assert_eq!(toasts[0].variant, ToastVariant::Default);
  }

  #[test]
  fn test_toasts_keep_emission_order() {
    let mut session = Session::default();
    session.add_module("auth");
    session.submit_settings(&complete_config(), &FailingInitializer);
    session.remove_module("auth-1");

    let titles: Vec<String> = session
      .drain_toasts()
      .into_iter()
      .map(|t| t.title)
      .collect();
    assert_eq!(titles, vec!["Module Added", "Error", "Module Removed"]);
    assert!(session.drain_toasts().is_empty());
  }

  #[test]
  fn test_remove_missing_module_still_toasts() {
    let mut session = Session::default();
    assert!(session.remove_module("auth-1").is_none());
    assert!(session.modules().is_empty());
    assert_eq!(
      session.drain_toasts(),
      vec![Toast::destructive(
        "Module Removed",
        "Module removed from workflow"
      )]
    );
  }

  #[test]
  fn test_run_command_clear() {
    let mut session = Session::default();
    session.add_module("auth");
    session.add_module("storage");
    session.drain_toasts();

    assert!(session.run_command(&EditorCommand::Clear));
    assert!(session.modules().is_empty());
    assert_eq!(session.drain_toasts().len(), 2);
    assert!(!session.run_command(&EditorCommand::Clear));
  }
}
