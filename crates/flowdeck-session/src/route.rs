use serde::{Deserialize, Serialize};

/// Pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
  #[default]
  Home,
  Builder,
  Settings,
  Login,
  SignUp,
  Logout,
}

impl Route {
  pub const ALL: [Route; 6] = [
    Route::Home,
    Route::Builder,
    Route::Settings,
    Route::Login,
    Route::SignUp,
    Route::Logout,
  ];

  pub fn href(&self) -> &'static str {
    match self {
      Route::Home => "/",
      Route::Builder => "/builder",
      Route::Settings => "/settings",
      Route::Login => "/login",
      Route::SignUp => "/signup",
      Route::Logout => "/logout",
    }
  }

  /// Link text shown in the navigation bar.
  pub fn label(&self) -> &'static str {
    match self {
      Route::Home => "Home",
      Route::Builder => "Builder",
      Route::Settings => "Settings",
      Route::Login => "Login",
      Route::SignUp => "Sign Up",
      Route::Logout => "Logout",
    }
  }

  pub fn from_href(href: &str) -> Option<Route> {
    Route::ALL.into_iter().find(|r| r.href() == href)
  }
}

/// A navigation entry as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
  pub route: Route,
  pub label: &'static str,
  pub href: &'static str,
  /// True when the link points at the current route.
  pub active: bool,
  /// Rendered as a primary button rather than an outline.
  pub primary: bool,
}

impl NavLink {
  pub(crate) fn new(route: Route, current: Route) -> Self {
    Self {
      route,
      label: route.label(),
      href: route.href(),
      active: route == current,
      primary: route == Route::SignUp,
    }
  }
}
