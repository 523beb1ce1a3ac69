//! Page router and the data behind each page.
//!
//! Views are plain data built from the session and backend; the host renders
//! them. The [`Router`] owns the cancellation scope of the page on screen, so
//! leaving a page aborts whatever it was still waiting on.

mod dashboard;
mod gallery;
mod profile;
mod register;

pub use dashboard::{DashboardStats, DashboardView, PatternCard};
pub use gallery::GalleryView;
pub use profile::ProfileView;
pub use register::RegisterView;

use crate::backend::{BackendClient, CancelScope};
use crate::session::Session;
use chrono::{DateTime, Utc};
use std::fmt;

/// The app's pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Gallery,
    Dashboard,
    Design,
    Profile,
    Register,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Gallery,
        Page::Dashboard,
        Page::Design,
        Page::Profile,
        Page::Register,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Page::Gallery => "gallery",
            Page::Dashboard => "dashboard",
            Page::Design => "design",
            Page::Profile => "profile",
            Page::Register => "register",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|page| page.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Pages that only make sense with a registered profile.
    pub fn requires_user(self) -> bool {
        matches!(self, Page::Design | Page::Profile)
    }

    /// Landing page for `session` when no valid page was requested.
    pub fn home(session: &Session) -> Self {
        if session.user().is_some() {
            Page::Dashboard
        } else {
            Page::Gallery
        }
    }

    /// The page actually shown when `self` is requested.
    pub fn resolve(self, session: &Session) -> Self {
        if !self.requires_user() || session.user().is_some() {
            self
        } else if session.needs_registration() {
            Page::Register
        } else {
            Page::Gallery
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tracks the current page and the scope its backend calls run under.
#[derive(Debug)]
pub struct Router {
    current: Page,
    scope: CancelScope,
    client: Option<BackendClient>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Page::default(),
            scope: CancelScope::new(),
            client: None,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn scope(&self) -> &CancelScope {
        &self.scope
    }

    /// Client bound to the current page's scope. `None` before the first
    /// navigation.
    pub fn client(&self) -> Option<&BackendClient> {
        self.client.as_ref()
    }

    /// Moves to `page` (or the page it resolves to), cancelling every call the
    /// previous page still has in flight.
    pub fn navigate(&mut self, page: Page, session: &Session) -> Page {
        let resolved = page.resolve(session);
        if resolved != page {
            log::debug!("Route {} redirected to {}", page, resolved);
        }

        self.scope.cancel();
        self.scope = CancelScope::new();
        self.client = Some(session.client().with_scope(self.scope.clone()));
        self.current = resolved;
        log::info!("Navigated to {}", resolved);
        resolved
    }

    /// Navigates by page name. Unknown names land on the session's home page.
    pub fn navigate_named(&mut self, name: &str, session: &Session) -> Page {
        let page = Page::from_name(name).unwrap_or_else(|| Page::home(session));
        self.navigate(page, session)
    }
}

/// Backend timestamps are nanoseconds since the Unix epoch.
pub(crate) fn timestamp_from_nanos(nanos: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_nanos(nanos)
}
