use crate::backend::{BackendClient, BackendError};
use crate::design::RegisterForm;
use crate::session::Session;
use crate::studio::Toasts;

pub const WELCOME: &str = "Welcome to Design Guardian!";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// The registration page.
pub struct RegisterView;

impl RegisterView {
    /// Registers the session's principal through the page-scoped `client`.
    /// Returns the session carrying the new profile, or the unchanged session
    /// when validation or the call fails. A call cancelled by navigation is
    /// dropped without a notice.
    pub async fn submit(
        session: Session,
        client: &BackendClient,
        form: &RegisterForm,
        toasts: &mut Toasts,
    ) -> Session {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => {
                toasts.error(err.to_string());
                return session;
            }
        };

        match client.register(request).await {
            Ok(user) => {
                toasts.success(WELCOME);
                session.with_user(user)
            }
            Err(BackendError::Cancelled(_)) => {
                log::debug!("Registration abandoned by navigation");
                session
            }
            Err(err) => {
                log::error!("Registration failed: {}", err);
                toasts.error(REGISTRATION_FAILED);
                session
            }
        }
    }
}
