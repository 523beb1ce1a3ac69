use super::timestamp_from_nanos;
use crate::backend::{Principal, User};

pub const NO_EMAIL: &str = "No email provided";
pub const NO_BIO: &str = "No biography available.";

/// Read-only profile card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub principal: Principal,
    pub email: String,
    pub bio: String,
    /// Long-form registration date, e.g. `March 4, 2025`
    pub member_since: String,
    pub followers: usize,
    pub following: usize,
    pub designs: usize,
    pub has_avatar: bool,
    pub can_edit: bool,
}

impl ProfileView {
    pub fn from_user(user: &User, viewer: &Principal) -> Self {
        let email = user
            .email
            .as_deref()
            .filter(|email| !email.is_empty())
            .unwrap_or(NO_EMAIL);
        let bio = user
            .bio
            .as_deref()
            .filter(|bio| !bio.is_empty())
            .unwrap_or(NO_BIO);

        Self {
            name: user.name.clone(),
            principal: user.id.clone(),
            email: email.to_string(),
            bio: bio.to_string(),
            member_since: timestamp_from_nanos(user.register_date)
                .format("%B %-d, %Y")
                .to_string(),
            followers: user.followers.len(),
            following: user.following.len(),
            designs: user.designs.len(),
            has_avatar: user.avatar.as_ref().is_some_and(|avatar| !avatar.is_empty()),
            can_edit: !viewer.is_anonymous() && *viewer == user.id,
        }
    }
}
