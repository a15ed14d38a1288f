use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::domain::{Secret, UserCreate, UserProfile, UserRecord};
use crate::user_actor::UserError;

/// Client for the identity store.
///
/// Stored records carry the credential; everything leaving this client is a
/// [`UserProfile`].
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<UserRecord>,
}

impl_client_new!(UserClient, UserRecord);

impl UserClient {
    /// Exact match on both email and secret, or `None`.
    #[instrument(skip(self, secret))]
    pub async fn authenticate(&self, email: &str, secret: &str) -> Result<Option<UserProfile>, UserError> {
        debug!("Sending request");
        let users = self.inner.list().await?;
        let profile = users
            .iter()
            .find(|user| user.email == email && user.secret.matches(secret))
            .map(UserRecord::profile);

        match &profile {
            Some(user) => info!(user_id = %user.id, "User authenticated"),
            None => warn!("Authentication failed"),
        }
        Ok(profile)
    }

    /// Registers a customer. Fails with `AlreadyExists` if the email is taken.
    #[instrument(skip(self, secret))]
    pub async fn register(&self, name: &str, email: &str, secret: &str) -> Result<UserProfile, UserError> {
        debug!("Sending request");
        let payload = UserCreate {
            name: name.to_string(),
            email: email.to_string(),
            secret: Secret::new(secret),
        };
        let record = self.inner.create(payload).await?;
        info!(user_id = %record.id, "User registered");
        Ok(record.profile())
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, UserError> {
        debug!("Sending request");
        let users = self.inner.list().await?;
        Ok(users.iter().map(UserRecord::profile).collect())
    }

    /// Removes every user with this email. Returns how many were removed.
    #[instrument(skip(self))]
    pub async fn remove_by_email(&self, email: &str) -> Result<usize, UserError> {
        debug!("Sending request");
        let target = email.to_string();
        let removed = self.inner.remove_where(move |user: &UserRecord| user.email == target).await?;
        Ok(removed.len())
    }
}
