use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Role, UserCreate, UserRecord};

impl Entity for UserRecord {
    type Id = String;
    type CreatePayload = UserCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String {
        &self.id
    }

    /// Registration always yields a customer.
    fn from_create(id: String, payload: UserCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            name: payload.name,
            email: payload.email,
            secret: payload.secret,
            role: Role::Customer,
        })
    }

    /// Emails are unique, compared case-sensitively.
    fn unique_key(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), FrameworkError> {
        Err(FrameworkError::Rejected("users are not patched".into()))
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), FrameworkError> {
        Err(FrameworkError::Rejected("users have no actions".into()))
    }
}
