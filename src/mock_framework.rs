//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_list`] or [`expect_remove_where`] to assert
//! behavior and answer on the actor's behalf.

use crate::actor_framework::{Entity, Predicate, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The receiver stands in for the actor, so a test decides what each request
/// answers (success, failure or nothing at all).
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a bulk removal
pub async fn expect_remove_where<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Predicate<T>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::RemoveWhere { predicate, respond_to }) => Some((predicate, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::UserClient;
    use crate::domain::{Role, UserRecord};
    use crate::user_actor::UserError;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<UserRecord>(10);
        let client = UserClient::new(inner);

        let register_task = tokio::spawn(async move { client.register("Test", "test@example.com", "pw").await });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        assert!(payload.secret.matches("pw"));
        let stored = UserRecord::seeded("user-9", "Test", "test@example.com", "pw", Role::Customer);
        responder.send(Ok(stored)).unwrap();

        let profile = register_task.await.unwrap().unwrap();
        assert_eq!(profile.id, "user-9");
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_communication_error() {
        let (inner, mut receiver) = create_mock_client::<UserRecord>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move { client.list_users().await });
        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        drop(responder);

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, UserError::ActorCommunicationError(_)));
    }
}
