use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Failures surfaced by a [`ResourceActor`] or the channel in front of it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, FrameworkError>;

    /// Key that must be unique across the collection, if the entity has one.
    fn unique_key(&self) -> Option<&str> {
        None
    }

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), FrameworkError> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), FrameworkError>;
    fn on_delete(&self) -> Result<(), FrameworkError> {
        Ok(())
    }

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, FrameworkError>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Selection used by bulk removal.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    RemoveWhere {
        predicate: Predicate<T>,
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns one collection and serializes every read and write against it.
///
/// Records are kept in insertion order with the newest at the front.
pub struct ResourceActor<T: Entity> {
    name: &'static str,
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        name: &'static str,
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            name,
            receiver,
            store: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Seeds the collection before the actor is spawned. Storage order is kept.
    /// Ids and unique keys are checked the same way `create` checks them.
    pub fn with_records(mut self, records: Vec<T>) -> Result<Self, FrameworkError> {
        for (idx, record) in records.iter().enumerate() {
            let earlier = &records[..idx];
            if earlier.iter().any(|seen| seen.id() == record.id()) {
                warn!(resource = self.name, id = %record.id(), "Duplicate id in seed");
                return Err(FrameworkError::AlreadyExists(record.id().to_string()));
            }
            if let Some(key) = record.unique_key() {
                if earlier.iter().any(|seen| seen.unique_key() == Some(key)) {
                    warn!(resource = self.name, %key, "Duplicate unique key in seed");
                    return Err(FrameworkError::AlreadyExists(key.to_string()));
                }
            }
        }
        self.store = records;
        Ok(self)
    }

    #[instrument(name = "resource_actor", skip(self), fields(resource = self.name))]
    pub async fn run(mut self) {
        info!(records = self.store.len(), "Actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|idx| self.store[idx].clone());
                    debug!(%id, found = item.is_some(), "Processing get request");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(records = self.store.len(), "Processing list request");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
                ResourceRequest::RemoveWhere { predicate, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_remove_where(predicate)));
                }
            }
        }

        info!("Actor stopped");
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    fn fresh_id(&self) -> T::Id {
        let mut id = (self.next_id_fn)();
        while self.position(&id).is_some() {
            debug!(%id, "Generated id collides, retrying");
            id = (self.next_id_fn)();
        }
        id
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let id = self.fresh_id();
        let mut item = T::from_create(id.clone(), payload)?;
        item.on_create()?;

        if let Some(key) = item.unique_key() {
            if self.store.iter().any(|existing| existing.unique_key() == Some(key)) {
                warn!(%id, "Create rejected: unique key already taken");
                return Err(FrameworkError::AlreadyExists(key.to_string()));
            }
        }

        self.store.insert(0, item.clone());
        info!(%id, "Item created");
        Ok(item)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let Some(idx) = self.position(&id) else {
            warn!(%id, "Update on missing item");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        let item = &mut self.store[idx];
        item.on_update(patch)?;
        info!(%id, "Item updated");
        Ok(item.clone())
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        let Some(idx) = self.position(&id) else {
            warn!(%id, "Delete on missing item");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        self.store[idx].on_delete()?;
        self.store.remove(idx);
        info!(%id, "Item deleted");
        Ok(())
    }

    fn handle_action(&mut self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let Some(idx) = self.position(&id) else {
            warn!(%id, "Action on missing item");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        debug!(%id, ?action, "Processing action");
        self.store[idx].handle_action(action)
    }

    fn handle_remove_where(&mut self, predicate: Predicate<T>) -> Vec<T> {
        let (removed, kept): (Vec<T>, Vec<T>) =
            std::mem::take(&mut self.store).into_iter().partition(|item| predicate(item));
        self.store = kept;
        info!(removed = removed.len(), "Bulk removal done");
        removed
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    pub async fn remove_where(
        &self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T>, FrameworkError> {
        let predicate: Predicate<T> = Box::new(predicate);
        self.request(|respond_to| ResourceRequest::RemoveWhere { predicate, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        title: String,
        pinned: bool,
    }

    #[derive(Debug)]
    struct NoteCreate {
        title: String,
    }

    #[derive(Debug)]
    struct NotePatch {
        title: Option<String>,
    }

    #[derive(Debug)]
    enum NoteAction {
        Pin,
    }

    impl Entity for Note {
        type Id = String;
        type CreatePayload = NoteCreate;
        type Patch = NotePatch;
        type Action = NoteAction;
        type ActionResult = bool;

        fn id(&self) -> &String {
            &self.id
        }

        fn from_create(id: String, payload: NoteCreate) -> Result<Self, FrameworkError> {
            Ok(Self { id, title: payload.title, pinned: false })
        }

        fn unique_key(&self) -> Option<&str> {
            Some(&self.title)
        }

        fn on_update(&mut self, patch: NotePatch) -> Result<(), FrameworkError> {
            if let Some(title) = patch.title {
                self.title = title;
            }
            Ok(())
        }

        fn handle_action(&mut self, action: NoteAction) -> Result<bool, FrameworkError> {
            match action {
                NoteAction::Pin => {
                    let changed = !self.pinned;
                    self.pinned = true;
                    Ok(changed)
                }
            }
        }
    }

    fn spawn_notes() -> ResourceClient<Note> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("note_{}", counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::new("notes", 10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_create_inserts_at_front_and_actions_mutate() {
        let client = spawn_notes();

        let first = client.create(NoteCreate { title: "a".into() }).await.unwrap();
        let second = client.create(NoteCreate { title: "b".into() }).await.unwrap();

        let listed = client.list().await.unwrap();
        assert_eq!(listed, vec![second.clone(), first.clone()]);

        assert!(client.perform_action(first.id.clone(), NoteAction::Pin).await.unwrap());
        assert!(!client.perform_action(first.id.clone(), NoteAction::Pin).await.unwrap());
        assert!(client.get(first.id).await.unwrap().unwrap().pinned);
    }

    #[tokio::test]
    async fn test_unique_key_conflict_leaves_store_untouched() {
        let client = spawn_notes();
        client.create(NoteCreate { title: "dup".into() }).await.unwrap();

        let err = client.create(NoteCreate { title: "dup".into() }).await.unwrap_err();
        assert_eq!(err, FrameworkError::AlreadyExists("dup".into()));
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generated_id_collision_is_retried() {
        let counter = Arc::new(AtomicU64::new(0));
        // Yields "n0", "n0", "n1", ...
        let next_id = move || format!("n{}", counter.fetch_add(1, Ordering::SeqCst) / 2);
        let (actor, client) = ResourceActor::<Note>::new("notes", 10, next_id);
        tokio::spawn(actor.run());

        let a = client.create(NoteCreate { title: "a".into() }).await.unwrap();
        let b = client.create(NoteCreate { title: "b".into() }).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_missing_ids_and_bulk_removal() {
        let client = spawn_notes();
        client.create(NoteCreate { title: "keep".into() }).await.unwrap();
        client.create(NoteCreate { title: "drop".into() }).await.unwrap();

        let patch = NotePatch { title: Some("x".into()) };
        assert!(matches!(client.update("nope".into(), patch).await, Err(FrameworkError::NotFound(_))));
        assert!(matches!(client.delete("nope".into()).await, Err(FrameworkError::NotFound(_))));
        assert_eq!(client.get("nope".into()).await.unwrap(), None);

        let removed = client.remove_where(|n: &Note| n.title == "drop").await.unwrap();
        assert_eq!(removed.len(), 1);
        let rest = client.list().await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].title, "keep");
    }

    #[tokio::test]
    async fn test_closed_actor_reports_communication_error() {
        let (actor, client) = ResourceActor::<Note>::new("notes", 1, || "n".to_string());
        drop(actor);
        assert_eq!(client.list().await.unwrap_err(), FrameworkError::ActorClosed);
    }

    #[tokio::test]
    async fn test_seeding_refuses_duplicate_keys() {
        let note = |id: &str, title: &str| Note { id: id.into(), title: title.into(), pinned: false };

        let (actor, _) = ResourceActor::<Note>::new("notes", 1, || "n".to_string());
        let err = actor.with_records(vec![note("n1", "same"), note("n2", "same")]).err();
        assert_eq!(err, Some(FrameworkError::AlreadyExists("same".into())));

        let (actor, _) = ResourceActor::<Note>::new("notes", 1, || "n".to_string());
        let err = actor.with_records(vec![note("n1", "a"), note("n1", "b")]).err();
        assert_eq!(err, Some(FrameworkError::AlreadyExists("n1".into())));

        let (actor, client) = ResourceActor::<Note>::new("notes", 1, || "n".to_string());
        tokio::spawn(actor.with_records(vec![note("n1", "a"), note("n2", "b")]).unwrap().run());
        let titles: Vec<_> = client.list().await.unwrap().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }
}
