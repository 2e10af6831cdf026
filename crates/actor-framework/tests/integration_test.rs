use actor_framework::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Noodle {
    id: String,
    thickness: u8,
}

#[derive(Debug, thiserror::Error)]
enum NoodleError {
    #[error("noodle id must not be empty")]
    EmptyId,
    #[error("thickness {0} out of range")]
    Thickness(u8),
}

impl ActorEntity for Noodle {
    type Id = String;
    type Create = (String, u8);
    type Error = NoodleError;

    fn from_create_params((id, thickness): (String, u8)) -> Result<Self, Self::Error> {
        if thickness == 0 || thickness > 5 {
            return Err(NoodleError::Thickness(thickness));
        }
        Ok(Self { id, thickness })
    }

    fn id(&self) -> &String {
        &self.id
    }

    fn on_create(&mut self) -> Result<(), Self::Error> {
        if self.id.trim().is_empty() {
            return Err(NoodleError::EmptyId);
        }
        Ok(())
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Noodle>::new(10);
    let handle = tokio::spawn(actor.run());

    // 1. Create keeps the id supplied by the entity
    let id = client.create(("hakata".into(), 1)).await.unwrap();
    assert_eq!(id, "hakata");
    client.create(("sapporo".into(), 4)).await.unwrap();

    // 2. Get
    let noodle = client.get("hakata".into()).await.unwrap().unwrap();
    assert_eq!(noodle.thickness, 1);
    assert!(client.get("udon".into()).await.unwrap().is_none());

    // 3. List preserves insertion order
    let ids: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(ids, vec!["hakata", "sapporo"]);

    // 4. Dropping the last client stops the actor
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_duplicate_id_is_rejected() {
    let (actor, client) = ResourceActor::<Noodle>::new(10);
    tokio::spawn(actor.run());

    client.create(("hakata".into(), 1)).await.unwrap();
    let result = client.create(("hakata".into(), 3)).await;
    assert!(matches!(result, Err(FrameworkError::AlreadyExists(id)) if id == "hakata"));

    // The first record is untouched
    let noodle = client.get("hakata".into()).await.unwrap().unwrap();
    assert_eq!(noodle.thickness, 1);
}

#[tokio::test]
async fn test_entity_errors_are_boxed() {
    let (actor, client) = ResourceActor::<Noodle>::new(10);
    tokio::spawn(actor.run());

    let invalid = client.create(("hakata".into(), 9)).await;
    match invalid {
        Err(FrameworkError::EntityError(e)) => {
            let inner = e.downcast_ref::<NoodleError>().expect("NoodleError");
            assert!(matches!(inner, NoodleError::Thickness(9)));
        }
        other => panic!("Expected EntityError, got {:?}", other),
    }

    let blank = client.create(("  ".into(), 2)).await;
    assert!(matches!(blank, Err(FrameworkError::EntityError(_))));
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_closed_actor_reports_error() {
    let (actor, client) = ResourceActor::<Noodle>::new(10);
    assert!(!client.is_closed());
    drop(actor);
    assert!(client.is_closed());

    let result = client.get("hakata".into()).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
