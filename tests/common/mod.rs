#![allow(dead_code)]

use async_trait::async_trait;
use ramen_store::allocator::{AllocatorError, OrderIdAllocator};
use ramen_store::catalog_actor;
use ramen_store::clients::{BrothClient, ProteinClient};
use ramen_store::model::{Broth, Order, OrderId, Protein};
use ramen_store::persistence::{OrderSink, PersistenceError, PersistenceQueue, PersistenceWorker, RetryPolicy};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

// --- Fake allocator ---

pub enum Behavior {
    /// Issues `ord-1`, `ord-2`, ...
    Sequence,
    Fixed(String),
    Fail(AllocatorError),
    /// Never answers.
    Hang,
}

pub struct FakeAllocator {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl FakeAllocator {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderIdAllocator for FakeAllocator {
    async fn allocate_order_id(&self) -> Result<OrderId, AllocatorError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        match &self.behavior {
            Behavior::Sequence => Ok(OrderId(format!("ord-{n}"))),
            Behavior::Fixed(id) => Ok(OrderId(id.clone())),
            Behavior::Fail(e) => Err(e.clone()),
            Behavior::Hang => std::future::pending().await,
        }
    }
}

// --- Recording sink ---

/// Forwards every stored order to a channel the test reads from.
pub struct RecordingSink {
    sender: mpsc::UnboundedSender<Order>,
    delay: Option<Duration>,
}

#[async_trait]
impl OrderSink for RecordingSink {
    async fn store(&self, order: Order) -> Result<(), PersistenceError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.sender
            .send(order)
            .map_err(|e| PersistenceError::Unavailable(e.to_string()))
    }
}

pub fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_retries: 2,
        min_backoff: Duration::from_millis(1),
        max_backoff: Duration::from_millis(5),
        write_timeout: Duration::from_millis(500),
    }
}

/// Spawns a persistence worker that records instead of storing.
pub fn recording_queue() -> (PersistenceQueue, mpsc::UnboundedReceiver<Order>) {
    slow_recording_queue(16, None)
}

/// Like [`recording_queue`], with a small queue and a sink that takes `delay` per write.
pub fn slow_recording_queue(
    buffer_size: usize,
    delay: Option<Duration>,
) -> (PersistenceQueue, mpsc::UnboundedReceiver<Order>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let sink = RecordingSink { sender, delay };
    let (worker, queue) = PersistenceWorker::new(sink, fast_policy(), buffer_size, 64);
    tokio::spawn(worker.run());
    (queue, receiver)
}

// --- Catalog ---

/// Real catalog actors holding Miso/Shoyu and Pork/Chicken.
pub async fn seeded_catalog() -> (BrothClient, ProteinClient) {
    let (broth_actor, broths) = catalog_actor::new_broths();
    let (protein_actor, proteins) = catalog_actor::new_proteins();
    tokio::spawn(broth_actor.run());
    tokio::spawn(protein_actor.run());

    broths.add_broth(Broth::new("b1", "Miso")).await.unwrap();
    broths.add_broth(Broth::new("b2", "Shoyu")).await.unwrap();
    proteins.add_protein(Protein::new("p1", "Pork")).await.unwrap();
    proteins.add_protein(Protein::new("p2", "Chicken")).await.unwrap();

    (broths, proteins)
}
