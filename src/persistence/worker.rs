//! # Persistence Worker
//!
//! A single task owns the sink and processes requests in arrival order.
//! Each write is bounded by the policy's write timeout. Retryable failures
//! are retried with exponential backoff; anything else, or a retryable
//! failure that outlives its retries, is logged and appended to the audit
//! trail.
//!
//! The trail is shared with every [`PersistenceQueue`], so an order that
//! never made it onto the queue is recorded too. It holds at most
//! `audit_capacity` entries and drops the oldest first.

use super::{OrderSink, PersistenceError};
use crate::config::PersistenceConfig;
use crate::model::Order;
use backon::{BackoffBuilder, ExponentialBuilder};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: usize,
    pub min_backoff: Duration,
    pub max_backoff: Duration,
    pub write_timeout: Duration,
}

impl RetryPolicy {
    fn backoff(&self) -> impl Iterator<Item = Duration> {
        ExponentialBuilder::default()
            .with_min_delay(self.min_backoff)
            .with_max_delay(self.max_backoff)
            .with_max_times(self.max_retries)
            .build()
    }
}

impl From<&PersistenceConfig> for RetryPolicy {
    fn from(config: &PersistenceConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            min_backoff: Duration::from_millis(config.min_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
            write_timeout: Duration::from_millis(config.write_timeout_ms),
        }
    }
}

/// An order the worker gave up on.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedWrite {
    pub order: Order,
    pub error: PersistenceError,
    pub attempts: usize,
}

/// Bounded, shared record of failed writes.
#[derive(Clone)]
struct AuditTrail {
    entries: Arc<Mutex<VecDeque<FailedWrite>>>,
    capacity: usize,
}

impl AuditTrail {
    fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn record(&self, failed: FailedWrite) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.len() == self.capacity {
            if let Some(evicted) = entries.pop_front() {
                warn!(
                    order_id = %evicted.order.id,
                    capacity = self.capacity,
                    "Audit trail full, dropping oldest failed write"
                );
            }
        }
        entries.push_back(failed);
    }

    fn snapshot(&self) -> Vec<FailedWrite> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

pub enum PersistenceRequest {
    Store(Order),
    /// Answered once every earlier request has been handled.
    Flush { respond_to: oneshot::Sender<()> },
}

pub struct PersistenceWorker<S: OrderSink> {
    sink: S,
    policy: RetryPolicy,
    receiver: mpsc::Receiver<PersistenceRequest>,
    audit: AuditTrail,
}

impl<S: OrderSink> PersistenceWorker<S> {
    pub fn new(
        sink: S,
        policy: RetryPolicy,
        buffer_size: usize,
        audit_capacity: usize,
    ) -> (Self, PersistenceQueue) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let audit = AuditTrail::new(audit_capacity);
        let worker = Self {
            sink,
            policy,
            receiver,
            audit: audit.clone(),
        };
        (worker, PersistenceQueue { sender, audit })
    }

    pub async fn run(mut self) {
        info!(
            max_retries = self.policy.max_retries,
            write_timeout = ?self.policy.write_timeout,
            "Persistence worker started"
        );

        while let Some(request) = self.receiver.recv().await {
            match request {
                PersistenceRequest::Store(order) => self.write(order).await,
                PersistenceRequest::Flush { respond_to } => {
                    let _ = respond_to.send(());
                }
            }
        }

        info!(failed = self.audit.len(), "Persistence worker shutdown");
    }

    async fn write(&mut self, order: Order) {
        let order_id = order.id.clone();
        let write_timeout = self.policy.write_timeout;
        let mut last_error = None;
        let mut attempts = 0;

        for (attempt, delay) in std::iter::once(Duration::ZERO)
            .chain(self.policy.backoff())
            .enumerate()
        {
            if attempt > 0 {
                tokio::time::sleep(delay).await;
            }
            attempts = attempt + 1;

            let write = self.sink.store(order.clone());
            let result = match tokio::time::timeout(write_timeout, write).await {
                Ok(result) => result,
                Err(_) => Err(PersistenceError::TimedOut(write_timeout)),
            };

            match result {
                Ok(()) => {
                    info!(order_id = %order_id, attempts, "Order persisted");
                    return;
                }
                // An earlier attempt that timed out on our side may still have landed.
                Err(PersistenceError::Duplicate(_)) if attempt > 0 => {
                    info!(order_id = %order_id, attempts, "Order already persisted");
                    return;
                }
                Err(e) if e.is_retryable() => {
                    warn!(
                        order_id = %order_id,
                        attempt = attempts,
                        error = %e,
                        "Order write failed, retrying"
                    );
                    last_error = Some(e);
                }
                Err(e) => {
                    last_error = Some(e);
                    break;
                }
            }
        }

        if let Some(error) = last_error {
            error!(order_id = %order_id, attempts, error = %error, "Order could not be persisted");
            self.audit.record(FailedWrite {
                order,
                error,
                attempts,
            });
        }
    }
}

/// Handle used to feed the worker. Cheap to clone.
#[derive(Clone)]
pub struct PersistenceQueue {
    sender: mpsc::Sender<PersistenceRequest>,
    audit: AuditTrail,
}

impl PersistenceQueue {
    /// Enqueues an order without waiting for space or for the write.
    ///
    /// An order that cannot be enqueued goes straight to the audit trail
    /// with zero attempts.
    pub fn dispatch(&self, order: Order) -> Result<(), PersistenceError> {
        debug!(order_id = %order.id, "Dispatching order");
        let (error, request) = match self.sender.try_send(PersistenceRequest::Store(order)) {
            Ok(()) => return Ok(()),
            Err(TrySendError::Full(request)) => (PersistenceError::QueueFull, request),
            Err(TrySendError::Closed(request)) => (PersistenceError::QueueClosed, request),
        };

        if let PersistenceRequest::Store(order) = request {
            error!(order_id = %order.id, error = %error, "Order could not be queued");
            self.audit.record(FailedWrite {
                order,
                error: error.clone(),
                attempts: 0,
            });
        }
        Err(error)
    }

    /// Writes that were given up on, oldest first.
    ///
    /// While the worker runs, this waits until every order dispatched
    /// before the call has been handled.
    pub async fn failed_writes(&self) -> Vec<FailedWrite> {
        let (respond_to, response) = oneshot::channel();
        if self
            .sender
            .send(PersistenceRequest::Flush { respond_to })
            .await
            .is_ok()
        {
            let _ = response.await;
        }
        self.audit.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Broth, OrderId, Protein};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Sink answering from a script; succeeds once the script runs out.
    #[derive(Clone, Default)]
    struct ScriptedSink {
        outcomes: Arc<Mutex<VecDeque<Result<(), PersistenceError>>>>,
        calls: Arc<AtomicUsize>,
        delay: Option<Duration>,
    }

    impl ScriptedSink {
        fn with(outcomes: Vec<Result<(), PersistenceError>>) -> Self {
            Self {
                outcomes: Arc::new(Mutex::new(outcomes.into())),
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OrderSink for ScriptedSink {
        async fn store(&self, _order: Order) -> Result<(), PersistenceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()))
        }
    }

    fn policy(max_retries: usize) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            min_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(5),
            write_timeout: Duration::from_millis(200),
        }
    }

    fn order(id: &str) -> Order {
        Order::compose(
            OrderId::from(id),
            &Broth::new("b1", "Miso"),
            &Protein::new("p1", "Pork"),
        )
    }

    #[tokio::test]
    async fn test_transient_failure_is_retried() {
        let sink = ScriptedSink::with(vec![
            Err(PersistenceError::Unavailable("actor closed".into())),
            Ok(()),
        ]);
        let (worker, queue) = PersistenceWorker::new(sink.clone(), policy(3), 8, 16);
        tokio::spawn(worker.run());

        queue.dispatch(order("ord-1")).unwrap();

        assert!(queue.failed_writes().await.is_empty());
        assert_eq!(sink.calls(), 2);
    }

    #[tokio::test]
    async fn test_rejection_is_not_retried() {
        let sink = ScriptedSink::with(vec![Err(PersistenceError::Rejected("bad".into()))]);
        let (worker, queue) = PersistenceWorker::new(sink.clone(), policy(3), 8, 16);
        tokio::spawn(worker.run());

        queue.dispatch(order("ord-1")).unwrap();

        let failed = queue.failed_writes().await;
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].attempts, 1);
        assert_eq!(failed[0].order.id, OrderId::from("ord-1"));
        assert_eq!(sink.calls(), 1);
    }

    #[tokio::test]
    async fn test_exhausted_retries_land_in_audit_trail() {
        let unavailable = || Err(PersistenceError::Unavailable("down".into()));
        let sink = ScriptedSink::with(vec![unavailable(), unavailable(), unavailable()]);
        let (worker, queue) = PersistenceWorker::new(sink.clone(), policy(2), 8, 16);
        tokio::spawn(worker.run());

        queue.dispatch(order("ord-1")).unwrap();
        queue.dispatch(order("ord-2")).unwrap();

        let failed = queue.failed_writes().await;
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].attempts, 3);
        assert!(matches!(failed[0].error, PersistenceError::Unavailable(_)));
        // The second order is unaffected by the first one's failure.
        assert_eq!(sink.calls(), 4);
    }

    #[tokio::test]
    async fn test_slow_write_times_out() {
        let sink = ScriptedSink {
            delay: Some(Duration::from_millis(500)),
            ..Default::default()
        };
        let (worker, queue) = PersistenceWorker::new(sink.clone(), policy(1), 8, 16);
        tokio::spawn(worker.run());

        queue.dispatch(order("ord-1")).unwrap();

        let failed = queue.failed_writes().await;
        assert_eq!(failed.len(), 1);
        assert_eq!(
            failed[0].error,
            PersistenceError::TimedOut(Duration::from_millis(200))
        );
        assert_eq!(failed[0].attempts, 2);
    }

    #[tokio::test]
    async fn test_duplicate_after_retry_counts_as_persisted() {
        let sink = ScriptedSink::with(vec![
            Err(PersistenceError::TimedOut(Duration::from_millis(200))),
            Err(PersistenceError::Duplicate("ord-1".into())),
        ]);
        let (worker, queue) = PersistenceWorker::new(sink.clone(), policy(3), 8, 16);
        tokio::spawn(worker.run());

        queue.dispatch(order("ord-1")).unwrap();

        assert!(queue.failed_writes().await.is_empty());
        assert_eq!(sink.calls(), 2);
    }

    #[tokio::test]
    async fn test_dispatch_never_waits() {
        let (worker, queue) = PersistenceWorker::new(ScriptedSink::default(), policy(0), 1, 16);

        queue.dispatch(order("ord-1")).unwrap();
        assert_eq!(
            queue.dispatch(order("ord-2")),
            Err(PersistenceError::QueueFull)
        );

        drop(worker);
        assert_eq!(
            queue.dispatch(order("ord-3")),
            Err(PersistenceError::QueueClosed)
        );

        let failed = queue.failed_writes().await;
        let ids: Vec<&str> = failed.iter().map(|f| f.order.id.0.as_str()).collect();
        assert_eq!(ids, vec!["ord-2", "ord-3"]);
        assert_eq!(failed[0].error, PersistenceError::QueueFull);
        assert_eq!(failed[1].error, PersistenceError::QueueClosed);
        assert!(failed.iter().all(|f| f.attempts == 0));
    }

    #[tokio::test]
    async fn test_overflowing_queue_is_audited() {
        let sink = ScriptedSink::default();
        let (worker, queue) = PersistenceWorker::new(sink.clone(), policy(0), 1, 16);

        queue.dispatch(order("ord-1")).unwrap();
        for id in ["ord-2", "ord-3", "ord-4"] {
            assert_eq!(queue.dispatch(order(id)), Err(PersistenceError::QueueFull));
        }
        tokio::spawn(worker.run());

        let failed = queue.failed_writes().await;
        assert_eq!(failed.len(), 3);
        assert!(failed
            .iter()
            .all(|f| f.error == PersistenceError::QueueFull && f.attempts == 0));
        // Only the queued order reached the sink
        assert_eq!(sink.calls(), 1);
    }

    #[tokio::test]
    async fn test_audit_trail_keeps_newest_entries() {
        let rejected = || Err(PersistenceError::Rejected("bad".into()));
        let sink = ScriptedSink::with((0..5).map(|_| rejected()).collect());
        let (worker, queue) = PersistenceWorker::new(sink.clone(), policy(0), 8, 2);
        tokio::spawn(worker.run());

        for n in 1..=5 {
            queue.dispatch(order(&format!("ord-{n}"))).unwrap();
        }

        let failed = queue.failed_writes().await;
        let ids: Vec<&str> = failed.iter().map(|f| f.order.id.0.as_str()).collect();
        assert_eq!(ids, vec!["ord-4", "ord-5"]);
        assert_eq!(sink.calls(), 5);
    }
}
