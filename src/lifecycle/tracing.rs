//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that
//! hides module paths (`with_target(false)`) and reads its filter from
//! `RUST_LOG`, falling back to `info`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # placements, actor lifecycle
//! RUST_LOG=debug cargo run    # every actor request and client call
//! ```
//!
//! A placement at `info` reads roughly:
//!
//! ```text
//! INFO place_order: Order placed protein_id="1" broth_id="2" order_id="ord-42"
//! INFO Order persisted order_id="ord-42" attempts=1
//! ```
//!
//! Secrets are never recorded: the allocator key and the store key are
//! `secrecy::Secret` values and are skipped by every `#[instrument]`.
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact() // spans inline, e.g. "place_order: Order placed"
        .init();
}
