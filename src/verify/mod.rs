//! The verification engine.
//!
//! Takes the ordered URL list and produces a [`BatchReport`](crate::models::BatchReport):
//!
//! 1. **Partition**: split the list into batches of `batch_size` ([`batch`])
//! 2. **Fan out**: fetch every URL of a batch concurrently ([`fetch`])
//! 3. **Join**: wait for the whole batch, keep outcomes in input order
//! 4. **Pace**: pause between batches, then continue with the next one
//!
//! A worker-pool strategy is also available ([`verifier::verify_pooled`]),
//! selected through [`DispatchMethod`](crate::config::DispatchMethod).

pub mod batch;
pub mod fetch;
pub mod verifier;

pub use fetch::HttpFetcher;
pub use verifier::run;
