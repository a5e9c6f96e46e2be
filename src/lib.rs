//! resp-bench: a round-trip throughput benchmark for RESP servers
//!
//! Opens one blocking TCP connection, sends the fixed `PING` request
//! frame N times (reading each reply into a reused 1024-byte buffer),
//! and reports elapsed wall-clock time and round trips per second.
//!
//! Replies are never parsed or validated, connections are never retried,
//! and there are no timeouts. This is a micro-benchmark of the raw
//! request/response round trip, not a client library.

pub mod config;
pub mod driver;
pub mod frame;
