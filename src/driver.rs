//! The benchmark driver: one blocking connection, N send/recv round trips.
//!
//! Each iteration writes the fixed request frame, then issues a single
//! `read` into a reused 1024-byte buffer and discards whatever arrived.
//! Nothing verifies that a complete reply was received before the next
//! send, so under TCP segmentation the request/response framing can
//! desynchronize; the measured rate is the point, so this is accepted
//! rather than fixed with read-until-delimiter framing.
//!
//! Any socket failure is fatal. There are no retries and no timeouts; a
//! hung server blocks the run indefinitely.

use crate::config::Config;
use crate::frame;
use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Size of the reused receive buffer
pub const RECV_BUFFER_SIZE: usize = 1024;

/// Result of a completed benchmark run
#[derive(Debug, Clone, Copy)]
pub struct Report {
    /// Round trips performed
    pub requests: u64,
    /// Wall-clock time across the whole loop
    pub elapsed: Duration,
}

impl Report {
    /// Round trips per second, or `None` for the degenerate zero-request
    /// (or sub-resolution elapsed) run where the rate is undefined.
    pub fn throughput(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        if self.requests == 0 || secs == 0.0 {
            None
        } else {
            Some(self.requests as f64 / secs)
        }
    }
}

/// Connect to the configured target and run the benchmark loop.
///
/// Connection failure is fatal before the first send, so a refused port
/// means zero round trips were attempted.
pub fn run(config: &Config) -> io::Result<Report> {
    let stream = TcpStream::connect(config.addr())?;
    info!(addr = %config.addr(), requests = config.requests, "Connected");
    run_on(stream, config.requests)
}

/// Run the timed loop over an already-established connection.
fn run_on(mut stream: TcpStream, requests: u64) -> io::Result<Report> {
    let request = frame::ping_request();
    let mut buf = [0u8; RECV_BUFFER_SIZE];

    let start = Instant::now();
    for _ in 0..requests {
        stream.write_all(&request)?;

        let n = stream.read(&mut buf)?;
        if n == 0 {
            // EOF mid-run: the server went away
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "server closed the connection",
            ));
        }
        // Reply bytes are discarded; see module docs
    }
    let elapsed = start.elapsed();

    debug!(elapsed_secs = elapsed.as_secs_f64(), "Loop finished");
    Ok(Report { requests, elapsed })
}
