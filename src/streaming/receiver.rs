//! UDP pose receive loop.
//!
//! Binds a datagram socket and pulls fixed-size pose records off it, one
//! per datagram, handing each decoded record to a caller-supplied sink.
//!
//! Timeout semantics: the read timeout only ends a capture once at least
//! one record has arrived. Before the first record the receiver keeps
//! waiting, so a capture can be started ahead of the sender.

use crate::error::{Error, Result};
use crate::streaming::wire::{self, PoseRecord};
use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Receives pose records over UDP until a record cap, a post-first-record
/// timeout, or a shutdown signal ends the capture.
#[derive(Debug)]
pub struct PoseReceiver {
    socket: UdpSocket,
    max_records: u32,
}

impl PoseReceiver {
    /// Bind the listen socket and apply the read timeout.
    ///
    /// `addr` must be an `ip:port` pair; anything else fails with
    /// [`Error::InvalidAddress`]. A zero timeout disables the read timeout
    /// entirely.
    pub fn bind(addr: &str, timeout: Duration, max_records: u32) -> Result<Self> {
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| Error::InvalidAddress(addr.to_string()))?;
        let socket = UdpSocket::bind(addr)?;
        let timeout = if timeout.is_zero() {
            None
        } else {
            Some(timeout)
        };
        socket.set_read_timeout(timeout)?;
        log::info!("Listening at {}", addr);
        Ok(Self {
            socket,
            max_records,
        })
    }

    /// Run the capture loop, invoking `on_record` with each record and its
    /// sequence number.
    ///
    /// Returns the number of records captured. Malformed datagrams (short
    /// reads off the socket) are logged and skipped without ending the
    /// capture; socket errors other than the timeout end it with an error.
    pub fn run<F>(&self, running: &Arc<AtomicBool>, mut on_record: F) -> Result<u32>
    where
        F: FnMut(u32, &PoseRecord) -> Result<()>,
    {
        let mut buf = [0u8; wire::RECORD_SIZE];
        let mut count = 0u32;

        while running.load(Ordering::Relaxed) && count < self.max_records {
            match self.socket.recv_from(&mut buf) {
                Ok((received, peer)) => match PoseRecord::from_bytes(&buf[..received]) {
                    Ok(record) => {
                        log::debug!("Bytes received: {}", received);
                        on_record(count, &record)?;
                        count += 1;
                    }
                    Err(e) => {
                        log::warn!("Discarding datagram from {}: {}", peer, e);
                    }
                },
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    // No timeout until the first record has been received
                    if count > 0 {
                        log::warn!("Timeout reached trying to receive packet");
                        break;
                    }
                }
                Err(e) => {
                    log::error!("Failed to receive packet: {}", e);
                    return Err(e.into());
                }
            }
        }

        Ok(count)
    }

    /// Local address the socket is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }
}
