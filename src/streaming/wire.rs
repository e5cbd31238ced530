//! Fixed-layout pose record codec.
//!
//! # Wire format
//!
//! One pose record per UDP datagram, 90 bytes, no framing, no version tag,
//! no checksum. Field order and widths are a hard compatibility contract:
//!
//! ```text
//! ┌────────┬──────┬───────────────────────────────────────┐
//! │ Offset │ Size │ Field                                 │
//! ├────────┼──────┼───────────────────────────────────────┤
//! │  0     │ 32   │ id, null-padded text                  │
//! │ 32     │ 28   │ timestamp, null-padded text           │
//! │ 60     │ 12   │ position, 3×f32 LE (x, y, z)          │
//! │ 72     │ 16   │ rotation, 4×f32 LE (x, y, z, w)       │
//! │ 88     │  1   │ confidence, u8                        │
//! │ 89     │  1   │ trigger_activated, 0 or 1             │
//! └────────┴──────┴───────────────────────────────────────┘
//! ```

use crate::core::{Quat, Vec3};
use crate::error::{Error, Result};

/// Width of the null-padded id field.
pub const ID_SIZE: usize = 32;
/// Width of the null-padded timestamp field.
pub const TIMESTAMP_SIZE: usize = 28;
/// Total record size in bytes.
pub const RECORD_SIZE: usize = ID_SIZE + TIMESTAMP_SIZE + 12 + 16 + 1 + 1;

/// One tracker pose sample as carried on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseRecord {
    /// Tracked body identifier
    pub id: String,
    /// Source-supplied timestamp text
    pub timestamp: String,
    /// Position in tracker coordinates
    pub position: Vec3,
    /// Orientation quaternion
    pub rotation: Quat,
    /// Tracking confidence, 0-255
    pub confidence: u8,
    /// Trigger input state
    pub trigger_activated: bool,
}

impl PoseRecord {
    /// Decode a record from a received datagram.
    ///
    /// Fails with [`Error::MalformedInput`] when fewer than
    /// [`RECORD_SIZE`] bytes are supplied; trailing extra bytes are
    /// ignored. Text fields decode up to their first NUL.
    pub fn from_bytes(bytes: &[u8]) -> Result<PoseRecord> {
        if bytes.len() < RECORD_SIZE {
            return Err(Error::MalformedInput(format!(
                "pose record needs {} bytes, got {}",
                RECORD_SIZE,
                bytes.len()
            )));
        }
        Ok(PoseRecord {
            id: padded_text(&bytes[0..ID_SIZE]),
            timestamp: padded_text(&bytes[ID_SIZE..ID_SIZE + TIMESTAMP_SIZE]),
            position: Vec3::new(
                read_f32(&bytes[60..64]),
                read_f32(&bytes[64..68]),
                read_f32(&bytes[68..72]),
            ),
            rotation: Quat::new(
                read_f32(&bytes[72..76]),
                read_f32(&bytes[76..80]),
                read_f32(&bytes[80..84]),
                read_f32(&bytes[84..88]),
            ),
            confidence: bytes[88],
            trigger_activated: bytes[89] != 0,
        })
    }

    /// Encode the record into its wire layout. Counterpart of
    /// [`PoseRecord::from_bytes`] for the simulator and test side; text
    /// fields longer than their slot are truncated.
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        write_padded_text(&mut bytes[0..ID_SIZE], &self.id);
        write_padded_text(&mut bytes[ID_SIZE..ID_SIZE + TIMESTAMP_SIZE], &self.timestamp);
        bytes[60..64].copy_from_slice(&self.position.x.to_le_bytes());
        bytes[64..68].copy_from_slice(&self.position.y.to_le_bytes());
        bytes[68..72].copy_from_slice(&self.position.z.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.rotation.x.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.rotation.y.to_le_bytes());
        bytes[80..84].copy_from_slice(&self.rotation.z.to_le_bytes());
        bytes[84..88].copy_from_slice(&self.rotation.w.to_le_bytes());
        bytes[88] = self.confidence;
        bytes[89] = self.trigger_activated as u8;
        bytes
    }
}

fn read_f32(bytes: &[u8]) -> f32 {
    f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Text up to the first NUL in a fixed null-padded field.
fn padded_text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

fn write_padded_text(slot: &mut [u8], text: &str) {
    let bytes = text.as_bytes();
    let len = bytes.len().min(slot.len());
    slot[..len].copy_from_slice(&bytes[..len]);
}
