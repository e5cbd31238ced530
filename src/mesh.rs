//! Binary STL triangle-soup reader.
//!
//! # File layout
//!
//! ```text
//! ┌────────────────┬──────────────────┬─────────────────────────┐
//! │ Header (80 B)  │ Count (4 B, LE)  │ Count × 50 B records    │
//! └────────────────┴──────────────────┴─────────────────────────┘
//! ```
//!
//! Each 50-byte record: 12 bytes face normal (3×f32), 36 bytes vertices
//! (3×3×f32), 2 bytes attribute (u16), all little-endian. The header is
//! opaque and discarded. There is no checksum or magic number; files that
//! are length-correct are accepted as-is.

use crate::core::{Sequence, Vec3};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Size of the opaque file header.
pub const HEADER_SIZE: usize = 80;

/// One triangle of the soup, laid out exactly as the 50-byte file record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Face normal
    pub normal: Vec3,
    /// The three corner vertices
    pub vertices: [Vec3; 3],
    /// Opaque per-face attribute word
    pub attribute: u16,
}

impl Triangle {
    /// On-disk record size in bytes.
    pub const RECORD_SIZE: usize = 50;

    /// Decode one record.
    pub fn from_bytes(bytes: &[u8; Self::RECORD_SIZE]) -> Triangle {
        Triangle {
            normal: read_vec3(&bytes[0..12]),
            vertices: [
                read_vec3(&bytes[12..24]),
                read_vec3(&bytes[24..36]),
                read_vec3(&bytes[36..48]),
            ],
            attribute: u16::from_le_bytes([bytes[48], bytes[49]]),
        }
    }

    /// Encode one record. Counterpart of [`Triangle::from_bytes`] for
    /// synthesizing test and simulation files.
    pub fn to_bytes(&self) -> [u8; Self::RECORD_SIZE] {
        let mut bytes = [0u8; Self::RECORD_SIZE];
        write_vec3(&mut bytes[0..12], &self.normal);
        write_vec3(&mut bytes[12..24], &self.vertices[0]);
        write_vec3(&mut bytes[24..36], &self.vertices[1]);
        write_vec3(&mut bytes[36..48], &self.vertices[2]);
        bytes[48..50].copy_from_slice(&self.attribute.to_le_bytes());
        bytes
    }
}

fn read_vec3(bytes: &[u8]) -> Vec3 {
    Vec3::new(
        f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        f32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        f32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
    )
}

fn write_vec3(bytes: &mut [u8], v: &Vec3) {
    bytes[0..4].copy_from_slice(&v.x.to_le_bytes());
    bytes[4..8].copy_from_slice(&v.y.to_le_bytes());
    bytes[8..12].copy_from_slice(&v.z.to_le_bytes());
}

/// Read a binary STL file, appending every triangle to `triangles`.
///
/// Fails with an I/O error if the file cannot be opened or any read comes
/// up short, including a truncated final record. Triangles appended before
/// a failure remain in the destination; no partially-decoded triangle is
/// ever appended. The file handle is released on every path.
pub fn read_stl_binary<P: AsRef<Path>>(path: P, triangles: &mut Sequence<Triangle>) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| {
        log::error!("Failed to open {}", path.display());
        e
    })?;

    let mut header = [0u8; HEADER_SIZE];
    file.read_exact(&mut header).map_err(|e| {
        log::error!("Failed to read header when parsing {}", path.display());
        e
    })?;

    let mut count_bytes = [0u8; 4];
    file.read_exact(&mut count_bytes).map_err(|e| {
        log::error!(
            "Failed to read number of triangles when parsing {}",
            path.display()
        );
        e
    })?;
    let triangle_ct = u32::from_le_bytes(count_bytes);

    let mut record = [0u8; Triangle::RECORD_SIZE];
    for i in 0..triangle_ct {
        file.read_exact(&mut record).map_err(|e| {
            log::error!("Failed to read triangle {} from {}", i, path.display());
            e
        })?;
        triangles.push(Triangle::from_bytes(&record))?;
    }
    log::debug!("Read {} triangles from {}", triangle_ct, path.display());
    Ok(())
}
