//! # Binary STL
//!
//! ```text
//! ┌──────────────┬───────────┬────────────────────────────────────────┐
//! │ header [80]  │ count u32 │ count × (normal, v1, v2, v3: 12 × f32, │
//! │ zero padded  │    LE     │          attribute u16 = 0)            │
//! └──────────────┴───────────┴────────────────────────────────────────┘
//! ```
//!
//! The header never starts with `solid`, which would mark an ASCII STL.

use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use skyline_core::{SkylineError, SkylineResult};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::voxel::Triangle;

/// Header length in bytes.
pub const HEADER_LEN: usize = 80;

/// Bytes per encoded triangle.
pub const TRIANGLE_LEN: usize = 50;

/// Header used when none is supplied.
pub const DEFAULT_HEADER: &str = "skyline binary STL";

/// Decoded STL file.
#[derive(Debug, Clone, PartialEq)]
pub struct StlModel {
    /// Raw header bytes.
    pub header: [u8; HEADER_LEN],
    /// Triangles in file order.
    pub triangles: Vec<Triangle>,
}

impl StlModel {
    /// Header text up to the first zero byte.
    #[must_use]
    pub fn header_text(&self) -> String {
        let end = self.header.iter().position(|&b| b == 0).unwrap_or(HEADER_LEN);
        String::from_utf8_lossy(&self.header[..end]).into_owned()
    }
}

/// Builds a zero-padded header from `text`, truncated to 80 bytes.
#[must_use]
pub fn encode_header(text: &str) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    let text = if text.starts_with("solid") {
        format!("binary {text}")
    } else {
        text.to_string()
    };
    let bytes = text.as_bytes();
    let len = bytes.len().min(HEADER_LEN);
    header[..len].copy_from_slice(&bytes[..len]);
    header
}

/// Size of the encoded file for `triangles` triangles.
#[inline]
#[must_use]
pub const fn encoded_len(triangles: usize) -> usize {
    HEADER_LEN + 4 + triangles * TRIANGLE_LEN
}

fn encode<W: Write>(writer: &mut W, triangles: &[Triangle], header: &str) -> io::Result<()> {
    let count = u32::try_from(triangles.len()).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidInput, "too many triangles for binary STL")
    })?;
    writer.write_all(&encode_header(header))?;
    writer.write_all(&count.to_le_bytes())?;

    let mut record = [0u8; TRIANGLE_LEN];
    for triangle in triangles {
        let floats = triangle
            .normal
            .iter()
            .chain(triangle.vertices.iter().flatten());
        for (slot, value) in record.chunks_exact_mut(4).zip(floats) {
            slot.copy_from_slice(&value.to_le_bytes());
        }
        // Attribute byte count.
        record[48..].copy_from_slice(&0u16.to_le_bytes());
        writer.write_all(&record)?;
    }
    writer.flush()
}

/// Writes `triangles` as binary STL to `writer`.
///
/// # Errors
///
/// [`SkylineError::Stream`] if the writer fails or there are more than
/// `u32::MAX` triangles.
pub fn write_stl<W: Write>(writer: &mut W, triangles: &[Triangle], header: &str) -> SkylineResult<()> {
    encode(writer, triangles, header).map_err(|source| SkylineError::Stream {
        context: "failed to write STL",
        source,
    })
}

/// Writes `triangles` to `path` atomically.
///
/// The data goes to a temporary file next to `path`, which replaces `path`
/// only once fully written and synced. On failure the temporary file is
/// removed and `path` is left untouched.
///
/// # Errors
///
/// [`SkylineError::Io`] naming the step that failed.
pub fn write_stl_file(path: impl AsRef<Path>, triangles: &[Triangle], header: &str) -> SkylineResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| SkylineError::io("failed to create temporary STL file", dir, e))?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        encode(&mut writer, triangles, header)
            .map_err(|e| SkylineError::io("failed to write STL", path, e))?;
    }
    temp.as_file()
        .sync_all()
        .map_err(|e| SkylineError::io("failed to sync STL", path, e))?;
    temp.persist(path)
        .map_err(|e| SkylineError::io("failed to move STL into place", path, e.error))?;

    info!("wrote {} triangles to {}", triangles.len(), path.display());
    Ok(())
}

fn decode<R: Read>(reader: &mut R) -> io::Result<StlModel> {
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header)?;
    let mut count = [0u8; 4];
    reader.read_exact(&mut count)?;
    let count = u32::from_le_bytes(count) as usize;

    // Capacity is capped so a corrupt count cannot force a huge allocation.
    let mut triangles = Vec::with_capacity(count.min(1 << 20));
    let mut record = [0u8; TRIANGLE_LEN];
    for _ in 0..count {
        reader.read_exact(&mut record)?;
        let mut floats = [0f32; 12];
        for (value, bytes) in floats.iter_mut().zip(record.chunks_exact(4)) {
            *value = f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        triangles.push(Triangle::new(
            [floats[0], floats[1], floats[2]],
            [
                [floats[3], floats[4], floats[5]],
                [floats[6], floats[7], floats[8]],
                [floats[9], floats[10], floats[11]],
            ],
        ));
    }
    debug!("decoded {} STL triangles", triangles.len());
    Ok(StlModel { header, triangles })
}

/// Parses a binary STL stream.
///
/// # Errors
///
/// [`SkylineError::Stream`] on read failure or truncated input.
pub fn read_stl<R: Read>(reader: &mut R) -> SkylineResult<StlModel> {
    decode(reader).map_err(|source| SkylineError::Stream {
        context: "failed to read STL",
        source,
    })
}

/// Parses the binary STL file at `path`.
///
/// # Errors
///
/// [`SkylineError::Io`] if the file cannot be opened, read or is truncated.
pub fn read_stl_file(path: impl AsRef<Path>) -> SkylineResult<StlModel> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| SkylineError::io("failed to open STL", path, e))?;
    decode(&mut io::BufReader::new(file)).map_err(|e| SkylineError::io("failed to read STL", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::create_cube;
    use skyline_core::ErrorKind;

    #[test]
    fn test_empty_mesh_is_84_bytes() {
        let mut buffer = Vec::new();
        write_stl(&mut buffer, &[], DEFAULT_HEADER).unwrap();
        assert_eq!(buffer.len(), 84);
        assert_eq!(&buffer[80..84], &[0, 0, 0, 0]);
        assert_eq!(buffer.len(), encoded_len(0));
    }

    #[test]
    fn test_header_never_starts_with_solid() {
        let header = encode_header("solid octocat");
        assert!(!header.starts_with(b"solid"));
        let header = encode_header(&"x".repeat(200));
        assert_eq!(header[HEADER_LEN - 1], b'x');
    }

    #[test]
    fn test_round_trip() {
        let cube = create_cube(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).unwrap();
        let mut buffer = Vec::new();
        write_stl(&mut buffer, &cube, "cube").unwrap();
        assert_eq!(buffer.len(), encoded_len(12));

        let model = read_stl(&mut buffer.as_slice()).unwrap();
        assert_eq!(model.header_text(), "cube");
        assert_eq!(model.triangles.as_slice(), cube.as_slice());
    }

    #[test]
    fn test_attribute_is_zero() {
        let cube = create_cube(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
        let mut buffer = Vec::new();
        write_stl(&mut buffer, &cube[..1], "").unwrap();
        assert_eq!(&buffer[buffer.len() - 2..], &[0, 0]);
    }

    #[test]
    fn test_truncated_input_fails() {
        let cube = create_cube(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
        let mut buffer = Vec::new();
        write_stl(&mut buffer, &cube, "").unwrap();
        buffer.truncate(buffer.len() - 10);
        let err = read_stl(&mut buffer.as_slice()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(read_stl(&mut &[0u8; 40][..]).is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.stl");
        let cube = create_cube(0.0, 0.0, 0.0, 2.0, 2.0, 2.0).unwrap();
        write_stl_file(&path, &cube, DEFAULT_HEADER).unwrap();
        let model = read_stl_file(&path).unwrap();
        assert_eq!(model.triangles.len(), 12);
        // Only the destination remains in the directory.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("model.stl");
        let err = write_stl_file(&path, &[], DEFAULT_HEADER).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!path.exists());
    }
}
