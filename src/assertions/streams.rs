//! Stream comparison by full materialisation.
//!
//! Both sides are drained into memory and compared as byte slices, so the
//! usable input size is bounded by available memory. A read error ends the
//! stream: whatever was read up to that point is what gets compared.

use crate::assertions::arrays::{check_slices_eq, require_message};
use crate::assertions::errors::{report, AssertionFailure, Result};
use std::io::{ErrorKind, Read};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

const CHUNK_SIZE: usize = 8 * 1024;

/// Read everything from `reader`, treating errors as end of stream.
pub fn drain<R: Read>(mut reader: R) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("Stream ended by read error after {} bytes: {}", buffer.len(), e);
                break;
            }
        }
    }
    buffer
}

/// Async counterpart of [`drain`].
pub async fn drain_async<R: AsyncRead + Unpin>(mut reader: R) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("Stream ended by read error after {} bytes: {}", buffer.len(), e);
                break;
            }
        }
    }
    buffer
}

/// Compare the full contents of two readers.
pub fn check_readers_eq<E, A>(message: &str, expected: E, actual: A) -> Result<()>
where
    E: Read,
    A: Read,
{
    require_message(message)?;
    let expected = drain(expected);
    let actual = drain(actual);
    check_slices_eq(message, &expected, &actual)
}

#[track_caller]
pub fn assert_readers_eq<E: Read, A: Read>(message: &str, expected: E, actual: A) {
    report(check_readers_eq(message, expected, actual))
}

/// Unlabelled stream comparison. Always fails without reading either side.
#[track_caller]
pub fn assert_readers_eq_unlabelled<E: Read, A: Read>(_expected: E, _actual: A) {
    report(Err(AssertionFailure::MissingMessage))
}

pub async fn check_async_readers_eq<E, A>(message: &str, expected: E, actual: A) -> Result<()>
where
    E: AsyncRead + Unpin,
    A: AsyncRead + Unpin,
{
    require_message(message)?;
    let expected = drain_async(expected).await;
    let actual = drain_async(actual).await;
    check_slices_eq(message, &expected, &actual)
}

pub async fn assert_async_readers_eq<E, A>(message: &str, expected: E, actual: A)
where
    E: AsyncRead + Unpin,
    A: AsyncRead + Unpin,
{
    report(check_async_readers_eq(message, expected, actual).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Yields its data, then fails every further read.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match Read::read(&mut self.data, buf)? {
                0 => Err(io::Error::new(ErrorKind::BrokenPipe, "connection reset")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_drain_stops_at_error() {
        let reader = FailingReader {
            data: Cursor::new(b"partial".to_vec()),
        };
        assert_eq!(drain(reader), b"partial");
    }

    #[test]
    fn test_equal_readers() {
        let expected = Cursor::new(vec![7u8; CHUNK_SIZE * 3 + 5]);
        let actual = Cursor::new(vec![7u8; CHUNK_SIZE * 3 + 5]);
        assert!(check_readers_eq("payload", expected, actual).is_ok());
    }

    #[test]
    fn test_error_treated_as_end_of_stream() {
        let expected = Cursor::new(b"abc".to_vec());
        let actual = FailingReader {
            data: Cursor::new(b"abc".to_vec()),
        };
        assert!(check_readers_eq("payload", expected, actual).is_ok());
    }

    #[test]
    fn test_differing_readers_report_position() {
        let err = check_readers_eq(
            "payload",
            Cursor::new(b"abcd".to_vec()),
            Cursor::new(b"abXd".to_vec()),
        )
        .unwrap_err();
        assert!(err.to_string().contains("(error found at position 2)"));
    }
}
