//! Mock readers for exercising stream comparison.

use std::io::{self, ErrorKind, Read};
use tokio::io::{AsyncRead, ReadBuf};

/// Returns predetermined read sizes to test partial reads
pub struct ControlledReader {
    data: Vec<u8>,
    position: usize,
    read_sizes: Vec<usize>, // Predetermined sizes for each read operation
    read_count: usize,
}

impl ControlledReader {
    pub fn new(data: Vec<u8>, read_sizes: Vec<usize>) -> Self {
        Self {
            data,
            position: 0,
            read_sizes,
            read_count: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.data.len()
    }

    fn next_chunk(&mut self, capacity: usize) -> &[u8] {
        let remaining = self.data.len() - self.position;
        let read_size = self
            .read_sizes
            .get(self.read_count)
            .copied()
            .unwrap_or(remaining);
        let n = read_size.min(capacity).min(remaining);

        let start = self.position;
        self.position += n;
        self.read_count += 1;
        &self.data[start..start + n]
    }
}

impl Read for ControlledReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let chunk = self.next_chunk(buf.len());
        let n = chunk.len();
        buf[..n].copy_from_slice(chunk);
        Ok(n)
    }
}

impl AsyncRead for ControlledReader {
    fn poll_read(
        mut self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> std::task::Poll<io::Result<()>> {
        let chunk = self.next_chunk(buf.remaining());
        buf.put_slice(chunk);
        std::task::Poll::Ready(Ok(()))
    }
}

/// Yields `Interrupted` at each listed byte position, and a hard error once
/// `fail_at` bytes have been delivered.
pub struct FlakyReader {
    data: Vec<u8>,
    position: usize,
    interruption_points: Vec<usize>,
    fail_at: Option<usize>,
    interrupted_count: usize,
}

impl FlakyReader {
    pub fn new(data: Vec<u8>, interruption_points: Vec<usize>, fail_at: Option<usize>) -> Self {
        Self {
            data,
            position: 0,
            interruption_points,
            fail_at,
            interrupted_count: 0,
        }
    }

    pub fn interruption_count(&self) -> usize {
        self.interrupted_count
    }
}

impl Read for FlakyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(pos) = self
            .interruption_points
            .iter()
            .position(|&p| p == self.position)
        {
            self.interruption_points.remove(pos);
            self.interrupted_count += 1;
            return Err(io::Error::new(ErrorKind::Interrupted, "simulated signal"));
        }

        if self.fail_at == Some(self.position) {
            return Err(io::Error::new(
                ErrorKind::ConnectionReset,
                format!("Simulated failure at position {}", self.position),
            ));
        }

        if self.position >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }

        // One byte per read so every interruption point is visited
        buf[0] = self.data[self.position];
        self.position += 1;
        Ok(1)
    }
}
