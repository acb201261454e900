//! Bounded I/O utilities for the scan layer.
//!
//! The engine never opens files. These helpers read exactly what the
//! classifiers need, a short header sample plus the content streamed once,
//! while enforcing a size cap so a huge file cannot exhaust memory.

use crate::entropy::Histogram;
use crate::error::{EntroscanError, Result};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, warn};

/// Size caps applied to every file the scan layer opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IOLimits {
    /// Bytes consumed from one file before reads report end of input
    pub max_read_bytes: u64,
    /// Files larger than this are refused at open
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self::with_cap(100 * 1024 * 1024)
    }
}

impl IOLimits {
    /// Both limits set to the same cap.
    pub fn with_cap(cap: u64) -> Self {
        Self {
            max_read_bytes: cap,
            max_file_size: cap,
        }
    }
}

/// Reader that reports end of input once `limit` bytes were delivered.
pub struct BoundedReader<R> {
    inner: R,
    remaining: u64,
    limit: u64,
}

impl<R: Read> BoundedReader<R> {
    pub fn new(inner: R, limit: u64) -> Self {
        Self {
            inner,
            remaining: limit,
            limit,
        }
    }

    /// Bytes delivered so far.
    pub fn bytes_read(&self) -> u64 {
        self.limit - self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Ok(0);
        }
        let want = buf.len().min(usize::try_from(self.remaining).unwrap_or(usize::MAX));
        let n = self.inner.read(&mut buf[..want])?;
        self.remaining -= n as u64;
        if self.remaining == 0 {
            debug!(limit = self.limit, "read cap reached");
        }
        Ok(n)
    }
}

/// Header sample plus a histogram of the whole content, read in one pass.
#[derive(Debug, Clone)]
pub struct ContentSample {
    /// Leading bytes, at most the requested sample size
    pub header: Vec<u8>,
    /// Histogram over every byte actually read
    pub full: Histogram,
}

/// An open file whose size was checked against [`IOLimits`].
pub struct SafeFileReader {
    file: File,
    size: u64,
    limits: IOLimits,
}

impl SafeFileReader {
    /// Open a file, rejecting it when it exceeds the size limit.
    pub fn open<P: AsRef<Path>>(path: P, limits: IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let size = file.metadata()?.len();

        debug!(
            ?path,
            size,
            max_file = limits.max_file_size,
            max_read = limits.max_read_bytes,
            "opened file"
        );

        if size > limits.max_file_size {
            warn!(?path, size, limit = limits.max_file_size, "file too large");
            return Err(EntroscanError::FileTooLarge {
                size,
                limit: limits.max_file_size,
            });
        }

        Ok(Self { file, size, limits })
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn limits(&self) -> &IOLimits {
        &self.limits
    }

    /// Read up to `len` leading bytes. Short files yield fewer bytes.
    pub fn read_prefix(&mut self, len: usize) -> Result<Vec<u8>> {
        let cap = std::cmp::min(len as u64, self.limits.max_read_bytes);
        self.file.seek(SeekFrom::Start(0))?;
        let mut data = Vec::with_capacity(cap as usize);
        (&mut self.file).take(cap).read_to_end(&mut data)?;
        Ok(data)
    }

    /// Reader over the whole file from the start, bounded by `max_read_bytes`.
    pub fn bounded_reader(&mut self) -> Result<BoundedReader<&mut File>> {
        self.file.seek(SeekFrom::Start(0))?;
        Ok(BoundedReader::new(
            &mut self.file,
            self.limits.max_read_bytes,
        ))
    }

    /// Read the header sample and stream the whole file into a histogram.
    ///
    /// The content is never held in memory as a whole; sizes used for the
    /// entropy figures are the bytes actually read.
    pub fn read_sample(&mut self, header_len: usize, chunk_size: usize) -> Result<ContentSample> {
        let header = self.read_prefix(header_len)?;

        let mut full = Histogram::new();
        let mut reader = self.bounded_reader()?;
        let mut chunk = vec![0u8; chunk_size.max(1)];
        loop {
            match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => full.update(&chunk[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        debug!(
            header = header.len(),
            read = reader.bytes_read(),
            "content sampled"
        );
        Ok(ContentSample { header, full })
    }
}
