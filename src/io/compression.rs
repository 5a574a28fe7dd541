//! Compression codecs for files and binary streams

use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression as GzipLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, BufReader, Read, Write};
use std::str::FromStr;

/// Standard compression types with their file extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionType {
    /// No compression
    #[default]
    None,
    /// Gzip compression
    Gzip,
    /// Snappy framed compression
    Snappy,
    /// Zstandard compression
    Zstd,
}

impl CompressionType {
    /// Every compression type
    pub const ALL: [CompressionType; 4] = [
        CompressionType::None,
        CompressionType::Gzip,
        CompressionType::Snappy,
        CompressionType::Zstd,
    ];

    /// The upper-case name of the type
    pub const fn name(self) -> &'static str {
        match self {
            CompressionType::None => "NONE",
            CompressionType::Gzip => "GZIP",
            CompressionType::Snappy => "SNAPPY",
            CompressionType::Zstd => "ZSTD",
        }
    }

    /// Look up a type by name, ignoring case
    pub fn for_name(name: &str) -> Result<Self> {
        CompressionType::ALL
            .into_iter()
            .find(|compression| compression.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                Error::invalid_argument(format!("Unknown compression type: {name}"))
            })
    }

    /// The file name extension, empty for [`CompressionType::None`]
    pub const fn extension(self) -> &'static str {
        match self {
            CompressionType::None => "",
            CompressionType::Gzip => ".gz",
            CompressionType::Snappy => ".snappy",
            CompressionType::Zstd => ".zst",
        }
    }

    /// Wrap `output` so that data written to it is compressed.
    ///
    /// Call [`CompressedWriter::finish`] to write any trailer and get `output` back.
    pub fn compress<W: Write>(self, output: W) -> io::Result<CompressedWriter<W>> {
        Ok(match self {
            CompressionType::None => CompressedWriter::None(output),
            CompressionType::Gzip => {
                CompressedWriter::Gzip(GzEncoder::new(output, GzipLevel::default()))
            }
            CompressionType::Snappy => {
                CompressedWriter::Snappy(snap::write::FrameEncoder::new(output))
            }
            CompressionType::Zstd => {
                CompressedWriter::Zstd(zstd::stream::write::Encoder::new(output, 0)?)
            }
        })
    }

    /// Wrap `input` so that reads return decompressed data
    pub fn decompress<R: Read>(self, input: R) -> io::Result<CompressedReader<R>> {
        Ok(match self {
            CompressionType::None => CompressedReader::None(input),
            CompressionType::Gzip => CompressedReader::Gzip(GzDecoder::new(input)),
            CompressionType::Snappy => {
                CompressedReader::Snappy(snap::read::FrameDecoder::new(input))
            }
            CompressionType::Zstd => {
                CompressedReader::Zstd(zstd::stream::read::Decoder::new(input)?)
            }
        })
    }
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::for_name(s)
    }
}

// ============================================================================
// Writer
// ============================================================================

/// A writer that compresses into an inner writer
pub enum CompressedWriter<W: Write> {
    /// Pass-through
    None(W),
    /// Gzip encoder
    Gzip(GzEncoder<W>),
    /// Snappy frame encoder
    Snappy(snap::write::FrameEncoder<W>),
    /// Zstandard encoder
    Zstd(zstd::stream::write::Encoder<'static, W>),
}

impl<W: Write> CompressedWriter<W> {
    /// Flush all compressed data, write the trailer and return the inner writer
    pub fn finish(self) -> io::Result<W> {
        match self {
            CompressedWriter::None(mut output) => {
                output.flush()?;
                Ok(output)
            }
            CompressedWriter::Gzip(encoder) => encoder.finish(),
            CompressedWriter::Snappy(encoder) => encoder
                .into_inner()
                .map_err(|e| io::Error::new(e.error().kind(), e.error().to_string())),
            CompressedWriter::Zstd(encoder) => encoder.finish(),
        }
    }
}

impl<W: Write> Write for CompressedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            CompressedWriter::None(output) => output.write(buf),
            CompressedWriter::Gzip(encoder) => encoder.write(buf),
            CompressedWriter::Snappy(encoder) => encoder.write(buf),
            CompressedWriter::Zstd(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            CompressedWriter::None(output) => output.flush(),
            CompressedWriter::Gzip(encoder) => encoder.flush(),
            CompressedWriter::Snappy(encoder) => encoder.flush(),
            CompressedWriter::Zstd(encoder) => encoder.flush(),
        }
    }
}

// ============================================================================
// Reader
// ============================================================================

/// A reader that decompresses an inner reader
pub enum CompressedReader<R: Read> {
    /// Pass-through
    None(R),
    /// Gzip decoder
    Gzip(GzDecoder<R>),
    /// Snappy frame decoder
    Snappy(snap::read::FrameDecoder<R>),
    /// Zstandard decoder
    Zstd(zstd::stream::read::Decoder<'static, BufReader<R>>),
}

impl<R: Read> Read for CompressedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            CompressedReader::None(input) => input.read(buf),
            CompressedReader::Gzip(decoder) => decoder.read(buf),
            CompressedReader::Snappy(decoder) => decoder.read(buf),
            CompressedReader::Zstd(decoder) => decoder.read(buf),
        }
    }
}
