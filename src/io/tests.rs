//! Tests for compression codecs

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use std::io::{Read, Write};
use test_case::test_case;

const TEXT: &str = "The quick brown fox jumps over the lazy dog.\n";

fn sample() -> Vec<u8> {
    TEXT.repeat(200).into_bytes()
}

#[test_case("none", CompressionType::None)]
#[test_case("GZIP", CompressionType::Gzip)]
#[test_case("Snappy", CompressionType::Snappy)]
#[test_case("zstd", CompressionType::Zstd)]
fn test_for_name_ignores_case(name: &str, expected: CompressionType) {
    assert_eq!(CompressionType::for_name(name).unwrap(), expected);
    assert_eq!(name.parse::<CompressionType>().unwrap(), expected);
}

#[test]
fn test_for_name_unknown() {
    let err = CompressionType::for_name("lzma").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(err.to_string().contains("Unknown compression type: lzma"));
}

#[test_case(CompressionType::None, "")]
#[test_case(CompressionType::Gzip, ".gz")]
#[test_case(CompressionType::Snappy, ".snappy")]
#[test_case(CompressionType::Zstd, ".zst")]
fn test_extension(compression: CompressionType, expected: &str) {
    assert_eq!(compression.extension(), expected);
}

#[test_case(CompressionType::None)]
#[test_case(CompressionType::Gzip)]
#[test_case(CompressionType::Snappy)]
#[test_case(CompressionType::Zstd)]
fn test_compress_then_decompress(compression: CompressionType) {
    let data = sample();
    let mut writer = compression.compress(Vec::new()).unwrap();
    writer.write_all(&data).unwrap();
    let compressed = writer.finish().unwrap();

    if compression == CompressionType::None {
        assert_eq!(compressed, data);
    } else {
        assert!(compressed.len() < data.len());
    }

    let mut restored = Vec::new();
    compression
        .decompress(compressed.as_slice())
        .unwrap()
        .read_to_end(&mut restored)
        .unwrap();
    assert_eq!(restored, data);
}

#[test]
fn test_gzip_output_has_magic_header() {
    let mut writer = CompressionType::Gzip.compress(Vec::new()).unwrap();
    writer.write_all(b"hello").unwrap();
    let compressed = writer.finish().unwrap();
    assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
}

#[test]
fn test_compressed_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let compression = CompressionType::Zstd;
    let path = dir.path().join(format!("records.jsonl{}", compression.extension()));

    let file = std::fs::File::create(&path).unwrap();
    let mut writer = compression.compress(file).unwrap();
    writer.write_all(TEXT.as_bytes()).unwrap();
    writer.finish().unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let mut text = String::new();
    compression
        .decompress(file)
        .unwrap()
        .read_to_string(&mut text)
        .unwrap();
    assert_eq!(text, TEXT);
}
