//! Error-path tests: malformed input, truncation and iterator fusing.

use jpeg_exif::{ErrorKind, ExifError, ExifReader, IoError, MalformedInput, MemoryReader};

use super::test_utils::{
    create_canon_jpeg, tiff_header_offset, ByteOrderType, ExifJpegBuilder, IfdBuilder,
    TrackingReader,
};

fn decode_err(data: Vec<u8>) -> ExifError {
    ExifReader::new()
        .decode_reader(MemoryReader::new(data))
        .unwrap_err()
}

#[test]
fn test_non_jpeg_fails_before_any_tiff_read() {
    let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
    png.extend_from_slice(&[0u8; 64]);
    let reader = TrackingReader::new(png);
    let probe = reader.clone();

    let err = ExifReader::new().decode_reader(reader).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert!(matches!(
        err,
        ExifError::Malformed(MalformedInput::MissingSoi(0x8950))
    ));
    assert_eq!(probe.requests(), vec![(0, 2)]);
}

#[test]
fn test_missing_soi_message() {
    let err = decode_err(b"GIF89a....".to_vec());
    assert!(err.to_string().contains("Invalid JPEG provided"));
    assert!(err.to_string().contains("0x4749"));
}

#[test]
fn test_missing_app1() {
    // SOI followed directly by a quantization table
    let err = decode_err(vec![0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x43, 0x00]);
    assert!(matches!(
        err,
        ExifError::Malformed(MalformedInput::MissingApp1(0xFFDB))
    ));
}

#[test]
fn test_app1_without_exif_signature() {
    // XMP packets also live in APP1
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x20];
    data.extend_from_slice(b"http://ns.adobe.com/xap/1.0/\0");
    let err = decode_err(data);
    assert!(matches!(
        err,
        ExifError::Malformed(MalformedInput::MissingExifHeader(sig)) if &sig == b"http"
    ));
}

#[test]
fn test_unknown_byte_order() {
    let mut data = create_canon_jpeg();
    let header = tiff_header_offset(false) as usize;
    data[header..header + 2].copy_from_slice(b"XX");

    let err = decode_err(data);
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert!(matches!(
        err,
        ExifError::Malformed(MalformedInput::UnknownByteOrder(0x5858))
    ));
}

#[test]
fn test_truncated_before_tiff_header() {
    let mut data = create_canon_jpeg();
    data.truncate(tiff_header_offset(false) as usize + 3);

    let err = decode_err(data);
    assert_eq!(err.kind(), ErrorKind::IoFailure);
}

#[test]
fn test_first_ifd_offset_past_end() {
    let mut data = create_canon_jpeg();
    let field = tiff_header_offset(false) as usize + 4;
    data[field..field + 4].copy_from_slice(&0x00FF_FFFFu32.to_le_bytes());

    let err = decode_err(data);
    assert!(matches!(err, ExifError::Io(IoError::SeekOutOfBounds { .. })));
}

#[test]
fn test_truncated_directory_fails_then_fuses() {
    let data = ExifJpegBuilder::new(ByteOrderType::LittleEndian)
        .ifd0(
            IfdBuilder::new()
                .short(0x0112, 1)
                .short(0x0128, 2)
                .short(0x0213, 2),
        )
        .build();
    // Keep the first two entries and 5 bytes of the third
    let cut = tiff_header_offset(false) as usize + 8 + 2 + 2 * 12 + 5;
    let truncated = data[..cut].to_vec();

    let mut tags = ExifReader::new()
        .decode_reader(MemoryReader::new(truncated))
        .unwrap();

    assert_eq!(tags.next().unwrap().unwrap().0, 0x0112);
    assert_eq!(tags.next().unwrap().unwrap().0, 0x0128);

    let err = tags.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);

    assert!(tags.next().is_none());
    assert!(tags.next().is_none());
}

#[test]
fn test_indirect_value_out_of_bounds() {
    // Model points well past the end of the file
    let data = ExifJpegBuilder::new(ByteOrderType::BigEndian)
        .ifd0(
            IfdBuilder::new()
                .short(0x0112, 1)
                .raw(0x0110, 2, 64, &0x0000_F000u32.to_be_bytes()),
        )
        .build();

    let results: Vec<_> = ExifReader::new()
        .decode_reader(MemoryReader::new(data))
        .unwrap()
        .collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert_eq!(results[1].as_ref().unwrap_err().kind(), ErrorKind::IoFailure);
}
