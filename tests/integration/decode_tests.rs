//! Decoding tests over synthetic EXIF JPEGs.

use bytes::Bytes;

use jpeg_exif::{
    ByteOrder, ExifReader, MemoryReader, TagValue, TAG_DATE_TIME, TAG_EXIF_IFD_POINTER,
    TAG_GPS_IFD_POINTER, TAG_IMAGE_MAKE, TAG_IMAGE_MODEL, TAG_ORIENTATION, TAG_SOFTWARE,
    TAG_X_RESOLUTION,
};

use super::test_utils::{
    canon_exif_ifd, canon_gps_ifd, canon_ifd0, create_canon_jpeg, tiff_header_offset,
    ByteOrderType, ExifJpegBuilder, IfdBuilder, TrackingReader,
};

fn decode_all(reader: &ExifReader, data: Vec<u8>) -> Vec<(u16, TagValue)> {
    reader
        .decode_reader(MemoryReader::new(data))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

fn rational_bytes(byte_order: ByteOrderType, numerator: u32, denominator: u32) -> Vec<u8> {
    let mut out = Vec::new();
    match byte_order {
        ByteOrderType::LittleEndian => {
            out.extend_from_slice(&numerator.to_le_bytes());
            out.extend_from_slice(&denominator.to_le_bytes());
        }
        ByteOrderType::BigEndian => {
            out.extend_from_slice(&numerator.to_be_bytes());
            out.extend_from_slice(&denominator.to_be_bytes());
        }
    }
    out
}

// =============================================================================
// Full IFD0 walk
// =============================================================================

fn expected_ifd0(byte_order: ByteOrderType) -> Vec<(u16, TagValue)> {
    vec![
        (TAG_IMAGE_MAKE, TagValue::from("Canon")),
        (TAG_IMAGE_MODEL, TagValue::from("Canon EOS 40D")),
        (TAG_ORIENTATION, TagValue::Integer(byte_order.inline_short(1))),
        (
            TAG_X_RESOLUTION,
            TagValue::Bytes(Bytes::from(rational_bytes(byte_order, 72, 1))),
        ),
        (
            0x011B,
            TagValue::Bytes(Bytes::from(rational_bytes(byte_order, 72, 1))),
        ),
        (0x0128, TagValue::Integer(byte_order.inline_short(2))),
        (TAG_SOFTWARE, TagValue::from("GIMP 2.4.5")),
        (TAG_DATE_TIME, TagValue::from("2008:07:31 10:38:11")),
        (0x0213, TagValue::Integer(byte_order.inline_short(2))),
    ]
}

#[test]
fn test_all_ifd0_tags_little_endian() {
    let data = ExifJpegBuilder::new(ByteOrderType::LittleEndian)
        .ifd0(canon_ifd0())
        .build();

    let tags = decode_all(&ExifReader::new(), data);
    assert_eq!(tags, expected_ifd0(ByteOrderType::LittleEndian));
}

#[test]
fn test_all_ifd0_tags_big_endian() {
    let data = ExifJpegBuilder::new(ByteOrderType::BigEndian)
        .ifd0(canon_ifd0())
        .build();

    let tags = decode_all(&ExifReader::new(), data);
    assert_eq!(tags, expected_ifd0(ByteOrderType::BigEndian));
}

#[test]
fn test_header_reports_byte_order() {
    let le = ExifReader::new()
        .decode_reader(MemoryReader::new(create_canon_jpeg()))
        .unwrap();
    assert_eq!(le.header().byte_order, ByteOrder::LittleEndian);
    assert_eq!(le.header().header_offset, tiff_header_offset(false));

    let be = ExifReader::new()
        .decode_reader(MemoryReader::new(
            ExifJpegBuilder::new(ByteOrderType::BigEndian)
                .with_app0()
                .ifd0(canon_ifd0())
                .build(),
        ))
        .unwrap();
    assert_eq!(be.header().byte_order, ByteOrder::BigEndian);
    assert_eq!(be.header().header_offset, tiff_header_offset(true));
}

#[test]
fn test_app0_is_skipped() {
    let with_app0 = ExifJpegBuilder::new(ByteOrderType::LittleEndian)
        .with_app0()
        .ifd0(canon_ifd0())
        .build();

    let tags = decode_all(&ExifReader::new(), with_app0);
    assert_eq!(tags, expected_ifd0(ByteOrderType::LittleEndian));
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_make_filter_yields_only_make() {
    let reader = ExifReader::new().with_filter([TAG_IMAGE_MAKE]);
    let tags = decode_all(&reader, create_canon_jpeg());
    assert_eq!(tags, vec![(TAG_IMAGE_MAKE, TagValue::from("Canon"))]);
}

#[test]
fn test_filter_keeps_directory_order() {
    // Requested order does not matter
    let reader = ExifReader::new().with_filter([TAG_DATE_TIME, TAG_IMAGE_MODEL]);
    let ids: Vec<u16> = decode_all(&reader, create_canon_jpeg())
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(ids, vec![TAG_IMAGE_MODEL, TAG_DATE_TIME]);
}

#[test]
fn test_filter_for_absent_tag_is_empty() {
    let reader = ExifReader::new().with_filter([0x8298]);
    assert!(decode_all(&reader, create_canon_jpeg()).is_empty());
}

#[test]
fn test_filter_for_sub_ifd_tag_without_following_is_empty() {
    // ExposureTime lives in the Exif sub-IFD
    let reader = ExifReader::new().with_filter([0x829A]);
    assert!(decode_all(&reader, create_canon_jpeg()).is_empty());
}

// =============================================================================
// Value resolution
// =============================================================================

#[test]
fn test_inline_long_is_integer() {
    for byte_order in [ByteOrderType::LittleEndian, ByteOrderType::BigEndian] {
        let data = ExifJpegBuilder::new(byte_order)
            .ifd0(IfdBuilder::new().long(0xA002, 3888))
            .build();
        let tags = decode_all(&ExifReader::new(), data);
        assert_eq!(tags, vec![(0xA002, TagValue::Integer(3888))]);
    }
}

#[test]
fn test_inline_ascii_and_undefined_keep_raw_bytes() {
    let data = ExifJpegBuilder::new(ByteOrderType::BigEndian)
        .ifd0(
            IfdBuilder::new()
                .ascii(0x013B, "Ab")
                .undefined(0x9000, b"0221"),
        )
        .build();

    let tags = decode_all(&ExifReader::new(), data);
    assert_eq!(
        tags,
        vec![
            // Count 3 plus one byte of zero fill in the field
            (0x013B, TagValue::Bytes(Bytes::from_static(b"Ab\0\0"))),
            (0x9000, TagValue::Bytes(Bytes::from_static(b"0221"))),
        ]
    );
}

#[test]
fn test_tag_zero_keeps_raw_bytes() {
    let data = ExifJpegBuilder::new(ByteOrderType::LittleEndian)
        .ifd0(IfdBuilder::new().bytes(0x0000, &[2, 2, 0, 0]))
        .build();
    let tags = decode_all(&ExifReader::new(), data);
    assert_eq!(tags, vec![(0x0000, TagValue::Bytes(Bytes::from_static(&[2, 2, 0, 0])))]);
}

#[test]
fn test_indirect_ascii_padding_is_trimmed() {
    let data = ExifJpegBuilder::new(ByteOrderType::LittleEndian)
        .ifd0(IfdBuilder::new().ascii_raw(0x010E, b"  holiday \n\0\0\0"))
        .build();
    let tags = decode_all(&ExifReader::new(), data);
    // Leading spaces are kept
    assert_eq!(tags, vec![(0x010E, TagValue::from("  holiday"))]);
}

#[test]
fn test_indirect_undefined_is_untrimmed_bytes() {
    let payload = b"ASCII\0\0\0note  ";
    let data = ExifJpegBuilder::new(ByteOrderType::BigEndian)
        .ifd0(IfdBuilder::new().undefined(0x9286, payload))
        .build();
    let tags = decode_all(&ExifReader::new(), data);
    assert_eq!(tags, vec![(0x9286, TagValue::Bytes(Bytes::from_static(payload)))]);
}

#[test]
fn test_unknown_format_is_treated_as_inline() {
    // Format 99 has no component size, so its field is an integer
    let data = ExifJpegBuilder::new(ByteOrderType::LittleEndian)
        .ifd0(
            IfdBuilder::new()
                .raw(0xC000, 99, 1000, &[0xEF, 0xBE, 0xAD, 0xDE])
                .ascii(TAG_IMAGE_MAKE, "Canon"),
        )
        .build();
    let tags = decode_all(&ExifReader::new(), data);
    assert_eq!(
        tags,
        vec![
            (0xC000, TagValue::Integer(0xDEAD_BEEF)),
            (TAG_IMAGE_MAKE, TagValue::from("Canon")),
        ]
    );
}

#[test]
fn test_empty_ifd0_yields_nothing() {
    let data = ExifJpegBuilder::new(ByteOrderType::LittleEndian).build();
    assert!(decode_all(&ExifReader::new(), data).is_empty());
}

// =============================================================================
// Sub-IFDs
// =============================================================================

#[test]
fn test_sub_ifds_not_walked_by_default() {
    let mut tags = ExifReader::new()
        .decode_reader(MemoryReader::new(create_canon_jpeg()))
        .unwrap();

    let ids: Vec<u16> = tags.by_ref().map(|t| t.unwrap().0).collect();
    assert_eq!(ids.len(), 11);
    assert_eq!(&ids[9..], &[TAG_EXIF_IFD_POINTER, TAG_GPS_IFD_POINTER]);

    // IFD0 is 2 + 11 * 12 + 4 bytes after the 8-byte header
    let exif = tiff_header_offset(false) + 146;
    let gps = exif + 54;
    let pointers = tags.sub_ifd_pointers();
    assert_eq!(pointers.exif, Some(exif));
    assert_eq!(pointers.gps, Some(gps));
}

#[test]
fn test_pointer_tags_carry_relative_offsets() {
    let tags = decode_all(&ExifReader::new(), create_canon_jpeg());
    assert_eq!(tags[9], (TAG_EXIF_IFD_POINTER, TagValue::Integer(146)));
    assert_eq!(tags[10], (TAG_GPS_IFD_POINTER, TagValue::Integer(200)));
}

#[test]
fn test_follow_sub_ifds_walks_exif_then_gps() {
    let reader = ExifReader::new().follow_sub_ifds(true);
    let tags = decode_all(&reader, create_canon_jpeg());

    let ids: Vec<u16> = tags.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids.len(), 11 + 4 + 1);
    assert_eq!(&ids[11..], &[0x829A, 0x829D, 0x8822, 0x9000, 0x0000]);

    let le = ByteOrderType::LittleEndian;
    assert_eq!(
        tags[11].1,
        TagValue::Bytes(Bytes::from(rational_bytes(le, 1, 160)))
    );
    assert_eq!(tags[13].1, TagValue::Integer(1));
    assert_eq!(tags[14].1, TagValue::Bytes(Bytes::from_static(b"0221")));
    assert_eq!(tags[15].1, TagValue::Bytes(Bytes::from_static(&[2, 2, 0, 0])));
}

#[test]
fn test_follow_sub_ifds_with_only_gps() {
    let data = ExifJpegBuilder::new(ByteOrderType::BigEndian)
        .ifd0(IfdBuilder::new().ascii(TAG_IMAGE_MAKE, "Canon"))
        .gps_ifd(canon_gps_ifd())
        .build();
    let reader = ExifReader::new().follow_sub_ifds(true);
    let ids: Vec<u16> = decode_all(&reader, data).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![TAG_IMAGE_MAKE, TAG_GPS_IFD_POINTER, 0x0000]);
}

#[test]
fn test_collect_map_with_sub_ifds() {
    let data = ExifJpegBuilder::new(ByteOrderType::LittleEndian)
        .ifd0(canon_ifd0())
        .exif_ifd(canon_exif_ifd())
        .build();
    let map = ExifReader::new()
        .follow_sub_ifds(true)
        .decode_reader(MemoryReader::new(data))
        .unwrap()
        .collect_map()
        .unwrap();

    assert_eq!(map.len(), 10 + 4);
    assert_eq!(map[&TAG_IMAGE_MAKE].as_text(), Some("Canon"));
    assert_eq!(map[&0x9000].as_bytes(), Some(&b"0221"[..]));
}

// =============================================================================
// Laziness
// =============================================================================

#[test]
fn test_decode_reads_only_up_to_entry_count() {
    let reader = TrackingReader::new(create_canon_jpeg());
    let probe = reader.clone();

    let _tags = ExifReader::new().decode_reader(reader).unwrap();

    // Markers, signature, TIFF header and the IFD0 entry count
    assert_eq!(probe.high_water_mark(), tiff_header_offset(false) + 8 + 2);
}

#[test]
fn test_first_tag_does_not_touch_later_entries() {
    let reader = TrackingReader::new(create_canon_jpeg());
    let probe = reader.clone();

    let mut tags = ExifReader::new().decode_reader(reader).unwrap();
    let before = probe.request_count();
    let (id, value) = tags.next().unwrap().unwrap();
    assert_eq!(id, TAG_IMAGE_MAKE);
    assert_eq!(value.as_text(), Some("Canon"));

    let second_entry = tiff_header_offset(false) + 8 + 2 + 12;
    let ifd0_end = second_entry + 10 * 12;
    for &(offset, _) in &probe.requests()[before..] {
        assert!(
            offset < second_entry || offset >= ifd0_end,
            "unexpected read at {} while yielding the first tag",
            offset
        );
    }
}
