use spot_bmp::{BmpError, BmpHeader, Compression, Rgb, RowOrder, blank};

#[test]
fn test_header_fields_of_blank() {
    let bytes = blank(7, 3, RowOrder::TopDown, Rgb([0, 0, 0]));
    let header = BmpHeader::parse(&bytes).unwrap();

    assert!(header.has_signature());
    assert_eq!(header.file_size as usize, bytes.len());
    assert_eq!(header.data_offset, 54);
    assert_eq!(header.header_size, 40);
    assert_eq!(header.width, 7);
    assert_eq!(header.height, -3);
    assert!(header.is_top_down());
    assert_eq!(header.planes, 1);
    assert_eq!(header.bits_per_pixel, 24);
    assert_eq!(header.compression, Compression::Rgb);
    // 21 bytes padded to 24, three rows
    assert_eq!(header.image_size, 72);
    assert_eq!(header.x_pixels_per_meter, 2835);
    assert_eq!(header.colors_used, 0);
}

#[test]
fn test_header_little_endian_assembly() {
    let mut bytes = vec![0u8; 54];
    bytes[0] = b'B';
    bytes[1] = b'M';
    bytes[2..6].copy_from_slice(&[0x78, 0x56, 0x34, 0x12]);
    bytes[6..8].copy_from_slice(&[0xEF, 0xBE]);
    bytes[22..26].copy_from_slice(&[0xF6, 0xFF, 0xFF, 0xFF]);
    bytes[30..34].copy_from_slice(&[0x03, 0, 0, 0]);

    let header = BmpHeader::parse(&bytes).unwrap();
    assert_eq!(header.file_size, 0x1234_5678);
    assert_eq!(header.reserved1, 0xBEEF);
    assert_eq!(header.height, -10);
    assert_eq!(header.compression, Compression::Bitfields);
}

#[test]
fn test_header_parse_ignores_signature() {
    let bytes = vec![0u8; 54];
    let header = BmpHeader::parse(&bytes).unwrap();
    assert!(!header.has_signature());
}

#[test]
fn test_header_too_small() {
    assert_eq!(
        BmpHeader::parse(&[b'B', b'M']).unwrap_err(),
        BmpError::TooSmall { len: 2 }
    );
}

#[test]
fn test_compression_names() {
    assert_eq!(Compression::from(0).to_string(), "BI_RGB (uncompressed)");
    assert_eq!(Compression::from(1).to_string(), "BI_RLE8");
    assert_eq!(Compression::from(2).to_string(), "BI_RLE4");
    assert_eq!(Compression::from(4).to_string(), "BI_JPEG");
    assert_eq!(Compression::from(5).to_string(), "BI_PNG");
    assert_eq!(Compression::from(11), Compression::Other(11));
    assert_eq!(Compression::from(11).to_string(), "11");
}

#[test]
fn test_header_dump() {
    let bytes = blank(2, 2, RowOrder::BottomUp, Rgb([0, 0, 0]));
    let dump = BmpHeader::parse(&bytes).unwrap().to_string();

    assert!(dump.starts_with("--- BMP FILE HEADER ---"));
    assert!(dump.contains("Signature: BM"));
    assert!(dump.contains("Width: 2 pixels"));
    assert!(dump.contains("Bits Per Pixel: 24"));
    assert!(dump.contains("Compression: BI_RGB (uncompressed)"));
    assert!(dump.ends_with("Important Colors: 0"));
}
