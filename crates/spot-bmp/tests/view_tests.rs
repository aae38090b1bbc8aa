use spot_bmp::{BitmapView, BmpError, Rgb, RowOrder, blank};

const RED: Rgb<u8> = Rgb([200, 10, 20]);

#[test]
fn test_parse_blank_bottom_up() {
    let bytes = blank(5, 3, RowOrder::BottomUp, RED);
    let view = BitmapView::parse(&bytes[..]).unwrap();

    assert_eq!(view.width(), 5);
    assert_eq!(view.height(), 3);
    assert_eq!(view.row_order(), RowOrder::BottomUp);
    // 15 bytes of pixels padded to 16
    assert_eq!(view.row_stride(), 16);
    assert_eq!(view.data_offset(), 54);
    assert_eq!(view.pixel(4, 2), RED);
}

#[test]
fn test_parse_top_down_reports_positive_height() {
    let bytes = blank(4, 6, RowOrder::TopDown, RED);
    let view = BitmapView::parse(&bytes[..]).unwrap();

    assert_eq!(view.height(), 6);
    assert_eq!(view.row_order(), RowOrder::TopDown);
    assert_eq!(view.row_stride(), 12);
}

#[test]
fn test_storage_row_mapping() {
    let bottom_up = blank(2, 10, RowOrder::BottomUp, RED);
    let view = BitmapView::parse(&bottom_up[..]).unwrap();
    assert_eq!(view.storage_row(0), 9);
    assert_eq!(view.storage_row(7), 2);

    let top_down = blank(2, 10, RowOrder::TopDown, RED);
    let view = BitmapView::parse(&top_down[..]).unwrap();
    assert_eq!(view.storage_row(0), 0);
    assert_eq!(view.storage_row(7), 7);
}

#[test]
fn test_pixel_offset_bottom_up() {
    let bytes = blank(10, 10, RowOrder::BottomUp, RED);
    let view = BitmapView::parse(&bytes[..]).unwrap();
    // visual row 7 is storage row 2; stride 32
    assert_eq!(view.pixel_offset(3, 7), 54 + 2 * 32 + 9);
}

#[test]
fn test_set_pixel_writes_bgr() {
    let mut bytes = blank(3, 3, RowOrder::BottomUp, Rgb([0, 0, 0]));
    {
        let mut view = BitmapView::parse(&mut bytes[..]).unwrap();
        view.set_pixel(1, 0, Rgb([1, 2, 3]));
        assert_eq!(view.pixel(1, 0), Rgb([1, 2, 3]));
    }
    // visual row 0 is the last stored row; stride 12
    let offset = 54 + 2 * 12 + 3;
    assert_eq!(&bytes[offset..offset + 3], &[3, 2, 1]);
}

#[test]
fn test_get_pixel_out_of_range() {
    let bytes = blank(3, 2, RowOrder::TopDown, RED);
    let view = BitmapView::parse(&bytes[..]).unwrap();
    assert_eq!(view.get_pixel(2, 1), Some(RED));
    assert_eq!(view.get_pixel(3, 0), None);
    assert_eq!(view.get_pixel(0, 2), None);
}

#[test]
fn test_stored_row_excludes_padding() {
    let bytes = blank(5, 2, RowOrder::BottomUp, RED);
    let view = BitmapView::parse(&bytes[..]).unwrap();
    assert_eq!(view.stored_row(1).len(), 15);
    assert_eq!(&view.stored_row(1)[..3], &[20, 10, 200]);
}

// --- Errors ---

#[test]
fn test_too_small() {
    let bytes = vec![0u8; 53];
    assert_eq!(
        BitmapView::parse(&bytes[..]).unwrap_err(),
        BmpError::TooSmall { len: 53 }
    );
}

#[test]
fn test_bad_signature() {
    let mut bytes = blank(4, 4, RowOrder::BottomUp, RED);
    bytes[0] = b'X';
    assert!(matches!(
        BitmapView::parse(&bytes[..]),
        Err(BmpError::BadSignature([b'X', b'M']))
    ));
}

#[test]
fn test_unsupported_depth() {
    let mut bytes = blank(4, 4, RowOrder::BottomUp, RED);
    bytes[28..30].copy_from_slice(&32u16.to_le_bytes());
    assert_eq!(
        BitmapView::parse(&bytes[..]).unwrap_err(),
        BmpError::UnsupportedDepth(32)
    );
}

#[test]
fn test_truncated() {
    let bytes = blank(4, 4, RowOrder::BottomUp, RED);
    let short = &bytes[..bytes.len() - 1];
    assert_eq!(
        BitmapView::parse(short).unwrap_err(),
        BmpError::Truncated {
            expected: 54 + 48,
            got: 54 + 47
        }
    );
}

#[test]
fn test_truncated_when_header_claims_huge_image() {
    let mut bytes = blank(4, 4, RowOrder::BottomUp, RED);
    bytes[18..22].copy_from_slice(&i32::MAX.to_le_bytes());
    bytes[22..26].copy_from_slice(&i32::MAX.to_le_bytes());
    assert!(matches!(
        BitmapView::parse(&bytes[..]),
        Err(BmpError::Truncated { .. })
    ));
}

#[test]
fn test_negative_width() {
    let mut bytes = blank(4, 4, RowOrder::BottomUp, RED);
    bytes[18..22].copy_from_slice(&(-4i32).to_le_bytes());
    assert_eq!(
        BitmapView::parse(&bytes[..]).unwrap_err(),
        BmpError::NegativeWidth(-4)
    );
}

#[test]
fn test_data_offset_inside_header() {
    let mut bytes = blank(4, 4, RowOrder::TopDown, RED);
    bytes[10..14].copy_from_slice(&0u32.to_le_bytes());
    assert_eq!(
        BitmapView::parse(&bytes[..]).unwrap_err(),
        BmpError::BadDataOffset(0)
    );

    bytes[10..14].copy_from_slice(&53u32.to_le_bytes());
    assert_eq!(
        BitmapView::parse(&bytes[..]).unwrap_err(),
        BmpError::BadDataOffset(53)
    );
}

#[test]
fn test_data_offset_past_header() {
    // two spare bytes between the header and the pixels
    let mut bytes = blank(2, 2, RowOrder::TopDown, RED);
    bytes.splice(54..54, [0xAA, 0xBB]);
    bytes[10..14].copy_from_slice(&56u32.to_le_bytes());

    let view = BitmapView::parse(&bytes[..]).unwrap();
    assert_eq!(view.data_offset(), 56);
    assert_eq!(view.pixel(0, 0), RED);
    assert_eq!(view.pixel(1, 1), RED);
}

#[test]
fn test_signature_checked_before_depth() {
    let mut bytes = blank(4, 4, RowOrder::BottomUp, RED);
    bytes[1] = b'A';
    bytes[28] = 8;
    assert!(matches!(
        BitmapView::parse(&bytes[..]),
        Err(BmpError::BadSignature(_))
    ));
}

#[test]
fn test_error_display() {
    assert_eq!(
        BmpError::UnsupportedDepth(16).to_string(),
        "unsupported depth: 16 bits per pixel (only 24 is supported)"
    );
    assert!(BmpError::TooSmall { len: 3 }.to_string().contains("3 bytes"));
}
