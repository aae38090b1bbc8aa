use spot_bmp::Rgb;
use spot_detect::{BoundingBox, Channel, ColorSignature};

#[test]
fn test_default_signature_levels() {
    let signature = ColorSignature::default();
    assert_eq!(signature, ColorSignature::new(230, 160, 210));
}

#[test]
fn test_signature_with_level() {
    let signature = ColorSignature::default()
        .with_level(Channel::Red, 170)
        .with_level(Channel::Green, 60)
        .with_level(Channel::Blue, 80);

    assert_eq!(signature.level(Channel::Red), 170);
    assert_eq!(signature.level(Channel::Green), 60);
    assert_eq!(signature.level(Channel::Blue), 80);
}

#[test]
fn test_signature_matches_agrees_with_bgr() {
    let signature = ColorSignature::new(170, 60, 80);
    for pixel in [
        Rgb([170, 60, 80]),
        Rgb([255, 0, 0]),
        Rgb([169, 0, 0]),
        Rgb([200, 61, 0]),
        Rgb([200, 0, 81]),
    ] {
        let [r, g, b] = pixel.0;
        assert_eq!(signature.matches(pixel), signature.matches_bgr(&[b, g, r]));
    }
    assert!(signature.matches(Rgb([170, 60, 80])));
    assert!(!signature.matches(Rgb([169, 0, 0])));
}

#[test]
fn test_signature_display() {
    assert_eq!(
        ColorSignature::new(1, 2, 3).to_string(),
        "red_level:1 green_level:2 blue_level:3"
    );
}

#[test]
fn test_bbox_normalized() {
    let bbox = BoundingBox::new(8, 9, 2, 3).normalized();
    assert_eq!(bbox, BoundingBox::new(2, 3, 8, 9));
    assert_eq!(bbox.width(), 7);
    assert_eq!(bbox.height(), 7);
}

#[test]
fn test_bbox_center_and_offset() {
    let bbox = BoundingBox::new(10, 20, 20, 31);
    assert_eq!(bbox.center(), (15, 25));
    // 160x120 frame has its center at (80, 60)
    assert_eq!(bbox.offset_from_center(160, 120), (-65, -35));

    let right_low = BoundingBox::new(150, 100, 159, 119);
    assert_eq!(right_low.offset_from_center(160, 120), (74, 49));
}

#[test]
fn test_bbox_encloses() {
    let outer = BoundingBox::new(0, 0, 10, 10);
    assert!(outer.encloses(&BoundingBox::new(2, 2, 10, 5)));
    assert!(!outer.encloses(&BoundingBox::new(2, 2, 11, 5)));
}

#[test]
fn test_bbox_display() {
    assert_eq!(BoundingBox::new(1, 2, 3, 4).to_string(), "(1,2)-(3,4)");
}
