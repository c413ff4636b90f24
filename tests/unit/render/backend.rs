use super::*;

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut f = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 0, 32, 128, 10, 20, 30, 0],
        premultiplied: true,
    };
    f.unpremultiply();
    assert!(!f.premultiplied);
    assert_eq!(&f.data[..4], &[128, 0, 64, 128]);
    assert_eq!(&f.data[4..], &[10, 20, 30, 0]);

    // Second call is a no-op.
    f.unpremultiply();
    assert_eq!(&f.data[..4], &[128, 0, 64, 128]);
}
