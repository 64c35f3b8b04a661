use super::*;

#[test]
fn from_rgba_rejects_wrong_length() {
    assert!(Raster::from_rgba(2, 2, vec![0; 15]).is_err());
    assert!(Raster::from_rgba(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn rgb_and_mask_planes_split_and_join() {
    let rgb = [1u8, 2, 3, 4, 5, 6];
    let r = Raster::from_rgb_and_mask(2, 1, &rgb, Some(&[7, 8])).unwrap();
    assert_eq!(r.data, vec![1, 2, 3, 7, 4, 5, 6, 8]);
    assert_eq!(r.to_rgb(), rgb.to_vec());
    assert_eq!(r.to_mask(), vec![7, 8]);

    let opaque = Raster::from_rgb_and_mask(2, 1, &rgb, None).unwrap();
    assert_eq!(opaque.to_mask(), vec![255, 255]);
    assert!(Raster::from_rgb_and_mask(2, 1, &rgb, Some(&[1])).is_err());
}

#[test]
fn cropped_pads_and_clips_from_top_left() {
    let mut r = Raster::filled(Size::new(2, 2), [9, 9, 9, 255]);
    r.put_pixel(1, 1, [1, 1, 1, 255]);

    let small = r.cropped(Size::new(1, 1));
    assert_eq!(small.size(), Size::new(1, 1));
    assert_eq!(small.pixel(0, 0), Some([9, 9, 9, 255]));

    let big = r.cropped(Size::new(3, 3));
    assert_eq!(big.pixel(1, 1), Some([1, 1, 1, 255]));
    assert_eq!(big.pixel(2, 2), Some([0, 0, 0, 0]));
}

#[test]
fn shifted_fills_uncovered_band_with_transparent() {
    let r = Raster::filled(Size::new(4, 1), [5, 5, 5, 255]);
    let s = r.shifted(-1, 0);
    assert_eq!(s.pixel(0, 0), Some([5, 5, 5, 255]));
    assert_eq!(s.pixel(3, 0), Some([0, 0, 0, 0]));
}

#[test]
fn scale_alpha_only_touches_alpha() {
    let mut r = Raster::filled(Size::new(1, 1), [10, 20, 30, 200]);
    r.scale_alpha(0.5);
    assert_eq!(r.pixel(0, 0), Some([10, 20, 30, 100]));
}

#[test]
fn rgba_image_conversion_preserves_pixels() {
    let r = Raster::filled(Size::new(3, 2), [1, 2, 3, 4]);
    let img = r.clone().into_rgba_image().unwrap();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.as_raw(), &r.data);
}
