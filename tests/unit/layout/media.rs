use super::*;
use crate::foundation::bound::Bound;

struct Gradient {
    size: Size,
    calls: Vec<f64>,
}

impl MediaSource for Gradient {
    fn duration(&self) -> Option<f64> {
        Some(2.0)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn sample_rgb(&mut self, t: f64) -> LayoutResult<Vec<u8>> {
        self.calls.push(t);
        let level = (t * 100.0) as u8;
        Ok(vec![level; self.size.pixel_count() * 3])
    }
}

struct Broken;

impl MediaSource for Broken {
    fn duration(&self) -> Option<f64> {
        None
    }

    fn size(&self) -> Size {
        Size::new(2, 2)
    }

    fn sample_rgb(&mut self, _t: f64) -> LayoutResult<Vec<u8>> {
        Ok(vec![0; 5])
    }
}

#[test]
fn media_keeps_its_intrinsic_size() {
    let mut clip = MediaClip::new(Gradient {
        size: Size::new(3, 2),
        calls: Vec::new(),
    });
    let c = Constraints::tight(Size::new(10, 10));
    assert_eq!(clip.resolve_size(c).unwrap(), Size::new(3, 2));
    let c = Constraints::loose(Bound::px(1), Bound::px(1));
    assert_eq!(clip.resolve_size(c).unwrap(), Size::new(3, 2));
}

#[test]
fn missing_mask_is_opaque_and_duration_comes_from_source() {
    let mut clip = MediaClip::new(Gradient {
        size: Size::new(2, 2),
        calls: Vec::new(),
    });
    assert_eq!(clip.duration(), Some(2.0));
    clip.resolve_size(Constraints::UNBOUNDED).unwrap();

    let frame = clip.frame(0.5).unwrap();
    assert_eq!(frame.pixel(1, 1), Some([50, 50, 50, 255]));
    assert!(clip.frame(3.0).unwrap().is_fully_transparent());
    assert_eq!(clip.source().calls, vec![0.5]);
}

#[test]
fn image_alpha_becomes_the_mask() {
    let mut img = image::RgbaImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
    img.put_pixel(1, 0, image::Rgba([40, 50, 60, 7]));
    let mut clip = MediaClip::new(ImageSource::new(img).with_duration(1.0));
    assert_eq!(clip.duration(), Some(1.0));
    clip.resolve_size(Constraints::UNBOUNDED).unwrap();

    let frame = clip.frame(0.0).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(1, 0), Some([40, 50, 60, 7]));
}

#[test]
fn wrong_plane_size_is_reported() {
    let mut clip = MediaClip::new(Broken);
    clip.resolve_size(Constraints::UNBOUNDED).unwrap();
    let err = clip.frame(0.0).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"), "{err}");
}

#[test]
fn missing_image_file_is_wrapped() {
    let err = ImageSource::open("/definitely/not/here.png").unwrap_err();
    assert!(matches!(err, crate::foundation::error::LayoutError::Other(_)));
    assert!(err.to_string().contains("decode image"), "{err}");
}
