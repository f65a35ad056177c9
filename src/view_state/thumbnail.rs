//! Aspect-preserving thumbnail sizing.

use crate::model::PixelSize;

/// On-screen size of a scaled image, in UI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSize {
    /// Drawn width.
    pub width: f32,
    /// Drawn height.
    pub height: f32,
}

/// `target / max(width, height)`, or `None` for an empty image or bad target.
pub fn scale_factor(size: PixelSize, target: f32) -> Option<f32> {
    if size.is_empty() || !target.is_finite() || target <= 0.0 {
        return None;
    }
    let biggest = size.width.max(size.height) as f32;
    Some(target / biggest)
}

/// Scale `size` so its longest side equals `target`.
pub fn fit_to_target(size: PixelSize, target: f32) -> Option<ScaledSize> {
    let factor = scale_factor(size, target)?;
    Some(ScaledSize {
        width: size.width as f32 * factor,
        height: size.height as f32 * factor,
    })
}

/// Unscaled size, used for full-resolution previews.
pub fn full_size(size: PixelSize) -> Option<ScaledSize> {
    if size.is_empty() {
        return None;
    }
    Some(ScaledSize {
        width: size.width as f32,
        height: size.height as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_image_fits_width() {
        let scaled = fit_to_target(PixelSize::new(200, 100), 100.0).unwrap();
        assert_eq!((scaled.width, scaled.height), (100.0, 50.0));
    }

    #[test]
    fn portrait_image_fits_height() {
        let scaled = fit_to_target(PixelSize::new(50, 400), 100.0).unwrap();
        assert_eq!((scaled.width, scaled.height), (12.5, 100.0));
    }

    #[test]
    fn small_images_are_scaled_up() {
        let scaled = fit_to_target(PixelSize::new(10, 10), 100.0).unwrap();
        assert_eq!((scaled.width, scaled.height), (100.0, 100.0));
    }

    #[test]
    fn empty_image_has_no_size() {
        assert_eq!(fit_to_target(PixelSize::new(0, 10), 100.0), None);
        assert_eq!(full_size(PixelSize::new(10, 0)), None);
    }

    #[test]
    fn non_positive_target_has_no_size() {
        assert_eq!(scale_factor(PixelSize::new(10, 10), 0.0), None);
        assert_eq!(scale_factor(PixelSize::new(10, 10), f32::NAN), None);
    }

    #[test]
    fn full_size_is_unscaled() {
        assert_eq!(
            full_size(PixelSize::new(640, 480)),
            Some(ScaledSize {
                width: 640.0,
                height: 480.0
            })
        );
    }
}
