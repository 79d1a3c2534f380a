use crate::image::{ImageBuffer, Rgba};

// Luminosity weighting, not a straight channel average.
const LUMA_R: f64 = 0.21;
const LUMA_G: f64 = 0.72;
const LUMA_B: f64 = 0.07;

/// Perceived brightness of a pixel, truncated to [0, 255].
pub fn luminance(px: Rgba) -> u8 {
    (LUMA_R * px.r as f64 + LUMA_G * px.g as f64 + LUMA_B * px.b as f64) as u8
}

/// Extract the greyscale intensity plane from an RGBA grid.
///
/// Fully transparent pixels are treated as opaque white background,
/// regardless of whatever RGB bits they carry. The check happens before
/// luminance extraction, so they come out as exactly 255.
pub fn from_rgba(img: &ImageBuffer<Rgba>) -> ImageBuffer<f32> {
    let mut grey = ImageBuffer::new(img.size(), 0f32);
    for y in 0..img.height() {
        for x in 0..img.width() {
            let px = img.at(x, y);
            let value = if px.a == 0 { 0xff } else { luminance(px) };
            grey.set(x, y, value as f32);
        }
    }
    grey
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminosity_weighting() {
        assert_eq!(luminance(Rgba { r: 255, g: 0, b: 0, a: 255 }), 53);
        assert_eq!(luminance(Rgba { r: 0, g: 255, b: 0, a: 255 }), 183);
        assert_eq!(luminance(Rgba { r: 0, g: 0, b: 255, a: 255 }), 17);
        assert_eq!(luminance(Rgba { r: 100, g: 100, b: 100, a: 255 }), 100);
        // 0.21*200 + 0.72*30 + 0.07*90 = 69.9, truncated (not rounded)
        assert_eq!(luminance(Rgba { r: 200, g: 30, b: 90, a: 255 }), 69);
    }

    #[test]
    fn test_transparent_pixels_read_as_white() {
        // mid-grey canvas with one fully transparent pixel in the middle
        let mut img = ImageBuffer::new((3, 3).into(), Rgba { r: 100, g: 100, b: 100, a: 255 });
        img.set(1, 1, Rgba { r: 100, g: 100, b: 100, a: 0 });

        let grey = from_rgba(&img);
        assert_eq!(grey.at(1, 1), 255.0);
        assert_eq!(grey.at(0, 0), 100.0);
        assert_eq!(grey.at(2, 2), 100.0);
    }

    #[test]
    fn test_opaque_white_truncates_below_alpha_override() {
        // the f64 weighted sum of (255,255,255) lands fractionally below 255
        assert_eq!(luminance(Rgba::WHITE), 254);
    }
}
