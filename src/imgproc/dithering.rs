use crate::image::{ImageBuffer, Rgba};

/// Forward error-diffusion kernel (dx, dy, weight), Stucki weights.
///
/// Every tap points at a cell visited later in raster scan order: same row
/// to the right, or one of the two rows below. Weights sum to
/// `KERNEL_DIVISOR`, so a pixel's full quantization error is redistributed
/// (minus whatever falls off the image edges).
pub const STUCKI_KERNEL: [(i32, i32, i32); 12] = [
    (1, 0, 8),
    (2, 0, 4),
    (0, 1, 8),
    (1, 1, 4),
    (2, 1, 2),
    (-1, 1, 4),
    (-2, 1, 2),
    (0, 2, 4),
    (1, 2, 2),
    (2, 2, 1),
    (-1, 2, 2),
    (-2, 2, 1),
];

pub const KERNEL_DIVISOR: f32 = 42.0;

const BW_THRESHOLD: f32 = 128.0;

/// Threshold-and-diffuse pass: consume a greyscale plane, produce a grid of
/// pure black/white pixels.
///
/// Strict raster order is load-bearing: the kernel only writes to cells
/// processed later, and each cell must have accumulated all incoming error
/// by the time it is thresholded. The greyscale buffer is taken by value
/// since its contents are meaningless after the pass.
pub fn stucki_mono(mut grey: ImageBuffer<f32>) -> ImageBuffer<Rgba> {
    let size = grey.size();
    let mut output = ImageBuffer::new(size, Rgba::BLACK);
    for y in 0..size.height {
        for x in 0..size.width {
            let g = grey.at(x, y);
            // error is signed: positive when the pixel is pushed down to
            // black, negative when pushed up to white
            let (color, error) = if g < BW_THRESHOLD {
                (Rgba::BLACK, g / KERNEL_DIVISOR)
            } else {
                (Rgba::WHITE, (g - 255.0) / KERNEL_DIVISOR)
            };
            for &(dx, dy, weight) in STUCKI_KERNEL.iter() {
                let (tx, ty) = (x + dx, y + dy);
                if grey.contains(tx, ty) {
                    // out-of-bounds shares are simply dropped, not
                    // redistributed among the remaining taps
                    *grey.at_mut(tx, ty) += error * weight as f32;
                }
            }
            output.set(x, y, color);
        }
    }
    output
}
