use std::path::Path;

use anyhow::Context;
use log::info;

use crate::image::{ImageBuffer, Rgba, Size};

use image as imagex; // external, for IO

/// Decode an image file into an RGBA pixel grid.
///
/// Source formats without an alpha channel decode as fully opaque.
pub fn read_rgba(path: &Path) -> anyhow::Result<ImageBuffer<Rgba>> {
    let decoded = imagex::io::Reader::open(path)
        .with_context(|| format!("failed to open image {}", path.display()))?
        .decode()
        .with_context(|| format!("failed to decode image {}", path.display()))?;
    info!(
        "{}: {}x{} {:?}",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    let rgba = decoded.into_rgba8();
    let size: Size = (rgba.width() as i32, rgba.height() as i32).into();
    let mut img = ImageBuffer::new(size, Rgba::default());
    for y in 0..img.height() {
        for x in 0..img.width() {
            let p = rgba.get_pixel(x as u32, y as u32).0;
            img.set(
                x,
                y,
                Rgba {
                    r: p[0],
                    g: p[1],
                    b: p[2],
                    a: p[3],
                },
            );
        }
    }
    Ok(img)
}

/// Encode a pixel grid to the format implied by the output extension.
///
/// The dithered output is fully opaque, so it is written as 8-bit RGB;
/// that also keeps alpha-less encoders like jpeg working.
pub fn write_rgba(path: &Path, img: &ImageBuffer<Rgba>) -> anyhow::Result<()> {
    let mut out = imagex::RgbImage::new(img.width() as u32, img.height() as u32);
    for y in 0..img.height() {
        for x in 0..img.width() {
            let px = img.at(x, y);
            out.put_pixel(x as u32, y as u32, imagex::Rgb([px.r, px.g, px.b]));
        }
    }
    out.save(path)
        .with_context(|| format!("failed to write image {}", path.display()))
}
