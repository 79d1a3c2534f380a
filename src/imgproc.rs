pub mod dithering;
pub mod greyscale;
