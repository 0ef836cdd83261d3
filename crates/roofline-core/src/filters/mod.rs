pub mod gaussian;

pub use gaussian::gaussian_blur;
