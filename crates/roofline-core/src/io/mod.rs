pub mod crop;
pub mod image_io;

pub use crop::{crop_box, crop_boxes, save_crops};
pub use image_io::{load_image, save_image};
