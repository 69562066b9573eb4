pub mod archive;
pub mod cubemap;
pub mod face_image;
pub mod face_layout;
pub mod input_source;
