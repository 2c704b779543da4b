pub mod landing;
#[cfg(feature = "backend")]
pub mod server;
