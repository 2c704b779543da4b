pub mod landing_components;

pub use landing_components::LandingRegion;
