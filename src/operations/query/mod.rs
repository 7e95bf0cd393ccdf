mod area;
mod is_valid;
mod pick_face;

pub use area::SurfaceArea;
pub use is_valid::IsValid;
pub use pick_face::PickFace;
