pub mod color;
pub mod face;
pub mod plane;
pub mod solid;

pub use color::{solved_state_colors, FaceColor};
pub use face::{Face, Ring};
pub use plane::Plane;
pub use solid::SolidGeometry;
