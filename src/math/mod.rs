//! Linear-algebra primitives used by faces and the clipper.

pub mod axis;
pub mod mat4;
pub mod vec2;
pub mod vec3;

pub use axis::Axis;
pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
