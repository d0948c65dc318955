// ============================================
// Lighting Module - Точечный свет и кубические тени
// ============================================
// Один точечный источник в начале координат,
// всенаправленные тени через кубическую карту глубины

mod cube_faces;
mod light;
mod shading;

pub use cube_faces::{face_basis, face_view_projections, FACE_COUNT};
pub use light::PointLight;
pub use shading::{encode_depth, shade_fragment, shadow_factor, Shade, SHADOW_BIAS, SHININESS};
