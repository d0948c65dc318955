// ============================================
// GPU Module - Демка с кубическими тенями
// ============================================
// Земля и Луна вращаются вокруг Солнца-источника света;
// тени всенаправленные, через кубическую карту глубины.
// Разделено на модули по ECS-принципам.

pub mod assets;
pub mod camera;
pub mod lighting;
pub mod render;
pub mod scene;

pub mod core;
pub mod systems;

pub use core::app::run;
