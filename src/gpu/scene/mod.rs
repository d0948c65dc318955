// ============================================
// Scene Module - Тела и их орбитальное движение
// ============================================

mod animator;
mod body;

pub use animator::{BodyKind, SceneAnimator, SCENE_RADIUS};
pub use body::{Body, Scene};
