// ============================================
// Assets Module - Импорт моделей и текстур
// ============================================

mod model;
mod texture;

pub use model::{AssetError, GeometryAsset, ModelVertex, SubMesh};
