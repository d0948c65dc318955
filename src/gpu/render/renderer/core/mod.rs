mod init;
mod state;

pub use init::{init_components, init_gpu};
pub use state::{LightingResources, RenderComponents, RendererState};
