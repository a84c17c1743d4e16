pub mod framebuffer;
pub mod renderer;

pub use framebuffer::Framebuffer;
pub use renderer::{FramebufferView, Renderer};
