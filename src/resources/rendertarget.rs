//! Off-screen target for camera 2.
//!
//! While the view is split, camera 2's view is drawn into this
//! screen-sized texture first and then composited through the clip polygon.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Screen-sized render texture for camera 2.
///
/// # Note
/// This is a NonSend resource because `RenderTexture2D` contains GPU resources
/// that must be accessed from the main thread.
pub struct CameraTarget {
    pub texture: RenderTexture2D,
    pub width: u32,
    pub height: u32,
}

impl CameraTarget {
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        // Composited 1:1 with the screen, point sampling avoids blur.
        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }

        Ok(Self {
            texture,
            width,
            height,
        })
    }

    /// OpenGL id of the color attachment.
    pub fn texture_id(&self) -> u32 {
        self.texture.texture.id
    }

    /// Texture coordinate of a screen point. Y is flipped because render
    /// textures are stored bottom-up.
    pub fn uv(&self, x: f32, y: f32) -> (f32, f32) {
        (x / self.width as f32, 1.0 - y / self.height as f32)
    }
}
