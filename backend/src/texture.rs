use super::error::{Error, Result};
use super::glutils::*;
use gl::{types::*, *};
use std::path::Path;

/// Decoded 8-bit image, bottom row first.
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub data: Vec<u8>,
}

pub fn load_image(filename: impl AsRef<Path>) -> Result<Image> {
    let path = filename.as_ref();
    // OpenGL expects the first row to be the bottom of the image
    unsafe {
        stb_image::stb_image::stbi_set_flip_vertically_on_load(1);
    }
    let img = match stb_image::image::load(path) {
        stb_image::image::LoadResult::ImageF32(_) => {
            return Err(Error::Image {
                path: path.to_path_buf(),
                reason: "32-bit images not supported here".to_string(),
            });
        }
        stb_image::image::LoadResult::ImageU8(img) => img,
        stb_image::image::LoadResult::Error(reason) => {
            return Err(Error::Image {
                path: path.to_path_buf(),
                reason,
            })
        }
    };

    Ok(Image {
        width: img.width,
        height: img.height,
        channels: img.depth,
        data: img.data,
    })
}

pub fn pixel_format(channels: usize) -> Result<GLenum> {
    match channels {
        1 => Ok(RED),
        2 => Ok(RG),
        3 => Ok(RGB),
        4 => Ok(RGBA),
        n => Err(Error::UnsupportedChannels(n)),
    }
}

pub struct Texture {
    id: u32,
}

impl Texture {
    pub fn load(filename: impl AsRef<Path>) -> Result<Texture> {
        let params = [
            (TEXTURE_2D, TEXTURE_WRAP_S, REPEAT),
            (TEXTURE_2D, TEXTURE_WRAP_T, REPEAT),
            (TEXTURE_2D, TEXTURE_MIN_FILTER, LINEAR_MIPMAP_LINEAR),
            (TEXTURE_2D, TEXTURE_MAG_FILTER, LINEAR),
        ];
        Self::load_params(filename, &params)
    }

    fn load_params(
        filename: impl AsRef<Path>,
        params: &[(GLenum, GLenum, GLenum)],
    ) -> Result<Texture> {
        // decode first so a bad file doesn't leave a texture object behind
        let img = load_image(filename.as_ref())?;
        let format = pixel_format(img.channels)?;

        let mut texture = Texture { id: 0 };
        unsafe { gl::GenTextures(1, &mut texture.id) };
        unsafe { gl::BindTexture(TEXTURE_2D, texture.id) };

        for (t, n, p) in params {
            unsafe { gl::TexParameteri(*t, *n, *p as i32) };
        }

        unsafe {
            // rows of RGB data are not 4-byte aligned in general
            gl::PixelStorei(UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                TEXTURE_2D,
                0,
                format as i32,
                img.width as i32,
                img.height as i32,
                0,
                format,
                UNSIGNED_BYTE,
                img.data.as_ptr().cast(),
            )
        };
        check_gl_err()?;
        unsafe { gl::GenerateMipmap(TEXTURE_2D) };
        check_gl_err()?;

        log::info!(
            "loaded texture {} ({}x{}, {} channels) as {}",
            filename.as_ref().display(),
            img.width,
            img.height,
            img.channels,
            texture.id
        );
        Ok(texture)
    }

    pub fn bind(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(TEXTURE0 + unit);
            gl::BindTexture(TEXTURE_2D, self.id);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        if self.id != 0 {
            unsafe { gl::DeleteTextures(1, &self.id) };
        }
    }
}
