use super::error::{Error, Result};
use gl::{types::*, *};
use std::ffi::CStr;

pub fn gl_error_name(code: GLenum) -> &'static str {
    match code {
        NO_ERROR => "GL_NO_ERROR",
        INVALID_ENUM => "GL_INVALID_ENUM",
        INVALID_VALUE => "GL_INVALID_VALUE",
        INVALID_OPERATION => "GL_INVALID_OPERATION",
        INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        _ => "unknown GL error",
    }
}

pub fn check_gl_err() -> Result<()> {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return Ok(());
    }
    Err(Error::Gl {
        code: err,
        name: gl_error_name(err),
    })
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unavailable>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

pub fn log_opengl_info() {
    log::info!("GL_VENDOR = {}", gl_string(VENDOR));
    log::info!("GL_RENDERER = {}", gl_string(RENDERER));
    log::info!("GL_VERSION = {}", gl_string(VERSION));
    log::info!(
        "GL_SHADING_LANGUAGE_VERSION = {}",
        gl_string(SHADING_LANGUAGE_VERSION)
    );

    let mut mtu: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_IMAGE_UNITS, &mut mtu) };
    log::info!("MAX_TEXTURE_IMAGE_UNITS = {}", mtu);

    unsafe { gl::GetIntegerv(MAX_COMBINED_TEXTURE_IMAGE_UNITS, &mut mtu) };
    log::info!("MAX_COMBINED_TEXTURE_IMAGE_UNITS = {}", mtu);
}

pub fn gl_buffer_data_arr_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_buffer_data_element_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ELEMENT_ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

/// Describes and enables one float attribute of an interleaved vertex buffer.
///
/// `size`, `stride` and `pointer` are counted in floats, not bytes.
pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: u32, pointer: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as i32,
            FLOAT,
            FALSE,
            (stride as usize * std::mem::size_of::<f32>()) as i32,
            (pointer * std::mem::size_of::<f32>()) as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}
