use super::error::{Error, Result};
use super::glutils::*;
use gl::{types::*, *};
use std::ffi::{CStr, CString};
use std::fs;
use std::path::Path;

const INFO_LOG_LEN: i32 = 1024;

/// A linked vertex + fragment program. The program is deleted on drop, so
/// it must not outlive the GL context it was created in.
pub struct Shaders {
    program_id: u32,
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadSource {
        path: path.to_path_buf(),
        source,
    })
}

impl Shaders {
    pub fn from_files(
        vertex_file: impl AsRef<Path>,
        fragment_file: impl AsRef<Path>,
    ) -> Result<Shaders> {
        let vertex_code = read_source(vertex_file.as_ref())?;
        let fragment_code = read_source(fragment_file.as_ref())?;
        log::info!(
            "compiling shaders {} + {}",
            vertex_file.as_ref().display(),
            fragment_file.as_ref().display()
        );

        Shaders::from_str(&vertex_code, &fragment_code)
    }

    pub fn from_str(vertex_code: &str, fragment_code: &str) -> Result<Shaders> {
        let vertex_shader = Self::create(VERTEX_SHADER, "vertex", vertex_code)?;
        let fragment_shader = match Self::create(FRAGMENT_SHADER, "fragment", fragment_code) {
            Ok(s) => s,
            Err(e) => {
                unsafe { gl::DeleteShader(vertex_shader) };
                return Err(e);
            }
        };

        // create program and link shaders
        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        // not needed anymore
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(INFO_LOG_LEN as usize);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetProgramInfoLog(
                    shader_program,
                    INFO_LOG_LEN,
                    &mut log_len,
                    v.as_mut_ptr().cast(),
                );
                v.set_len(log_len.max(0) as usize);
                gl::DeleteProgram(shader_program);
            }
            return Err(Error::Linking(String::from_utf8_lossy(&v).into_owned()));
        }

        log::debug!("linked program {}", shader_program);
        Ok(Shaders {
            program_id: shader_program,
        })
    }

    fn create(kind: GLenum, stage: &'static str, code: &str) -> Result<u32> {
        let shader_id = unsafe { gl::CreateShader(kind) };
        if shader_id == 0 {
            return Err(Error::CreateShader(stage));
        }

        if let Err(log) = Self::compile(shader_id, code) {
            unsafe { gl::DeleteShader(shader_id) };
            return Err(Error::Compilation { stage, log });
        }
        Ok(shader_id)
    }

    fn compile(shader_id: u32, shader_code: &str) -> std::result::Result<(), String> {
        let len = shader_code.len() as GLint;
        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &len,
            );
        }

        unsafe { gl::CompileShader(shader_id) };

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(INFO_LOG_LEN as usize);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetShaderInfoLog(shader_id, INFO_LOG_LEN, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.max(0) as usize);
            }

            return Err(String::from_utf8_lossy(&v).to_string());
        }
        Ok(())
    }

    fn get_uniform_location(&self, name: &str) -> Result<i32> {
        let c_name =
            CString::new(name).map_err(|_| Error::InvalidUniformName(name.to_string()))?;

        self.get_uniform_location_cstr(&c_name)
    }

    fn get_uniform_location_cstr(&self, c_name: &CStr) -> Result<i32> {
        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr().cast()) };
        check_gl_err()?;
        if location == -1 {
            return Err(Error::UniformNotFound {
                program: self.program_id,
                name: c_name.to_string_lossy().into_owned(),
            });
        }
        Ok(location)
    }

    pub fn use_program(&self) -> Result<()> {
        unsafe { gl::UseProgram(self.program_id) };
        check_gl_err()
    }

    pub fn set_bool(&self, name: &str, value: bool) -> Result<()> {
        let location = self.get_uniform_location(name)?;
        unsafe { gl::Uniform1i(location, i32::from(value)) };
        Ok(())
    }

    pub fn set_i32(&self, name: &str, value: i32) -> Result<()> {
        let location = self.get_uniform_location(name)?;
        unsafe { gl::Uniform1i(location, value) };
        Ok(())
    }

    pub fn set_f32(&self, name: &str, value: f32) -> Result<()> {
        let location = self.get_uniform_location(name)?;
        unsafe { gl::Uniform1f(location, value) };
        Ok(())
    }

    pub fn set_vec3(&self, name: &str, v0: f32, v1: f32, v2: f32) -> Result<()> {
        let location = self.get_uniform_location(name)?;
        unsafe { gl::Uniform3f(location, v0, v1, v2) };
        Ok(())
    }

    pub fn set_vec4(&self, name: &str, v0: f32, v1: f32, v2: f32, v3: f32) -> Result<()> {
        let location = self.get_uniform_location(name)?;
        unsafe { gl::Uniform4f(location, v0, v1, v2, v3) };
        Ok(())
    }
}

impl Drop for Shaders {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.program_id) };
    }
}
