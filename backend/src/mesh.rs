use super::error::{Error, Result};
use super::glutils::*;
use super::math::{Vec2, Vec3};
use gl::*;
use std::mem::{offset_of, size_of};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Vec3,
    pub tex_coords: Vec2,
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Vertex {
            position: Vec3::new(position[0], position[1], position[2]),
            color: Vec3::new(color[0], color[1], color[2]),
            tex_coords: Vec2::new(tex_coords[0], tex_coords[1]),
        }
    }
}

/// (location, components, offset) of each vertex attribute, counted in floats.
pub const VERTEX_ATTRIBUTES: [(u32, u32, usize); 3] = [
    (0, 3, offset_of!(Vertex, position) / size_of::<f32>()),
    (1, 3, offset_of!(Vertex, color) / size_of::<f32>()),
    (2, 2, offset_of!(Vertex, tex_coords) / size_of::<f32>()),
];

pub const VERTEX_STRIDE: u32 = (size_of::<Vertex>() / size_of::<f32>()) as u32;

pub fn validate_indices(indices: &[u32], vertices: usize) -> Result<()> {
    if indices.len() % 3 != 0 {
        return Err(Error::IncompleteTriangle(indices.len()));
    }
    match indices.iter().find(|&&i| i as usize >= vertices) {
        Some(&index) => Err(Error::IndexOutOfRange { index, vertices }),
        None => Ok(()),
    }
}

/// Converts a vertex or index count into the `GLsizei` a draw call takes.
pub fn draw_count(len: usize) -> Result<i32> {
    i32::try_from(len).map_err(|_| Error::TooManyElements(len))
}

/// Vertex array with its buffers. Triangles are drawn with `DrawElements`
/// when an index buffer is present, `DrawArrays` otherwise.
pub struct Mesh {
    vao: u32,
    vbo: u32,
    ebo: Option<u32>,
    count: i32,
}

impl Mesh {
    pub fn new(vertices: &[Vertex]) -> Result<Mesh> {
        Self::upload(vertices, None)
    }

    pub fn indexed(vertices: &[Vertex], indices: &[u32]) -> Result<Mesh> {
        validate_indices(indices, vertices.len())?;
        Self::upload(vertices, Some(indices))
    }

    fn upload(vertices: &[Vertex], indices: Option<&[u32]>) -> Result<Mesh> {
        let mut mesh = Mesh {
            vao: 0,
            vbo: 0,
            ebo: None,
            count: draw_count(indices.map_or(vertices.len(), |i| i.len()))?,
        };

        unsafe {
            gl::GenVertexArrays(1, &mut mesh.vao);
            gl::GenBuffers(1, &mut mesh.vbo);
            // VAO first, it records the buffer bindings and attributes below
            gl::BindVertexArray(mesh.vao);
            gl::BindBuffer(ARRAY_BUFFER, mesh.vbo);
        }
        gl_buffer_data_arr_stat(vertices);

        if let Some(indices) = indices {
            let mut ebo = 0;
            unsafe {
                gl::GenBuffers(1, &mut ebo);
                gl::BindBuffer(ELEMENT_ARRAY_BUFFER, ebo);
            }
            mesh.ebo = Some(ebo);
            gl_buffer_data_element_stat(indices);
        }

        for (location, size, offset) in VERTEX_ATTRIBUTES {
            gl_vertex_attrib_ptr_enab(location, size, VERTEX_STRIDE, offset);
        }

        unsafe {
            gl::BindBuffer(ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
            // only after the VAO, otherwise it forgets the element buffer
            gl::BindBuffer(ELEMENT_ARRAY_BUFFER, 0);
        }
        check_gl_err()?;

        log::debug!(
            "uploaded {} vertices, {} indices into vao {}",
            vertices.len(),
            indices.map_or(0, |i| i.len()),
            mesh.vao
        );
        Ok(mesh)
    }

    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            if self.ebo.is_some() {
                gl::DrawElements(TRIANGLES, self.count, UNSIGNED_INT, std::ptr::null());
            } else {
                gl::DrawArrays(TRIANGLES, 0, self.count);
            }
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            if let Some(ebo) = &self.ebo {
                gl::DeleteBuffers(1, ebo);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_is_interleaved_floats() {
        assert_eq!(size_of::<Vertex>(), 8 * size_of::<f32>());
        assert_eq!(VERTEX_STRIDE, 8);
        assert_eq!(VERTEX_ATTRIBUTES, [(0, 3, 0), (1, 3, 3), (2, 2, 6)]);
    }

    #[test]
    fn indices_must_form_triangles() {
        assert!(validate_indices(&[0, 1, 2, 1, 2, 3], 4).is_ok());
        assert!(validate_indices(&[], 0).is_ok());
        assert!(matches!(
            validate_indices(&[0, 1], 4),
            Err(Error::IncompleteTriangle(2))
        ));
    }

    #[test]
    fn indices_must_reference_existing_vertices() {
        match validate_indices(&[0, 1, 4], 4) {
            Err(Error::IndexOutOfRange { index, vertices }) => {
                assert_eq!((index, vertices), (4, 4))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn draw_count_fits_gl_sizei() {
        assert_eq!(draw_count(6).unwrap(), 6);
        assert_eq!(draw_count(i32::MAX as usize).unwrap(), i32::MAX);
        assert!(matches!(
            draw_count(i32::MAX as usize + 1),
            Err(Error::TooManyElements(n)) if n == i32::MAX as usize + 1
        ));
    }

    #[test]
    fn bad_indices_fail_before_upload() {
        // no GL functions are loaded in tests, so reaching upload would panic
        let vertices = [Vertex::new([0.0; 3], [1.0; 3], [0.0; 2]); 3];
        assert!(matches!(
            Mesh::indexed(&vertices, &[0, 1, 3]),
            Err(Error::IndexOutOfRange { index: 3, vertices: 3 })
        ));
        assert!(matches!(
            Mesh::indexed(&vertices, &[0, 1, 2, 0]),
            Err(Error::IncompleteTriangle(4))
        ));
    }
}
