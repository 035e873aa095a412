use backend::mesh::Vertex;

pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    // positions, colors, texture coords
    Vertex::new([0.5, -0.5, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0]), // bottom right
    Vertex::new([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]), // bottom left
    Vertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0]),  // top
];

pub const QUAD_VERTICES: [Vertex; 4] = [
    Vertex::new([0.5, 0.5, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0]), // top right
    Vertex::new([0.5, -0.5, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0]), // bottom right
    Vertex::new([-0.5, -0.5, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]), // bottom left
    Vertex::new([-0.5, 0.5, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0]), // top left
];

pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

#[cfg(test)]
mod tests {
    use super::*;
    use backend::mesh::validate_indices;

    #[test]
    fn quad_indices_are_valid() {
        assert!(validate_indices(&QUAD_INDICES, QUAD_VERTICES.len()).is_ok());
    }

    #[test]
    fn quad_triangles_share_the_diagonal() {
        let first = &QUAD_INDICES[0..3];
        let second = &QUAD_INDICES[3..6];
        let shared: Vec<_> = first.iter().filter(|i| second.contains(i)).collect();
        assert_eq!(shared, vec![&1, &3]);
    }

    #[test]
    fn texture_coords_cover_the_whole_image() {
        for v in QUAD_VERTICES {
            // corners map to corners: x, y in [-0.5, 0.5] -> u, v in [0, 1]
            assert_eq!(v.tex_coords.x, v.position.x + 0.5);
            assert_eq!(v.tex_coords.y, v.position.y + 0.5);
        }
        for v in TRIANGLE_VERTICES {
            assert!((0.0..=1.0).contains(&v.tex_coords.x));
            assert!((0.0..=1.0).contains(&v.tex_coords.y));
        }
    }

    #[test]
    fn triangle_has_one_primary_color_per_corner() {
        let colors: Vec<_> = TRIANGLE_VERTICES.iter().map(|v| *v.color.as_array()).collect();
        assert_eq!(
            colors,
            vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
    }
}
