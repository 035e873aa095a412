//! Shader pair compiled into the triangle demo. The quad demo reads the same
//! program from `shaders/*.glsl` instead.

pub const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aColor;
layout (location = 2) in vec2 aTexCoord;

out vec3 ourColor;
out vec2 TexCoord;

void main()
{
    gl_Position = vec4(aPos, 1.0);
    ourColor = aColor;
    TexCoord = aTexCoord;
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

in vec3 ourColor;
in vec2 TexCoord;

uniform sampler2D ourTexture;

void main()
{
    FragColor = texture(ourTexture, TexCoord) * vec4(ourColor, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{DEFAULT_FRAGMENT_SHADER, DEFAULT_VERTEX_SHADER};
    use crate::TEXTURE_UNIFORM;

    fn strip_ws(s: &str) -> String {
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn sources_declare_core_profile() {
        assert!(VERTEX_SHADER.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER.contains(&format!("uniform sampler2D {TEXTURE_UNIFORM};")));
    }

    #[test]
    fn bundled_files_match_inline_sources() {
        let vertex = std::fs::read_to_string(DEFAULT_VERTEX_SHADER).unwrap();
        let fragment = std::fs::read_to_string(DEFAULT_FRAGMENT_SHADER).unwrap();
        assert_eq!(strip_ws(&vertex), strip_ws(VERTEX_SHADER));
        assert_eq!(strip_ws(&fragment), strip_ws(FRAGMENT_SHADER));
    }
}
