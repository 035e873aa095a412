use backend::system::WindowConfig;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_TEXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/media/container.png");
pub const DEFAULT_VERTEX_SHADER: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/vertex-shader.glsl");
pub const DEFAULT_FRAGMENT_SHADER: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/fragment-shader.glsl");

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    #[arg(long, default_value_t = 600)]
    pub height: u32,
    #[arg(long, default_value = "LearnOpenGL")]
    pub title: String,
    /// Image applied to the shape
    #[arg(long, default_value = DEFAULT_TEXTURE)]
    pub texture: PathBuf,
    /// Draw polygon outlines only
    #[arg(long)]
    pub wireframe: bool,
    #[arg(long)]
    pub no_vsync: bool,
}

impl Args {
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            width: self.width,
            height: self.height,
            title: self.title.clone(),
            vsync: !self.no_vsync,
        }
    }
}

#[derive(Debug, Parser)]
pub struct QuadArgs {
    #[command(flatten)]
    pub common: Args,
    #[arg(long, default_value = DEFAULT_VERTEX_SHADER)]
    pub vertex_shader: PathBuf,
    #[arg(long, default_value = DEFAULT_FRAGMENT_SHADER)]
    pub fragment_shader: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["triangle"]).unwrap();
        let config = args.window_config();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.title, "LearnOpenGL");
        assert!(config.vsync);
        assert!(!args.wireframe);
        assert!(args.texture.ends_with("media/container.png"));
        assert!(args.texture.exists());
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "triangle",
            "--width",
            "1024",
            "--height",
            "768",
            "--title",
            "hello",
            "--texture",
            "wall.jpg",
            "--wireframe",
            "--no-vsync",
        ])
        .unwrap();
        let config = args.window_config();
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.title, "hello");
        assert!(!config.vsync);
        assert!(args.wireframe);
        assert_eq!(args.texture, PathBuf::from("wall.jpg"));
    }

    #[test]
    fn bad_size_is_rejected() {
        assert!(Args::try_parse_from(["triangle", "--width", "-3"]).is_err());
        assert!(Args::try_parse_from(["triangle", "--height", "tall"]).is_err());
    }

    #[test]
    fn quad_shader_paths() {
        let args = QuadArgs::try_parse_from(["quad"]).unwrap();
        assert!(args.vertex_shader.exists());
        assert!(args.fragment_shader.exists());

        let args = QuadArgs::try_parse_from([
            "quad",
            "--vertex-shader",
            "v.glsl",
            "--fragment-shader",
            "f.glsl",
            "--wireframe",
        ])
        .unwrap();
        assert_eq!(args.vertex_shader, PathBuf::from("v.glsl"));
        assert_eq!(args.fragment_shader, PathBuf::from("f.glsl"));
        assert!(args.common.wireframe);
    }
}
