pub mod args;
pub mod geometry;
pub mod sources;

pub const CLEAR_COLOR: (f32, f32, f32) = (0.2, 0.3, 0.3);

/// Name of the sampler uniform both shader pairs read the texture from.
pub const TEXTURE_UNIFORM: &str = "ourTexture";

/// Logs to stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
