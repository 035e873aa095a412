use backend::mesh::Mesh;
use backend::shaders::Shaders;
use backend::system::System;
use backend::texture::Texture;
use clap::Parser;
use demos::args::Args;
use demos::geometry::TRIANGLE_VERTICES;
use demos::{sources, CLEAR_COLOR, TEXTURE_UNIFORM};

fn run(args: &Args) -> backend::Result<()> {
    let mut system = System::new(&args.window_config())?;

    let shaders = Shaders::from_str(sources::VERTEX_SHADER, sources::FRAGMENT_SHADER)?;
    let triangle = Mesh::new(&TRIANGLE_VERTICES)?;
    let texture = Texture::load(&args.texture)?;

    system.set_wireframe(args.wireframe);

    let (r, g, b) = CLEAR_COLOR;
    while system.process_io_events() {
        system.clear_screen(r, g, b);

        texture.bind(0);
        shaders.use_program()?;
        shaders.set_i32(TEXTURE_UNIFORM, 0)?;
        triangle.draw();

        system.draw_to_screen();
    }
    log::info!("window closed");
    Ok(())
}

fn main() {
    demos::init_logging();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("triangle: {e}");
        std::process::exit(1);
    }
}
