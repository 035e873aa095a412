use backend::mesh::Mesh;
use backend::shaders::Shaders;
use backend::system::System;
use backend::texture::Texture;
use clap::Parser;
use demos::args::QuadArgs;
use demos::geometry::{QUAD_INDICES, QUAD_VERTICES};
use demos::{CLEAR_COLOR, TEXTURE_UNIFORM};

fn run(args: &QuadArgs) -> backend::Result<()> {
    let mut system = System::new(&args.common.window_config())?;

    let shaders = Shaders::from_files(&args.vertex_shader, &args.fragment_shader)?;
    let quad = Mesh::indexed(&QUAD_VERTICES, &QUAD_INDICES)?;
    let texture = Texture::load(&args.common.texture)?;

    system.set_wireframe(args.common.wireframe);

    let (r, g, b) = CLEAR_COLOR;
    while system.process_io_events() {
        system.clear_screen(r, g, b);

        texture.bind(0);
        shaders.use_program()?;
        shaders.set_i32(TEXTURE_UNIFORM, 0)?;
        quad.draw();

        system.draw_to_screen();
    }
    log::info!("window closed");
    Ok(())
}

fn main() {
    demos::init_logging();
    let args = QuadArgs::parse();
    if let Err(e) = run(&args) {
        log::error!("quad: {e}");
        std::process::exit(1);
    }
}
