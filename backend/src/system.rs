use super::error::{Error, Result};
use super::glutils::*;
use glfw::{
    fail_on_errors, Action, Context, Glfw, GlfwReceiver, Key, OpenGlProfileHint, PWindow,
    SwapInterval, WindowEvent, WindowHint, WindowMode,
};

pub const GL_VERSION: (u32, u32) = (3, 3);

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 800,
            height: 600,
            title: "LearnOpenGL".to_string(),
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IoEvents {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    // width, height in pixels
    FramebufferResized(i32, i32),
}

/// Translates a GLFW window event; events the demos don't care about map to `None`.
pub fn translate_event(event: &WindowEvent) -> Option<IoEvents> {
    match *event {
        WindowEvent::Close => Some(IoEvents::Quit),
        WindowEvent::Key(key, _, Action::Press, _) => Some(IoEvents::KeyDown(key)),
        WindowEvent::Key(key, _, Action::Release, _) => Some(IoEvents::KeyUp(key)),
        WindowEvent::FramebufferSize(w, h) => Some(IoEvents::FramebufferResized(w, h)),
        _ => None,
    }
}

// field order matters: the window has to go before glfw terminates
pub struct System {
    pub window: PWindow,
    pub receiver: GlfwReceiver<(f64, WindowEvent)>,
    pub glfw: Glfw,
    pub events: Vec<IoEvents>,
}

impl System {
    pub fn new(config: &WindowConfig) -> Result<System> {
        let mut glfw = glfw::init(fail_on_errors!())?;

        let (major, minor) = GL_VERSION;
        glfw.window_hint(WindowHint::ContextVersion(major, minor));
        glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
        glfw.window_hint(WindowHint::OpenGlForwardCompat(true));

        let (mut window, receiver) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                WindowMode::Windowed,
            )
            .ok_or(Error::WindowCreation)?;

        window.make_current();
        window.set_framebuffer_size_polling(true);
        window.set_key_polling(true);
        window.set_close_polling(true);

        gl::load_with(|name| window.get_proc_address(name) as *const _);

        glfw.set_swap_interval(if config.vsync {
            SwapInterval::Sync(1)
        } else {
            SwapInterval::None
        });

        let (w, h) = window.get_framebuffer_size();
        unsafe { gl::Viewport(0, 0, w, h) };
        check_gl_err()?;

        log::info!(
            "opened {}x{} window '{}' (framebuffer {}x{})",
            config.width,
            config.height,
            config.title,
            w,
            h
        );
        log_opengl_info();

        Ok(System {
            window,
            receiver,
            glfw,
            events: Vec::new(),
        })
    }

    /// Polls pending events into `self.events`. Returns `false` once the
    /// window should close.
    pub fn process_io_events(&mut self) -> bool {
        self.events.clear();
        self.glfw.poll_events();

        for (_, event) in glfw::flush_messages(&self.receiver) {
            if let Some(ev) = translate_event(&event) {
                self.events.push(ev);
            }
        }

        for ev in &self.events {
            match *ev {
                IoEvents::FramebufferResized(w, h) => {
                    log::debug!("framebuffer resized to {}x{}", w, h);
                    unsafe { gl::Viewport(0, 0, w, h) };
                }
                IoEvents::KeyDown(Key::Escape) | IoEvents::Quit => {
                    self.window.set_should_close(true)
                }
                _ => {}
            }
        }

        // key polling can miss a press made before the window had focus
        if self.window.get_key(Key::Escape) == Action::Press {
            self.window.set_should_close(true);
        }

        !self.window.should_close()
    }

    pub fn draw_to_screen(&mut self) {
        self.window.swap_buffers();
    }

    pub fn clear_screen(&mut self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn set_wireframe(&mut self, enabled: bool) {
        let mode = if enabled { gl::LINE } else { gl::FILL };
        unsafe { gl::PolygonMode(gl::FRONT_AND_BACK, mode) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw::{Modifiers, Scancode};

    #[test]
    fn default_window_matches_tutorial() {
        let config = WindowConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.title, "LearnOpenGL");
        assert!(config.vsync);
    }

    #[test]
    fn key_and_resize_events_are_translated() {
        let scancode: Scancode = 0;
        let press = WindowEvent::Key(Key::Escape, scancode, Action::Press, Modifiers::empty());
        let release = WindowEvent::Key(Key::A, scancode, Action::Release, Modifiers::empty());
        let repeat = WindowEvent::Key(Key::A, scancode, Action::Repeat, Modifiers::empty());

        assert_eq!(translate_event(&press), Some(IoEvents::KeyDown(Key::Escape)));
        assert_eq!(translate_event(&release), Some(IoEvents::KeyUp(Key::A)));
        assert_eq!(translate_event(&repeat), None);
        assert_eq!(
            translate_event(&WindowEvent::FramebufferSize(1024, 768)),
            Some(IoEvents::FramebufferResized(1024, 768))
        );
        assert_eq!(translate_event(&WindowEvent::Close), Some(IoEvents::Quit));
        assert_eq!(translate_event(&WindowEvent::Focus(true)), None);
    }
}
