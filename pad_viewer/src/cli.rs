use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Virtual joystick over a fixed two-quad wgpu scene", version)]
pub struct Args {
    /// Window inner width in physical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Window inner height in physical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Joystick control diameter in window pixels
    #[arg(long, default_value_t = 100.0)]
    pub joystick_diameter: f32,

    /// Render the fixed scene offscreen and validate the quad colors
    #[arg(long)]
    pub verify_render: bool,

    /// Skip creating a winit window/event loop; useful for headless automation
    #[arg(long)]
    pub headless: bool,
}
