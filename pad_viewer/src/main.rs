mod cli;
mod layout;
mod scene;
mod viewer;

use std::rc::{Rc, Weak};
use std::sync::Arc;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use glam::Vec2;
use log::{debug, info};
use pad_input::{Joystick, JoystickObserver};
use pollster::FutureExt;
use wgpu::SurfaceError;
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyEvent, MouseButton, Touch, TouchPhase, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use crate::layout::Rect;

/// Sink for joystick updates. Nothing in the scene consumes them; the
/// geometry is static by design, so the observer only logs.
struct LogObserver;

impl JoystickObserver for LogObserver {
    fn joystick_moved(&self, direction: Vec2, distance: f32) {
        debug!(
            "joystick moved: direction=({:.3}, {:.3}) distance={:.2}",
            direction.x, direction.y, distance
        );
    }
}

fn make_joystick(rect: Rect, observer: &Rc<LogObserver>) -> Joystick {
    let mut joystick = Joystick::new(Vec2::new(rect.width / 2.0, rect.height / 2.0), rect.width / 2.0);
    joystick.set_observer(Rc::downgrade(observer) as Weak<dyn JoystickObserver>);
    joystick
}

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::Args::parse();

    ensure!(
        args.joystick_diameter > 0.0,
        "joystick_diameter must be positive (got {})",
        args.joystick_diameter
    );

    if args.verify_render || args.headless {
        viewer::verify_scene_offscreen(256, 256)
            .context("running offscreen scene verification")?;
        info!("offscreen scene verification passed");
    }

    if args.headless {
        info!("headless mode requested; viewer window bootstrap skipped");
        return Ok(());
    }

    let event_loop = EventLoop::new().context("creating winit event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Pad Viewer")
            .with_inner_size(PhysicalSize::new(args.width, args.height))
            .build(&event_loop)
            .context("creating viewer window")?,
    );

    let mut state = viewer::ViewerState::new(window.clone()).block_on()?;
    info!("renderer initialized ({}x{})", args.width, args.height);

    let observer = Rc::new(LogObserver);
    let mut pad_rect = layout::pad_rect(window.inner_size(), args.joystick_diameter);
    let mut joystick = make_joystick(pad_rect, &observer);

    let mut cursor = Vec2::ZERO;
    let mut mouse_dragging = false;
    let mut active_touch: Option<u64> = None;

    event_loop
        .run(move |event, target| {
            target.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { window_id, event } if window_id == state.window().id() => {
                    match event {
                        WindowEvent::CloseRequested => target.exit(),
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    logical_key: Key::Named(NamedKey::Escape),
                                    state: ElementState::Pressed,
                                    ..
                                },
                            ..
                        } => target.exit(),
                        WindowEvent::Resized(new_size) => {
                            state.resize(new_size);
                            let new_rect = layout::pad_rect(new_size, args.joystick_diameter);
                            if new_rect.width != pad_rect.width {
                                // The control shrank or grew; rebuild it and
                                // drop any in-flight drag.
                                joystick = make_joystick(new_rect, &observer);
                                mouse_dragging = false;
                                active_touch = None;
                            }
                            pad_rect = new_rect;
                        }
                        WindowEvent::Touch(Touch {
                            phase, location, id, ..
                        }) => {
                            let point = Vec2::new(location.x as f32, location.y as f32);
                            match phase {
                                TouchPhase::Started => {
                                    if active_touch.is_none() && pad_rect.contains(point) {
                                        active_touch = Some(id);
                                        joystick.touch_began(pad_rect.to_local(point));
                                    }
                                }
                                TouchPhase::Moved => {
                                    if active_touch == Some(id) {
                                        joystick.touch_moved(pad_rect.to_local(point));
                                    }
                                }
                                TouchPhase::Ended | TouchPhase::Cancelled => {
                                    if active_touch == Some(id) {
                                        active_touch = None;
                                        joystick.touch_ended();
                                    }
                                }
                            }
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            cursor = Vec2::new(position.x as f32, position.y as f32);
                            if mouse_dragging {
                                joystick.touch_moved(pad_rect.to_local(cursor));
                            }
                        }
                        WindowEvent::MouseInput {
                            state: button_state,
                            button: MouseButton::Left,
                            ..
                        } => match button_state {
                            ElementState::Pressed => {
                                if pad_rect.contains(cursor) {
                                    mouse_dragging = true;
                                    joystick.touch_began(pad_rect.to_local(cursor));
                                }
                            }
                            ElementState::Released => {
                                if mouse_dragging {
                                    mouse_dragging = false;
                                    joystick.touch_ended();
                                }
                            }
                        },
                        WindowEvent::RedrawRequested => match state.render() {
                            Ok(()) => {}
                            Err(SurfaceError::Lost) => state.resize(state.size()),
                            Err(SurfaceError::OutOfMemory) => target.exit(),
                            // Outdated/Timeout are transient (e.g. mid-resize);
                            // skip the frame and retry on the next tick.
                            Err(err) => debug!("skipping frame: {err:?}"),
                        },
                        _ => {}
                    }
                }
                Event::AboutToWait => state.window().request_redraw(),
                _ => {}
            }
        })
        .context("running viewer event loop")?;

    Ok(())
}
