//! SFML window with an egui read-out on top.

use anyhow::anyhow;
use egui_sfml::SfEgui;
use egui_sfml::egui;
use glam::DVec2;
use sfml::cpp::FBox;
use sfml::{graphics::*, system::*, window::*};

use crate::constants::{FRAMERATE_LIMIT, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::drag::InputEvent;
use crate::frontend::{FrameInfo, InputSource, Pacer, RenderSurface};

pub struct SfmlFrontend {
    window: FBox<RenderWindow>,
    sfegui: SfEgui,
    shape: CircleShape<'static>,
    clock: FBox<Clock>,
    frame_time: Time,
}

impl SfmlFrontend {
    pub fn open() -> anyhow::Result<Self> {
        let mut window = RenderWindow::new(
            (WINDOW_WIDTH, WINDOW_HEIGHT),
            WINDOW_TITLE,
            Style::CLOSE,
            &ContextSettings {
                antialiasing_level: 2,
                ..Default::default()
            },
        )
        .map_err(|e| anyhow!("could not open the window: {e:?}"))?;

        // display() sleeps to keep the loop at this rate
        window.set_framerate_limit(FRAMERATE_LIMIT);

        let sfegui = SfEgui::new(&window);
        let clock = Clock::start().map_err(|e| anyhow!("could not start the clock: {e:?}"))?;

        Ok(Self {
            window,
            sfegui,
            shape: CircleShape::new(0.0, 100),
            clock,
            frame_time: Time::ZERO,
        })
    }
}

fn point(x: i32, y: i32) -> DVec2 {
    DVec2::new(x as _, y as _)
}

impl InputSource for SfmlFrontend {
    fn poll_event(&mut self) -> Option<InputEvent> {
        while let Some(event) = self.window.poll_event() {
            self.sfegui.add_event(&event);

            // any mouse button grabs
            let event = match event {
                Event::Closed => InputEvent::Quit,
                Event::MouseButtonPressed { x, y, .. } => InputEvent::PointerDown(point(x, y)),
                Event::MouseButtonReleased { x, y, .. } => InputEvent::PointerUp(point(x, y)),
                Event::MouseMoved { x, y } => InputEvent::PointerMove(point(x, y)),
                _ => continue,
            };

            return Some(event);
        }

        None
    }

    fn pointer_position(&self) -> DVec2 {
        let Vector2i { x, y } = self.window.mouse_position();
        point(x, y)
    }
}

impl RenderSurface for SfmlFrontend {
    fn clear(&mut self, color: Color) {
        self.window.clear(color);
    }

    fn fill_circle(&mut self, centre: DVec2, radius: f64, color: Color) {
        let radius = radius as f32;

        self.shape.set_radius(radius);
        self.shape.set_origin((radius, radius));
        self.shape.set_position((centre.x as f32, centre.y as f32));
        self.shape.set_fill_color(color);

        self.window.draw(&self.shape);
    }

    fn present(&mut self, info: &FrameInfo) {
        let frame_time = self.frame_time.as_seconds();

        let di = self.sfegui.run(&mut self.window, |_rw, ctx| {
            egui::Window::new("Info")
                .default_pos((10.0, 10.0))
                .collapsible(true)
                .resizable(false)
                .show(ctx, |ui| {
                    if frame_time > 0.0 {
                        ui.label(format!("FPS: {:.0}", 1.0 / frame_time));
                    }
                    ui.label(format!("Frame Time: {:.3}ms", frame_time * 1000.0));
                    ui.label(format!("Frame: {}", info.frame));
                    ui.label(format!("Contacts: {}", info.contacts));

                    for (i, body) in info.bodies.iter().enumerate() {
                        ui.separator();
                        ui.label(format!(
                            "Body {i}: pos ({:.1}, {:.1}) vel ({:.2}, {:.2}){}",
                            body.position.x,
                            body.position.y,
                            body.velocity.x,
                            body.velocity.y,
                            if body.dragging { " [held]" } else { "" },
                        ));
                    }
                });
        });

        // the bodies are already drawn, losing the overlay for a frame is fine
        if let Ok(di) = di {
            self.sfegui.draw(di, &mut self.window, None);
        }
    }
}

impl Pacer for SfmlFrontend {
    fn wait_next_tick(&mut self) {
        self.window.display();
        self.frame_time = self.clock.restart();
    }
}
