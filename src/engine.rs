use legion::*;

use crate::body::{Body, BodyError};
use crate::components::*;
use crate::constants::{BACKGROUND, BodySpec};
use crate::drag::{self, InputEvent, PointerState};
use crate::frontend::{BodyReadout, FrameInfo, Frontend, RenderSurface};
use crate::systems::{self as sys, ContactCount};

/// All state of the running toy, owned by the frame loop.
pub struct SimulationContext {
    world: World,
    resources: Resources,
    schedule: Schedule,
    pointer: PointerState,
    running: bool,
    frame: u64,
}

impl SimulationContext {
    /// Bodies get their priority from their position in `bodies`.
    pub fn new(arena: Arena, bodies: &[BodySpec]) -> Result<Self, BodyError> {
        let mut world = World::default();

        for (i, spec) in bodies.iter().enumerate() {
            let body = Body::new(spec.position, spec.radius, spec.mass)?;
            world.push((Id(i), body, Appearance { color: spec.color }));
        }

        let mut resources = Resources::default();
        resources.insert(arena);
        resources.insert(ContactCount::default());

        Ok(Self {
            world,
            resources,
            schedule: sys::schedule(),
            pointer: PointerState::default(),
            running: true,
            frame: 0,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The loop stops after the frame in progress.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Copies of all bodies in priority order.
    pub fn bodies(&self) -> Vec<Body> {
        let mut bodies = <(&Id, &Body)>::query()
            .iter(&self.world)
            .map(|(id, body)| (*id, *body))
            .collect::<Vec<_>>();
        bodies.sort_by_key(|(id, _)| *id);

        bodies.into_iter().map(|(_, body)| body).collect()
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        if event == InputEvent::Quit {
            self.stop();
            return;
        }

        self.pointer.track(&event);

        let mut bodies = <(&Id, &mut Body)>::query()
            .iter_mut(&mut self.world)
            .collect::<Vec<_>>();
        bodies.sort_by_key(|(id, _)| **id);

        let mut bodies = bodies.into_iter().map(|(_, body)| body).collect::<Vec<_>>();
        drag::handle_event(&mut bodies, event, &self.pointer);
    }

    /// Integrates every body, then resolves the pair.
    pub fn update(&mut self) {
        self.schedule.execute(&mut self.world, &mut self.resources);
        self.frame += 1;
    }

    pub fn render(&self, surface: &mut impl RenderSurface) {
        surface.clear(BACKGROUND);

        let mut drawables = <(&Id, &Body, &Appearance)>::query()
            .iter(&self.world)
            .collect::<Vec<_>>();
        drawables.sort_by_key(|(id, ..)| **id);

        for (_, body, Appearance { color }) in &drawables {
            surface.fill_circle(body.position, body.radius(), *color);
        }

        let info = FrameInfo {
            frame: self.frame,
            contacts: self
                .resources
                .get::<ContactCount>()
                .map(|c| c.0)
                .unwrap_or_default(),
            bodies: drawables
                .iter()
                .map(|(_, body, _)| BodyReadout {
                    position: body.position,
                    velocity: body.velocity,
                    dragging: body.is_dragging(),
                })
                .collect(),
        };

        surface.present(&info);
    }

    /// One frame: input, physics, collision, render, pointer sample, pacing.
    pub fn step(&mut self, frontend: &mut impl Frontend) {
        while let Some(event) = frontend.poll_event() {
            self.handle_event(event);
        }

        self.update();
        self.render(frontend);

        self.pointer.sample(frontend.pointer_position());
        frontend.wait_next_tick();
    }

    pub fn run(&mut self, frontend: &mut impl Frontend) {
        while self.running {
            self.step(frontend);
        }
    }
}
