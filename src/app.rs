//! Per-tick driver
//!
//! One call to [`App::tick`] is one external tick: drain input, ask the
//! clock whether a step is due, and if so update every entity before
//! composing and presenting the frame. Nothing is drawn from a half-updated
//! world.

use std::time::Duration;

use crate::error::AsteroidsError;
use crate::platform::{InputEvent, Platform};
use crate::renderer::{DrawList, Hud};
use crate::settings::Settings;
use crate::sim::{Control, FrameClock, InputState, World};

pub struct App {
    settings: Settings,
    world: World,
    input: InputState,
    clock: FrameClock,
    frame: DrawList,
    events: Vec<InputEvent>,
}

impl App {
    /// Validate settings and populate the world
    pub fn new(settings: Settings, now_ms: u64) -> Result<Self, AsteroidsError> {
        let world = World::new(&settings)?;
        let clock = FrameClock::new(now_ms, settings.step_ms);
        Ok(Self {
            settings,
            world,
            input: InputState::default(),
            clock,
            frame: DrawList::default(),
            events: Vec::new(),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }

    /// Run one external tick against `platform`
    pub fn tick<P: Platform>(&mut self, platform: &mut P) -> Result<Control, AsteroidsError> {
        let wait = self.clock.until_next_step(platform.monotonic_ms());
        self.events.clear();
        platform.poll_events(Duration::from_millis(wait), &mut self.events)?;
        for &event in &self.events {
            if self.input.apply(event) == Control::Quit {
                return Ok(Control::Quit);
            }
        }

        let now = platform.monotonic_ms();
        let tick = self.clock.advance(now);
        if let Some(dt) = tick.step {
            self.world.step(&self.input, &self.settings, dt);
            let hud = Hud {
                fps: self.clock.fps(),
            };
            self.frame.compose(&self.world, &self.settings, hud);
            platform.present(&self.frame)?;
        }
        if tick.fps_sampled {
            log::trace!("fps: {}", self.clock.fps());
        }

        Ok(Control::Continue)
    }

    /// Tick until a quit event arrives
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> Result<(), AsteroidsError> {
        while self.tick(platform)? == Control::Continue {}
        log::info!("Quit after {} steps", self.world.steps);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Key;
    use std::collections::VecDeque;

    /// Scripted platform: each tick pops one (time, events) entry
    #[derive(Default)]
    struct FakePlatform {
        now_ms: u64,
        script: VecDeque<(u64, Vec<InputEvent>)>,
        presented: Vec<DrawList>,
    }

    impl FakePlatform {
        fn with_script(script: Vec<(u64, Vec<InputEvent>)>) -> Self {
            Self {
                script: script.into(),
                ..Default::default()
            }
        }
    }

    impl Platform for FakePlatform {
        fn poll_events(
            &mut self,
            _timeout: Duration,
            events: &mut Vec<InputEvent>,
        ) -> Result<(), AsteroidsError> {
            match self.script.pop_front() {
                Some((now, batch)) => {
                    self.now_ms = now;
                    events.extend(batch);
                }
                None => events.push(InputEvent::Quit),
            }
            Ok(())
        }

        fn monotonic_ms(&self) -> u64 {
            self.now_ms
        }

        fn present(&mut self, frame: &DrawList) -> Result<(), AsteroidsError> {
            self.presented.push(frame.clone());
            Ok(())
        }
    }

    #[test]
    fn test_ticks_below_step_present_nothing() {
        let mut app = App::new(Settings::default(), 0).unwrap();
        let mut platform = FakePlatform::with_script(vec![(5, vec![]), (10, vec![])]);

        assert_eq!(app.tick(&mut platform).unwrap(), Control::Continue);
        assert_eq!(app.tick(&mut platform).unwrap(), Control::Continue);
        assert_eq!(app.world().steps, 0);
        assert!(platform.presented.is_empty());
    }

    #[test]
    fn test_step_after_threshold() {
        let mut app = App::new(Settings::default(), 0).unwrap();
        let mut platform = FakePlatform::with_script(vec![(5, vec![]), (21, vec![])]);

        app.tick(&mut platform).unwrap();
        app.tick(&mut platform).unwrap();
        assert_eq!(app.world().steps, 1);
        assert_eq!(platform.presented.len(), 1);
    }

    #[test]
    fn test_input_latched_before_step() {
        let mut app = App::new(Settings::default(), 0).unwrap();
        let mut platform = FakePlatform::with_script(vec![
            (16, vec![InputEvent::KeyDown(Key::Thrust)]),
            (32, vec![]),
            (48, vec![InputEvent::KeyUp(Key::Thrust)]),
            (64, vec![]),
        ]);

        for _ in 0..2 {
            app.tick(&mut platform).unwrap();
        }
        assert!(app.input().thrust);
        let vx = app.world().ship.vel.x;
        assert!(vx > 3.0);

        for _ in 0..2 {
            app.tick(&mut platform).unwrap();
        }
        assert!(!app.input().thrust);
        assert_eq!(app.world().ship.vel.x, vx);
        assert_eq!(app.world().steps, 4);
    }

    #[test]
    fn test_quit_key_stops_run() {
        let mut app = App::new(Settings::default(), 0).unwrap();
        let mut platform = FakePlatform::with_script(vec![
            (16, vec![]),
            (32, vec![InputEvent::KeyDown(Key::Quit)]),
            (48, vec![]),
        ]);

        app.run(&mut platform).unwrap();
        assert_eq!(app.world().steps, 1);
        // The tick after quit was never consumed
        assert_eq!(platform.script.len(), 1);
    }

    #[test]
    fn test_fps_shown_after_first_second() {
        let mut app = App::new(Settings::default(), 0).unwrap();
        let script = (1..=63).map(|i| (i * 16, vec![])).collect();
        let mut platform = FakePlatform::with_script(script);

        app.run(&mut platform).unwrap();
        // The step at 1008ms closes the first window and counts in it
        assert_eq!(app.fps(), 63);
        let before = &platform.presented[61];
        assert_eq!(before.texts[0].text, "fps: 0");
        let last = platform.presented.last().unwrap();
        assert_eq!(last.texts[0].text, "fps: 63");
    }

    #[test]
    fn test_invalid_settings_fail_startup() {
        let mut settings = Settings::default();
        settings.asteroids.min_sides = 1;
        assert!(App::new(settings, 0).is_err());
    }
}
