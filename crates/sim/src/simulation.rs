//! Scenario replay.
//!
//! Plays the role of the engine integration layer: derives input edges from
//! key levels, performs the focus query, ticks the controller and feeds the
//! result to the prompt fader and reticle.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use interaction_content::Scenario;
use interaction_core::{
    InputSample, InteractionController, PromptFader, ReticleView, Targetable, TickReport,
};

use crate::config::SimConfig;
use crate::world::World;

/// What the host would render after one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutcome {
    pub index: usize,
    /// Simulated time at the end of the frame.
    pub elapsed: Duration,
    pub focused: Option<String>,
    pub fired: bool,
    pub text: Option<String>,
    pub progress: f32,
    pub alpha: f32,
    pub reticle: ReticleView,
}

pub struct Simulation {
    config: SimConfig,
    scenario: Scenario,
    world: World,
    controller: InteractionController,
    fader: PromptFader,
    fired: Rc<RefCell<Vec<String>>>,
    was_down: bool,
    elapsed: Duration,
}

impl Simulation {
    pub fn new(config: SimConfig, scenario: Scenario) -> Result<Self> {
        let mut controller = InteractionController::new(&config.interaction)?;
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&fired);
        controller.add_listener(move |target: &dyn Targetable| {
            sink.borrow_mut().push(target.prompt_label());
        });

        Ok(Self {
            world: World::from_scenario(&scenario),
            fader: PromptFader::new(config.interaction.prompt.fade_speed),
            config,
            scenario,
            controller,
            fired,
            was_down: false,
            elapsed: Duration::ZERO,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Labels of every fired interaction, in order.
    pub fn fired_labels(&self) -> Vec<String> {
        self.fired.borrow().clone()
    }

    /// Runs every frame, calling `on_frame` after each one, then stops the
    /// controller.
    pub fn run(&mut self, mut on_frame: impl FnMut(&FrameOutcome)) -> Vec<FrameOutcome> {
        self.controller.start();
        let frames = self.scenario.frames.clone();
        let mut outcomes = Vec::with_capacity(frames.len());

        for (index, frame) in frames.iter().enumerate() {
            for (id, available) in &frame.set_available {
                if let Some(target) = self.world.get(id) {
                    target.set_available(*available);
                }
            }

            let input = InputSample::from_levels(self.was_down, frame.down);
            self.was_down = frame.down;

            let dt = frame.dt();
            self.elapsed += dt;

            let world = &self.world;
            let detection = self.config.interaction.detection;
            let report = self.controller.tick(
                dt,
                || world.hit_test(frame.aim.as_ref(), &detection),
                input,
                self.config.key_glyph(),
            );

            let outcome = self.present(index, dt, &report);
            on_frame(&outcome);
            outcomes.push(outcome);
        }

        self.controller.stop();
        tracing::info!(
            frames = outcomes.len(),
            fired = self.fired.borrow().len(),
            "scenario finished"
        );
        outcomes
    }

    fn present(&mut self, index: usize, dt: Duration, report: &TickReport) -> FrameOutcome {
        let style = &self.config.interaction.reticle;
        let reticle = match &report.display {
            Some(display) => {
                self.fader.show();
                style.resolve(display.icon, display.available)
            }
            None => {
                self.fader.hide();
                style.idle()
            }
        };
        let alpha = self.fader.update(dt);

        FrameOutcome {
            index,
            elapsed: self.elapsed,
            focused: report.focus.current.as_ref().map(|t| t.prompt_label()),
            fired: report.fired(),
            text: report.display.as_ref().map(|d| d.text.clone()),
            progress: report.display.as_ref().map_or(0.0, |d| d.progress),
            alpha,
            reticle,
        }
    }
}
