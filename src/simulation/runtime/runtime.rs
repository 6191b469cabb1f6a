use crate::domain::{AnimationConfig, BodyId, BodyOptions, Color, Drawable, PhysicsConfig, PlayerConfig};
use crate::systems::animation::ActorState;
use crate::systems::player::Player;

pub use crate::systems::player::PlayerInput;

use super::bodies::spawn_dynamic;
use super::frame_timer::FrameTimer;
use super::step_stats::StepStats;
use super::World;

pub const PLAYER_WIDTH: f32 = 32.0;
pub const PLAYER_HEIGHT: f32 = 48.0;
const PLAYER_COLOR: Color = [0.2, 0.45, 0.85, 1.0];
const PLAYER_Z: i32 = 10;

/// Composition root of a play session: one world, one player, one clock.
///
/// The external frame loop calls [`Runtime::frame`] with the wall-clock
/// delta; the runtime turns it into zero or more fixed sub-steps.
pub struct Runtime {
    world: World,
    player: Player,
    accumulator: f32,
    /// Jump press waiting for the next sub-step
    pending_jump: bool,
    stats: StepStats,
    stats_enabled: bool,
}

impl Runtime {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_configs(
            width,
            height,
            PhysicsConfig::default(),
            AnimationConfig::default(),
            PlayerConfig::default(),
        )
    }

    /// World plus a player standing on the floor near the left edge.
    pub fn with_configs(
        width: f32,
        height: f32,
        physics: PhysicsConfig,
        animation: AnimationConfig,
        player: PlayerConfig,
    ) -> Self {
        let mut world = World::with_config(width, height, physics);
        let x = (width * 0.1).max(0.0);
        let y = world.floor_y() - PLAYER_HEIGHT;
        let id = spawn_dynamic(
            &mut world,
            x,
            y,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
            &BodyOptions::default().color(PLAYER_COLOR).z(PLAYER_Z).driven(true),
        );
        let actor = ActorState { x, y, w: PLAYER_WIDTH, h: PLAYER_HEIGHT, ..ActorState::default() };
        let player = Player::new(id, &actor, player, animation);

        log::info!("runtime ready: {width}x{height} world, player body {}", id.0);
        Self {
            world,
            player,
            accumulator: 0.0,
            pending_jump: false,
            stats: StepStats::default(),
            stats_enabled: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn player_body_id(&self) -> BodyId {
        self.player.body_id()
    }

    /// Leftover simulation time not yet consumed by a sub-step
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn enable_stats(&mut self, enabled: bool) {
        self.stats_enabled = enabled;
        if !enabled {
            self.stats.reset();
        }
    }

    /// Counters for the last frame (zeros when stats are disabled)
    pub fn stats(&self) -> &StepStats {
        &self.stats
    }

    /// Editor removal. The player's own body is refused.
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        if id == self.player.body_id() {
            log::warn!("refusing to remove the player body {}", id.0);
            return false;
        }
        self.world.remove_body(id)
    }

    /// Advance by one rendered frame. Returns the number of sub-steps run.
    pub fn frame(&mut self, frame_dt: f32, input: &PlayerInput) -> u32 {
        let timer = self.stats_enabled.then(FrameTimer::start);
        self.stats.reset();

        let fixed_dt = self.world.config().fixed_dt;
        let max_substeps = self.world.config().max_substeps;
        let max_frame_dt = self.world.config().max_frame_dt;
        if fixed_dt <= 0.0 || !fixed_dt.is_finite() {
            log::warn!("fixed_dt {fixed_dt} is not positive; frame skipped");
            return 0;
        }

        let frame_dt = if frame_dt.is_finite() { frame_dt.min(max_frame_dt).max(0.0) } else { 0.0 };
        self.accumulator += frame_dt;
        self.pending_jump |= input.jump_pressed;

        // The press goes to the first sub-step only
        let mut step_input = PlayerInput { jump_pressed: self.pending_jump, ..*input };
        let mut substeps = 0;
        while self.accumulator >= fixed_dt && substeps < max_substeps {
            self.pending_jump = false;
            self.substep(&step_input, fixed_dt);
            step_input = step_input.without_press();
            self.accumulator -= fixed_dt;
            substeps += 1;
        }

        if self.accumulator >= fixed_dt {
            let dropped = (self.accumulator / fixed_dt) as u32;
            log::warn!("sub-step cap {max_substeps} hit; dropping {dropped} sub-steps");
            self.accumulator %= fixed_dt;
            if self.stats_enabled {
                self.stats.substeps_dropped = dropped;
            }
        }

        let player_id = self.player.body_id();
        if let Some(body) = self.world.body(player_id) {
            self.player.animate(body, frame_dt);
        }

        if let Some(timer) = timer {
            timer.stamp(&mut self.stats);
        }
        substeps
    }

    fn substep(&mut self, input: &PlayerInput, dt: f32) {
        let player_id = self.player.body_id();
        if let Some(body) = self.world.body_mut(player_id) {
            self.player.apply_input(body, input, dt);
        }
        let report = self.world.step(dt);
        if self.stats_enabled {
            self.stats.record(&report);
        }
    }

    /// World bodies back to front, then the player's skeleton on top.
    ///
    /// The player's own box is drawn by the skeleton, so it is left out of
    /// the world list.
    pub fn drawables(&self) -> Vec<Drawable> {
        let player_id = self.player.body_id();
        let mut out: Vec<Drawable> = {
            let mut sorted: Vec<_> = self.world.bodies().iter().filter(|b| b.id != player_id).collect();
            sorted.sort_by_key(|b| b.z);
            sorted.into_iter().map(Drawable::from).collect()
        };
        if let Some(body) = self.world.body(player_id) {
            out.extend(self.player.drawables(body));
        }
        out
    }
}
