//! Match lifecycle
//!
//! A `Match` owns the simulation world (ball, paddles, opponent profile) and
//! every per-match resource. Games are played inside a match; win counters
//! survive between games until the match is exited.

use hecs::World;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    create_ball, step, Ball, Config, Events, Field, GameRng, InputQueue, OpponentProfile,
    Paddle, Score, Side, Wins,
};

/// Match lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Idle,
    Running,
    Paused,
    Ended,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Start,
    Pause,
    Resume,
    EndGame,
    Exit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchPhase,
    pub to_state: MatchPhase,
    pub action: MatchAction,
}

/// Read-only view handed to the renderer once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: MatchPhase,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub paddle_top_x: f32,
    pub paddle_bottom_x: f32,
    pub score: Score,
    pub wins: Wins,
}

pub struct Match {
    world: World,
    field: Field,
    config: Config,
    score: Score,
    wins: Wins,
    events: Events,
    inputs: InputQueue,
    rng: GameRng,
    phase: MatchPhase,
    tick: u64,
}

impl Match {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let config = config.validated();
        let field = Field::from_config(&config);
        let mut world = World::new();

        let mut ball = Ball::new(field.ball_spawn(), glam::Vec2::ZERO);
        ball.reset(&field, &config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        for side in Side::ALL {
            let paddle = Paddle::new(side, field.paddle_spawn_x());
            if config.opponent && side == config.opponent_side() {
                world.spawn((paddle, OpponentProfile::new()));
            } else {
                world.spawn((paddle,));
            }
        }

        Self {
            world,
            field,
            config,
            score: Score::new(),
            wins: Wins::new(),
            events: Events::new(),
            inputs: InputQueue::new(),
            rng,
            phase: MatchPhase::Idle,
            tick: 0,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Running
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn wins(&self) -> Wins {
        self.wins
    }

    /// Events produced by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle_x(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.x)
            .unwrap_or_else(|| self.field.paddle_spawn_x())
    }

    pub fn opponent_profile(&self) -> Option<OpponentProfile> {
        self.world
            .query::<&OpponentProfile>()
            .iter()
            .next()
            .map(|(_e, profile)| *profile)
    }

    /// Begin a new game. Scores, ball and paddles reset; wins carry over.
    pub fn start(&mut self) -> TransitionResult {
        let result = self.transition(MatchAction::Start);
        if result.success {
            self.score = Score::new();
            self.events.clear();
            self.inputs.clear();
            self.reset_positions();
            debug!(wins_top = self.wins.top, wins_bottom = self.wins.bottom, "game started");
        }
        result
    }

    pub fn pause(&mut self) -> TransitionResult {
        self.transition(MatchAction::Pause)
    }

    pub fn resume(&mut self) -> TransitionResult {
        self.transition(MatchAction::Resume)
    }

    pub fn toggle_pause(&mut self) -> TransitionResult {
        match self.phase {
            MatchPhase::Paused => self.resume(),
            _ => self.pause(),
        }
    }

    /// Close the current game if a side has reached the winning score
    pub fn end_game(&mut self) -> TransitionResult {
        match self.score.has_winner(self.config.win_score) {
            Some(winner) if self.phase == MatchPhase::Running => {
                let result = self.transition(MatchAction::EndGame);
                self.wins.record(winner);
                self.events.match_ended = Some(winner);
                info!(
                    ?winner,
                    top = self.score.top,
                    bottom = self.score.bottom,
                    "game over"
                );
                result
            }
            _ => self.rejected(MatchAction::EndGame),
        }
    }

    /// Leave the match: everything resets, including wins and the opponent
    pub fn exit_match(&mut self) -> TransitionResult {
        let result = self.transition(MatchAction::Exit);
        self.score = Score::new();
        self.wins = Wins::new();
        self.events.clear();
        self.inputs.clear();
        for (_e, profile) in self.world.query_mut::<&mut OpponentProfile>() {
            *profile = OpponentProfile::new();
        }
        self.reset_positions();
        result
    }

    /// Queue a paddle drag. Ignored unless a game is running.
    pub fn push_drag(&mut self, side: Side, dx: f32) {
        if self.is_running() {
            self.inputs.push_drag(side, dx);
        }
    }

    /// Advance one fixed step. A no-op outside `Running`.
    pub fn tick(&mut self) -> &Events {
        if !self.is_running() {
            self.events.clear();
            return &self.events;
        }

        step(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.inputs,
            &mut self.rng,
        );
        self.tick += 1;

        if self.score.has_winner(self.config.win_score).is_some() {
            self.end_game();
        }

        &self.events
    }

    /// Human score to offer the leaderboard once a game has ended.
    ///
    /// Only games against the opponent are ranked; two-player games never are.
    pub fn ranked_score(&self) -> Option<u32> {
        if self.phase == MatchPhase::Ended && self.config.opponent {
            Some(self.score.get(self.config.human_side()))
        } else {
            None
        }
    }

    /// Change the field size. Refused while a game is in progress.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if matches!(self.phase, MatchPhase::Running | MatchPhase::Paused) {
            return false;
        }
        self.field = self.field.resized(width, height);
        self.reset_positions();
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self
            .ball()
            .unwrap_or_else(|| Ball::new(self.field.ball_spawn(), glam::Vec2::ZERO));
        Snapshot {
            tick: self.tick,
            phase: self.phase,
            ball_x: ball.pos.x,
            ball_y: ball.pos.y,
            ball_vx: ball.vel.x,
            ball_vy: ball.vel.y,
            paddle_top_x: self.paddle_x(Side::Top),
            paddle_bottom_x: self.paddle_x(Side::Bottom),
            score: self.score,
            wins: self.wins,
        }
    }

    fn reset_positions(&mut self) {
        let field = self.field;
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.x = field.paddle_spawn_x();
        }
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&field, &self.config, &mut self.rng);
        }
    }

    fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.phase;

        match next_phase(from_state, action) {
            Some(next_state) => {
                self.phase = next_state;
                debug!(?from_state, ?next_state, ?action, "match transition");
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => self.rejected(action),
        }
    }

    fn rejected(&self, action: MatchAction) -> TransitionResult {
        TransitionResult {
            success: false,
            from_state: self.phase,
            to_state: self.phase,
            action,
        }
    }
}

/// Get next state for a given action (if valid)
fn next_phase(state: MatchPhase, action: MatchAction) -> Option<MatchPhase> {
    match (state, action) {
        (MatchPhase::Idle, MatchAction::Start) => Some(MatchPhase::Running),
        (MatchPhase::Ended, MatchAction::Start) => Some(MatchPhase::Running),

        (MatchPhase::Running, MatchAction::Pause) => Some(MatchPhase::Paused),
        (MatchPhase::Running, MatchAction::EndGame) => Some(MatchPhase::Ended),

        (MatchPhase::Paused, MatchAction::Resume) => Some(MatchPhase::Running),

        (_, MatchAction::Exit) => Some(MatchPhase::Idle),

        // Invalid transition
        _ => None,
    }
}
