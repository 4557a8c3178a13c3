use serde::{Deserialize, Serialize};

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub top: u32,    // Player 1 score
    pub bottom: u32, // Player 2 score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Top => self.top += 1,
            Side::Bottom => self.bottom += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.top >= win_score {
            Some(Side::Top)
        } else if self.bottom >= win_score {
            Some(Side::Bottom)
        } else {
            None
        }
    }

    /// Highest score on the board
    pub fn best(&self) -> u32 {
        self.top.max(self.bottom)
    }
}

/// Games won per side across a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wins {
    pub top: u32,
    pub bottom: u32,
}

impl Wins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, side: Side) {
        match side {
            Side::Top => self.top += 1,
            Side::Bottom => self.bottom += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from the operating system, for hosts that want varied games
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Fire-and-forget notification for audio/haptics hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Side),
    PointScored(Side),
    MatchEnded(Side),
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub paddle_hit: Option<Side>,
    pub point_scored: Option<Side>,
    pub match_ended: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.paddle_hit = None;
        self.point_scored = None;
        self.match_ended = None;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Notifications in the order they happened within the tick
    pub fn to_vec(&self) -> Vec<GameEvent> {
        let mut out = Vec::with_capacity(4);
        if self.ball_hit_wall {
            out.push(GameEvent::WallBounce);
        }
        if let Some(side) = self.paddle_hit {
            out.push(GameEvent::PaddleHit(side));
        }
        if let Some(side) = self.point_scored {
            out.push(GameEvent::PointScored(side));
        }
        if let Some(side) = self.match_ended {
            out.push(GameEvent::MatchEnded(side));
        }
        out
    }
}

/// Pending paddle drags from the input collaborator
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, f32)>, // (paddle, signed horizontal delta)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_drag(&mut self, side: Side, dx: f32) {
        self.inputs.push((side, dx));
    }

    pub fn pop_inputs(&mut self) -> Vec<(Side, f32)> {
        std::mem::take(&mut self.inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Top);
        score.increment(Side::Top);
        score.increment(Side::Bottom);
        assert_eq!(score.top, 2);
        assert_eq!(score.bottom, 1);
        assert_eq!(score.get(Side::Top), 2);
        assert_eq!(score.best(), 2);
    }

    #[test]
    fn test_score_has_winner_top() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment(Side::Top);
        }
        assert_eq!(score.has_winner(10), Some(Side::Top), "Top should win at 10");
    }

    #[test]
    fn test_score_has_winner_bottom() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Bottom);
        }
        assert_eq!(score.has_winner(11), Some(Side::Bottom));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment(Side::Top);
        }
        assert_eq!(score.has_winner(11), None, "No winner below threshold");
    }

    #[test]
    fn test_wins_record() {
        let mut wins = Wins::new();
        wins.record(Side::Bottom);
        assert_eq!(wins.get(Side::Bottom), 1);
        assert_eq!(wins.get(Side::Top), 0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.paddle_hit = Some(Side::Top);
        events.point_scored = Some(Side::Bottom);
        events.match_ended = Some(Side::Bottom);

        events.clear();

        assert!(events.is_empty());
    }

    #[test]
    fn test_events_to_vec_order() {
        let events = Events {
            ball_hit_wall: true,
            paddle_hit: None,
            point_scored: Some(Side::Top),
            match_ended: Some(Side::Top),
        };
        assert_eq!(
            events.to_vec(),
            vec![
                GameEvent::WallBounce,
                GameEvent::PointScored(Side::Top),
                GameEvent::MatchEnded(Side::Top),
            ]
        );
    }

    #[test]
    fn test_input_queue_push_and_pop() {
        let mut queue = InputQueue::new();
        queue.push_drag(Side::Top, -12.0);
        queue.push_drag(Side::Bottom, 3.5);

        assert_eq!(queue.inputs.len(), 2);
        assert_eq!(queue.pop_inputs(), vec![(Side::Top, -12.0), (Side::Bottom, 3.5)]);
        assert!(queue.inputs.is_empty());
    }
}
