use crate::types::*;

impl Session {
    /// A fresh session: two unnamed players, setup screen, nothing pending
    pub fn new() -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            players: vec![
                Player::new(1, "Player 1".to_string()),
                Player::new(2, "Player 2".to_string()),
            ],
            current_player: 0,
            winning_score: 50,
            mode: SessionMode::Setup,
        }
    }

    /// Enter the multiplayer game. One-way during a round; the only road back
    /// to the setup screen is an explicit reset.
    pub fn begin_multiplayer(&mut self) -> Result<(), String> {
        if self.mode != SessionMode::Setup {
            return Err("Can only start a game from the setup screen".to_string());
        }
        if self.players.len() < MIN_PLAYERS || self.players.len() > MAX_PLAYERS {
            return Err(format!(
                "Multiplayer needs {} to {} players",
                MIN_PLAYERS, MAX_PLAYERS
            ));
        }

        self.mode = SessionMode::Multiplayer {
            round: RoundStage::AwaitingSubmission,
        };
        Ok(())
    }

    /// Enter single-query mode (constitutional check without scoring)
    pub fn begin_single_query(&mut self) -> Result<(), String> {
        if self.mode != SessionMode::Setup {
            return Err("Can only start a query from the setup screen".to_string());
        }

        self.mode = SessionMode::SingleQuery { last_result: None };
        Ok(())
    }

    /// Clear the pending scenario and result for the current screen.
    /// Idempotent; a no-op on the setup screen.
    pub fn reset_round_state(&mut self) {
        match &mut self.mode {
            SessionMode::Setup => {}
            SessionMode::Multiplayer { round } => {
                *round = RoundStage::AwaitingSubmission;
            }
            SessionMode::SingleQuery { last_result } => {
                *last_result = None;
            }
        }
    }

    /// Back to the setup screen. Roster, scores and the configured winning
    /// score all survive; only round state is discarded.
    pub fn return_to_setup(&mut self) {
        self.mode = SessionMode::Setup;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
