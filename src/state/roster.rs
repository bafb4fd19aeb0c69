use crate::types::*;

impl Session {
    /// Append a player with the next sequential id. Only possible on the
    /// setup screen; the roster is fixed once a game mode is entered.
    pub fn add_player(&mut self, name: String) -> Result<PlayerId, String> {
        if self.mode != SessionMode::Setup {
            return Err("Players can only be added on the setup screen".to_string());
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(format!("The roster is limited to {} players", MAX_PLAYERS));
        }
        if name.is_empty() {
            return Err("Player name must not be empty".to_string());
        }

        let id = self.players.len() as PlayerId + 1;
        self.players.push(Player::new(id, name));
        Ok(id)
    }

    /// Rename a player in place. Allowed in any mode (the score board lets
    /// players fix their name mid-game); content is the caller's concern.
    pub fn rename_player(&mut self, index: usize, name: String) -> Result<(), String> {
        let player = self
            .players
            .get_mut(index)
            .ok_or_else(|| format!("No player at position {}", index))?;
        player.name = name;
        Ok(())
    }

    /// Set the advisory winning score. Collected from the setup screen and
    /// echoed in the snapshot, but never consulted to end a game.
    pub fn set_winning_score(&mut self, value: u32) -> Result<(), String> {
        if self.mode != SessionMode::Setup {
            return Err("The winning score can only be changed on the setup screen".to_string());
        }
        if !WINNING_SCORE_RANGE.contains(&value) {
            return Err(format!(
                "Winning score must be between {} and {}",
                WINNING_SCORE_RANGE.start(),
                WINNING_SCORE_RANGE.end()
            ));
        }

        self.winning_score = value;
        Ok(())
    }
}
