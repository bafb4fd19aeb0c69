use crate::types::*;

/// Opposite-index rule: the player offset by half the roster guesses the
/// legality of the current player's scenario. Generalizes "the other team"
/// to rosters of 2 to 4; always lands on someone else when count >= 2.
pub fn opposite_index(current: usize, count: usize) -> usize {
    (current + count / 2) % count
}

impl Session {
    /// The scenario submitted by the current player, if a guess is pending
    pub fn pending_scenario(&self) -> Option<&str> {
        match &self.mode {
            SessionMode::Multiplayer {
                round: RoundStage::AwaitingGuess { scenario },
            } => Some(scenario),
            _ => None,
        }
    }

    /// Record the current player's scenario and hand the round to the
    /// opposing player for a guess. The remote service is not contacted yet;
    /// the guess is made blind.
    pub fn submit_scenario(&mut self, text: String) -> Result<(), String> {
        match &self.mode {
            SessionMode::Multiplayer {
                round: RoundStage::AwaitingSubmission,
            } => {}
            SessionMode::Multiplayer { .. } => {
                return Err("A scenario has already been submitted this round".to_string())
            }
            _ => return Err("Scenarios can only be submitted during a multiplayer game".to_string()),
        }
        if text.is_empty() {
            return Err("Scenario text must not be empty".to_string());
        }

        self.mode = SessionMode::Multiplayer {
            round: RoundStage::AwaitingGuess { scenario: text },
        };
        Ok(())
    }

    /// Settle the round with the service's ruling: score the opposing player
    /// (+5 for a correct guess, -1 clamped at zero otherwise) and keep the
    /// ruling on display until the next turn or reset.
    pub fn apply_ruling(&mut self, guess: Guess, ruling: Ruling) -> Result<bool, String> {
        let scenario = match &self.mode {
            SessionMode::Multiplayer {
                round: RoundStage::AwaitingGuess { scenario },
            } => scenario.clone(),
            _ => return Err("No scenario is awaiting a guess".to_string()),
        };

        let is_legal = ruling.verdict.is_legal();
        let guessed_correctly = (guess == Guess::Legal) == is_legal;

        let opponent = opposite_index(self.current_player, self.players.len());
        let score = &mut self.players[opponent].score;
        *score = if guessed_correctly {
            *score + 5
        } else {
            score.saturating_sub(1)
        };

        self.mode = SessionMode::Multiplayer {
            round: RoundStage::Resolved {
                scenario,
                ruling,
                guessed_correctly,
            },
        };
        Ok(guessed_correctly)
    }

    /// Drop a pending guess without scoring, returning the round to
    /// AwaitingSubmission. Used when the analysis call fails; the player
    /// retries by resubmitting. No-op if no guess is pending.
    pub fn abort_pending_guess(&mut self) {
        if let SessionMode::Multiplayer {
            round: round @ RoundStage::AwaitingGuess { .. },
        } = &mut self.mode
        {
            *round = RoundStage::AwaitingSubmission;
        }
    }

    /// Pass the turn to the next player in rotation and clear the round
    pub fn next_turn(&mut self) -> Result<(), String> {
        match &self.mode {
            SessionMode::Multiplayer { .. } => {}
            _ => return Err("Turns only rotate during a multiplayer game".to_string()),
        }

        self.current_player = (self.current_player + 1) % self.players.len();
        self.mode = SessionMode::Multiplayer {
            round: RoundStage::AwaitingSubmission,
        };
        Ok(())
    }

    /// Store the result of a single-query analysis
    pub fn record_single_result(&mut self, ruling: Ruling) -> Result<(), String> {
        match &mut self.mode {
            SessionMode::SingleQuery { last_result } => {
                *last_result = Some(ruling);
                Ok(())
            }
            _ => Err("Not in single-query mode".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruling(verdict: Verdict) -> Ruling {
        Ruling {
            verdict,
            articles: vec![Article {
                article_no: ArticleNo::Number(21),
                text: "Protection of life and personal liberty".to_string(),
            }],
            reasoning: "So ruled.".to_string(),
        }
    }

    fn multiplayer_session(player_count: usize) -> Session {
        let mut session = Session::new();
        for n in 3..=player_count {
            session.add_player(format!("Player {}", n)).unwrap();
        }
        session.begin_multiplayer().unwrap();
        session
    }

    #[test]
    fn test_opposite_index_valid_and_distinct() {
        for count in 2..=4 {
            for current in 0..count {
                let opponent = opposite_index(current, count);
                assert!(opponent < count);
                assert_ne!(
                    opponent, current,
                    "player {} of {} would guess their own scenario",
                    current, count
                );
            }
        }
    }

    #[test]
    fn test_opposite_index_splits_roster_in_half() {
        assert_eq!(opposite_index(0, 2), 1);
        assert_eq!(opposite_index(1, 2), 0);
        assert_eq!(opposite_index(0, 3), 1);
        assert_eq!(opposite_index(2, 3), 0);
        assert_eq!(opposite_index(0, 4), 2);
        assert_eq!(opposite_index(3, 4), 1);
    }

    #[test]
    fn test_submit_scenario_moves_to_awaiting_guess() {
        let mut session = multiplayer_session(2);
        session
            .submit_scenario("It is legal to paint the sky green".to_string())
            .unwrap();

        assert_eq!(
            session.pending_scenario(),
            Some("It is legal to paint the sky green")
        );
    }

    #[test]
    fn test_submit_scenario_rejects_empty_text_and_double_submit() {
        let mut session = multiplayer_session(2);
        assert!(session.submit_scenario(String::new()).is_err());

        session.submit_scenario("First".to_string()).unwrap();
        assert!(session.submit_scenario("Second".to_string()).is_err());
        assert_eq!(session.pending_scenario(), Some("First"));
    }

    #[test]
    fn test_submit_scenario_rejected_outside_multiplayer() {
        let mut session = Session::new();
        assert!(session.submit_scenario("A scenario".to_string()).is_err());
    }

    #[test]
    fn test_wrong_guess_decrements_opponent_clamped_at_zero() {
        // P2 guesses legal, verdict is NO
        let mut session = multiplayer_session(2);
        session
            .submit_scenario("It is legal to paint the sky green".to_string())
            .unwrap();

        let correct = session
            .apply_ruling(Guess::Legal, ruling(Verdict::No))
            .unwrap();

        assert!(!correct);
        assert_eq!(session.players[1].score, 0); // max(0, 0 - 1)
        assert_eq!(session.players[0].score, 0);
    }

    #[test]
    fn test_correct_guess_awards_opponent_five() {
        // P2 guesses illegal, verdict is NO
        let mut session = multiplayer_session(2);
        session
            .submit_scenario("It is legal to paint the sky green".to_string())
            .unwrap();

        let correct = session
            .apply_ruling(Guess::Illegal, ruling(Verdict::No))
            .unwrap();

        assert!(correct);
        assert_eq!(session.players[1].score, 5);
        assert_eq!(session.players[0].score, 0);
    }

    #[test]
    fn test_maybe_verdict_counts_as_not_legal() {
        let mut session = multiplayer_session(2);
        session.submit_scenario("A gray area".to_string()).unwrap();

        let correct = session
            .apply_ruling(Guess::Illegal, ruling(Verdict::Maybe))
            .unwrap();
        assert!(correct);
    }

    #[test]
    fn test_four_player_roster_scores_the_opposite_seat() {
        let mut session = multiplayer_session(4);
        session.submit_scenario("A scenario".to_string()).unwrap();

        session
            .apply_ruling(Guess::Illegal, ruling(Verdict::No))
            .unwrap();

        // Player at index 2 guesses for the player at index 0
        assert_eq!(session.players[2].score, 5);
        assert!(session.players[0].score == 0 && session.players[1].score == 0);
    }

    #[test]
    fn test_apply_ruling_requires_pending_guess() {
        let mut session = multiplayer_session(2);
        assert!(session
            .apply_ruling(Guess::Legal, ruling(Verdict::Yes))
            .is_err());
    }

    #[test]
    fn test_abort_pending_guess_reopens_submission() {
        let mut session = multiplayer_session(2);
        session.submit_scenario("A scenario".to_string()).unwrap();

        session.abort_pending_guess();

        assert_eq!(
            session.mode,
            SessionMode::Multiplayer {
                round: RoundStage::AwaitingSubmission
            }
        );
        assert!(session.players.iter().all(|p| p.score == 0));

        // No-op when nothing is pending
        session.abort_pending_guess();
        assert_eq!(
            session.mode,
            SessionMode::Multiplayer {
                round: RoundStage::AwaitingSubmission
            }
        );
    }

    #[test]
    fn test_next_turn_advances_by_one_and_clears_round() {
        let mut session = multiplayer_session(3);
        session.submit_scenario("A scenario".to_string()).unwrap();
        session
            .apply_ruling(Guess::Illegal, ruling(Verdict::No))
            .unwrap();

        session.next_turn().unwrap();
        assert_eq!(session.current_player, 1);
        assert_eq!(
            session.mode,
            SessionMode::Multiplayer {
                round: RoundStage::AwaitingSubmission
            }
        );

        session.next_turn().unwrap();
        session.next_turn().unwrap();
        assert_eq!(session.current_player, 0); // wraps around
    }

    #[test]
    fn test_next_turn_rejected_outside_multiplayer() {
        let mut session = Session::new();
        assert!(session.next_turn().is_err());
    }

    #[test]
    fn test_scores_accumulate_over_rounds() {
        let mut session = multiplayer_session(2);

        for _ in 0..3 {
            session.submit_scenario("A scenario".to_string()).unwrap();
            session
                .apply_ruling(Guess::Illegal, ruling(Verdict::No))
                .unwrap();
            session.next_turn().unwrap();
            session.next_turn().unwrap();
        }

        assert_eq!(session.players[1].score, 15);
    }
}
