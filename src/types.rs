use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque ID types for type safety
pub type SessionId = String;
pub type PlayerId = u32;

/// Roster bounds for a multiplayer game
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Accepted range for the configured winning score (advisory, never enforced
/// as a termination condition)
pub const WINNING_SCORE_RANGE: std::ops::RangeInclusive<u32> = 10..=500;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Self { id, name, score: 0 }
    }
}

/// Which top-level screen the session is showing. Round data lives inside the
/// variant that needs it, so states like "awaiting a guess while in
/// single-query mode" cannot be represented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "screen", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionMode {
    Setup,
    Multiplayer {
        round: RoundStage,
    },
    SingleQuery {
        #[serde(skip_serializing_if = "Option::is_none")]
        last_result: Option<Ruling>,
    },
}

/// Sub-state of one multiplayer round
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "stage", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStage {
    AwaitingSubmission,
    AwaitingGuess {
        scenario: String,
    },
    Resolved {
        scenario: String,
        ruling: Ruling,
        guessed_correctly: bool,
    },
}

/// The opposing player's call on a submitted scenario
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Guess {
    Legal,
    Illegal,
}

/// Legality determination returned by the remote analysis service. The wire
/// strings are case-sensitive; anything else fails deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Yes,
    No,
    Maybe,
}

impl Verdict {
    /// Only an explicit YES counts as legal; MAYBE does not.
    pub fn is_legal(&self) -> bool {
        matches!(self, Verdict::Yes)
    }
}

/// The service sends `article_no` as either a JSON number or a string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ArticleNo {
    Number(i64),
    Text(String),
}

impl fmt::Display for ArticleNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleNo::Number(n) => write!(f, "{}", n),
            ArticleNo::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A constitutional article cited in support of a verdict
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub article_no: ArticleNo,
    pub text: String,
}

/// Full verdict record from one analysis call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ruling {
    pub verdict: Verdict,
    pub articles: Vec<Article>,
    pub reasoning: String,
}

/// One game session: roster, turn pointer and the current screen. Created
/// fresh per process, discarded on reset; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub created_at: String,
    pub players: Vec<Player>,
    pub current_player: usize,
    pub winning_score: u32,
    pub mode: SessionMode,
}
