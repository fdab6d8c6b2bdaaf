//! Scoreboard text for the HUD and overlays
//!
//! Pure formatting helpers; the DOM work stays in the host page.

use crate::sim::SessionPhase;

/// Number of rows in the game-over ladder
pub const LADDER_SIZE: usize = 5;

/// Distance of each ladder row below the top score
const LADDER_OFFSETS: [u64; LADDER_SIZE] = [0, 75, 180, 250, 320];

/// Which overlay card to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    /// Title card before the first run
    Start,
    /// Results card after a collision
    GameOver,
    /// No overlay while playing
    Hidden,
}

impl OverlayMode {
    pub fn for_phase(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::Idle => OverlayMode::Start,
            SessionPhase::Running => OverlayMode::Hidden,
            SessionPhase::GameOver => OverlayMode::GameOver,
        }
    }

    /// Label of the overlay button, if the card has one
    pub fn button_label(&self) -> Option<&'static str> {
        match self {
            OverlayMode::Start => Some("GAME START"),
            OverlayMode::GameOver => Some("RESTART"),
            OverlayMode::Hidden => None,
        }
    }
}

/// One row of the results ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderEntry {
    pub label: String,
    pub score: u64,
}

/// Whole points of a score (negative and non-finite read as 0)
pub fn whole_points(score: f32) -> u64 {
    if score.is_finite() && score > 0.0 {
        score.floor() as u64
    } else {
        0
    }
}

/// Live score counter text
pub fn score_text(score: f32) -> String {
    whole_points(score).to_string()
}

/// Zero-padded five digit score for the results card
pub fn padded_score(score: f32) -> String {
    format!("{:05}", whole_points(score))
}

/// "1ST", "2ND", "3RD", "4TH", ...
pub fn ordinal_label(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "TH",
        (1, _) => "ST",
        (2, _) => "ND",
        (3, _) => "RD",
        _ => "TH",
    };
    format!("{rank}{suffix}")
}

/// Ladder shown on the results card, anchored on the better of the current
/// and best scores
pub fn ranking_ladder(current: f32, best: f32) -> Vec<LadderEntry> {
    let top = whole_points(current).max(whole_points(best));
    LADDER_OFFSETS
        .iter()
        .enumerate()
        .map(|(i, offset)| LadderEntry {
            label: ordinal_label(i + 1),
            score: top.saturating_sub(*offset),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0.0), "0");
        assert_eq!(score_text(41.99), "41");
        assert_eq!(score_text(f32::NAN), "0");
        assert_eq!(padded_score(41.99), "00041");
        assert_eq!(padded_score(123456.0), "123456");
    }

    #[test]
    fn test_ordinals() {
        let labels: Vec<String> = (1..=5).map(ordinal_label).collect();
        assert_eq!(labels, ["1ST", "2ND", "3RD", "4TH", "5TH"]);
        assert_eq!(ordinal_label(11), "11TH");
        assert_eq!(ordinal_label(22), "22ND");
    }

    #[test]
    fn test_ladder() {
        let ladder = ranking_ladder(100.4, 400.0);
        let scores: Vec<u64> = ladder.iter().map(|e| e.score).collect();
        assert_eq!(scores, [400, 325, 220, 150, 80]);
        assert_eq!(ladder[0].label, "1ST");

        let low = ranking_ladder(90.0, 0.0);
        let scores: Vec<u64> = low.iter().map(|e| e.score).collect();
        assert_eq!(scores, [90, 15, 0, 0, 0]);
    }

    #[test]
    fn test_overlay_mode() {
        assert_eq!(OverlayMode::for_phase(SessionPhase::Idle), OverlayMode::Start);
        assert_eq!(
            OverlayMode::for_phase(SessionPhase::GameOver).button_label(),
            Some("RESTART")
        );
        assert_eq!(OverlayMode::for_phase(SessionPhase::Running).button_label(), None);
    }
}
