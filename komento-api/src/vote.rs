use std::str::FromStr;
#[cfg(test)]
use bolero::generator::TypeGenerator;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub enum VoteDirection {
    Up,
    Down,
}

impl FromStr for VoteDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<VoteDirection, String> {
        match s {
            "up" | "+" => Ok(VoteDirection::Up),
            "down" | "-" => Ok(VoteDirection::Down),
            _ => Err(format!("unknown vote direction {s:?}, expected up or down")),
        }
    }
}

/// What the current viewer has voted on a comment
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum VoteState {
    #[default]
    None,
    Up,
    Down,
}

impl VoteState {
    /// Contribution of this state to the comment's vote total
    pub fn weight(&self) -> i64 {
        match self {
            VoteState::None => 0,
            VoteState::Up => 1,
            VoteState::Down => -1,
        }
    }

    /// Pressing the button for `dir` again retracts the vote, pressing the
    /// other one switches it
    pub fn toggle(self, dir: VoteDirection) -> (VoteState, i64) {
        let next = match (self, dir) {
            (VoteState::Up, VoteDirection::Up) => VoteState::None,
            (VoteState::Down, VoteDirection::Down) => VoteState::None,
            (_, VoteDirection::Up) => VoteState::Up,
            (_, VoteDirection::Down) => VoteState::Down,
        };
        (next, next.weight() - self.weight())
    }
}
