use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("no valid group assignment found after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("invalid roster: {0}")]
    InvalidRoster(String),
}

#[derive(Error, Debug)]
pub enum BracketError {
    #[error("cannot fill a {needed}-slot bracket: only {available} qualifiers available")]
    Incomplete { needed: usize, available: usize },

    #[error("qualifier field cannot be paired: {0}")]
    Unseedable(String),
}

/// Failure of the end-to-end tournament pipeline.
#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("draw failed: {0}")]
    Draw(#[from] DrawError),

    #[error("bracket failed: {0}")]
    Bracket(#[from] BracketError),
}
