//! Error types.
//!
//! `DelveError` is for genuine failures at the edges (files, config). Gameplay never fails:
//! a refused action is a [`Rejection`], reported to the player and otherwise ignored.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed leaderboard record: {line:?}")]
    BadRecord { line: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not determine home directory")]
    NoHomeDir,
}

/// Why an action was refused. A rejected action leaves all state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not enough gold (need {needed}, have {available})")]
    NotEnoughGold { needed: u32, available: u32 },

    #[error("your weapon is already enchanted")]
    AlreadyEnchanted,

    #[error("you have no weapon equipped")]
    NoWeaponEquipped,

    #[error("you don't have a Health Potion")]
    NoPotion,

    #[error("you can only equip weapons")]
    NotAWeapon,

    #[error("you have nothing to sell")]
    NothingToSell,

    #[error("nobody will pay for that")]
    Worthless,

    #[error("you can't move that way")]
    Blocked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let r = Rejection::NotEnoughGold {
            needed: 50,
            available: 0,
        };
        assert_eq!(r.to_string(), "not enough gold (need 50, have 0)");
        assert_eq!(Rejection::Blocked.to_string(), "you can't move that way");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DelveError = io.into();
        assert!(matches!(err, DelveError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
