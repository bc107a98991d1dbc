//=========================================================================
// Game Errors
//=========================================================================
//
// Construction-time failures of the gameplay controllers. Ticks never
// fail; anything that can go wrong is rejected when a controller or its
// configuration is built.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== ConfigError =========================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("`blend_smoothing` must be in (0, 1], got {0}")]
    SmoothingOutOfRange(f32),

    #[error("unknown collision layer `{0}`")]
    UnknownLayer(String),

    #[error("locomotion controller built without a {0}")]
    MissingCollaborator(&'static str),

    #[error("malformed locomotion config: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        let error = ConfigError::NonPositive { field: "walk_speed", value: 0.0 };
        assert_eq!(error.to_string(), "`walk_speed` must be positive, got 0");

        let error = ConfigError::UnknownLayer("Lava".into());
        assert_eq!(error.to_string(), "unknown collision layer `Lava`");
    }
}
