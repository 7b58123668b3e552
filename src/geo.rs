use crate::types::Coords;

#[derive(Debug, thiserror::Error)]
pub enum GeolocationError {
    #[error("position unavailable")]
    Unavailable,
}

/// One-shot source of the user's current position.
pub trait Geolocation {
    fn current_position(&mut self) -> Result<Coords, GeolocationError>;
}

/// Answers with a fixed position, or fails when there is none.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition(pub Option<Coords>);

impl Geolocation for FixedPosition {
    fn current_position(&mut self) -> Result<Coords, GeolocationError> {
        self.0.ok_or(GeolocationError::Unavailable)
    }
}
