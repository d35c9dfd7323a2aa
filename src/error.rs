use thiserror::Error;

pub type NavResult<T> = Result<T, NavError>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NavError {
    /// A computed position has a NaN component.
    #[error("degenerate position: latitude {latitude}, longitude {longitude}")]
    Degenerate { latitude: f64, longitude: f64 },

    /// A computed bearing or distance is NaN or infinite.
    #[error("{quantity} is not finite")]
    NotFinite { quantity: &'static str },
}
