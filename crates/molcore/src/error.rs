use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Atomic number {0} is outside the real-element range 0..=127")]
    ElementOutOfRange(u8),

    #[error("Custom element offset {0} is outside the range 0..=126")]
    CustomOffsetOutOfRange(u8),

    #[error("Invalid atomic identity: '{0}'")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported unit name: '{0}'")]
pub struct ParseUnitError(pub(crate) String);

impl ParseUnitError {
    pub fn name(&self) -> &str {
        &self.0
    }
}
