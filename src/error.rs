use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The name is not one of the registry's commands.
    #[error("unknown command")]
    UnknownCommand,
}
