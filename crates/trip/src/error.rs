use thiserror::Error;

use crate::Section;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid section. Valid sections: {}", Section::names().join(", "))]
    UnknownSection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
