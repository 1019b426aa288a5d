// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),
}
