use thiserror::Error;

use crate::app_error::AppError;

/// Infrastructure errors that can occur during application startup.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Waitlist store initialization failed. Check WAITLIST_FILE and directory permissions.")]
    StoreInit(#[source] AppError),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
