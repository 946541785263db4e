use crate::domain::path_error::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました")]
    Io(#[from] std::io::Error),

    #[error("パス関連のエラー")]
    Path(#[from] PathError),
}
