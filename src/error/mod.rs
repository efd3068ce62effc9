mod descriptor;
mod io;
mod pattern;

pub use descriptor::DescriptorError;
pub use io::IoError;
pub use pattern::PatternError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

pub type Result<T> = std::result::Result<T, Error>;
