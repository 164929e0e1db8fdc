// One error type for the whole crate.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the buffer to the window failed
    #[error("Image load error ({}): {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Config error: {0}")]
    Config(String), // Reading or parsing the config file failed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Degenerate line: the two points coincide")]
    DegenerateLine,
    #[error("Line does not intersect the circle")]
    NoIntersection,
}

pub type Result<T> = std::result::Result<T, Error>;
