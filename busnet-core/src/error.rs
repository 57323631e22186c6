use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Route {route:?} references undeclared stop {stop:?}")]
    UnknownStop { route: String, stop: String },
    #[error("Route {0:?} is declared more than once")]
    DuplicateRoute(String),
    #[error("Transit network has no stops")]
    EmptyNetwork,
    #[error("Stop {0:?} not found")]
    StopNotFound(String),
    #[error("Invalid router settings: {0}")]
    InvalidSettings(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
