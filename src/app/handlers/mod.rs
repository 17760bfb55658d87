//! Feature-Handler: mutierende Operationen auf dem AppState.

pub mod arm;
pub mod view;
