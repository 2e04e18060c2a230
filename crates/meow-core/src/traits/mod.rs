//! Domain traits (ports)

mod repositories;

pub use repositories::{MeowRepository, RepoResult};
