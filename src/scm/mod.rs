//! Source-control mirror
//!
//! Optional direct write of rendered documents to a repository, alongside
//! the registry's own version-control placement.

pub mod github;

pub use github::{GithubWriter, ScmWriteResult};
