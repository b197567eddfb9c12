pub mod alloy;
pub mod artifact;

pub use artifact::{Artifact, ArtifactError, ArtifactStore, deploy_code};
