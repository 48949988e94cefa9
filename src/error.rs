/// Errors reported by [`crate::Recycler::new`].
///
/// Construction either succeeds with a `Ready` recycler or fails with one of these; no
/// partially built recycler is ever returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("recycler options are missing a container")]
    MissingContainer,
    #[error("recycler options are missing rows")]
    MissingRows,
    #[error("recycler options are missing a build_surface callback")]
    MissingBuildSurface,
    #[error("recycler options are missing an update_surface callback")]
    MissingUpdateSurface,
    #[error("pool_size must be at least 1")]
    EmptyPool,
}
