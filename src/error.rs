use std::fmt;

/// Classified failure conditions surfaced by the scene core.
///
/// Orchestration code wraps these in `anyhow` with file/operation context;
/// callers that want to branch on a condition (reject an empty mesh, ignore
/// a stale id) match on the variant instead of parsing messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A fully parsed mesh contained no vertex positions. The instance must
    /// not be created from it.
    EmptyGeometry,
    /// An operation referenced a model instance id that is not in the scene.
    /// The scene is left unmodified.
    ModelNotFound(u32),
    /// The camera basis is not invertible: the eye coincides with the target
    /// or the up hint is parallel to the view direction.
    DegenerateCamera,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyGeometry => write!(f, "mesh contains no vertex positions"),
            Error::ModelNotFound(id) => write!(f, "no model instance with id {id} in the scene"),
            Error::DegenerateCamera => {
                write!(f, "camera basis is degenerate (eye == target or up parallel to view)")
            }
        }
    }
}

impl std::error::Error for Error {}
