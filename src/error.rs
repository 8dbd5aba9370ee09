use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("platform has no contact material; the physics engine would fall back to its default contact response")]
    MissingContactMaterial,

    #[error("platform position has a non-finite {axis} component")]
    NonFinitePosition { axis: char },

    #[error("layout references unknown contact material `{0}`")]
    UnknownMaterial(String),

    #[error("layout material `{0}` is declared more than once")]
    DuplicateMaterial(String),

    #[error("unknown scene `{0}` (available: bounce)")]
    UnknownScene(String),

    #[error("malformed level layout")]
    Layout(#[from] serde_json::Error),
}
