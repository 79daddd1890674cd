//! # Error Types
//!
//! Error enums for the failure domains of the viewer core:
//!
//! - [`GeometryError`] - source geometry could not be produced or bound. Fatal to
//!   the one actor being built; the scene never stores a half-built actor.
//! - [`SceneError`] - queries against actors or scene state that are not ready.
//! - [`ShaderError`] - the backend could not compile a program for the cache.
//! - [`InteractionError`] - manipulation requests that lost their target. These
//!   come from ordinary input races and are swallowed by the interaction
//!   controller.

use std::path::PathBuf;

use thiserror::Error;

use crate::gfx::{geometry::Topology, rendering::ProgramKind};

/// Failure to generate or bind geometry for an actor.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A shape option is outside its accepted range.
    #[error("invalid option `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },

    /// An optional vertex attribute does not run parallel to the positions.
    #[error("{attribute} has {found} entries but there are {expected} positions")]
    AttributeLength {
        attribute: &'static str,
        expected: usize,
        found: usize,
    },

    /// The element count cannot be split into whole primitives.
    #[error("{count} elements do not form whole {topology:?} primitives")]
    IncompleteTopology { topology: Topology, count: usize },

    /// An index or face reference points past the end of the vertex data.
    #[error("index {index} is out of range for {count} vertices")]
    IndexOutOfRange { index: usize, count: usize },

    /// The model file does not exist.
    #[error("model file {0} does not exist")]
    MissingFile(PathBuf),

    /// The model file exists but could not be parsed.
    #[error("failed to load OBJ model {path}: {source}")]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    /// The model contained no faces.
    #[error("model {0} contains no faces")]
    EmptyModel(PathBuf),
}

/// Errors raised by scene and actor queries.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Bounds or geometry were requested before the geometry was generated.
    #[error("{what} requested before geometry was generated")]
    NotInitialized { what: &'static str },

    /// The scene holds no actor with this identifier.
    #[error("no actor with id {0}")]
    UnknownActor(u64),

    /// Geometry owned by the scene itself (gizmos, grid) could not be built.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Failure to build the shader cache.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShaderError {
    /// The backend rejected a program.
    #[error("failed to compile shader program `{kind}`: {message}")]
    Compile { kind: ProgramKind, message: String },
}

/// Errors raised while manipulating the selected actor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InteractionError {
    /// A drag, wheel or rotation arrived while nothing manipulable was selected.
    #[error("no selected actor to manipulate")]
    InvalidManipulation,
}
