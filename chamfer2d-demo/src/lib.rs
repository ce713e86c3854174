//! Headless interaction layer for chamfer2d
//!
//! A front end owns one [`InteractionSession`], forwards pointer positions to
//! it and draws the [`Frame`]s it returns. Nothing here renders; frames are
//! plain data:
//! - pointer snapping and pointer-to-transform mapping
//! - session state (distribution kind, edit mode, base cloud)
//! - configuration loaded from JSON or built from defaults

pub mod config;
pub mod pointer;
pub mod session;

pub use config::*;
pub use pointer::*;
pub use session::*;
