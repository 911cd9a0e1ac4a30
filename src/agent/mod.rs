//! News agents: profile, tool registry and invocation
//!
//! An agent bundles what a host needs to drive a model (identity, model,
//! instruction, tool declarations) with the tools that answer its calls.
//! The model loop itself belongs to the host.

pub mod lifecycle;
pub mod manifest;

pub use lifecycle::{AgentError, AgentState, NewsAgent};
pub use manifest::{AgentManifest, FunctionDeclaration};
