//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in the library's model module)
//! - Services (scan controller, desktop commands)
//! - Actions (model + service operations in the library)
//! - UI rendering state (graphics protocols, in src/ui/)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod generator;
pub(crate) mod navigation;
pub(crate) mod scanner;
