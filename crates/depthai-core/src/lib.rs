//! Core types for composing the depthai binding module.
//!
//! This crate holds the pieces every binding area depends on:
//!
//! - **module** - the [`ModuleHandle`] trait and the in-memory [`Module`]
//! - **callstack** - the registration work-list ([`WorkList`]) and the
//!   push-only handle ([`Callstack`]) given to running callbacks
//! - **native** - the [`NativeLibrary`] trait and the process-wide
//!   [`InitGuard`]
//! - **error** - registration, drain and native error types
//!
//! # Usage
//!
//! ```
//! use depthai_core::{Module, ModuleHandle, RegistrationCallback, TypeDecl, WorkList};
//!
//! let mut list = WorkList::new();
//! list.push_back(RegistrationCallback::new("base", |m: &mut Module, _| {
//!     m.add_type(TypeDecl::class("Buffer"))
//! }));
//! list.push_back(RegistrationCallback::new("frame", |m: &mut Module, _| {
//!     m.add_type(TypeDecl::class("ImgFrame").extends("Buffer"))
//! }));
//!
//! let mut module = Module::new("depthai");
//! let report = list.drain(&mut module).unwrap();
//! assert_eq!(report.executed(), ["base", "frame"]);
//! assert!(module.contains_type("ImgFrame"));
//! ```

pub mod callstack;
pub mod error;
pub mod module;
pub mod native;

pub use callstack::{Callstack, DrainReport, RegistrationCallback, WorkList};
pub use error::{DrainError, NativeError, RegistrationError};
pub use module::{Entry, FunctionDecl, Module, ModuleHandle, TypeDecl, TypeKind};
pub use native::{InitGuard, InitOutcome, NativeLibrary};
