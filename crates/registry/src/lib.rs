//! Ordered, named registries with link-time component discovery.
//!
//! Independently developed components register values (handlers, definitions,
//! arbitrary objects) into shared, named, ordered registries without the
//! consuming code knowing which components exist. A component contributes a
//! [`discovery_module!`] per registry convention name; calling
//! [`Registry::autodiscover`] with a package list runs the matching module
//! bodies, whose registrations land in the mapping in execution order.
//!
//! [`MetaRegistry`] coordinates many registries at once: its own discovery
//! phase collects registry handles, then it cascades discovery over each of
//! them. [`META`] is the process-wide coordinator.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, LazyLock};
//! use rollcall_registry::{discovery_module, Registry, RegistryEntry};
//!
//! struct Greeter {
//! 	name: &'static str,
//! 	greet: fn() -> String,
//! }
//!
//! impl RegistryEntry for Greeter {
//! 	fn entry_name(&self) -> Option<&str> {
//! 		Some(self.name)
//! 	}
//! }
//!
//! static GREETERS: LazyLock<Arc<Registry<Greeter>>> =
//! 	LazyLock::new(|| Arc::new(Registry::new("greeters")));
//!
//! discovery_module!("hello_plugin", "registry", || {
//! 	GREETERS.register(Greeter { name: "en", greet: || "hello".into() })?;
//! 	Ok(())
//! });
//!
//! GREETERS.autodiscover(&["hello_plugin"], false).unwrap();
//! assert!(GREETERS.contains("en"));
//! ```

mod discovery;
mod entry;
mod error;
mod macros;
mod meta;
mod registry;
pub mod store;

pub use discovery::ModuleDef;
pub use entry::RegistryEntry;
pub use error::RegistryError;
pub use meta::{Discover, META, MetaRegistry};
pub use registry::{DuplicatePolicy, Registry};

// Used by `discovery_module!` expansions.
pub use inventory;
