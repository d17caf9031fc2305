//! An independently-developed component, as a consuming application would
//! write one: a domain type, a module-level registry singleton, and discovery
//! modules that hook both into the coordinator and into the registry itself.
//!
//! Nothing here is referenced directly by the host; linking the crate is
//! enough for `META.autodiscover(&["demo"], ..)` to find everything.

use std::sync::{Arc, LazyLock};

use rollcall_registry::{discovery_module, META, Registry, RegistryEntry};

/// A text tool contributed by this component.
pub struct ToolDef {
	/// Registration name.
	pub name: &'static str,
	/// One-line description for help output.
	pub about: &'static str,
	/// The tool itself.
	pub run: fn(&str) -> String,
}

impl RegistryEntry for ToolDef {
	fn entry_name(&self) -> Option<&str> {
		Some(self.name)
	}
}

/// Module-level tool registry, discoverable through [`META`].
pub static TOOLS: LazyLock<Arc<Registry<ToolDef>>> =
	LazyLock::new(|| Arc::new(Registry::new("tools")));

discovery_module!("demo", "registries", || {
	META.register(TOOLS.clone())?;
	Ok(())
});

discovery_module!("demo", "registry", || {
	TOOLS.register(ToolDef {
		name: "echo",
		about: "returns the input unchanged",
		run: |input| input.to_owned(),
	})?;
	TOOLS.register(ToolDef {
		name: "reverse",
		about: "reverses the input characters",
		run: |input| input.chars().rev().collect(),
	})?;
	TOOLS.register(ToolDef {
		name: "shout",
		about: "uppercases the input",
		run: |input| input.to_uppercase(),
	})?;
	Ok(())
});
