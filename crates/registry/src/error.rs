use thiserror::Error;

/// Errors produced by registration and discovery.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
	/// No name was supplied and none could be derived from the value.
	#[error("cannot derive a name for a `{type_name}` value; register it with an explicit name")]
	NameResolution {
		/// Type of the value that was being registered.
		type_name: &'static str,
	},

	/// The registry's validator rejected the value. Registry state is unchanged.
	#[error("a `{type_name}` value is not valid for the `{registry}` registry")]
	Validation {
		/// Name of the rejecting registry.
		registry: &'static str,
		/// Type of the rejected value.
		type_name: &'static str,
	},

	/// The key is already taken and the registry uses [`DuplicatePolicy::Reject`].
	///
	/// [`DuplicatePolicy::Reject`]: crate::DuplicatePolicy::Reject
	#[error("`{name}` is already registered in the `{registry}` registry")]
	Duplicate {
		/// Name of the registry holding the existing entry.
		registry: &'static str,
		/// The contested key.
		name: String,
	},

	/// A post-register hook failed. The entry it observed stays registered.
	#[error("post-register hook for `{name}` in the `{registry}` registry failed: {message}")]
	Hook {
		/// Name of the registry whose hook failed.
		registry: &'static str,
		/// Key of the entry that was being registered.
		name: String,
		/// Human-readable failure description.
		message: String,
	},

	/// A discovery module's init function failed.
	///
	/// Raised by the module body itself and propagated unmodified out of
	/// [`Registry::autodiscover`](crate::Registry::autodiscover), so callers
	/// see exactly which component is broken.
	#[error("discovery module `{package}::{module}` failed: {message}")]
	Discovery {
		/// Package the module belongs to.
		package: String,
		/// Discovery module name (`look_into` value).
		module: String,
		/// Human-readable failure description.
		message: String,
	},
}

impl RegistryError {
	/// Convenience constructor for failures inside post-register hooks.
	pub fn hook(registry: &'static str, name: &str, message: impl Into<String>) -> Self {
		Self::Hook {
			registry,
			name: name.to_owned(),
			message: message.into(),
		}
	}

	/// Convenience constructor for failures inside discovery module bodies.
	pub fn discovery(package: &str, module: &str, message: impl Into<String>) -> Self {
		Self::Discovery {
			package: package.to_owned(),
			module: module.to_owned(),
			message: message.into(),
		}
	}
}
