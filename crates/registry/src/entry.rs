/// Trait for values that carry a derivable registration name.
///
/// [`Registry::register`](crate::Registry::register) keys a value by its
/// `entry_name`. Values without an intrinsic name return `None` and must be
/// registered through [`Registry::register_as`](crate::Registry::register_as)
/// with an explicit name instead.
///
/// # Example
///
/// ```
/// use rollcall_registry::RegistryEntry;
///
/// struct ToolDef {
/// 	name: &'static str,
/// }
///
/// impl RegistryEntry for ToolDef {
/// 	fn entry_name(&self) -> Option<&str> {
/// 		Some(self.name)
/// 	}
/// }
/// ```
pub trait RegistryEntry {
	/// Returns the intrinsic name of this value, if it has one.
	fn entry_name(&self) -> Option<&str>;
}
