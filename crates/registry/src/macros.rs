//! Declaration macro for discovery modules.

/// Declares a discovery module for a package.
///
/// The body runs when a registry with a matching `look_into` value
/// autodiscovers the package; registrations inside it execute in textual
/// order. Accepts a closure or a path to a `fn() -> Result<(), RegistryError>`.
///
/// # Examples
///
/// ```ignore
/// discovery_module!("mailer", "registry", || {
/// 	HANDLERS.register(MailHandler::smtp())?;
/// 	HANDLERS.register(MailHandler::sendmail())?;
/// 	Ok(())
/// });
///
/// discovery_module!("mailer", "registries", register_mailer_registries);
/// ```
#[macro_export]
macro_rules! discovery_module {
	($package:expr, $module:expr, $init:expr $(,)?) => {
		const _: () = {
			fn __discover() -> ::core::result::Result<(), $crate::RegistryError> {
				let init: fn() -> ::core::result::Result<(), $crate::RegistryError> = $init;
				init()
			}

			$crate::inventory::submit! {
				$crate::ModuleDef::new($package, $module, __discover)
			}
		};
	};
}
