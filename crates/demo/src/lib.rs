//! Argument substitution walkthrough.
//!
//! Hands a base argument and then a service argument to the same service
//! action and lets the output show they are interchangeable.

use std::io::Write;

use liskov_arguments::{Argument, Service, ServiceArgument};

pub const BASE_VALUE: &str = "base-argument";
pub const SERVICE_VALUE: &str = "service-argument";
pub const SERVICE_ID: &str = "service-123";

/// The two arguments handed to the service, base first.
pub fn arguments() -> (Argument, ServiceArgument) {
    (
        Argument::new(BASE_VALUE),
        ServiceArgument::new(SERVICE_VALUE, SERVICE_ID),
    )
}

/// Run the walkthrough against process stdout via [`Service::action`].
pub fn run() -> anyhow::Result<()> {
    let service = Service::new();
    let (base_arg, specific_arg) = arguments();

    tracing::debug!(service_id = specific_arg.service_id(), "running argument walkthrough");

    service.action(&base_arg)?;
    service.action(&specific_arg)?;
    Ok(())
}

/// Same walkthrough, writing the service output to `out`.
pub fn run_to<W: Write + ?Sized>(out: &mut W) -> anyhow::Result<()> {
    let service = Service::new();
    let (base_arg, specific_arg) = arguments();

    service.action_to(out, &base_arg)?;
    service.action_to(out, &specific_arg)?;
    out.flush()?;
    Ok(())
}
