use std::io::{self, Write};

use crate::argument::ArgumentValue;

/// Stateless consumer of argument values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Service;

impl Service {
    pub fn new() -> Self {
        Self
    }

    /// Write the argument's value to stdout.
    ///
    /// No separator and no trailing newline are added.
    pub fn action<A: ArgumentValue + ?Sized>(&self, arg: &A) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.action_to(&mut out, arg)?;
        out.flush()
    }

    /// Write the argument's value to `out`, byte for byte.
    pub fn action_to<W, A>(&self, out: &mut W, arg: &A) -> io::Result<()>
    where
        W: Write + ?Sized,
        A: ArgumentValue + ?Sized,
    {
        let value = arg.value();
        tracing::debug!(len = value.len(), "service action");
        out.write_all(value.as_bytes())
    }

    /// Run the action over a sequence of arguments, in order.
    pub fn action_all<W: Write + ?Sized>(
        &self,
        out: &mut W,
        args: &[&dyn ArgumentValue],
    ) -> io::Result<()> {
        for arg in args {
            self.action_to(out, *arg)?;
        }
        Ok(())
    }
}
