//! Variance rules for substitutable operations.
//!
//! - **Returns are covariant.** A narrower implementation may promise a more
//!   specific result than the contract, as long as that result still honours
//!   the contract's result type. [`Outcome`] is the result contract; a
//!   [`ReportSource`] names its concrete result through an associated type,
//!   so [`DetailedSource`] can return the richer [`DetailedOutcome`].
//! - **Parameters are contravariant.** An implementation may accept more than
//!   the contract asks for, never less. [`ArgumentHandler<A>`] is the contract
//!   "handles `A`"; [`Service`] handles every [`ArgumentValue`], so it is
//!   accepted wherever a handler of [`ServiceArgument`] is required. A handler
//!   that only took `ServiceArgument` could not stand in for one taking any
//!   argument, and the type system rejects it.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::argument::{ArgumentValue, ServiceArgument};
use crate::service::Service;

/// Result contract.
pub trait Outcome {
    fn summary(&self) -> &str;
}

/// Plain outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicOutcome {
    summary: String,
}

impl BasicOutcome {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }
}

impl Outcome for BasicOutcome {
    fn summary(&self) -> &str {
        &self.summary
    }
}

/// Outcome with an extra detail line, usable wherever an [`Outcome`] is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedOutcome {
    #[serde(flatten)]
    outcome: BasicOutcome,
    detail: String,
}

impl DetailedOutcome {
    pub fn new(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            outcome: BasicOutcome::new(summary),
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl Outcome for DetailedOutcome {
    fn summary(&self) -> &str {
        self.outcome.summary()
    }
}

/// Produces an outcome. Implementations pick how specific it is.
pub trait ReportSource {
    type Output: Outcome;

    fn report(&self) -> Self::Output;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSource;

impl ReportSource for BasicSource {
    type Output = BasicOutcome;

    fn report(&self) -> Self::Output {
        BasicOutcome::new("done")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DetailedSource;

impl ReportSource for DetailedSource {
    type Output = DetailedOutcome;

    fn report(&self) -> Self::Output {
        DetailedOutcome::new("done", "all steps completed")
    }
}

/// Client written against the contract only.
pub fn summarize<S: ReportSource + ?Sized>(source: &S) -> String {
    source.report().summary().to_string()
}

/// Handles arguments of type `A`.
pub trait ArgumentHandler<A: ?Sized> {
    fn handle(&self, out: &mut dyn Write, arg: &A) -> io::Result<()>;
}

impl<A: ArgumentValue + ?Sized> ArgumentHandler<A> for Service {
    fn handle(&self, out: &mut dyn Write, arg: &A) -> io::Result<()> {
        self.action_to(out, arg)
    }
}

/// Hand a service argument to any handler that accepts one.
pub fn dispatch<H>(handler: &H, out: &mut dyn Write, arg: &ServiceArgument) -> io::Result<()>
where
    H: ArgumentHandler<ServiceArgument> + ?Sized,
{
    handler.handle(out, arg)
}
