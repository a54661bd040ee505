//! Argument substitution sample.
//!
//! A base argument, a service argument that embeds it and adds a service id,
//! and a service whose single action accepts anything exposing an argument
//! value. The service never learns which concrete argument it was handed.

pub mod argument;
pub mod service;
pub mod variance;

pub use argument::{Argument, ArgumentValue, ServiceArgument};
pub use service::Service;
pub use variance::{
    ArgumentHandler, BasicOutcome, BasicSource, DetailedOutcome, DetailedSource, Outcome,
    ReportSource, dispatch, summarize,
};
