use serde::{Deserialize, Serialize};

use liskov_core::ValueObject;

/// Capability: exposes the string an argument was constructed with.
///
/// Implementations must be deterministic and side-effect free. The value is
/// returned exactly as supplied, never trimmed or normalised.
pub trait ArgumentValue {
    fn value(&self) -> &str;
}

/// Base argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    value: String,
}

impl Argument {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl ArgumentValue for Argument {
    fn value(&self) -> &str {
        &self.value
    }
}

impl ValueObject for Argument {}

/// Argument carrying the id of the service it targets.
///
/// Embeds an [`Argument`] and forwards [`ArgumentValue`] to it unchanged, so a
/// `ServiceArgument` is accepted anywhere an argument value is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceArgument {
    #[serde(flatten)]
    argument: Argument,
    service_id: String,
}

impl ServiceArgument {
    /// Both parts are mandatory; neither is validated.
    pub fn new(value: impl Into<String>, service_id: impl Into<String>) -> Self {
        Self {
            argument: Argument::new(value),
            service_id: service_id.into(),
        }
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    /// The embedded base argument.
    pub fn as_argument(&self) -> &Argument {
        &self.argument
    }

    pub fn into_argument(self) -> Argument {
        self.argument
    }
}

impl ArgumentValue for ServiceArgument {
    fn value(&self) -> &str {
        self.argument.value()
    }
}

impl AsRef<Argument> for ServiceArgument {
    fn as_ref(&self) -> &Argument {
        &self.argument
    }
}

impl From<ServiceArgument> for Argument {
    fn from(value: ServiceArgument) -> Self {
        value.into_argument()
    }
}

impl ValueObject for ServiceArgument {}

impl<T: ArgumentValue + ?Sized> ArgumentValue for &T {
    fn value(&self) -> &str {
        (**self).value()
    }
}

impl<T: ArgumentValue + ?Sized> ArgumentValue for Box<T> {
    fn value(&self) -> &str {
        (**self).value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn base_argument_returns_constructed_value() {
        let arg = Argument::new("base-argument");
        assert_eq!(arg.value(), "base-argument");
    }

    #[test]
    fn service_argument_exposes_both_parts() {
        let arg = ServiceArgument::new("service-argument", "service-123");
        assert_eq!(arg.value(), "service-argument");
        assert_eq!(arg.service_id(), "service-123");
    }

    #[test]
    fn empty_strings_are_accepted_as_is() {
        let arg = ServiceArgument::new("", "");
        assert_eq!(arg.value(), "");
        assert_eq!(arg.service_id(), "");
    }

    #[test]
    fn service_argument_views_as_equal_base_argument() {
        let arg = ServiceArgument::new("service-argument", "service-123");
        assert_eq!(arg.as_argument(), &Argument::new("service-argument"));
        assert_eq!(AsRef::<Argument>::as_ref(&arg).value(), arg.value());
        assert_eq!(Argument::from(arg), Argument::new("service-argument"));
    }

    #[test]
    fn references_and_boxes_forward_the_value() {
        let arg = ServiceArgument::new("v", "id");
        let by_ref: &dyn ArgumentValue = &arg;
        let boxed: Box<dyn ArgumentValue> = Box::new(arg.clone());
        assert_eq!((&by_ref).value(), "v");
        assert_eq!(boxed.value(), "v");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a base argument hands back exactly what it was built with.
        #[test]
        fn base_value_round_trips(s in any::<String>()) {
            let arg = Argument::new(s.clone());
            prop_assert_eq!(arg.value(), s.as_str());
            prop_assert_eq!(arg.value(), arg.value());
        }

        /// Property: value and service id are independent of each other.
        #[test]
        fn service_parts_are_independent(s in any::<String>(), id in any::<String>()) {
            let arg = ServiceArgument::new(s.clone(), id.clone());
            prop_assert_eq!(arg.value(), s.as_str());
            prop_assert_eq!(arg.service_id(), id.as_str());
            prop_assert_eq!(arg.service_id(), arg.service_id());
        }
    }
}
