//! Ducks, organic and electric.
//!
//! An electric duck only swims while switched on. That requirement is not
//! hidden inside `swim`; a switched-off duck is a different type that has no
//! `swim` at all, and switching it on hands back a [`PoweredDuck`] that can.
//! Every [`Duck`] therefore keeps the same promise: after `swim`, it is
//! swimming.

use serde::{Deserialize, Serialize};

/// Anything that swims when asked.
pub trait Duck {
    fn name(&self) -> &str;

    /// Start swimming. Afterwards [`Duck::is_swimming`] returns `true`.
    fn swim(&mut self) -> String;

    fn is_swimming(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganicDuck {
    name: String,
    swimming: bool,
}

impl OrganicDuck {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            swimming: false,
        }
    }
}

impl Duck for OrganicDuck {
    fn name(&self) -> &str {
        &self.name
    }

    fn swim(&mut self) -> String {
        self.swimming = true;
        format!("{} swims", self.name)
    }

    fn is_swimming(&self) -> bool {
        self.swimming
    }
}

/// Electric duck, switched off. Not a [`Duck`] until switched on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectricDuck {
    name: String,
}

impl ElectricDuck {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn switch_on(self) -> PoweredDuck {
        tracing::debug!(duck = %self.name, "electric duck switched on");
        PoweredDuck {
            name: self.name,
            swimming: false,
        }
    }
}

/// Electric duck that is switched on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoweredDuck {
    name: String,
    swimming: bool,
}

impl PoweredDuck {
    /// Switching off stops the duck; it goes back to being an [`ElectricDuck`].
    pub fn switch_off(self) -> ElectricDuck {
        tracing::debug!(duck = %self.name, "electric duck switched off");
        ElectricDuck { name: self.name }
    }
}

impl Duck for PoweredDuck {
    fn name(&self) -> &str {
        &self.name
    }

    fn swim(&mut self) -> String {
        self.swimming = true;
        format!("{} swims on battery power", self.name)
    }

    fn is_swimming(&self) -> bool {
        self.swimming
    }
}

/// Ask every duck to swim. Every one of them is swimming afterwards.
pub fn swim_all(ducks: &mut [&mut dyn Duck]) -> Vec<String> {
    ducks.iter_mut().map(|duck| duck.swim()).collect()
}
