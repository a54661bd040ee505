use serde::{Deserialize, Serialize};

/// Behaviour shared by every bird.
pub trait Bird {
    fn name(&self) -> &str;

    fn weight_kg(&self) -> f64;

    fn eat(&self) -> String {
        format!("{} is eating.", self.name())
    }
}

/// Birds that can fly. Never fails for an implementor.
pub trait FlyingBird: Bird {
    fn fly(&self) -> String {
        format!("{} is flying!", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sparrow {
    name: String,
    weight_kg: f64,
}

impl Sparrow {
    pub fn new(name: impl Into<String>, weight_kg: f64) -> Self {
        Self {
            name: name.into(),
            weight_kg,
        }
    }
}

impl Bird for Sparrow {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

impl FlyingBird for Sparrow {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penguin {
    name: String,
    weight_kg: f64,
}

impl Penguin {
    pub fn new(name: impl Into<String>, weight_kg: f64) -> Self {
        Self {
            name: name.into(),
            weight_kg,
        }
    }

    pub fn swim(&self) -> String {
        format!("{} is swimming.", self.name)
    }
}

impl Bird for Penguin {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Feed every bird, flying or not.
pub fn feed_all(birds: &[&dyn Bird]) -> Vec<String> {
    tracing::debug!(count = birds.len(), "feeding birds");
    birds.iter().map(|bird| bird.eat()).collect()
}

/// Send every bird into the air. Only flying birds are accepted.
pub fn launch_all(birds: &[&dyn FlyingBird]) -> Vec<String> {
    tracing::debug!(count = birds.len(), "launching birds");
    birds.iter().map(|bird| bird.fly()).collect()
}
