//! Customizers adjust a project description before generation.

use crate::description::ProjectDescription;
use crate::resolver::JavaVersionResolver;

pub trait ProjectDescriptionCustomizer: Send + Sync {
    fn id(&self) -> &'static str;

    fn customize(&self, description: &mut ProjectDescription);

    /// Lower values run first.
    fn order(&self) -> i32 {
        0
    }
}

/// Runs registered customizers in ascending [`order`](ProjectDescriptionCustomizer::order).
/// Customizers sharing an order keep their registration order.
pub struct CustomizerChain {
    customizers: Vec<Box<dyn ProjectDescriptionCustomizer>>,
}

impl CustomizerChain {
    pub fn new() -> Self {
        Self {
            customizers: Vec::new(),
        }
    }

    pub fn bootstrap() -> Self {
        let mut chain = Self::new();
        chain.register(JavaVersionResolver::new());
        chain
    }

    pub fn register<C>(&mut self, customizer: C)
    where
        C: ProjectDescriptionCustomizer + 'static,
    {
        self.customizers.push(Box::new(customizer));
        self.customizers.sort_by_key(|c| c.order());
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.customizers.iter().map(|c| c.id()).collect()
    }

    pub fn apply(&self, description: &mut ProjectDescription) {
        for customizer in &self.customizers {
            customizer.customize(description);
        }
    }
}

impl Default for CustomizerChain {
    fn default() -> Self {
        Self::bootstrap()
    }
}
