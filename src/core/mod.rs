//! Interactive state and form rules behind the marketing pages

pub mod accordion;
#[cfg(feature = "ssr")]
pub mod config;
pub mod market;
pub mod pricing;
#[cfg(test)]
mod tests;
pub mod typewriter;
pub mod validation;

pub use accordion::{AccordionState, FaqEntry};
pub use market::{MarketQuery, Region};
pub use pricing::{BillingPeriod, PricingTier};
pub use typewriter::{Direction, PlaceholderCycle, TypewriterConfig, TypewriterError};
pub use validation::FieldError;
