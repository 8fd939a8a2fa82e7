//! Rule metadata (severity, category, message) loaded from `Rules.csv`.

mod category;
mod loader;
mod registry;

pub use category::Category;
pub use loader::{load_reference_rules, load_rules};
pub use registry::{RuleDefinition, RuleRegistry};
