pub mod fixed_cost_resolver;

pub use fixed_cost_resolver::FixedCostResolver;
