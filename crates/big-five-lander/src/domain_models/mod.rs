pub mod overview;

pub use overview::{organization_overview, OverviewStat};
