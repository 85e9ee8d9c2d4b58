pub mod overview_view_model;
pub mod page_view_model;
pub mod splash_view_model;
pub mod timeline_view_model;

pub use overview_view_model::{OverviewCardViewModel, OverviewViewModel};
pub use page_view_model::{FooterViewModel, HeaderViewModel, HintBarViewModel};
pub use splash_view_model::SplashViewModel;
pub use timeline_view_model::{TargetCardViewModel, TimelineRowViewModel, TimelineViewModel};
