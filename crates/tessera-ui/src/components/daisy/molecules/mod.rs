pub mod alert;
pub mod breadcrumbs;
pub mod card;
pub mod collapse;
pub mod dropdown;
pub mod fieldset;
pub mod menu;
pub mod modal;
pub mod pagination;
pub mod stat;
pub mod steps;
pub mod table;
pub mod tabs;

pub use alert::*;
pub use breadcrumbs::*;
pub use card::*;
pub use collapse::*;
pub use dropdown::*;
pub use fieldset::*;
pub use menu::*;
pub use modal::*;
pub use pagination::*;
pub use stat::*;
pub use steps::*;
pub use table::*;
pub use tabs::*;
