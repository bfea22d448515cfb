pub mod avatar;
pub mod badge;
pub mod button;
pub mod checkbox;
pub mod divider;
pub mod input;
pub mod kbd;
pub mod label;
pub mod link;
pub mod loading;
pub mod progress;
pub mod radio;
pub mod select;
pub mod skeleton;
pub mod tab;
pub mod textarea;
pub mod toggle;
pub mod tooltip;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use checkbox::*;
pub use divider::*;
pub use input::*;
pub use kbd::*;
pub use label::*;
pub use link::*;
pub use loading::*;
pub use progress::*;
pub use radio::*;
pub use select::*;
pub use skeleton::*;
pub use tab::*;
pub use textarea::*;
pub use toggle::*;
pub use tooltip::*;
