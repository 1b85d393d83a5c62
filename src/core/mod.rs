pub mod app;
pub mod decor;
pub mod device;
pub mod draw;
pub mod elapsed;
pub mod rain;
pub mod surface;
pub mod timeline;
pub mod tween;

pub use app::*;
pub use decor::*;
pub use device::*;
pub use draw::*;
pub use elapsed::*;
pub use rain::*;
pub use surface::*;
pub use timeline::*;
pub use tween::*;
