pub mod animator;
pub mod config;
pub mod delivery;
pub mod forms;
pub mod frame_loop;
pub mod mailto;
pub mod paint;
pub mod particles;
pub mod viewport;

pub use animator::*;
pub use config::*;
pub use delivery::*;
pub use forms::*;
pub use frame_loop::*;
pub use paint::*;
pub use particles::*;
pub use viewport::*;
