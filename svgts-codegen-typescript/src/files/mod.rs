//! TypeScript file generators.

mod icon_module_ts;
mod icons_ts;
mod index_ts;
mod model_ts;

pub use icon_module_ts::IconModuleTs;
pub use icons_ts::IconsTs;
pub use index_ts::IndexTs;
pub use model_ts::ModelTs;
