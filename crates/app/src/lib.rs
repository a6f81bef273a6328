//! The view controller tying router, renderers, and dictionaries together.
//! 整合路由、渲染與語言字典的視圖控制器。

pub mod controller;
pub mod host;
pub mod preference;

pub use controller::{Phase, SiteController, SiteOptions};
pub use host::{LanguageChoice, ViewHost};
pub use preference::{LanguagePreference, PreferenceError, PreferenceStore};
