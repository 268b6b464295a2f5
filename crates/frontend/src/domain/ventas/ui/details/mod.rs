//! Sale edit UI, simplified MVVM:
//! - model.rs: edit-flow logic and the API round-trips it drives
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::EditForm;
pub use view::VentasEdit;
pub use view_model::VentasEditViewModel;
