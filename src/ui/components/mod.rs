//! Reusable UI components

pub mod badge;
pub mod scrollbar_helper;

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod header_component;
pub mod task_form_component;
pub mod task_list_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use header_component::HeaderComponent;
pub use task_form_component::TaskFormComponent;
pub use task_list_component::TaskListComponent;
