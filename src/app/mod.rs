pub mod events;
pub mod fetch;
pub mod state;
pub mod toast;
