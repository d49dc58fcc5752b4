pub mod loading_spinner;
pub mod travel_prompts_dropdown;

pub use loading_spinner::LoadingSpinner;
pub use travel_prompts_dropdown::{category_title, TravelPromptsDropdown};
