mod resume;
pub use resume::ResumeView;

mod about;
pub use about::{duration_label, AboutView, ExperienceCard};

mod empty_state;
pub use empty_state::EmptyState;
