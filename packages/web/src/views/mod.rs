mod layout;
pub use layout::AppLayout;

mod resume;
pub use resume::Resume;

mod experiences;
pub use experiences::Experiences;

mod fallback;
pub use fallback::Fallback;
