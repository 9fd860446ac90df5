// The CV builder wizard: step registry, the controller that owns the draft,
// and the per-step editing operations.

pub mod controller;
pub mod experience;
pub mod preview;
pub mod sections;
pub mod step;
pub mod style;

pub use controller::WizardController;
pub use preview::{render_markdown, PreviewSink};
pub use step::{default_steps, Step};
