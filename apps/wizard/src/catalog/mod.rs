// Option catalogs for the Layout & Style step.
// Every catalog is a fixed, statically-known table — the UI never offers an
// id that is not in one of these lists.

pub mod colors;
pub mod fonts;
pub mod spacing;
pub mod templates;

pub use colors::{default_scheme, find_scheme, ColorScheme, CUSTOM_SCHEME_ID};
pub use fonts::{find_font, FontSpec, DEFAULT_FONT_ID};
pub use spacing::{find_spacing, multiplier_for, SpacingPreset, DEFAULT_SPACING_ID};
pub use templates::{find_template, search_templates, TemplateCategory, TemplateSpec};
