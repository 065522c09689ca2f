mod code_panel;
mod control_renderer;
mod harness;
mod toolbar;
mod variant_card;

pub use code_panel::CodePanel;
pub use control_renderer::ControlRenderer;
pub use harness::TestbedHarness;
pub use toolbar::ModeToolbar;
pub use variant_card::VariantCard;
