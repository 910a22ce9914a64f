//! Battle screen rendering
//!
//! Split into small renderers over one shared layout:
//! - `layout` - where everything goes; also used for hit testing
//! - `hud` - health labels and gauges for both combatants
//! - `battle_log` - turn indicator, last event and recent history
//! - `attack_button` - the clickable attack control

pub mod attack_button;
pub mod battle_log;
pub mod hud;
pub mod layout;
pub mod theme;

pub use attack_button::AttackButtonRenderer;
pub use battle_log::BattleLogRenderer;
pub use hud::HudRenderer;
pub use layout::BattleLayout;
