pub mod play;
pub mod register;
pub mod rules;
pub mod score;

pub use play::handle_play;
pub use register::handle_register;
pub use rules::show_rules;
pub use score::{handle_score_command, ScoreCommands};
