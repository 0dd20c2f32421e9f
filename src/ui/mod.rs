//! Terminal UI: a thin front-end that turns key presses into column drops and
//! renders the board, whose turn it is, and how the game ended.

mod app;
mod game_view;

pub use app::App;
