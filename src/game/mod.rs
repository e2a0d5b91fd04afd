pub mod camera;
pub mod clock;
pub mod commands;
pub mod constants;
pub mod events;
pub mod game_loop;
pub mod roster;
pub mod spatial;
pub mod state;
pub mod systems;
