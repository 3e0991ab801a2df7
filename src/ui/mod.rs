pub mod board_layout;
pub mod display;
pub mod theme;
pub mod view_models;

#[cfg(feature = "gui")]
pub mod assets;
#[cfg(feature = "gui")]
pub mod audio;
#[cfg(feature = "gui")]
pub mod components;
#[cfg(feature = "gui")]
pub mod views;

#[cfg(feature = "gui")]
pub use assets::FileAssets;
#[cfg(feature = "gui")]
pub use audio::SoundPlayer;
pub use board_layout::BoardLayout;
