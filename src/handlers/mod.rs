pub mod rest;

pub use rest::roll_dice_handler;
