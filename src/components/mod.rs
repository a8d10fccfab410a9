mod playground;
mod toolbar;

pub use playground::Playground;
pub use toolbar::Toolbar;
