mod outline_ribbon;

pub use outline_ribbon::OutlineRibbon;
