pub mod fallback;
pub mod patterns;
pub mod readme;

pub use fallback::derive_fallback;
pub use patterns::SkillCategory;
pub use readme::extract;
