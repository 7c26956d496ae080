//! Staggered entrance of the landing page elements.
//!
//! The keyframes, duration and easing live in the global stylesheet under the
//! `reveal` class; each element only sets its own start offset.

pub const REVEAL_DURATION_SECS: f32 = 0.55;
pub const REVEAL_EASING: &str = "cubic-bezier(0.16,1,0.3,1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    Icon,
    Wordmark,
    Tagline,
    Cta,
}

impl RevealStage {
    pub const ALL: [RevealStage; 4] = [
        RevealStage::Icon,
        RevealStage::Wordmark,
        RevealStage::Tagline,
        RevealStage::Cta,
    ];

    pub fn delay_secs(&self) -> f32 {
        match self {
            RevealStage::Icon => 0.05,
            RevealStage::Wordmark => 0.15,
            RevealStage::Tagline => 0.26,
            RevealStage::Cta => 0.40,
        }
    }

    /// Inline style carrying this stage's start offset.
    pub fn style(&self) -> String {
        format!("animation-delay: {}s", self.delay_secs())
    }
}
