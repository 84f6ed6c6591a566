//! Pagecraft Render Library
//!
//! Read-only rendering of pagecraft documents: per-type block renderers,
//! the hero background pipeline and the time-driven block behaviors.

pub mod animate;
pub mod dispatch;
pub mod hero;
pub mod tree;

pub use animate::{
    Countdown, CountdownTick, CounterAnimation, ExpiryAction, FlipInput, TimeLeft,
    VisibilityTrigger, ease_out_cubic, flip_after,
};
pub use dispatch::{CompanyProfile, RenderContext, render_block, render_page, render_row};
pub use hero::{
    BackgroundInputs, BackgroundLayer, ContentAlignment, ResolvedBackground, content_alignment,
    hero_shell, resolve_background,
};
pub use tree::{ElementNode, RenderNode};
