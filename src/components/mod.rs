pub mod faq;
pub mod feature_cards;
pub mod navbar;
pub mod video_embed;
