pub mod performers;
pub mod score_card;
pub mod splash;
pub mod stat_bar;
