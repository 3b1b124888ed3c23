pub mod move_cards;
