// Deck generation: entry-sheet sections in, full slide list out.

pub mod generator;
pub mod handlers;
pub mod rules;
