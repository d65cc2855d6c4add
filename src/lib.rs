// ABOUTME: Library module for the lega-slides program.
// ABOUTME: Contains the deck dataset, the session state machine and the export generators.

// Reexport modules
pub mod config;
pub mod deck;
pub mod errors;
pub mod export;
pub mod state;
pub mod utils;

// Reexport common types and functions
pub use config::{Config, DECK_AUTHOR, DECK_TITLE};
pub use deck::{deck, total_slides, ClinicNote, ClinicRow, ListEntry, Slide, SlideBody, Status};
pub use errors::{DeckError, Result};
pub use export::{export_deck, render_deck, render_to_bytes, ExportFormat, SlideWriter};
pub use state::{Controller, Event, Key, Phase, PresentationState, SessionHost, TerminalHost};

#[cfg(test)]
mod tests;
