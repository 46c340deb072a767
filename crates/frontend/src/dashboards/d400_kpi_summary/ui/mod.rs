mod kpi_cards;

pub use kpi_cards::{KpiCards, KpiCardsView};
