pub mod location_fetcher;
pub mod open_meteo;
