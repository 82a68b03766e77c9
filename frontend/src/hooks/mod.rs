pub mod use_plants;
