pub mod browse;
pub mod featured;
pub mod glossary;
pub mod subscribe;
