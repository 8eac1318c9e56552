// Domain layer - Records, series and figure descriptions
pub mod figure;
pub mod records;
pub mod series;
pub mod slot;
