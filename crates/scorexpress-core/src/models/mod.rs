pub mod answer;
pub mod category;
pub mod interpretation;
pub mod level;
pub mod result;
