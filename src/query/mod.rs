//! Query module - read-only operations over the population table

mod answer;
mod engine;

pub use answer::answer_question;
pub use engine::QueryEngine;
