pub mod answer;
pub mod owner;
pub mod questionnaire;
pub mod record;
pub mod resource;
pub mod risk;
