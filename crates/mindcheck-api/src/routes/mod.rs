pub mod health;
pub mod history;
pub mod questionnaires;
pub mod quick;
pub mod reference;
pub mod resources;
pub mod results;
