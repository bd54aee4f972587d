//! CupcakeService: CRUD against the cupcakes table.

mod cupcakes;
mod validation;
pub use cupcakes::CupcakeService;
pub use validation::RequestValidator;
